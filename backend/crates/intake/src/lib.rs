//! Intake Backend Module
//!
//! Public contact and partnership forms plus the admin review queue.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Model
//! - Submissions are unauthenticated and rate-limited at the router
//! - Admin review toggles `handled` and attaches notes; records are
//!   never deleted
//! - Operator notification is best effort and never fails a submission

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

mod tests;

// Re-exports for convenience
pub use error::{IntakeError, IntakeResult};
pub use infra::postgres::PgIntakeRepository;
pub use presentation::router::intake_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}
