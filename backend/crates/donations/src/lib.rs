//! Donations Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Donation/program entities, value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Model
//! - Donations are immutable records in the smallest currency unit
//! - The owner is always the session user; the client cannot donate
//!   on someone else's behalf
//! - Status is written as Succeeded by the recorder; gateway settlement
//!   is out of scope and would land on the status enum

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

mod tests;

// Re-exports for convenience
pub use application::config::DonationConfig;
pub use error::{DonationError, DonationResult};
pub use infra::postgres::PgDonationRepository;
pub use presentation::router::donations_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}
