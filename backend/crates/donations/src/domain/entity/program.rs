//! Program Entity
//!
//! A named cause donations can be directed to.

use chrono::{DateTime, Utc};
use kernel::id::ProgramId;

/// Program record
#[derive(Debug, Clone)]
pub struct Program {
    pub program_id: ProgramId,
    pub name: String,
    /// URL-safe unique identifier for the frontend
    pub slug: String,
    /// Inactive programs stay referenced by old donations but cannot
    /// receive new ones
    pub active: bool,
    pub created_at: DateTime<Utc>,
}
