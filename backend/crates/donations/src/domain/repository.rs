//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{
    donation::{Donation, DonationWithDetails},
    program::Program,
};
use crate::error::DonationResult;
use kernel::id::{ProgramId, UserId};

/// Donation repository trait
#[trait_variant::make(DonationRepository: Send)]
pub trait LocalDonationRepository {
    /// Persist a new donation
    async fn create(&self, donation: &Donation) -> DonationResult<()>;

    /// All donations of one user, newest first
    async fn list_by_user(&self, user_id: &UserId) -> DonationResult<Vec<Donation>>;

    /// All donations with donor email and program name, newest first
    async fn list_all_with_details(&self) -> DonationResult<Vec<DonationWithDetails>>;
}

/// Program repository trait
#[trait_variant::make(ProgramRepository: Send)]
pub trait LocalProgramRepository {
    /// Find a program that is still accepting donations
    async fn find_active(&self, program_id: &ProgramId) -> DonationResult<Option<Program>>;

    /// All active programs, for the donation form
    async fn list_active(&self) -> DonationResult<Vec<Program>>;
}
