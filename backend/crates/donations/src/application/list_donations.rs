//! Donation Listing Use Cases

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::donation::{Donation, DonationWithDetails};
use crate::domain::repository::DonationRepository;
use crate::error::DonationResult;

/// Caller's own donation history, newest first
pub struct ListMyDonationsUseCase<R>
where
    R: DonationRepository,
{
    repo: Arc<R>,
}

impl<R> ListMyDonationsUseCase<R>
where
    R: DonationRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: &UserId) -> DonationResult<Vec<Donation>> {
        self.repo.list_by_user(user_id).await
    }
}

/// Admin view over every donation, joined with donor and program
pub struct ListAllDonationsUseCase<R>
where
    R: DonationRepository,
{
    repo: Arc<R>,
}

impl<R> ListAllDonationsUseCase<R>
where
    R: DonationRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> DonationResult<Vec<DonationWithDetails>> {
        self.repo.list_all_with_details().await
    }
}
