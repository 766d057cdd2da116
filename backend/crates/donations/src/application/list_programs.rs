//! Program Listing Use Case

use std::sync::Arc;

use crate::domain::entity::program::Program;
use crate::domain::repository::ProgramRepository;
use crate::error::DonationResult;

/// Active programs for the public donation form
pub struct ListProgramsUseCase<R>
where
    R: ProgramRepository,
{
    repo: Arc<R>,
}

impl<R> ListProgramsUseCase<R>
where
    R: ProgramRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> DonationResult<Vec<Program>> {
        self.repo.list_active().await
    }
}
