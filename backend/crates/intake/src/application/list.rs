//! Admin Listing Use Cases

use std::sync::Arc;

use crate::domain::entity::contact_message::ContactMessage;
use crate::domain::entity::partnership_inquiry::PartnershipInquiry;
use crate::domain::repository::{ContactRepository, InquiryRepository};
use crate::error::IntakeResult;

/// List contact messages, newest first (admin)
pub struct ListContactsUseCase<R: ContactRepository> {
    repo: Arc<R>,
}

impl<R: ContactRepository> ListContactsUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> IntakeResult<Vec<ContactMessage>> {
        self.repo.list_contacts().await
    }
}

/// List partnership inquiries, newest first (admin)
pub struct ListInquiriesUseCase<R: InquiryRepository> {
    repo: Arc<R>,
}

impl<R: InquiryRepository> ListInquiriesUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> IntakeResult<Vec<PartnershipInquiry>> {
        self.repo.list_inquiries().await
    }
}
