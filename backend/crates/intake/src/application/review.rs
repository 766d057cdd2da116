//! Admin Review Use Cases
//!
//! Reviews flip the `handled` flag and may attach notes. Records are
//! never deleted, a review of an unknown id is a 404.

use std::sync::Arc;

use kernel::id::{ContactMessageId, PartnershipInquiryId};

use crate::domain::entity::contact_message::ContactMessage;
use crate::domain::entity::partnership_inquiry::PartnershipInquiry;
use crate::domain::repository::{ContactRepository, InquiryRepository};
use crate::error::{IntakeError, IntakeResult};

/// Review a contact message (admin)
pub struct ReviewContactUseCase<R: ContactRepository> {
    repo: Arc<R>,
}

impl<R: ContactRepository> ReviewContactUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        id: &ContactMessageId,
        handled: bool,
        admin_notes: Option<String>,
    ) -> IntakeResult<ContactMessage> {
        let reviewed = self
            .repo
            .review_contact(id, handled, admin_notes)
            .await?
            .ok_or(IntakeError::NotFound)?;

        tracing::info!(message_id = %id, handled, "Contact message reviewed");

        Ok(reviewed)
    }
}

/// Review a partnership inquiry (admin)
pub struct ReviewInquiryUseCase<R: InquiryRepository> {
    repo: Arc<R>,
}

impl<R: InquiryRepository> ReviewInquiryUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        id: &PartnershipInquiryId,
        handled: bool,
        admin_notes: Option<String>,
    ) -> IntakeResult<PartnershipInquiry> {
        let reviewed = self
            .repo
            .review_inquiry(id, handled, admin_notes)
            .await?
            .ok_or(IntakeError::NotFound)?;

        tracing::info!(inquiry_id = %id, handled, "Partnership inquiry reviewed");

        Ok(reviewed)
    }
}
