//! Intake Repository Interfaces

use kernel::id::{ContactMessageId, PartnershipInquiryId};

use crate::domain::entity::contact_message::ContactMessage;
use crate::domain::entity::partnership_inquiry::PartnershipInquiry;
use crate::error::IntakeResult;

/// Contact message persistence interface
#[trait_variant::make(ContactRepository: Send)]
pub trait LocalContactRepository {
    /// Persist a new contact message
    async fn create_contact(&self, message: &ContactMessage) -> IntakeResult<()>;

    /// All contact messages, newest first
    async fn list_contacts(&self) -> IntakeResult<Vec<ContactMessage>>;

    /// Update handled flag and notes; returns None when the id is unknown
    async fn review_contact(
        &self,
        id: &ContactMessageId,
        handled: bool,
        admin_notes: Option<String>,
    ) -> IntakeResult<Option<ContactMessage>>;
}

/// Partnership inquiry persistence interface
#[trait_variant::make(InquiryRepository: Send)]
pub trait LocalInquiryRepository {
    /// Persist a new partnership inquiry
    async fn create_inquiry(&self, inquiry: &PartnershipInquiry) -> IntakeResult<()>;

    /// All partnership inquiries, newest first
    async fn list_inquiries(&self) -> IntakeResult<Vec<PartnershipInquiry>>;

    /// Update handled flag and notes; returns None when the id is unknown
    async fn review_inquiry(
        &self,
        id: &PartnershipInquiryId,
        handled: bool,
        admin_notes: Option<String>,
    ) -> IntakeResult<Option<PartnershipInquiry>>;
}
