//! Partnership Inquiry Entity

use auth::models::email::Email;
use chrono::{DateTime, Utc};
use kernel::id::PartnershipInquiryId;

/// An inquiry from the partnership form
///
/// Unlike the contact form, phone and company are mandatory.
#[derive(Debug, Clone)]
pub struct PartnershipInquiry {
    pub inquiry_id: PartnershipInquiryId,
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub company: String,
    pub address: Option<String>,
    pub message: String,
    pub handled: bool,
    pub admin_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PartnershipInquiry {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        email: Email,
        phone: String,
        company: String,
        address: Option<String>,
        message: String,
    ) -> Self {
        let now = Utc::now();

        Self {
            inquiry_id: PartnershipInquiryId::new(),
            name,
            email,
            phone,
            company,
            address,
            message,
            handled: false,
            admin_notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply an admin review
    pub fn review(&mut self, handled: bool, admin_notes: Option<String>) {
        self.handled = handled;
        if admin_notes.is_some() {
            self.admin_notes = admin_notes;
        }
        self.updated_at = Utc::now();
    }
}
