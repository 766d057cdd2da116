//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::contact_message::ContactMessage;
use crate::domain::entity::partnership_inquiry::PartnershipInquiry;

// ============================================================================
// Public Forms
// ============================================================================

/// Contact form submission
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitContactRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

/// Partnership form submission
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitInquiryRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub address: Option<String>,
    pub message: String,
}

// ============================================================================
// Admin Review
// ============================================================================

/// Admin review request
///
/// Omitted `adminNotes` leaves any existing notes in place.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    pub handled: bool,
    pub admin_notes: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

/// Contact message response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessageResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub handled: bool,
    pub admin_notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&ContactMessage> for ContactMessageResponse {
    fn from(m: &ContactMessage) -> Self {
        Self {
            id: m.message_id.to_string(),
            name: m.name.clone(),
            email: m.email.to_string(),
            phone: m.phone.clone(),
            message: m.message.clone(),
            handled: m.handled,
            admin_notes: m.admin_notes.clone(),
            created_at: m.created_at.to_rfc3339(),
            updated_at: m.updated_at.to_rfc3339(),
        }
    }
}

/// Partnership inquiry response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub address: Option<String>,
    pub message: String,
    pub handled: bool,
    pub admin_notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&PartnershipInquiry> for InquiryResponse {
    fn from(i: &PartnershipInquiry) -> Self {
        Self {
            id: i.inquiry_id.to_string(),
            name: i.name.clone(),
            email: i.email.to_string(),
            phone: i.phone.clone(),
            company: i.company.clone(),
            address: i.address.clone(),
            message: i.message.clone(),
            handled: i.handled,
            admin_notes: i.admin_notes.clone(),
            created_at: i.created_at.to_rfc3339(),
            updated_at: i.updated_at.to_rfc3339(),
        }
    }
}

/// Generic acknowledgement body for public form submissions
#[derive(Debug, Clone, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn new() -> Self {
        Self { ok: true }
    }
}

impl Default for OkResponse {
    fn default() -> Self {
        Self::new()
    }
}
