//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::{
    donation::{Donation, DonationWithDetails},
    program::Program,
};

// ============================================================================
// Record Donation
// ============================================================================

/// Record donation request
///
/// Amount is an integer in the smallest currency unit. No `userId`
/// field exists; ownership comes from the session.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDonationRequest {
    pub amount: i64,
    pub currency: Option<String>,
    #[serde(rename = "type")]
    pub donation_type: String,
    pub program_id: Option<String>,
}

/// Donation response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationResponse {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    #[serde(rename = "type")]
    pub donation_type: String,
    pub status: String,
    pub program_id: Option<String>,
    pub created_at: String,
}

impl From<&Donation> for DonationResponse {
    fn from(d: &Donation) -> Self {
        Self {
            id: d.donation_id.to_string(),
            amount: d.amount.minor_units(),
            currency: d.currency.to_string(),
            donation_type: d.donation_type.wire_code().to_string(),
            status: d.status.wire_code().to_string(),
            program_id: d.program_id.as_ref().map(|id| id.to_string()),
            created_at: d.created_at.to_rfc3339(),
        }
    }
}

// ============================================================================
// Admin Listing
// ============================================================================

/// Donation joined with donor email and program name
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationDetailsResponse {
    #[serde(flatten)]
    pub donation: DonationResponse,
    pub donor_email: String,
    pub program_name: Option<String>,
}

impl From<&DonationWithDetails> for DonationDetailsResponse {
    fn from(d: &DonationWithDetails) -> Self {
        Self {
            donation: DonationResponse::from(&d.donation),
            donor_email: d.donor_email.clone(),
            program_name: d.program_name.clone(),
        }
    }
}

// ============================================================================
// Programs
// ============================================================================

/// Program response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
}

impl From<&Program> for ProgramResponse {
    fn from(p: &Program) -> Self {
        Self {
            id: p.program_id.to_string(),
            name: p.name.clone(),
            slug: p.slug.clone(),
        }
    }
}
