//! Donation Entity
//!
//! Immutable once recorded. There is no update or delete path.

use chrono::{DateTime, Utc};
use kernel::id::{DonationId, ProgramId, UserId};

use crate::domain::value_object::{
    amount::Amount, currency::Currency, donation_status::DonationStatus,
    donation_type::DonationType,
};

/// Donation record
#[derive(Debug, Clone)]
pub struct Donation {
    pub donation_id: DonationId,
    /// The donor; always the session user at recording time
    pub user_id: UserId,
    /// Target program, None for the general fund
    pub program_id: Option<ProgramId>,
    pub amount: Amount,
    pub currency: Currency,
    pub donation_type: DonationType,
    pub status: DonationStatus,
    pub created_at: DateTime<Utc>,
}

impl Donation {
    /// Record a new donation
    pub fn new(
        user_id: UserId,
        program_id: Option<ProgramId>,
        amount: Amount,
        currency: Currency,
        donation_type: DonationType,
    ) -> Self {
        Self {
            donation_id: DonationId::new(),
            user_id,
            program_id,
            amount,
            currency,
            donation_type,
            status: DonationStatus::Succeeded,
            created_at: Utc::now(),
        }
    }
}

/// Donation joined with donor email and program name (admin listing)
#[derive(Debug, Clone)]
pub struct DonationWithDetails {
    pub donation: Donation,
    pub donor_email: String,
    pub program_name: Option<String>,
}
