//! Record Donation Use Case

use std::sync::Arc;

use kernel::error::app_error::AppError;
use kernel::id::{ProgramId, UserId};
use platform::notify::{Notification, Notifier, dispatch};

use crate::application::config::DonationConfig;
use crate::domain::entity::donation::Donation;
use crate::domain::repository::{DonationRepository, ProgramRepository};
use crate::domain::value_object::{
    amount::Amount, currency::Currency, donation_type::DonationType,
};
use crate::error::{DonationError, DonationResult};

/// Record donation input (raw wire values, validated here)
pub struct RecordDonationInput {
    pub amount_minor: i64,
    pub currency: Option<String>,
    pub donation_type: String,
    pub program_id: Option<String>,
}

/// Record donation use case
pub struct RecordDonationUseCase<R, N>
where
    R: DonationRepository + ProgramRepository,
    N: Notifier + Send + Sync + 'static,
{
    repo: Arc<R>,
    notifier: Arc<N>,
    config: Arc<DonationConfig>,
}

impl<R, N> RecordDonationUseCase<R, N>
where
    R: DonationRepository + ProgramRepository,
    N: Notifier + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>, notifier: Arc<N>, config: Arc<DonationConfig>) -> Self {
        Self {
            repo,
            notifier,
            config,
        }
    }

    /// Validate and persist a donation owned by `donor_id`
    ///
    /// The donor is taken from the session, never from the request body.
    pub async fn execute(
        &self,
        donor_id: UserId,
        input: RecordDonationInput,
    ) -> DonationResult<Donation> {
        let amount = Amount::new(input.amount_minor)?;
        let donation_type = DonationType::from_wire(&input.donation_type)?;

        let currency = match input.currency {
            Some(code) => Currency::new(code)?,
            None => self.config.default_currency.clone(),
        };

        let program_id = match input.program_id {
            Some(raw) => {
                let id = ProgramId::parse(&raw).map_err(|_| {
                    DonationError::Validation(
                        AppError::bad_request("Invalid program id").with_field("programId"),
                    )
                })?;

                // Must point at a program that still accepts donations
                if self.repo.find_active(&id).await?.is_none() {
                    return Err(DonationError::ProgramInvalid);
                }

                Some(id)
            }
            None => None,
        };

        let donation = Donation::new(donor_id, program_id, amount, currency, donation_type);
        DonationRepository::create(self.repo.as_ref(), &donation).await?;

        dispatch(
            self.notifier.clone(),
            Notification::new(
                "donation.recorded",
                format!(
                    "Donation of {} {} ({})",
                    donation.amount, donation.currency, donation.donation_type
                ),
            ),
        );

        tracing::info!(
            donation_id = %donation.donation_id,
            user_id = %donation.user_id,
            amount = %donation.amount,
            "Donation recorded"
        );

        Ok(donation)
    }
}
