//! Submit Partnership Inquiry Use Case

use std::sync::Arc;

use auth::models::email::Email;
use platform::notify::{Notification, Notifier, dispatch};

use crate::application::{optional_field, required_field, required_message};
use crate::domain::entity::partnership_inquiry::PartnershipInquiry;
use crate::domain::repository::InquiryRepository;
use crate::error::IntakeResult;

/// Raw wire values from the public partnership form
pub struct SubmitInquiryInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub address: Option<String>,
    pub message: String,
}

/// Submit partnership inquiry use case
///
/// Phone and company are mandatory here, unlike the contact form.
pub struct SubmitInquiryUseCase<R, N>
where
    R: InquiryRepository,
    N: Notifier + Send + Sync + 'static,
{
    repo: Arc<R>,
    notifier: Arc<N>,
}

impl<R, N> SubmitInquiryUseCase<R, N>
where
    R: InquiryRepository,
    N: Notifier + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>, notifier: Arc<N>) -> Self {
        Self { repo, notifier }
    }

    pub async fn execute(&self, input: SubmitInquiryInput) -> IntakeResult<PartnershipInquiry> {
        let name = required_field(input.name, "name")?;
        let email = Email::new(input.email)?;
        let phone = required_field(input.phone, "phone")?;
        let company = required_field(input.company, "company")?;
        let address = optional_field(input.address, "address")?;
        let message = required_message(input.message)?;

        let inquiry = PartnershipInquiry::new(name, email, phone, company, address, message);
        self.repo.create_inquiry(&inquiry).await?;

        dispatch(
            self.notifier.clone(),
            Notification::new(
                "partnership.submitted",
                format!(
                    "Partnership inquiry from {} ({})",
                    inquiry.name, inquiry.company
                ),
            ),
        );

        tracing::info!(inquiry_id = %inquiry.inquiry_id, "Partnership inquiry submitted");

        Ok(inquiry)
    }
}
