//! Submit Contact Message Use Case

use std::sync::Arc;

use auth::models::email::Email;
use platform::notify::{Notification, Notifier, dispatch};

use crate::application::{optional_field, required_field, required_message};
use crate::domain::entity::contact_message::ContactMessage;
use crate::domain::repository::ContactRepository;
use crate::error::IntakeResult;

/// Raw wire values from the public contact form
pub struct SubmitContactInput {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

/// Submit contact message use case
///
/// Unauthenticated: anyone may submit, abuse is throttled at the route.
pub struct SubmitContactUseCase<R, N>
where
    R: ContactRepository,
    N: Notifier + Send + Sync + 'static,
{
    repo: Arc<R>,
    notifier: Arc<N>,
}

impl<R, N> SubmitContactUseCase<R, N>
where
    R: ContactRepository,
    N: Notifier + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>, notifier: Arc<N>) -> Self {
        Self { repo, notifier }
    }

    pub async fn execute(&self, input: SubmitContactInput) -> IntakeResult<ContactMessage> {
        let name = required_field(input.name, "name")?;
        let email = Email::new(input.email)?;
        let phone = optional_field(input.phone, "phone")?;
        let message = required_message(input.message)?;

        let contact = ContactMessage::new(name, email, phone, message);
        self.repo.create_contact(&contact).await?;

        dispatch(
            self.notifier.clone(),
            Notification::new(
                "contact.submitted",
                format!("Contact message from {} <{}>", contact.name, contact.email),
            ),
        );

        tracing::info!(message_id = %contact.message_id, "Contact message submitted");

        Ok(contact)
    }
}
