//! Password Reset Use Cases
//!
//! Two phases: request (mint a token, deliver it out of band) and
//! confirm (consume the token, replace the hash, revoke sessions).

use std::sync::Arc;

use platform::notify::{Notification, Notifier, dispatch};
use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::reset_token::PasswordResetToken;
use crate::domain::repository::{PasswordResetRepository, UserRepository};
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// Request-phase use case
pub struct RequestPasswordResetUseCase<U, P, N>
where
    U: UserRepository,
    P: PasswordResetRepository,
    N: Notifier + Send + Sync + 'static,
{
    user_repo: Arc<U>,
    reset_repo: Arc<P>,
    notifier: Arc<N>,
    config: Arc<AuthConfig>,
}

impl<U, P, N> RequestPasswordResetUseCase<U, P, N>
where
    U: UserRepository,
    P: PasswordResetRepository,
    N: Notifier + Send + Sync + 'static,
{
    pub fn new(
        user_repo: Arc<U>,
        reset_repo: Arc<P>,
        notifier: Arc<N>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            user_repo,
            reset_repo,
            notifier,
            config,
        }
    }

    /// Mint and deliver a reset token if the email is registered
    ///
    /// Returns Ok either way; the caller's response must not reveal
    /// whether the account exists. Delivery is fire-and-forget.
    pub async fn execute(&self, email: &str) -> AuthResult<()> {
        let email = match Email::new(email) {
            Ok(e) => e,
            Err(_) => {
                tracing::debug!("Password reset requested for malformed email");
                return Ok(());
            }
        };

        let Some(user) = self.user_repo.find_by_email(&email).await? else {
            tracing::debug!("Password reset requested for unknown email");
            return Ok(());
        };

        let (raw_token, token) =
            PasswordResetToken::mint(user.user_id, self.config.reset_token_ttl_chrono());
        self.reset_repo.create(&token).await?;

        // The raw token travels only through the notification channel
        dispatch(
            self.notifier.clone(),
            Notification::new(
                "auth.password_reset",
                format!("Password reset for {}: token {}", email, raw_token),
            ),
        );

        tracing::info!(user_id = %user.user_id, "Password reset token issued");
        Ok(())
    }
}

/// Confirm-phase use case
pub struct ConfirmPasswordResetUseCase<P>
where
    P: PasswordResetRepository,
{
    reset_repo: Arc<P>,
    config: Arc<AuthConfig>,
}

impl<P> ConfirmPasswordResetUseCase<P>
where
    P: PasswordResetRepository,
{
    pub fn new(reset_repo: Arc<P>, config: Arc<AuthConfig>) -> Self {
        Self {
            reset_repo,
            config,
        }
    }

    /// Consume the token and install the new password
    ///
    /// The token digest lookup, hash update, used marker and session
    /// revocation happen in one repository transaction.
    pub async fn execute(&self, raw_token: &str, new_password: String) -> AuthResult<()> {
        let password = ClearTextPassword::new(new_password)?;
        let new_hash = password.hash(self.config.pepper())?;

        let token_hash = PasswordResetToken::hash_raw(raw_token);
        let user_id = self.reset_repo.consume_and_reset(&token_hash, &new_hash).await?;

        tracing::info!(user_id = %user_id, "Password reset confirmed, sessions revoked");
        Ok(())
    }
}
