//! Register Use Case
//!
//! Creates a user account and establishes a session in one step.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::token::sign_session_token;
use crate::domain::entity::{session::Session, user::User};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{email::Email, user_role::UserRole};
use crate::error::AuthResult;

/// Register input
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub display_name: Option<String>,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    /// Session token for cookie
    pub session_token: String,
    pub user_id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub role: UserRole,
}

/// Register use case
pub struct RegisterUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> RegisterUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(
        &self,
        input: RegisterInput,
        client_ip: Option<String>,
    ) -> AuthResult<RegisterOutput> {
        let email = Email::new(input.email)?;
        let password = ClearTextPassword::new(input.password)?;

        let display_name = input
            .display_name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        let password_hash = password.hash(self.config.pepper())?;

        // Uniqueness is enforced by the store; a race between two
        // concurrent registrations still surfaces as EmailTaken.
        let user = User::new(email, password_hash, display_name);
        self.user_repo.create(&user).await?;

        let session = Session::new(
            user.user_id,
            user.email.clone(),
            user.user_role,
            client_ip,
            self.config.session_ttl_chrono(),
        );
        self.session_repo.create(&session).await?;

        let session_token = sign_session_token(session.session_id, &self.config.session_secret);

        tracing::info!(
            user_id = %user.user_id,
            session_id = %session.session_id,
            "User registered"
        );

        Ok(RegisterOutput {
            session_token,
            user_id: user.user_id.to_string(),
            email: user.email.to_string(),
            display_name: user.display_name,
            role: user.user_role,
        })
    }
}
