//! Logout Use Case
//!
//! Invalidates a user session. Idempotent: an absent, expired or
//! tampered token still results in a cleared cookie and `{ok: true}`.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::parse_session_token;
use crate::domain::repository::SessionRepository;
use crate::error::AuthResult;

/// Logout use case
pub struct LogoutUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> LogoutUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Delete the session row referenced by the token, if any
    pub async fn execute(&self, session_token: &str) -> AuthResult<()> {
        let session_id = match parse_session_token(session_token, &self.config.session_secret) {
            Ok(id) => id,
            Err(_) => {
                tracing::debug!("Logout with unparseable token, nothing to delete");
                return Ok(());
            }
        };

        self.session_repo.delete(session_id).await?;

        tracing::info!(session_id = %session_id, "User logged out");
        Ok(())
    }
}
