//! Session Status Use Case
//!
//! Resolves a cookie token to the session snapshot. The answer comes
//! from the session row alone; the users table is never consulted.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::parse_session_token;
use crate::domain::repository::SessionRepository;
use crate::domain::value_object::user_role::UserRole;
use crate::error::{AuthError, AuthResult};
use kernel::id::UserId;

/// Identity snapshot held by a live session
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub user_id: UserId,
    pub email: String,
    pub role: UserRole,
    pub expires_at_ms: i64,
}

/// Session status use case
pub struct SessionStatusUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> SessionStatusUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Resolve the token to a live session snapshot
    ///
    /// An expired row is deleted lazily here, so an expired cookie is
    /// indistinguishable from no cookie on the very next request.
    pub async fn resolve(&self, session_token: &str) -> AuthResult<SessionSnapshot> {
        let session_id = parse_session_token(session_token, &self.config.session_secret)?;

        let session = self
            .session_repo
            .find_by_id(session_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        if session.is_expired() {
            self.session_repo.delete(session_id).await?;
            tracing::debug!(session_id = %session_id, "Deleted expired session on lookup");
            return Err(AuthError::SessionInvalid);
        }

        Ok(SessionSnapshot {
            user_id: session.user_id,
            email: session.email.to_string(),
            role: session.user_role,
            expires_at_ms: session.expires_at_ms,
        })
    }
}
