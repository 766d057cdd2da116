//! Authorization Guard Middleware
//!
//! Three layers of access control:
//! - `require_session` resolves the cookie to a `CurrentUser` extension
//! - `require_admin` additionally demands the Admin role
//! - `CurrentUser::ensure_owns` checks resource ownership in handlers

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::{AppError, AppResult};
use kernel::id::UserId;
use std::sync::Arc;

use crate::application::SessionStatusUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::SessionRepository;
use crate::domain::value_object::user_role::UserRole;

/// Authenticated caller, inserted as a request extension
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub email: String,
    pub role: UserRole,
}

impl CurrentUser {
    /// Check that the caller owns the resource
    ///
    /// Admins bypass ownership; anyone else must match the owner.
    pub fn ensure_owns(&self, owner_id: &UserId) -> AppResult<()> {
        if self.role.is_admin() || self.user_id == *owner_id {
            Ok(())
        } else {
            Err(AppError::forbidden("You do not have access to this resource"))
        }
    }

    /// Check that the caller is an admin
    pub fn ensure_admin(&self) -> AppResult<()> {
        if self.role.is_admin() {
            Ok(())
        } else {
            Err(AppError::forbidden("Admin access required"))
        }
    }
}

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// Middleware that requires a valid session
///
/// On success, downstream handlers can extract `Extension<CurrentUser>`.
pub async fn require_session<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name);

    let use_case = SessionStatusUseCase::new(state.repo.clone(), state.config.clone());

    let snapshot = match token {
        Some(token) => use_case.resolve(&token).await.ok(),
        None => None,
    };

    let Some(snapshot) = snapshot else {
        return Err((
            [("X-Auth-Required", "true")],
            AppError::unauthorized("Authentication required"),
        )
            .into_response());
    };

    req.extensions_mut().insert(CurrentUser {
        user_id: snapshot.user_id,
        email: snapshot.email,
        role: snapshot.role,
    });

    Ok(next.run(req).await)
}

/// Middleware that requires the Admin role
///
/// Must be layered after `require_session` (it reads the extension).
pub async fn require_admin(req: Request<Body>, next: Next) -> Result<Response, Response> {
    let Some(current_user) = req.extensions().get::<CurrentUser>() else {
        return Err(AppError::unauthorized("Authentication required").into_response());
    };

    if !current_user.role.is_admin() {
        tracing::warn!(
            user_id = %current_user.user_id,
            "Non-admin attempted an admin route"
        );
        return Err(AppError::forbidden("Admin access required").into_response());
    }

    Ok(next.run(req).await)
}
