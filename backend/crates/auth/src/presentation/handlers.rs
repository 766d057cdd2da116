//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use platform::client::extract_client_ip;
use platform::cookie::{CookieConfig, extract_cookie};
use platform::notify::Notifier;

use crate::application::config::AuthConfig;
use crate::application::{
    ConfirmPasswordResetUseCase, LoginInput, LoginUseCase, LogoutUseCase, RegisterInput,
    RegisterUseCase, RequestPasswordResetUseCase, SessionStatusUseCase,
};
use crate::domain::repository::{PasswordResetRepository, SessionRepository, UserRepository};
use crate::error::AuthResult;
use crate::presentation::dto::{
    LoginRequest, OkResponse, PasswordResetConfirmRequest, PasswordResetRequest, RegisterRequest,
    SessionStatusResponse, UserResponse,
};

/// Shared state for auth handlers
pub struct AuthAppState<R, N>
where
    R: UserRepository + SessionRepository + PasswordResetRepository + Clone + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub notifier: Arc<N>,
    pub config: Arc<AuthConfig>,
}

// Manual impl: a derive would demand `N: Clone`, but every field is an
// Arc and the notifier is only ever shared.
impl<R, N> Clone for AuthAppState<R, N>
where
    R: UserRepository + SessionRepository + PasswordResetRepository + Clone + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            notifier: Arc::clone(&self.notifier),
            config: Arc::clone(&self.config),
        }
    }
}

/// Session cookie settings derived from config
fn session_cookie(config: &AuthConfig) -> CookieConfig {
    CookieConfig {
        name: config.session_cookie_name.clone(),
        secure: config.cookie_secure,
        http_only: true,
        same_site: config.cookie_same_site,
        path: "/".to_string(),
        max_age_secs: Some(config.session_ttl.as_secs() as i64),
    }
}

fn client_ip_string(
    headers: &HeaderMap,
    addr: &std::net::SocketAddr,
) -> Option<String> {
    extract_client_ip(headers, Some(addr.ip())).map(|ip| ip.to_string())
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<R, N>(
    State(state): State<AuthAppState<R, N>>,
    headers: HeaderMap,
    axum::extract::ConnectInfo(addr): axum::extract::ConnectInfo<std::net::SocketAddr>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + SessionRepository + PasswordResetRepository + Clone + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        email: req.email,
        password: req.password,
        display_name: req.display_name,
    };

    let output = use_case
        .execute(input, client_ip_string(&headers, &addr))
        .await?;

    let cookie = session_cookie(&state.config).build_set_cookie(&output.session_token);

    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, cookie)],
        Json(UserResponse {
            id: output.user_id,
            email: output.email,
            display_name: output.display_name,
            role: output.role.code().to_string(),
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R, N>(
    State(state): State<AuthAppState<R, N>>,
    headers: HeaderMap,
    axum::extract::ConnectInfo(addr): axum::extract::ConnectInfo<std::net::SocketAddr>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + SessionRepository + PasswordResetRepository + Clone + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let input = LoginInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case
        .execute(input, client_ip_string(&headers, &addr))
        .await?;

    let cookie = session_cookie(&state.config).build_set_cookie(&output.session_token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(UserResponse {
            id: output.user_id,
            email: output.email,
            display_name: output.display_name,
            role: output.role.code().to_string(),
        }),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/auth/logout
pub async fn logout<R, N>(
    State(state): State<AuthAppState<R, N>>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + SessionRepository + PasswordResetRepository + Clone + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
{
    if let Some(token) = extract_cookie(&headers, &state.config.session_cookie_name) {
        let use_case = LogoutUseCase::new(state.repo.clone(), state.config.clone());
        // Best effort: the cookie is cleared regardless
        if let Err(e) = use_case.execute(&token).await {
            tracing::warn!(error = %e, "Logout session delete failed");
        }
    }

    let cookie = session_cookie(&state.config).build_delete_cookie();

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(OkResponse::new()),
    ))
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /api/session
pub async fn session_status<R, N>(
    State(state): State<AuthAppState<R, N>>,
    headers: HeaderMap,
) -> AuthResult<Json<SessionStatusResponse>>
where
    R: UserRepository + SessionRepository + PasswordResetRepository + Clone + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
{
    let token = extract_cookie(&headers, &state.config.session_cookie_name);

    let use_case = SessionStatusUseCase::new(state.repo.clone(), state.config.clone());

    let snapshot = match token {
        Some(token) => use_case.resolve(&token).await.ok(),
        None => None,
    };

    match snapshot {
        Some(snapshot) => Ok(Json(SessionStatusResponse {
            authenticated: true,
            id: Some(snapshot.user_id.to_string()),
            email: Some(snapshot.email),
            role: Some(snapshot.role.code().to_string()),
        })),
        None => Ok(Json(SessionStatusResponse::anonymous())),
    }
}

// ============================================================================
// Password Reset
// ============================================================================

/// POST /api/auth/password/request
pub async fn request_password_reset<R, N>(
    State(state): State<AuthAppState<R, N>>,
    Json(req): Json<PasswordResetRequest>,
) -> AuthResult<Json<OkResponse>>
where
    R: UserRepository + SessionRepository + PasswordResetRepository + Clone + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
{
    let use_case = RequestPasswordResetUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.notifier.clone(),
        state.config.clone(),
    );

    use_case.execute(&req.email).await?;

    // Identical body whether or not the account exists
    Ok(Json(OkResponse::new()))
}

/// POST /api/auth/password/confirm
pub async fn confirm_password_reset<R, N>(
    State(state): State<AuthAppState<R, N>>,
    Json(req): Json<PasswordResetConfirmRequest>,
) -> AuthResult<Json<OkResponse>>
where
    R: UserRepository + SessionRepository + PasswordResetRepository + Clone + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
{
    let use_case = ConfirmPasswordResetUseCase::new(state.repo.clone(), state.config.clone());

    use_case.execute(&req.token, req.password).await?;

    Ok(Json(OkResponse::new()))
}
