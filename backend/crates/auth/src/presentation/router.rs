//! Auth Router

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use platform::notify::{LogNotifier, Notifier};
use platform::rate_limit::{RateLimitStore, RateLimiterState, rate_limit};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::{PasswordResetRepository, SessionRepository, UserRepository};
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with PostgreSQL repository and log notifier
pub fn auth_router(repo: PgAuthRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, LogNotifier, config)
}

/// Create a generic Auth router for any repository/notifier implementation
pub fn auth_router_generic<R, N>(repo: R, notifier: N, config: AuthConfig) -> Router
where
    R: UserRepository + SessionRepository + PasswordResetRepository + Clone + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        notifier: Arc::new(notifier),
        config: Arc::new(config),
    };

    Router::new()
        .route("/session", get(handlers::session_status::<R, N>))
        .route("/auth/register", post(handlers::register::<R, N>))
        .route("/auth/login", post(handlers::login::<R, N>))
        .route("/auth/logout", post(handlers::logout::<R, N>))
        .route(
            "/auth/password/request",
            post(handlers::request_password_reset::<R, N>),
        )
        .route(
            "/auth/password/confirm",
            post(handlers::confirm_password_reset::<R, N>),
        )
        .with_state(state)
}

/// Auth router with the credential endpoints behind a rate limiter
///
/// Login and reset requests share the strict limiter; the rest of the
/// routes are covered by the app-wide general limiter.
pub fn auth_router_with_limits<R, N, S>(
    repo: R,
    notifier: N,
    config: AuthConfig,
    login_limiter: RateLimiterState<S>,
) -> Router
where
    R: UserRepository + SessionRepository + PasswordResetRepository + Clone + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
    S: RateLimitStore + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        notifier: Arc::new(notifier),
        config: Arc::new(config),
    };

    Router::new()
        .route("/session", get(handlers::session_status::<R, N>))
        .route("/auth/register", post(handlers::register::<R, N>))
        .route(
            "/auth/login",
            post(handlers::login::<R, N>)
                .layer(from_fn_with_state(login_limiter.clone(), rate_limit::<S>)),
        )
        .route("/auth/logout", post(handlers::logout::<R, N>))
        .route(
            "/auth/password/request",
            post(handlers::request_password_reset::<R, N>)
                .layer(from_fn_with_state(login_limiter, rate_limit::<S>)),
        )
        .route(
            "/auth/password/confirm",
            post(handlers::confirm_password_reset::<R, N>),
        )
        .with_state(state)
}
