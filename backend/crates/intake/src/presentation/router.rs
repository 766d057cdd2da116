//! Intake Router
//!
//! Public form submissions are rate limited; everything else on these
//! paths is admin-only behind the session guard.

use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, patch, post},
};
use std::sync::Arc;

use auth::domain::repository::SessionRepository;
use auth::middleware::{AuthMiddlewareState, require_admin, require_session};
use platform::notify::{LogNotifier, Notifier};
use platform::rate_limit::{RateLimitStore, RateLimiterState, rate_limit};

use crate::domain::repository::{ContactRepository, InquiryRepository};
use crate::infra::postgres::PgIntakeRepository;
use crate::presentation::handlers::{self, IntakeAppState};

/// Create the intake router with PostgreSQL repository and log notifier
pub fn intake_router<S, L>(
    repo: PgIntakeRepository,
    auth_state: AuthMiddlewareState<S>,
    forms_limiter: RateLimiterState<L>,
) -> Router
where
    S: SessionRepository + Clone + Send + Sync + 'static,
    L: RateLimitStore + Send + Sync + 'static,
{
    intake_router_generic(repo, LogNotifier, auth_state, forms_limiter)
}

/// Create a generic intake router for any repository/notifier implementation
pub fn intake_router_generic<R, N, S, L>(
    repo: R,
    notifier: N,
    auth_state: AuthMiddlewareState<S>,
    forms_limiter: RateLimiterState<L>,
) -> Router
where
    R: ContactRepository + InquiryRepository + Clone + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
    L: RateLimitStore + Send + Sync + 'static,
{
    let state = IntakeAppState {
        repo: Arc::new(repo),
        notifier: Arc::new(notifier),
    };

    let public_routes = Router::new()
        .route("/contact", post(handlers::submit_contact::<R, N>))
        .route("/partnerships", post(handlers::submit_inquiry::<R, N>))
        .layer(from_fn_with_state(forms_limiter, rate_limit::<L>))
        .with_state(state.clone());

    let admin_routes = Router::new()
        .route("/contact", get(handlers::list_contacts::<R, N>))
        .route("/contact/{id}", patch(handlers::review_contact::<R, N>))
        .route("/partnerships", get(handlers::list_inquiries::<R, N>))
        .route(
            "/partnerships/{id}",
            patch(handlers::review_inquiry::<R, N>),
        )
        .layer(from_fn(require_admin))
        .layer(from_fn_with_state(auth_state, require_session::<S>))
        .with_state(state);

    Router::new().merge(public_routes).merge(admin_routes)
}
