//! Donations Router
//!
//! The auth guard is layered here: donation routes require a session,
//! the admin listing additionally requires the Admin role, the program
//! listing is public.

use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
};
use std::sync::Arc;

use auth::domain::repository::SessionRepository;
use auth::middleware::{AuthMiddlewareState, require_admin, require_session};
use platform::notify::{LogNotifier, Notifier};

use crate::application::config::DonationConfig;
use crate::domain::repository::{DonationRepository, ProgramRepository};
use crate::infra::postgres::PgDonationRepository;
use crate::presentation::handlers::{self, DonationAppState};

/// Create the donations router with PostgreSQL repository and log notifier
pub fn donations_router<S>(
    repo: PgDonationRepository,
    config: DonationConfig,
    auth_state: AuthMiddlewareState<S>,
) -> Router
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    donations_router_generic(repo, LogNotifier, config, auth_state)
}

/// Create a generic donations router for any repository/notifier implementation
pub fn donations_router_generic<R, N, S>(
    repo: R,
    notifier: N,
    config: DonationConfig,
    auth_state: AuthMiddlewareState<S>,
) -> Router
where
    R: DonationRepository + ProgramRepository + Clone + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let state = DonationAppState {
        repo: Arc::new(repo),
        notifier: Arc::new(notifier),
        config: Arc::new(config),
    };

    // GET /donations is the admin listing; POST /donations and
    // GET /donations/me only need a session. The method routers merge
    // per path, each keeping its own guard stack.
    let admin_routes = Router::new()
        .route("/donations", get(handlers::list_all_donations::<R, N>))
        .layer(from_fn(require_admin))
        .with_state(state.clone());

    let session_routes = Router::new()
        .route("/donations", post(handlers::record_donation::<R, N>))
        .route("/donations/me", get(handlers::list_my_donations::<R, N>))
        .with_state(state.clone());

    let public_routes = Router::new()
        .route("/programs", get(handlers::list_programs::<R, N>))
        .with_state(state);

    Router::new()
        .merge(
            admin_routes
                .merge(session_routes)
                .layer(from_fn_with_state(auth_state, require_session::<S>)),
        )
        .merge(public_routes)
}
