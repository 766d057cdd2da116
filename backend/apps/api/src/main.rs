//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router, http,
    http::{Method, header},
    middleware::from_fn_with_state,
};
use base64::Engine;
use base64::engine::general_purpose;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use auth::middleware::AuthMiddlewareState;
use auth::domain::repository::{PasswordResetRepository, SessionRepository};
use auth::router::auth_router_with_limits;
use auth::{AuthConfig, PgAuthRepository};
use donations::domain::value_object::currency::Currency;
use donations::{DonationConfig, PgDonationRepository, donations_router};
use intake::{PgIntakeRepository, intake_router};
use platform::csrf::{CsrfConfig, csrf_protect};
use platform::notify::LogNotifier;
use platform::rate_limit::{
    MemoryRateLimitStore, RateLimitConfig, RateLimiterState, rate_limit,
};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,donations=info,intake=info,platform=info,tower_http=info"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Startup cleanup: sweep expired sessions and reset tokens
    // Errors here should not prevent server startup
    let auth_repo = PgAuthRepository::new(pool.clone());
    match SessionRepository::cleanup_expired(&auth_repo).await {
        Ok(deleted) => {
            tracing::info!(sessions_deleted = deleted, "Session cleanup completed");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Session cleanup failed, continuing anyway");
        }
    }
    match PasswordResetRepository::cleanup_expired(&auth_repo).await {
        Ok(deleted) => {
            tracing::info!(tokens_deleted = deleted, "Reset token cleanup completed");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Reset token cleanup failed, continuing anyway");
        }
    }

    // Auth configuration
    let mut auth_config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        // In production, load the signing secret from environment
        let secret_b64 =
            env::var("SESSION_SECRET").expect("SESSION_SECRET must be set in production");
        let secret_bytes = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
        anyhow::ensure!(
            secret_bytes.len() == 32,
            "SESSION_SECRET must decode to 32 bytes"
        );
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&secret_bytes);
        AuthConfig {
            session_secret: secret,
            ..AuthConfig::default()
        }
    };

    if let Ok(value) = env::var("COOKIE_SECURE") {
        auth_config.cookie_secure = value.trim().eq_ignore_ascii_case("true");
    }

    // CSRF cookies follow the same Secure flag as the session cookie
    let mut csrf_config = CsrfConfig::default();
    csrf_config.secret_cookie.secure = auth_config.cookie_secure;
    csrf_config.token_cookie.secure = auth_config.cookie_secure;

    // Donation configuration
    let donation_config = match env::var("DEFAULT_CURRENCY") {
        Ok(code) => DonationConfig::new(Currency::new(code)?),
        Err(_) => DonationConfig::default(),
    };

    // Rate limiters share one in-memory store, scoped per route group
    let rate_store = Arc::new(MemoryRateLimitStore::new());
    let login_limiter =
        RateLimiterState::new(rate_store.clone(), RateLimitConfig::login(), "login");
    let forms_limiter =
        RateLimiterState::new(rate_store.clone(), RateLimitConfig::forms(), "forms");
    let general_limiter =
        RateLimiterState::new(rate_store, RateLimitConfig::default(), "general");

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:40922,http://127.0.0.1:40922".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static("x-xsrf-token"),
        ]))
        .allow_credentials(true);

    // Shared guard state for the session middleware
    let auth_state = AuthMiddlewareState {
        repo: Arc::new(auth_repo.clone()),
        config: Arc::new(auth_config.clone()),
    };

    // Build router
    let api_routes = Router::new()
        .merge(auth_router_with_limits(
            auth_repo,
            LogNotifier,
            auth_config,
            login_limiter,
        ))
        .merge(donations_router(
            PgDonationRepository::new(pool.clone()),
            donation_config,
            auth_state.clone(),
        ))
        .merge(intake_router(
            PgIntakeRepository::new(pool.clone()),
            auth_state,
            forms_limiter,
        ));

    let app = Router::new()
        .nest("/api", api_routes)
        .layer(from_fn_with_state(Arc::new(csrf_config), csrf_protect))
        .layer(from_fn_with_state(
            general_limiter,
            rate_limit::<MemoryRateLimitStore>,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(31113);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
