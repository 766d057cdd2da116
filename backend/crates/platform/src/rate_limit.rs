//! Rate Limiting Infrastructure
//!
//! Fixed-window rate limiting keyed by client IP. The storage backend
//! is behind a trait so a clustered deployment can swap in a shared
//! store without touching the middleware.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderValue, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;

use crate::client::extract_client_ip;

/// Rate limit configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests allowed in the window
    pub max_requests: u32,
    /// Time window duration
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 100,
            window: Duration::from_secs(60),
        }
    }
}

impl RateLimitConfig {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window: Duration::from_secs(window_secs),
        }
    }

    /// Login attempts: 5 per 5 minutes
    pub fn login() -> Self {
        Self::new(5, 300)
    }

    /// Public form submissions: 3 per 15 minutes
    pub fn forms() -> Self {
        Self::new(3, 900)
    }

    pub fn window_ms(&self) -> i64 {
        self.window.as_millis() as i64
    }
}

/// Rate limit check result
#[derive(Debug, Clone)]
pub struct RateLimitResult {
    pub allowed: bool,
    pub remaining: u32,
    pub reset_at_ms: i64,
}

/// Trait for rate limit storage backends
#[trait_variant::make(RateLimitStore: Send)]
pub trait LocalRateLimitStore {
    /// Check and increment rate limit counter
    /// Returns (allowed, remaining_requests)
    async fn check_and_increment(
        &self,
        key: &str,
        config: &RateLimitConfig,
    ) -> Result<RateLimitResult, Box<dyn std::error::Error + Send + Sync>>;
}

/// In-memory fixed-window store
///
/// Counters are bucketed per key by window expiry. Keys embed the
/// client IP, which a caller behind a proxy can vary freely, so once
/// the map passes a threshold every dead window is swept out before
/// the next insert.
#[derive(Debug, Default)]
pub struct MemoryRateLimitStore {
    windows: Mutex<HashMap<String, (i64, u32)>>,
}

/// Map size at which expired entries are swept
const SWEEP_THRESHOLD: usize = 1024;

impl MemoryRateLimitStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn now_ms() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }

    fn check_sync(&self, key: &str, config: &RateLimitConfig, now_ms: i64) -> RateLimitResult {
        let window_ms = config.window_ms();
        let window_start = (now_ms / window_ms) * window_ms;
        let reset_at_ms = window_start + window_ms;

        let mut windows = match self.windows.lock() {
            Ok(guard) => guard,
            // A poisoned lock only means another thread panicked mid-insert;
            // the map itself is still usable.
            Err(poisoned) => poisoned.into_inner(),
        };

        if windows.len() >= SWEEP_THRESHOLD {
            windows.retain(|_, (reset, _)| *reset > now_ms);
        }

        let entry = windows.entry(key.to_string()).or_insert((reset_at_ms, 0));
        if entry.0 != reset_at_ms {
            *entry = (reset_at_ms, 0);
        }
        entry.1 += 1;

        let allowed = entry.1 <= config.max_requests;
        RateLimitResult {
            allowed,
            remaining: config.max_requests.saturating_sub(entry.1),
            reset_at_ms,
        }
    }
}

impl RateLimitStore for MemoryRateLimitStore {
    async fn check_and_increment(
        &self,
        key: &str,
        config: &RateLimitConfig,
    ) -> Result<RateLimitResult, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.check_sync(key, config, Self::now_ms()))
    }
}

/// Middleware state for a rate-limited route group
pub struct RateLimiterState<S>
where
    S: RateLimitStore + Send + Sync + 'static,
{
    pub store: Arc<S>,
    pub config: RateLimitConfig,
    /// Scope prefix so different route groups count independently
    pub scope: &'static str,
}

// Manual impl: a derive would demand `S: Clone`, but the store is
// shared through the Arc and never cloned itself.
impl<S> Clone for RateLimiterState<S>
where
    S: RateLimitStore + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: self.config.clone(),
            scope: self.scope,
        }
    }
}

impl<S> RateLimiterState<S>
where
    S: RateLimitStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<S>, config: RateLimitConfig, scope: &'static str) -> Self {
        Self {
            store,
            config,
            scope,
        }
    }
}

fn rate_limit_headers(response: &mut Response, limit: u32, result: &RateLimitResult) {
    let headers = response.headers_mut();
    if let Ok(v) = HeaderValue::from_str(&limit.to_string()) {
        headers.insert("x-ratelimit-limit", v);
    }
    if let Ok(v) = HeaderValue::from_str(&result.remaining.to_string()) {
        headers.insert("x-ratelimit-remaining", v);
    }
    if let Ok(v) = HeaderValue::from_str(&(result.reset_at_ms / 1000).to_string()) {
        headers.insert("x-ratelimit-reset", v);
    }
}

/// Rate limiting middleware
///
/// Keys on client IP (X-Forwarded-For aware). Requests over the limit
/// get 429 with Retry-After; all responses carry X-RateLimit-* headers.
/// Store failures are logged and the request is allowed through.
pub async fn rate_limit<S>(
    State(state): State<RateLimiterState<S>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    S: RateLimitStore + Send + Sync + 'static,
{
    let direct_ip = req
        .extensions()
        .get::<axum::extract::ConnectInfo<std::net::SocketAddr>>()
        .map(|info| info.0.ip());

    let client_ip = extract_client_ip(req.headers(), direct_ip);
    let key = match client_ip {
        Some(ip) => format!("{}:{}", state.scope, ip),
        None => format!("{}:unknown", state.scope),
    };

    let result = match state.store.check_and_increment(&key, &state.config).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!(error = %e, "Rate limit store error, allowing request");
            return Ok(next.run(req).await);
        }
    };

    if !result.allowed {
        tracing::warn!(key = %key, "Rate limit exceeded");
        let mut response =
            AppError::too_many_requests("Too many requests, please try again later")
                .into_response();
        rate_limit_headers(&mut response, state.config.max_requests, &result);

        let now_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0);
        let retry_after_secs = ((result.reset_at_ms - now_ms).max(0) + 999) / 1000;
        if let Ok(v) = HeaderValue::from_str(&retry_after_secs.to_string()) {
            response.headers_mut().insert("retry-after", v);
        }
        return Err(response);
    }

    let mut response = next.run(req).await;
    rate_limit_headers(&mut response, state.config.max_requests, &result);
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_up_to_limit() {
        let store = MemoryRateLimitStore::new();
        let config = RateLimitConfig::new(5, 300);
        let now = 1_000_000_000_000;

        for i in 1..=5 {
            let result = store.check_sync("login:1.2.3.4", &config, now);
            assert!(result.allowed, "request {} should be allowed", i);
            assert_eq!(result.remaining, 5 - i);
        }

        // 6th attempt in the same window is rejected
        let result = store.check_sync("login:1.2.3.4", &config, now + 1);
        assert!(!result.allowed);
        assert_eq!(result.remaining, 0);
    }

    #[test]
    fn test_window_reset() {
        let store = MemoryRateLimitStore::new();
        let config = RateLimitConfig::new(1, 60);
        let now = 1_000_000_000_000;

        assert!(store.check_sync("k", &config, now).allowed);
        assert!(!store.check_sync("k", &config, now + 1).allowed);

        // Next fixed window starts fresh
        let next_window = store.check_sync("k", &config, now + 60_000).allowed;
        assert!(next_window);
    }

    #[test]
    fn test_keys_are_independent() {
        let store = MemoryRateLimitStore::new();
        let config = RateLimitConfig::new(1, 60);
        let now = 1_000_000_000_000;

        assert!(store.check_sync("forms:1.1.1.1", &config, now).allowed);
        assert!(store.check_sync("forms:2.2.2.2", &config, now).allowed);
        assert!(!store.check_sync("forms:1.1.1.1", &config, now).allowed);
    }

    #[test]
    fn test_reset_at_is_window_end() {
        let store = MemoryRateLimitStore::new();
        let config = RateLimitConfig::new(5, 60);
        let now = 1_000_000_030_000;

        let result = store.check_sync("k", &config, now);
        let window_start = (now / 60_000) * 60_000;
        assert_eq!(result.reset_at_ms, window_start + 60_000);
    }

    #[test]
    fn test_expired_keys_are_swept_past_threshold() {
        let store = MemoryRateLimitStore::new();
        let config = RateLimitConfig::new(5, 60);
        let now = 1_000_000_000_000;

        // Fill one window with distinct keys, as a caller rotating
        // X-Forwarded-For values would
        for i in 0..SWEEP_THRESHOLD {
            store.check_sync(&format!("general:10.0.{}.{}", i / 256, i % 256), &config, now);
        }
        assert_eq!(store.windows.lock().unwrap().len(), SWEEP_THRESHOLD);

        // The first hit of the next window sweeps every dead entry
        store.check_sync("general:fresh", &config, now + 60_000);
        assert_eq!(store.windows.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_live_keys_survive_the_sweep() {
        let store = MemoryRateLimitStore::new();
        let short = RateLimitConfig::new(5, 60);
        let long = RateLimitConfig::new(5, 300);
        let now = 1_000_000_000_000;

        store.check_sync("login:1.2.3.4", &long, now);
        for i in 0..SWEEP_THRESHOLD {
            store.check_sync(&format!("general:k{}", i), &short, now);
        }

        // 2 minutes later the short windows are dead, the login window
        // (5 minute span) is still counting
        store.check_sync("general:fresh", &short, now + 120_000);
        let windows = store.windows.lock().unwrap();
        assert!(windows.contains_key("login:1.2.3.4"));
        assert!(!windows.contains_key("general:k0"));
    }

    #[test]
    fn test_limiter_state_clones_without_cloning_store() {
        let state = RateLimiterState::new(
            Arc::new(MemoryRateLimitStore::new()),
            RateLimitConfig::login(),
            "login",
        );
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.store, &cloned.store));
        assert_eq!(cloned.scope, "login");
    }

    #[test]
    fn test_preset_configs() {
        assert_eq!(RateLimitConfig::login().max_requests, 5);
        assert_eq!(RateLimitConfig::login().window, Duration::from_secs(300));
        assert_eq!(RateLimitConfig::forms().max_requests, 3);
        assert_eq!(RateLimitConfig::forms().window, Duration::from_secs(900));
    }
}
