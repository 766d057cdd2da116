//! CSRF Double-Submit Token Protection
//!
//! Masked double-submit scheme:
//! - A per-client 32-byte secret lives in an HttpOnly cookie.
//! - Safe requests (GET/HEAD/OPTIONS) mint a masked token into a
//!   client-readable cookie. The mask is fresh random bytes, so the
//!   token value changes on every response (BREACH mitigation).
//! - Unsafe requests must echo the token back in a header. The server
//!   unmasks it and compares the recovered secret in constant time.
//!
//! The secret is independent of the login session, so anonymous flows
//! (login form, contact forms) are protected too.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{Method, Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;

use crate::cookie::{CookieConfig, extract_cookie, set_cookie_header};
use crate::crypto::{constant_time_eq, from_base64url, random_bytes, to_base64url, xor_bytes};

/// Byte length of the CSRF secret and of the mask
pub const CSRF_SECRET_LEN: usize = 32;

/// Default name of the HttpOnly cookie holding the secret
pub const CSRF_SECRET_COOKIE: &str = "csrf";

/// Default name of the client-readable cookie carrying the masked token
pub const CSRF_TOKEN_COOKIE: &str = "XSRF-TOKEN";

/// Default request header the client echoes the token in
pub const CSRF_HEADER: &str = "x-xsrf-token";

/// CSRF middleware configuration
#[derive(Debug, Clone)]
pub struct CsrfConfig {
    /// HttpOnly cookie holding the raw secret (base64url)
    pub secret_cookie: CookieConfig,
    /// Readable cookie carrying the masked token
    pub token_cookie: CookieConfig,
    /// Header name checked on unsafe requests (lowercase)
    pub header_name: String,
}

impl Default for CsrfConfig {
    fn default() -> Self {
        Self {
            secret_cookie: CookieConfig {
                name: CSRF_SECRET_COOKIE.to_string(),
                ..Default::default()
            },
            token_cookie: CookieConfig::readable(CSRF_TOKEN_COOKIE),
            header_name: CSRF_HEADER.to_string(),
        }
    }
}

impl CsrfConfig {
    /// Config for local development (cookies without the Secure flag)
    pub fn development() -> Self {
        let mut config = Self::default();
        config.secret_cookie.secure = false;
        config.token_cookie.secure = false;
        config
    }
}

/// Mint a masked token for the given secret
///
/// Token layout: base64url(mask || mask XOR secret), 64 bytes before
/// encoding. A fresh mask makes every minted token distinct.
pub fn mint_masked_token(secret: &[u8]) -> String {
    let mask = random_bytes(CSRF_SECRET_LEN);
    let masked = xor_bytes(&mask, secret);

    let mut token = Vec::with_capacity(CSRF_SECRET_LEN * 2);
    token.extend_from_slice(&mask);
    token.extend_from_slice(&masked);
    to_base64url(&token)
}

/// Recover the secret from a masked token
///
/// Returns None if the token is not valid base64url or has the wrong length.
pub fn unmask_token(token: &str) -> Option<Vec<u8>> {
    let bytes = from_base64url(token).ok()?;
    if bytes.len() != CSRF_SECRET_LEN * 2 {
        return None;
    }
    let (mask, masked) = bytes.split_at(CSRF_SECRET_LEN);
    Some(xor_bytes(mask, masked))
}

/// Verify a masked token against the stored secret
pub fn verify_token(token: &str, secret: &[u8]) -> bool {
    match unmask_token(token) {
        Some(recovered) => constant_time_eq(&recovered, secret),
        None => false,
    }
}

fn is_safe_method(method: &Method) -> bool {
    matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS)
}

fn decode_secret(value: &str) -> Option<Vec<u8>> {
    let bytes = from_base64url(value).ok()?;
    (bytes.len() == CSRF_SECRET_LEN).then_some(bytes)
}

fn rejection() -> Response {
    AppError::forbidden("Invalid CSRF token")
        .with_code("CSRF_TOKEN_INVALID")
        .into_response()
}

/// CSRF protection middleware
///
/// Applied app-wide. Safe methods establish/refresh the token cookies;
/// unsafe methods are rejected with 403 unless the header echoes a
/// token minted from the current secret.
pub async fn csrf_protect(
    State(config): State<Arc<CsrfConfig>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let headers = req.headers();
    let existing_secret =
        extract_cookie(headers, &config.secret_cookie.name).and_then(|v| decode_secret(&v));

    if is_safe_method(req.method()) {
        // Establish the secret on first contact, then mint a fresh
        // masked token on every safe response.
        let (secret, is_new) = match existing_secret {
            Some(s) => (s, false),
            None => (random_bytes(CSRF_SECRET_LEN), true),
        };

        let token = mint_masked_token(&secret);
        let mut response = next.run(req).await;

        if is_new {
            response.headers_mut().append(
                header::SET_COOKIE,
                set_cookie_header(&config.secret_cookie, &to_base64url(&secret)),
            );
        }
        response.headers_mut().append(
            header::SET_COOKIE,
            set_cookie_header(&config.token_cookie, &token),
        );

        return Ok(response);
    }

    // Unsafe method: both the secret cookie and the echoed header are required
    let Some(secret) = existing_secret else {
        tracing::debug!("CSRF rejection: missing or malformed secret cookie");
        return Err(rejection());
    };

    let Some(token) = headers
        .get(config.header_name.as_str())
        .and_then(|v| v.to_str().ok())
    else {
        tracing::debug!("CSRF rejection: missing token header");
        return Err(rejection());
    };

    if !verify_token(token, &secret) {
        tracing::debug!("CSRF rejection: token does not match secret");
        return Err(rejection());
    }

    Ok(next.run(req).await)
}
