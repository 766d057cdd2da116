//! Password Reset Token Entity
//!
//! Only the SHA-256 digest of the token is ever persisted. The raw
//! token exists once, in the notification sent to the user.

use chrono::{DateTime, Duration, Utc};
use kernel::id::UserId;
use platform::crypto::{random_bytes, sha256, to_base64url};

/// Raw token length in bytes (before base64url encoding)
const RESET_TOKEN_LEN: usize = 32;

/// Password reset token entity (digest side)
#[derive(Debug, Clone)]
pub struct PasswordResetToken {
    /// SHA-256 of the raw token
    pub token_hash: [u8; 32],
    /// Owning user
    pub user_id: UserId,
    /// Expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    /// When the token was consumed, if ever
    pub used_at: Option<DateTime<Utc>>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl PasswordResetToken {
    /// Mint a fresh token for a user
    ///
    /// Returns the raw token (for delivery) and the entity (for storage).
    /// The raw token is never stored.
    pub fn mint(user_id: UserId, ttl: Duration) -> (String, Self) {
        let raw = random_bytes(RESET_TOKEN_LEN);
        let token = to_base64url(&raw);
        let now = Utc::now();

        let entity = Self {
            token_hash: sha256(token.as_bytes()),
            user_id,
            expires_at_ms: (now + ttl).timestamp_millis(),
            used_at: None,
            created_at: now,
        };

        (token, entity)
    }

    /// Digest a raw token the way `mint` does, for lookup
    pub fn hash_raw(raw_token: &str) -> [u8; 32] {
        sha256(raw_token.as_bytes())
    }

    /// A token is usable exactly once, before expiry
    pub fn is_usable(&self) -> bool {
        self.used_at.is_none() && Utc::now().timestamp_millis() <= self.expires_at_ms
    }

    /// Mark the token consumed
    pub fn mark_used(&mut self) {
        self.used_at = Some(Utc::now());
    }
}
