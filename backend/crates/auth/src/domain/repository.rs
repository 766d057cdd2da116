//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{reset_token::PasswordResetToken, session::Session, user::User};
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;
use kernel::id::UserId;
use platform::password::HashedPassword;
use uuid::Uuid;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user; duplicate email surfaces as `AuthError::EmailTaken`
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;
}

/// Session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Create a new session
    async fn create(&self, session: &Session) -> AuthResult<()>;

    /// Find session by ID
    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<Session>>;

    /// Delete a session
    async fn delete(&self, session_id: Uuid) -> AuthResult<()>;

    /// Delete all sessions for a user
    async fn delete_all_for_user(&self, user_id: &UserId) -> AuthResult<u64>;

    /// Clean up expired sessions
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}

/// Password reset repository trait
#[trait_variant::make(PasswordResetRepository: Send)]
pub trait LocalPasswordResetRepository {
    /// Store a freshly minted token digest
    async fn create(&self, token: &PasswordResetToken) -> AuthResult<()>;

    /// Consume a token and reset the password atomically
    ///
    /// In ONE transaction: verify the token is unused and unexpired,
    /// update the user's password hash, mark the token used, and revoke
    /// every session of that user. Any miss is `ResetTokenInvalid`.
    async fn consume_and_reset(
        &self,
        token_hash: &[u8; 32],
        new_hash: &HashedPassword,
    ) -> AuthResult<UserId>;

    /// Clean up expired tokens
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
