//! User Entity

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;

use crate::domain::value_object::{email::Email, user_role::UserRole};

/// User entity
///
/// The password hash lives here rather than in a separate credentials
/// table; a user without credentials cannot exist.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Email address (unique, used for login)
    pub email: Email,
    /// Argon2id PHC hash
    pub password_hash: HashedPassword,
    /// Optional display name for receipts and greetings
    pub display_name: Option<String>,
    /// Role (Donor, Admin)
    pub user_role: UserRole,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with the default Donor role
    pub fn new(email: Email, password_hash: HashedPassword, display_name: Option<String>) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            email,
            password_hash,
            display_name,
            user_role: UserRole::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the password hash (after a confirmed reset)
    pub fn set_password_hash(&mut self, hash: HashedPassword) {
        self.password_hash = hash;
        self.updated_at = Utc::now();
    }

    /// Update the role
    pub fn set_role(&mut self, role: UserRole) {
        self.user_role = role;
        self.updated_at = Utc::now();
    }
}
