//! Contact Message Entity

use auth::models::email::Email;
use chrono::{DateTime, Utc};
use kernel::id::ContactMessageId;

/// A message from the public contact form
#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub message_id: ContactMessageId,
    pub name: String,
    pub email: Email,
    pub phone: Option<String>,
    pub message: String,
    /// Set by an admin once the message is dealt with
    pub handled: bool,
    pub admin_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContactMessage {
    pub fn new(name: String, email: Email, phone: Option<String>, message: String) -> Self {
        let now = Utc::now();

        Self {
            message_id: ContactMessageId::new(),
            name,
            email,
            phone,
            message,
            handled: false,
            admin_notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply an admin review
    pub fn review(&mut self, handled: bool, admin_notes: Option<String>) {
        self.handled = handled;
        if admin_notes.is_some() {
            self.admin_notes = admin_notes;
        }
        self.updated_at = Utc::now();
    }
}
