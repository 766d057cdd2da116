//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, HMAC, Base64)
//! - Password hashing (Argon2id)
//! - Cookie management
//! - CSRF double-submit token protection
//! - Rate limiting infrastructure
//! - Client IP extraction
//! - Best-effort notification dispatch

pub mod client;
pub mod cookie;
pub mod crypto;
pub mod csrf;
pub mod notify;
pub mod password;
pub mod rate_limit;
