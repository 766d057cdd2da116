//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub display_name: Option<String>,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// ============================================================================
// User projection
// ============================================================================

/// Public projection of an account (no hash, no timestamps)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub display_name: Option<String>,
    /// Lowercase role code ("donor", "admin")
    pub role: String,
}

// ============================================================================
// Session Status
// ============================================================================

/// Session status response
///
/// Flat shape: the identity fields are simply absent when anonymous.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl SessionStatusResponse {
    /// Response for an unauthenticated caller
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            id: None,
            email: None,
            role: None,
        }
    }
}

// ============================================================================
// Password Reset
// ============================================================================

/// Reset request (phase one)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordResetRequest {
    pub email: String,
}

/// Reset confirmation (phase two)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordResetConfirmRequest {
    pub token: String,
    pub password: String,
}

/// Acknowledgement body that deliberately reveals nothing
#[derive(Debug, Clone, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn new() -> Self {
        Self { ok: true }
    }
}

impl Default for OkResponse {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_camel_case() {
        let json = r#"{"email":"a@b.co","password":"longenough","displayName":"Aki"}"#;
        let req: RegisterRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.display_name.as_deref(), Some("Aki"));
    }

    #[test]
    fn test_session_status_omits_identity_when_anonymous() {
        let body = serde_json::to_string(&SessionStatusResponse::anonymous()).unwrap();
        assert_eq!(body, r#"{"authenticated":false}"#);
    }

    #[test]
    fn test_user_response_shape() {
        let body = serde_json::to_value(UserResponse {
            id: "x".into(),
            email: "a@b.co".into(),
            display_name: None,
            role: "donor".into(),
        })
        .unwrap();
        assert_eq!(body["role"], "donor");
        assert!(body.get("displayName").is_some());
    }
}
