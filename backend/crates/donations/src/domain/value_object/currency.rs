//! Currency Code Value Object

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// ISO 4217 style currency code (three ASCII letters, stored uppercase)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency(String);

impl Currency {
    /// Create a validated currency code
    pub fn new(code: impl Into<String>) -> AppResult<Self> {
        let code = code.into().trim().to_uppercase();

        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(
                AppError::bad_request("Currency must be a three-letter code")
                    .with_field("currency"),
            );
        }

        Ok(Self(code))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_normalized_to_uppercase() {
        assert_eq!(Currency::new("jpy").unwrap().as_str(), "JPY");
        assert_eq!(Currency::new(" usd ").unwrap().as_str(), "USD");
    }

    #[test]
    fn test_invalid_currency_rejected() {
        assert!(Currency::new("").is_err());
        assert!(Currency::new("JP").is_err());
        assert!(Currency::new("JPYY").is_err());
        assert!(Currency::new("J1Y").is_err());
    }
}
