//! Donation Amount Value Object
//!
//! Amounts are integers in the smallest currency unit (yen, cents).
//! Floats never enter the domain.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Donation amount in minor units, strictly positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Amount(i64);

impl Amount {
    /// Create a validated amount
    pub fn new(minor_units: i64) -> AppResult<Self> {
        if minor_units <= 0 {
            return Err(
                AppError::bad_request("Amount must be a positive integer").with_field("amount"),
            );
        }
        Ok(Self(minor_units))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(minor_units: i64) -> Self {
        Self(minor_units)
    }

    pub fn minor_units(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_amount_ok() {
        assert_eq!(Amount::new(1).unwrap().minor_units(), 1);
        assert_eq!(Amount::new(500_000).unwrap().minor_units(), 500_000);
    }

    #[test]
    fn test_zero_and_negative_rejected() {
        assert!(Amount::new(0).is_err());
        assert!(Amount::new(-1).is_err());
        assert!(Amount::new(i64::MIN).is_err());
    }

    #[test]
    fn test_error_carries_field() {
        let err = Amount::new(0).unwrap_err();
        assert_eq!(err.field(), Some("amount"));
        assert_eq!(err.status_code(), 400);
    }
}
