//! Application Configuration

use crate::domain::value_object::currency::Currency;

/// Donation application configuration
#[derive(Debug, Clone)]
pub struct DonationConfig {
    /// Currency used when the request does not specify one
    pub default_currency: Currency,
}

impl Default for DonationConfig {
    fn default() -> Self {
        Self {
            default_currency: Currency::from_db("JPY"),
        }
    }
}

impl DonationConfig {
    pub fn new(default_currency: Currency) -> Self {
        Self { default_currency }
    }
}
