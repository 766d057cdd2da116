pub mod amount;
pub mod currency;
pub mod donation_status;
pub mod donation_type;
