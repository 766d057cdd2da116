pub mod contact_message;
pub mod partnership_inquiry;
