pub mod list;
pub mod review;
pub mod submit_contact;
pub mod submit_inquiry;

pub use list::{ListContactsUseCase, ListInquiriesUseCase};
pub use review::{ReviewContactUseCase, ReviewInquiryUseCase};
pub use submit_contact::{SubmitContactInput, SubmitContactUseCase};
pub use submit_inquiry::{SubmitInquiryInput, SubmitInquiryUseCase};

use kernel::error::app_error::AppError;

use crate::error::{IntakeError, IntakeResult};

/// Longest accepted name/company value
const SHORT_FIELD_MAX: usize = 160;

/// Longest accepted free-text message
const MESSAGE_MAX: usize = 5_000;

/// Trim and validate a required short text field
fn required_field(value: String, field: &'static str) -> IntakeResult<String> {
    let value = value.trim().to_string();

    if value.is_empty() {
        return Err(IntakeError::Validation(
            AppError::bad_request(format!("{field} is required")).with_field(field),
        ));
    }

    if value.chars().count() > SHORT_FIELD_MAX {
        return Err(IntakeError::Validation(
            AppError::bad_request(format!(
                "{field} must be at most {SHORT_FIELD_MAX} characters"
            ))
            .with_field(field),
        ));
    }

    Ok(value)
}

/// Trim and validate the message body
fn required_message(value: String) -> IntakeResult<String> {
    let value = value.trim().to_string();

    if value.is_empty() {
        return Err(IntakeError::Validation(
            AppError::bad_request("message is required").with_field("message"),
        ));
    }

    if value.chars().count() > MESSAGE_MAX {
        return Err(IntakeError::Validation(
            AppError::bad_request(format!("message must be at most {MESSAGE_MAX} characters"))
                .with_field("message"),
        ));
    }

    Ok(value)
}

/// Trim an optional field, dropping it entirely when blank
fn optional_field(value: Option<String>, field: &'static str) -> IntakeResult<Option<String>> {
    match value {
        Some(v) => {
            let v = v.trim().to_string();
            if v.is_empty() {
                return Ok(None);
            }
            if v.chars().count() > SHORT_FIELD_MAX {
                return Err(IntakeError::Validation(
                    AppError::bad_request(format!(
                        "{field} must be at most {SHORT_FIELD_MAX} characters"
                    ))
                    .with_field(field),
                ));
            }
            Ok(Some(v))
        }
        None => Ok(None),
    }
}
