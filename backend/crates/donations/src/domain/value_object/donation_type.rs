use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of donation
///
/// Closed set; the wire format speaks SCREAMING_SNAKE codes, the
/// database stores the discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i16)]
pub enum DonationType {
    OneTime = 0,
    Monthly = 1,
    Sponsorship = 2,
}

impl DonationType {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn wire_code(&self) -> &'static str {
        match self {
            DonationType::OneTime => "ONE_TIME",
            DonationType::Monthly => "MONTHLY",
            DonationType::Sponsorship => "SPONSORSHIP",
        }
    }

    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(DonationType::OneTime),
            1 => Some(DonationType::Monthly),
            2 => Some(DonationType::Sponsorship),
            _ => None,
        }
    }

    /// Parse the wire code; anything else is a field-level 400
    pub fn from_wire(code: &str) -> AppResult<Self> {
        match code {
            "ONE_TIME" => Ok(DonationType::OneTime),
            "MONTHLY" => Ok(DonationType::Monthly),
            "SPONSORSHIP" => Ok(DonationType::Sponsorship),
            _ => Err(AppError::bad_request(
                "Type must be one of ONE_TIME, MONTHLY, SPONSORSHIP",
            )
            .with_field("type")),
        }
    }
}

impl fmt::Display for DonationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_roundtrip() {
        for ty in [
            DonationType::OneTime,
            DonationType::Monthly,
            DonationType::Sponsorship,
        ] {
            assert_eq!(DonationType::from_wire(ty.wire_code()).unwrap(), ty);
            assert_eq!(DonationType::from_id(ty.id()), Some(ty));
        }
    }

    #[test]
    fn test_unknown_wire_code_rejected() {
        let err = DonationType::from_wire("WEEKLY").unwrap_err();
        assert_eq!(err.field(), Some("type"));
        assert!(DonationType::from_wire("one_time").is_err());
        assert!(DonationType::from_wire("").is_err());
    }
}
