use serde::{Deserialize, Serialize};
use std::fmt;

/// Settlement state of a donation
///
/// The recorder only ever writes `Succeeded`; a payment gateway's
/// pending/failed transitions would extend this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i16)]
pub enum DonationStatus {
    #[default]
    Succeeded = 0,
}

impl DonationStatus {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn wire_code(&self) -> &'static str {
        match self {
            DonationStatus::Succeeded => "SUCCEEDED",
        }
    }

    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(DonationStatus::Succeeded),
            _ => None,
        }
    }
}

impl fmt::Display for DonationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip() {
        assert_eq!(DonationStatus::from_id(0), Some(DonationStatus::Succeeded));
        assert_eq!(DonationStatus::from_id(5), None);
        assert_eq!(DonationStatus::Succeeded.wire_code(), "SUCCEEDED");
    }
}
