use std::fmt;

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

const OTP_MODULUS: u32 = 1_000_000;

/// Six-digit one-time code proving receipt of the activation email.
///
/// Uniform over `0..=999_999`; possession of the activation token is also
/// required, so the code itself does not need to be unguessable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Otp(u32);

#[derive(Debug, Error, PartialEq)]
pub enum OtpError {
    #[error("Code must be a six digit number")]
    OutOfRange,
}

impl Otp {
    pub fn generate() -> Self {
        Self(rand::rng().random_range(0..OTP_MODULUS))
    }

    pub fn parse(code: u32) -> Result<Self, OtpError> {
        if code < OTP_MODULUS {
            Ok(Self(code))
        } else {
            Err(OtpError::OutOfRange)
        }
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

// Zero-padded so the emailed code is always six characters.
impl fmt::Display for Otp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06}", self.0)
    }
}

impl Serialize for Otp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.0)
    }
}

impl<'de> Deserialize<'de> for Otp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Otp::parse(u32::deserialize(deserializer)?).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    #[test]
    fn generated_codes_are_in_range() {
        for _ in 0..1_000 {
            assert!(Otp::generate().value() < OTP_MODULUS);
        }
    }

    #[quickcheck]
    fn parse_accepts_exactly_six_digit_space(code: u32) -> bool {
        match Otp::parse(code) {
            Ok(otp) => code < OTP_MODULUS && otp.value() == code,
            Err(OtpError::OutOfRange) => code >= OTP_MODULUS,
        }
    }

    #[test]
    fn displays_zero_padded() {
        assert_eq!(Otp::parse(7).unwrap().to_string(), "000007");
        assert_eq!(Otp::parse(999_999).unwrap().to_string(), "999999");
    }

    #[test]
    fn serde_rejects_out_of_range_codes() {
        assert!(serde_json::from_str::<Otp>("123456").is_ok());
        assert!(serde_json::from_str::<Otp>("1000000").is_err());
    }
}
