use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Validated email address. Acts as the natural key of a user record;
/// equality is case-sensitive.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

#[derive(Debug, Error, PartialEq)]
pub enum EmailError {
    #[error("Invalid email address")]
    Invalid,
}

impl TryFrom<Secret<String>> for Email {
    type Error = EmailError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if EMAIL_RE.is_match(value.expose_secret()) {
            Ok(Self(value))
        } else {
            Err(EmailError::Invalid)
        }
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}

// Token claims and response bodies carry the address in the clear.
impl Serialize for Email {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0.expose_secret())
    }
}

impl<'de> Deserialize<'de> for Email {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Email::try_from(Secret::from(raw)).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plausible_addresses() {
        for address in ["ann@example.com", "a.b+c@sub.domain.io"] {
            assert!(Email::try_from(Secret::from(address.to_string())).is_ok());
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for address in ["", "no-at-sign", "two@@example.com ", "spaces in@addr.com"] {
            assert_eq!(
                Email::try_from(Secret::from(address.to_string())),
                Err(EmailError::Invalid),
                "{address:?} should be rejected"
            );
        }
    }

    #[test]
    fn equality_is_case_sensitive() {
        let lower = Email::try_from(Secret::from("ann@example.com".to_string())).unwrap();
        let upper = Email::try_from(Secret::from("Ann@example.com".to_string())).unwrap();
        assert_ne!(lower, upper);
    }

    #[test]
    fn round_trips_through_serde() {
        let email = Email::try_from(Secret::from("ann@example.com".to_string())).unwrap();
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"ann@example.com\"");
        let back: Email = serde_json::from_str(&json).unwrap();
        assert_eq!(back, email);
    }
}
