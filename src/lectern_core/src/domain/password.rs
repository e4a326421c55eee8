use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Raw password credential in transit. Never stored, never serialized.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

#[derive(Debug, Error, PartialEq)]
pub enum PasswordError {
    #[error("Password is required")]
    Empty,
}

impl TryFrom<Secret<String>> for Password {
    type Error = PasswordError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().is_empty() {
            Err(PasswordError::Empty)
        } else {
            Ok(Self(value))
        }
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

/// One-way salted digest of a password (PHC string format).
///
/// Serialization exists solely so the activation token can hold the
/// pending credential in escrow; response bodies must never include it.
#[derive(Debug, Clone)]
pub struct PasswordDigest(Secret<String>);

impl PasswordDigest {
    pub fn new(phc_string: Secret<String>) -> Self {
        Self(phc_string)
    }
}

impl AsRef<Secret<String>> for PasswordDigest {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl Serialize for PasswordDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0.expose_secret())
    }
}

impl<'de> Deserialize<'de> for PasswordDigest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self(Secret::from(String::deserialize(deserializer)?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_password() {
        assert!(matches!(
            Password::try_from(Secret::from(String::new())),
            Err(PasswordError::Empty)
        ));
    }

    #[test]
    fn accepts_any_non_empty_password() {
        assert!(Password::try_from(Secret::from("pw".to_string())).is_ok());
    }

    #[test]
    fn debug_output_redacts_the_secret() {
        let password = Password::try_from(Secret::from("hunter2".to_string())).unwrap();
        assert!(!format!("{password:?}").contains("hunter2"));
    }
}
