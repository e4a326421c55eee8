use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stored user roles. Superadmin is deliberately not a variant: it is a
/// configuration-designated principal checked only at the authorization
/// boundary, never persisted on the record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

#[derive(Debug, Error, PartialEq)]
pub enum RoleError {
    #[error("Invalid role")]
    Invalid,
}

impl Role {
    /// Strict two-state flip used by the role-update operation.
    pub fn toggled(self) -> Role {
        match self {
            Role::User => Role::Admin,
            Role::Admin => Role::User,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = RoleError;

    /// Parse boundary for roles arriving from storage. Anything outside
    /// the closed enumeration is a data error, not a coercion target.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            _ => Err(RoleError::Invalid),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
