use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{email::Email, otp::Otp, password::PasswordDigest, user::UserId};

/// Which of the three signing secrets a token is bound to. A token minted
/// for one purpose never verifies under another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Activation,
    Session,
    Reset,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token has expired")]
    Expired,
    #[error("Invalid token")]
    Invalid,
    #[error("Unexpected token error: {0}")]
    Unexpected(String),
}

impl PartialEq for TokenError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Expired, Self::Expired) => true,
            (Self::Invalid, Self::Invalid) => true,
            (Self::Unexpected(_), Self::Unexpected(_)) => true,
            _ => false,
        }
    }
}

/// Account fields held in escrow by the activation token until the code
/// is confirmed. Nothing is persisted before finalization; the client is
/// the custodian of this envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingUser {
    pub name: String,
    pub email: Email,
    pub password_digest: PasswordDigest,
}

/// Payload of the activation token (5 minute window).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivationClaims {
    pub user: PendingUser,
    pub otp: Otp,
}

/// Payload of the session token (15 day window). Possession is proof of
/// identity for the duration; there is no server-side revocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub user_id: UserId,
}

/// Payload of the password-reset token (10 minute window). The
/// server-side watermark on the user record is the binding expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetClaims {
    pub email: Email,
}
