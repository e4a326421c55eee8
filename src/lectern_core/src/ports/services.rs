use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::domain::{
    email::Email,
    identity::VerifiedIdentity,
    password::{Password, PasswordDigest},
    tokens::{TokenError, TokenKind},
};

/// Port trait for email sending service
#[async_trait]
pub trait EmailClient: Send + Sync {
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        content: &str,
    ) -> Result<(), String>;
}

#[derive(Debug, Error)]
pub enum PasswordHasherError {
    #[error("Password does not match")]
    Mismatch,
    #[error("Unexpected hashing error: {0}")]
    Unexpected(String),
}

impl PartialEq for PasswordHasherError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Mismatch, Self::Mismatch) => true,
            (Self::Unexpected(_), Self::Unexpected(_)) => true,
            _ => false,
        }
    }
}

/// Irreversible password hashing. Verification goes through the hash
/// primitive, never through re-hash-and-compare on raw input.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: Password) -> Result<PasswordDigest, PasswordHasherError>;
    async fn verify(
        &self,
        digest: &PasswordDigest,
        candidate: &Password,
    ) -> Result<(), PasswordHasherError>;
}

/// Signs and verifies the expiring envelopes behind every flow.
///
/// Pure computation; implementations hold one distinct secret per
/// [`TokenKind`]. Verification must return the payload bit-for-bit as it
/// was signed, reject any tamper as [`TokenError::Invalid`], and report
/// an elapsed TTL as [`TokenError::Expired`].
pub trait TokenCodec: Send + Sync {
    fn sign<P: Serialize>(
        &self,
        payload: &P,
        kind: TokenKind,
        ttl_seconds: i64,
    ) -> Result<String, TokenError>;

    fn verify<P: DeserializeOwned>(&self, token: &str, kind: TokenKind)
    -> Result<P, TokenError>;
}

#[derive(Debug, Error)]
pub enum IdentityProviderError {
    #[error("Authorization code exchange failed: {0}")]
    Exchange(String),
    #[error("Identity document rejected: {0}")]
    InvalidIdentity(String),
}

/// Delegated-authorization handshake with the external identity
/// provider (redirect-based code exchange, profile and email scopes).
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// URL the user is redirected to for the authorization challenge.
    fn authorization_url(&self, state: &str) -> Result<String, IdentityProviderError>;

    /// Redeem the callback code for a verified identity assertion.
    async fn exchange_code(&self, code: &str) -> Result<VerifiedIdentity, IdentityProviderError>;
}
