pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    email::{Email, EmailError},
    identity::VerifiedIdentity,
    otp::{Otp, OtpError},
    password::{Password, PasswordDigest, PasswordError},
    role::{Role, RoleError},
    tokens::{ActivationClaims, PendingUser, ResetClaims, SessionClaims, TokenError, TokenKind},
    user::{CourseId, User, UserId},
};

pub use ports::{
    repositories::{UserStore, UserStoreError},
    services::{
        EmailClient, IdentityProvider, IdentityProviderError, PasswordHasher, PasswordHasherError,
        TokenCodec,
    },
};
