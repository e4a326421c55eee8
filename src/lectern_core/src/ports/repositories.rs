use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    email::Email,
    user::{User, UserId},
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UserAlreadyExists, Self::UserAlreadyExists) => true,
            (Self::UserNotFound, Self::UserNotFound) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Abstraction over the user record collection of the backing document
/// store. Per-document atomicity is the store's concern; no optimistic
/// concurrency control here.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Re-checks email uniqueness on every call. Registration finalize
    /// relies on this as its replay safety net.
    async fn add_user(&self, user: User) -> Result<(), UserStoreError>;
    async fn get_by_email(&self, email: &Email) -> Result<User, UserStoreError>;
    async fn get_by_id(&self, id: &UserId) -> Result<User, UserStoreError>;
    /// Save semantics: last write wins for the whole record.
    async fn update_user(&self, user: User) -> Result<(), UserStoreError>;
    async fn delete_user(&self, id: &UserId) -> Result<(), UserStoreError>;
    async fn count_users(&self) -> Result<u64, UserStoreError>;
    async fn all_users_except(&self, id: &UserId) -> Result<Vec<User>, UserStoreError>;
}
