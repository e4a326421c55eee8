//! Shared mock ports for use case tests.

use std::collections::HashMap;
use std::sync::Arc;

use lectern_core::{
    Email, EmailClient, Password, PasswordDigest, PasswordHasher, PasswordHasherError, TokenCodec,
    TokenError, TokenKind, User, UserId, UserStore, UserStoreError,
};
use secrecy::{ExposeSecret, Secret};
use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::RwLock;

#[derive(Default, Clone)]
pub struct InMemoryUsers {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUsers {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUsers {
    async fn add_user(&self, user: User) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email() == user.email()) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        users.insert(user.id(), user);
        Ok(())
    }

    async fn get_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        self.users
            .read()
            .await
            .values()
            .find(|u| u.email() == email)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn get_by_id(&self, id: &UserId) -> Result<User, UserStoreError> {
        self.users
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn update_user(&self, user: User) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        if !users.contains_key(&user.id()) {
            return Err(UserStoreError::UserNotFound);
        }
        users.insert(user.id(), user);
        Ok(())
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), UserStoreError> {
        self.users
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn count_users(&self) -> Result<u64, UserStoreError> {
        Ok(self.users.read().await.len() as u64)
    }

    async fn all_users_except(&self, id: &UserId) -> Result<Vec<User>, UserStoreError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .filter(|u| u.id() != *id)
            .cloned()
            .collect())
    }
}

/// Records every dispatched message; optionally fails each send.
#[derive(Default, Clone)]
pub struct RecordingEmailClient {
    pub fail: bool,
    sent: Arc<RwLock<Vec<(String, String, String)>>>,
}

impl RecordingEmailClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub async fn sent(&self) -> Vec<(String, String, String)> {
        self.sent.read().await.clone()
    }
}

#[async_trait::async_trait]
impl EmailClient for RecordingEmailClient {
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        content: &str,
    ) -> Result<(), String> {
        if self.fail {
            return Err("smtp unreachable".to_string());
        }
        self.sent.write().await.push((
            recipient.as_ref().expose_secret().clone(),
            subject.to_string(),
            content.to_string(),
        ));
        Ok(())
    }
}

/// Deterministic stand-in for the Argon2 adapter.
#[derive(Default, Clone)]
pub struct PlainTextHasher;

#[async_trait::async_trait]
impl PasswordHasher for PlainTextHasher {
    async fn hash(&self, password: Password) -> Result<PasswordDigest, PasswordHasherError> {
        Ok(PasswordDigest::new(Secret::from(format!(
            "hashed:{}",
            password.as_ref().expose_secret()
        ))))
    }

    async fn verify(
        &self,
        digest: &PasswordDigest,
        candidate: &Password,
    ) -> Result<(), PasswordHasherError> {
        let expected = format!("hashed:{}", candidate.as_ref().expose_secret());
        if digest.as_ref().expose_secret() == &expected {
            Ok(())
        } else {
            Err(PasswordHasherError::Mismatch)
        }
    }
}

/// Tokens are `<kind>|<json payload>`; kind mismatch reads as tamper.
#[derive(Default, Clone)]
pub struct JsonTokenCodec {
    pub expired: bool,
}

impl JsonTokenCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Codec whose every verification reports an elapsed TTL.
    pub fn expired() -> Self {
        Self { expired: true }
    }

    fn tag(kind: TokenKind) -> &'static str {
        match kind {
            TokenKind::Activation => "activation",
            TokenKind::Session => "session",
            TokenKind::Reset => "reset",
        }
    }
}

impl TokenCodec for JsonTokenCodec {
    fn sign<P: Serialize>(
        &self,
        payload: &P,
        kind: TokenKind,
        _ttl_seconds: i64,
    ) -> Result<String, TokenError> {
        let json = serde_json::to_string(payload)
            .map_err(|e| TokenError::Unexpected(e.to_string()))?;
        Ok(format!("{}|{}", Self::tag(kind), json))
    }

    fn verify<P: DeserializeOwned>(&self, token: &str, kind: TokenKind) -> Result<P, TokenError> {
        if self.expired {
            return Err(TokenError::Expired);
        }
        let (tag, json) = token.split_once('|').ok_or(TokenError::Invalid)?;
        if tag != Self::tag(kind) {
            return Err(TokenError::Invalid);
        }
        serde_json::from_str(json).map_err(|_| TokenError::Invalid)
    }
}

pub fn email(address: &str) -> Email {
    Email::try_from(Secret::from(address.to_string())).unwrap()
}

pub fn password(raw: &str) -> Password {
    Password::try_from(Secret::from(raw.to_string())).unwrap()
}

pub async fn persisted_user(store: &InMemoryUsers, address: &str, raw_password: &str) -> User {
    let digest = PlainTextHasher
        .hash(password(raw_password))
        .await
        .unwrap();
    let user = User::new("Test".to_string(), email(address), digest);
    store.add_user(user.clone()).await.unwrap();
    user
}
