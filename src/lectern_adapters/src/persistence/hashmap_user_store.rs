use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use lectern_core::{Email, User, UserId, UserStore, UserStoreError};

/// In-memory user store keyed by id, with email uniqueness enforced by
/// scan. Suitable for tests and single-process deployments.
#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn add_user(&self, user: User) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email() == user.email()) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        users.insert(user.id(), user);
        Ok(())
    }

    async fn get_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        let users = self.users.read().await;
        users
            .values()
            .find(|u| u.email() == email)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn get_by_id(&self, id: &UserId) -> Result<User, UserStoreError> {
        let users = self.users.read().await;
        users.get(id).cloned().ok_or(UserStoreError::UserNotFound)
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
        let mut users = self.users.write().await;
        users.remove(id).ok_or(UserStoreError::UserNotFound)?;
        Ok(())
    }

    async fn count_users(&self) -> Result<u64, UserStoreError> {
        let users = self.users.read().await;
        Ok(users.len() as u64)
    }

    async fn all_users_except(&self, id: &UserId) -> Result<Vec<User>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .filter(|u| u.id() != *id)
            .cloned()
            .collect())
    }
}
