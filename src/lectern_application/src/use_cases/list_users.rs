use lectern_core::{User, UserId, UserStore, UserStoreError};

/// Admin listing: every account except the caller's own. The HTTP layer
/// serializes credential-free views of the returned records.
pub struct ListUsersUseCase<'a, U>
where
    U: UserStore,
{
    user_store: &'a U,
}

impl<'a, U> ListUsersUseCase<'a, U>
where
    U: UserStore,
{
    pub fn new(user_store: &'a U) -> Self {
        Self { user_store }
    }

    #[tracing::instrument(name = "ListUsersUseCase::execute", skip(self))]
    pub async fn execute(&self, caller: &UserId) -> Result<Vec<User>, UserStoreError> {
        self.user_store.all_users_except(caller).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{InMemoryUsers, persisted_user};

    #[tokio::test]
    async fn excludes_the_caller() {
        let store = InMemoryUsers::new();
        let caller = persisted_user(&store, "admin@example.com", "pw-a").await;
        let other = persisted_user(&store, "user@example.com", "pw-b").await;

        let users = ListUsersUseCase::new(&store)
            .execute(&caller.id())
            .await
            .unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id(), other.id());
    }
}
