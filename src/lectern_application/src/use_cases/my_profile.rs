use lectern_core::{User, UserId, UserStore, UserStoreError};

/// Re-fetches the authenticated user's record; the gate's copy may be
/// stale by the time the handler runs.
pub struct MyProfileUseCase<'a, U>
where
    U: UserStore,
{
    user_store: &'a U,
}

impl<'a, U> MyProfileUseCase<'a, U>
where
    U: UserStore,
{
    pub fn new(user_store: &'a U) -> Self {
        Self { user_store }
    }

    #[tracing::instrument(name = "MyProfileUseCase::execute", skip(self))]
    pub async fn execute(&self, id: &UserId) -> Result<User, UserStoreError> {
        self.user_store.get_by_id(id).await
    }
}
