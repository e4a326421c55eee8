use lectern_core::{Role, UserId, UserStore, UserStoreError};

/// Error types specific to the role-update use case
#[derive(Debug, thiserror::Error)]
pub enum UpdateRoleError {
    #[error("User store error: {0}")]
    UserStore(#[from] UserStoreError),
}

/// Administrative role flip, guarded by the superadmin check at the
/// HTTP gate. Strictly two-state: roles outside the closed enumeration
/// never reach this point because the parse boundary rejects them.
pub struct UpdateRoleUseCase<'a, U>
where
    U: UserStore,
{
    user_store: &'a U,
}

impl<'a, U> UpdateRoleUseCase<'a, U>
where
    U: UserStore,
{
    pub fn new(user_store: &'a U) -> Self {
        Self { user_store }
    }

    #[tracing::instrument(name = "UpdateRoleUseCase::execute", skip(self))]
    pub async fn execute(&self, target: &UserId) -> Result<Role, UpdateRoleError> {
        let mut user = self.user_store.get_by_id(target).await?;
        let new_role = user.role().toggled();
        user.set_role(new_role);
        self.user_store.update_user(user).await?;
        Ok(new_role)
    }
}
