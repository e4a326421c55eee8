use lectern_core::{
    SessionClaims, TokenCodec, TokenError, TokenKind, User, UserStore, UserStoreError,
    VerifiedIdentity,
};

use crate::SESSION_TOKEN_TTL_SECONDS;

/// Error types specific to the federated login use case
#[derive(Debug, thiserror::Error)]
pub enum FederatedLoginError {
    #[error("User store error: {0}")]
    UserStore(#[from] UserStoreError),
    #[error("{0}")]
    Token(#[from] TokenError),
}

/// Unifies a provider-asserted identity with the local account space:
/// first sight creates the account, then the session is minted exactly
/// as for a password login.
pub struct FederatedLoginUseCase<'a, U, T>
where
    U: UserStore,
    T: TokenCodec,
{
    user_store: &'a U,
    token_codec: &'a T,
}

impl<'a, U, T> FederatedLoginUseCase<'a, U, T>
where
    U: UserStore,
    T: TokenCodec,
{
    pub fn new(user_store: &'a U, token_codec: &'a T) -> Self {
        Self {
            user_store,
            token_codec,
        }
    }

    #[tracing::instrument(name = "FederatedLoginUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        identity: VerifiedIdentity,
    ) -> Result<(String, User), FederatedLoginError> {
        let user = match self.user_store.get_by_email(&identity.email).await {
            Ok(user) => user,
            Err(UserStoreError::UserNotFound) => {
                let user = User::from_federated_identity(identity);
                self.user_store.add_user(user.clone()).await?;
                user
            }
            Err(e) => return Err(e.into()),
        };

        let token = self.token_codec.sign(
            &SessionClaims {
                user_id: user.id(),
            },
            TokenKind::Session,
            SESSION_TOKEN_TTL_SECONDS,
        )?;

        Ok((token, user))
    }
}
