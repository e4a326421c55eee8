use lectern_core::{
    Email, Password, PasswordHasher, PasswordHasherError, SessionClaims, TokenCodec, TokenError,
    TokenKind, User, UserStore, UserStoreError,
};

use crate::SESSION_TOKEN_TTL_SECONDS;

/// Error types specific to the login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("User store error: {0}")]
    UserStore(#[from] UserStoreError),
    #[error("Incorrect password")]
    IncorrectPassword,
    #[error("{0}")]
    Hasher(PasswordHasherError),
    #[error("{0}")]
    Token(#[from] TokenError),
}

/// Credential verification and session minting.
pub struct LoginUseCase<'a, U, H, T>
where
    U: UserStore,
    H: PasswordHasher,
    T: TokenCodec,
{
    user_store: &'a U,
    password_hasher: &'a H,
    token_codec: &'a T,
}

impl<'a, U, H, T> LoginUseCase<'a, U, H, T>
where
    U: UserStore,
    H: PasswordHasher,
    T: TokenCodec,
{
    pub fn new(user_store: &'a U, password_hasher: &'a H, token_codec: &'a T) -> Self {
        Self {
            user_store,
            password_hasher,
            token_codec,
        }
    }

    /// Execute the login use case
    ///
    /// # Returns
    /// The session token and the authenticated user record. Callers are
    /// responsible for serializing a credential-free view of the user.
    #[tracing::instrument(name = "LoginUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        email: Email,
        password: Password,
    ) -> Result<(String, User), LoginError> {
        let user = self.user_store.get_by_email(&email).await?;

        // Federated accounts hold no local credential and can never pass
        // a password check.
        let digest = user
            .password_digest()
            .ok_or(LoginError::IncorrectPassword)?;

        match self.password_hasher.verify(digest, &password).await {
            Ok(()) => {}
            Err(PasswordHasherError::Mismatch) => return Err(LoginError::IncorrectPassword),
            Err(e) => return Err(LoginError::Hasher(e)),
        }

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
