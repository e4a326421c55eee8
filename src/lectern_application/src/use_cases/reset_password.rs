use chrono::Utc;
use lectern_core::{
    Password, PasswordHasher, PasswordHasherError, ResetClaims, TokenCodec, TokenError, TokenKind,
    UserStore, UserStoreError,
};

/// Error types specific to the password-reset finalize step
#[derive(Debug, thiserror::Error)]
pub enum ResetPasswordError {
    #[error("{0}")]
    Token(#[from] TokenError),
    #[error("Password reset window has expired")]
    WatermarkExpired,
    #[error("User store error: {0}")]
    UserStore(#[from] UserStoreError),
    #[error("{0}")]
    Hasher(#[from] PasswordHasherError),
}

/// Password-reset finalize step: both the token's own expiry and the
/// server-side watermark must still be open.
pub struct ResetPasswordUseCase<'a, U, H, T>
where
    U: UserStore,
    H: PasswordHasher,
    T: TokenCodec,
{
    user_store: &'a U,
    password_hasher: &'a H,
    token_codec: &'a T,
}

impl<'a, U, H, T> ResetPasswordUseCase<'a, U, H, T>
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

    #[tracing::instrument(name = "ResetPasswordUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        reset_token: &str,
        new_password: Password,
    ) -> Result<(), ResetPasswordError> {
        let claims: ResetClaims = self.token_codec.verify(reset_token, TokenKind::Reset)?;

        let mut user = self.user_store.get_by_email(&claims.email).await?;

        // The watermark is authoritative: a token still inside its own
        // ten-minute TTL is rejected once the five-minute watermark has
        // lapsed or was never stamped.
        match user.reset_password_expires_at() {
            Some(expires_at) if expires_at > Utc::now() => {}
            _ => return Err(ResetPasswordError::WatermarkExpired),
        }

        let digest = self.password_hasher.hash(new_password).await?;
        user.set_password_digest(digest);
        user.clear_reset_password_expiry();
        self.user_store.update_user(user).await?;

        Ok(())
    }
}
