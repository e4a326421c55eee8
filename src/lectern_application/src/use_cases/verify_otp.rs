use lectern_core::{
    ActivationClaims, Otp, PendingUser, TokenCodec, TokenError, TokenKind, User, UserStore,
    UserStoreError,
};

/// Error types specific to the registration finalize step
#[derive(Debug, thiserror::Error)]
pub enum VerifyOtpError {
    #[error("Incorrect OTP")]
    IncorrectOtp,
    #[error("{0}")]
    Token(#[from] TokenError),
    #[error("User store error: {0}")]
    UserStore(#[from] UserStoreError),
}

/// Registration finalize step: turns a valid activation token plus the
/// matching code into a persisted account.
pub struct VerifyOtpUseCase<'a, U, T>
where
    U: UserStore,
    T: TokenCodec,
{
    user_store: &'a U,
    token_codec: &'a T,
}

impl<'a, U, T> VerifyOtpUseCase<'a, U, T>
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

    #[tracing::instrument(name = "VerifyOtpUseCase::execute", skip_all)]
    pub async fn execute(&self, otp: Otp, activation_token: &str) -> Result<(), VerifyOtpError> {
        let claims: ActivationClaims = self
            .token_codec
            .verify(activation_token, TokenKind::Activation)?;

        // Exact numeric match, no fuzzy window.
        if claims.otp != otp {
            return Err(VerifyOtpError::IncorrectOtp);
        }

        let PendingUser {
            name,
            email,
            password_digest,
        } = claims.user;

        // A replayed token within its window must not create a duplicate
        // account; the store re-checks email uniqueness on insert.
        self.user_store
            .add_user(User::new(name, email, password_digest))
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use lectern_core::Role;

    use super::*;
    use crate::use_cases::test_support::{
        InMemoryUsers, JsonTokenCodec, PlainTextHasher, RecordingEmailClient, email, password,
    };
    use crate::use_cases::register::RegisterUseCase;

    async fn activation_token(store: &InMemoryUsers, codec: &JsonTokenCodec) -> (String, Otp) {
        let mailer = RecordingEmailClient::new();
        let token = RegisterUseCase::new(store, &PlainTextHasher, codec, &mailer)
            .execute(
                "Ann".to_string(),
                email("ann@example.com"),
                password("pw"),
            )
            .await
            .unwrap();
        let claims: ActivationClaims = codec.verify(&token, TokenKind::Activation).unwrap();
        (token, claims.otp)
    }

    #[tokio::test]
    async fn persists_the_pending_user_on_exact_match() {
        let store = InMemoryUsers::new();
        let codec = JsonTokenCodec::new();
        let (token, otp) = activation_token(&store, &codec).await;

        VerifyOtpUseCase::new(&store, &codec)
            .execute(otp, &token)
            .await
            .unwrap();

        let user = store.get_by_email(&email("ann@example.com")).await.unwrap();
        assert_eq!(user.name(), "Ann");
        assert_eq!(user.role(), Role::User);
    }

    #[tokio::test]
    async fn rejects_a_wrong_code() {
        let store = InMemoryUsers::new();
        let codec = JsonTokenCodec::new();
        let (token, otp) = activation_token(&store, &codec).await;

        let wrong = Otp::parse((otp.value() + 1) % 1_000_000).unwrap();
        let result = VerifyOtpUseCase::new(&store, &codec)
            .execute(wrong, &token)
            .await;

        assert!(matches!(result, Err(VerifyOtpError::IncorrectOtp)));
        assert!(store.get_by_email(&email("ann@example.com")).await.is_err());
    }

    #[tokio::test]
    async fn rejects_an_expired_token() {
        let store = InMemoryUsers::new();
        let codec = JsonTokenCodec::new();
        let (token, otp) = activation_token(&store, &codec).await;

        let expired_codec = JsonTokenCodec::expired();
        let result = VerifyOtpUseCase::new(&store, &expired_codec)
            .execute(otp, &token)
            .await;

        assert!(matches!(result, Err(VerifyOtpError::Token(TokenError::Expired))));
    }

    #[tokio::test]
    async fn replaying_the_token_cannot_create_a_duplicate() {
        let store = InMemoryUsers::new();
        let codec = JsonTokenCodec::new();
        let (token, otp) = activation_token(&store, &codec).await;

        let use_case = VerifyOtpUseCase::new(&store, &codec);
        use_case.execute(otp, &token).await.unwrap();
        let replay = use_case.execute(otp, &token).await;

        assert!(matches!(
            replay,
            Err(VerifyOtpError::UserStore(UserStoreError::UserAlreadyExists))
        ));
        assert_eq!(store.count_users().await.unwrap(), 1);
    }
}
