use lectern_core::{
    ActivationClaims, Email, EmailClient, Otp, Password, PasswordHasher, PasswordHasherError,
    PendingUser, TokenCodec, TokenError, TokenKind, UserStore, UserStoreError,
};

use crate::ACTIVATION_TOKEN_TTL_SECONDS;

/// Error types specific to the registration initiate step
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User store error: {0}")]
    UserStore(UserStoreError),
    #[error("{0}")]
    Hasher(#[from] PasswordHasherError),
    #[error("{0}")]
    Token(#[from] TokenError),
    #[error("Failed to send email: {0}")]
    Email(String),
}

/// Registration initiate step: nothing durable is written. The pending
/// account rides inside the activation token, the code rides in the
/// email, and the caller relays both back to finalize.
pub struct RegisterUseCase<'a, U, H, T, E>
where
    U: UserStore,
    H: PasswordHasher,
    T: TokenCodec,
    E: EmailClient,
{
    user_store: &'a U,
    password_hasher: &'a H,
    token_codec: &'a T,
    email_client: &'a E,
}

impl<'a, U, H, T, E> RegisterUseCase<'a, U, H, T, E>
where
    U: UserStore,
    H: PasswordHasher,
    T: TokenCodec,
    E: EmailClient,
{
    pub fn new(
        user_store: &'a U,
        password_hasher: &'a H,
        token_codec: &'a T,
        email_client: &'a E,
    ) -> Self {
        Self {
            user_store,
            password_hasher,
            token_codec,
            email_client,
        }
    }

    /// Execute the registration initiate step
    ///
    /// # Returns
    /// The activation token the caller must present together with the
    /// emailed code.
    #[tracing::instrument(name = "RegisterUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        name: String,
        email: Email,
        password: Password,
    ) -> Result<String, RegisterError> {
        match self.user_store.get_by_email(&email).await {
            Ok(_) => return Err(RegisterError::UserAlreadyExists),
            Err(UserStoreError::UserNotFound) => {}
            Err(e) => return Err(RegisterError::UserStore(e)),
        }

        let password_digest = self.password_hasher.hash(password).await?;
        let otp = Otp::generate();

        let claims = ActivationClaims {
            user: PendingUser {
                name: name.clone(),
                email: email.clone(),
                password_digest,
            },
            otp,
        };
        let activation_token =
            self.token_codec
                .sign(&claims, TokenKind::Activation, ACTIVATION_TOKEN_TTL_SECONDS)?;

        // The token must not reach the caller before the code had a
        // chance to reach the mailbox.
        self.email_client
            .send_email(&email, "Your activation code", &activation_body(&name, otp))
            .await
            .map_err(RegisterError::Email)?;

        Ok(activation_token)
    }
}

fn activation_body(name: &str, otp: Otp) -> String {
    format!(
        "<h1>Account activation</h1>\
         <p>Hello {name}, your one time code is <strong>{otp}</strong>. \
         It expires in five minutes.</p>"
    )
}
