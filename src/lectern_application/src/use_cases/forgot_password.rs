use chrono::{Duration, Utc};
use lectern_core::{
    Email, EmailClient, ResetClaims, TokenCodec, TokenError, TokenKind, UserStore, UserStoreError,
};

use crate::{RESET_TOKEN_TTL_SECONDS, RESET_WATERMARK_TTL_SECONDS};

/// Error types specific to the password-reset request step
#[derive(Debug, thiserror::Error)]
pub enum ForgotPasswordError {
    #[error("User store error: {0}")]
    UserStore(#[from] UserStoreError),
    #[error("{0}")]
    Token(#[from] TokenError),
    #[error("Failed to send email: {0}")]
    Email(String),
}

/// Password-reset request step: mints the reset token, mails the link,
/// and stamps the server-side watermark.
pub struct ForgotPasswordUseCase<'a, U, T, E>
where
    U: UserStore,
    T: TokenCodec,
    E: EmailClient,
{
    user_store: &'a U,
    token_codec: &'a T,
    email_client: &'a E,
    reset_link_base: &'a str,
}

impl<'a, U, T, E> ForgotPasswordUseCase<'a, U, T, E>
where
    U: UserStore,
    T: TokenCodec,
    E: EmailClient,
{
    pub fn new(
        user_store: &'a U,
        token_codec: &'a T,
        email_client: &'a E,
        reset_link_base: &'a str,
    ) -> Self {
        Self {
            user_store,
            token_codec,
            email_client,
            reset_link_base,
        }
    }

    #[tracing::instrument(name = "ForgotPasswordUseCase::execute", skip_all)]
    pub async fn execute(&self, email: Email) -> Result<(), ForgotPasswordError> {
        let mut user = self.user_store.get_by_email(&email).await?;

        let token = self.token_codec.sign(
            &ResetClaims {
                email: email.clone(),
            },
            TokenKind::Reset,
            RESET_TOKEN_TTL_SECONDS,
        )?;

        let link = format!("{}?token={}", self.reset_link_base, token);
        self.email_client
            .send_email(&email, "Reset your password", &reset_body(&link))
            .await
            .map_err(ForgotPasswordError::Email)?;

        // The watermark is shorter than the token's own TTL and is the
        // one the finalize step obeys.
        user.set_reset_password_expiry(Utc::now() + Duration::seconds(RESET_WATERMARK_TTL_SECONDS));
        self.user_store.update_user(user).await?;

        Ok(())
    }
}

fn reset_body(link: &str) -> String {
    format!(
        "<h1>Reset your password</h1>\
         <p>Follow <a href=\"{link}\">this link</a> to choose a new password. \
         The link stops working after five minutes.</p>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{
        InMemoryUsers, JsonTokenCodec, RecordingEmailClient, email, persisted_user,
    };

    #[tokio::test]
    async fn mails_a_link_and_stamps_the_watermark() {
        let store = InMemoryUsers::new();
        persisted_user(&store, "ann@example.com", "hunter22").await;
        let mailer = RecordingEmailClient::new();
        let codec = JsonTokenCodec::new();
        let use_case =
            ForgotPasswordUseCase::new(&store, &codec, &mailer, "https://app.test/reset");

        let before = Utc::now();
        use_case.execute(email("ann@example.com")).await.unwrap();

        let sent = mailer.sent().await;
        assert_eq!(sent.len(), 1);
        assert!(sent[0].2.contains("https://app.test/reset?token="));

        let user = store.get_by_email(&email("ann@example.com")).await.unwrap();
        let watermark = user.reset_password_expires_at().unwrap();
        assert!(watermark >= before + Duration::seconds(RESET_WATERMARK_TTL_SECONDS));
        assert!(watermark <= Utc::now() + Duration::seconds(RESET_WATERMARK_TTL_SECONDS));
    }

    #[tokio::test]
    async fn unknown_email_is_not_found_and_sends_nothing() {
        let store = InMemoryUsers::new();
        let mailer = RecordingEmailClient::new();
        let codec = JsonTokenCodec::new();
        let use_case =
            ForgotPasswordUseCase::new(&store, &codec, &mailer, "https://app.test/reset");

        let result = use_case.execute(email("ghost@example.com")).await;

        assert!(matches!(
            result,
            Err(ForgotPasswordError::UserStore(UserStoreError::UserNotFound))
        ));
        assert!(mailer.sent().await.is_empty());
    }

    #[tokio::test]
    async fn email_failure_leaves_the_watermark_unset() {
        let store = InMemoryUsers::new();
        persisted_user(&store, "ann@example.com", "hunter22").await;
        let mailer = RecordingEmailClient::failing();
        let codec = JsonTokenCodec::new();
        let use_case =
            ForgotPasswordUseCase::new(&store, &codec, &mailer, "https://app.test/reset");

        let result = use_case.execute(email("ann@example.com")).await;

        assert!(matches!(result, Err(ForgotPasswordError::Email(_))));
        let user = store.get_by_email(&email("ann@example.com")).await.unwrap();
        assert!(user.reset_password_expires_at().is_none());
    }
}
