use axum::{Json, extract::State, response::IntoResponse};
use lectern_application::ForgotPasswordUseCase;
use lectern_core::{Email, EmailClient, IdentityProvider, UserStore};
use secrecy::Secret;
use serde::Deserialize;

use crate::{error::ApiError, responses::MessageResponse, state::AppState};

#[derive(Debug, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: Option<Secret<String>>,
}

/// Mails the reset link and opens the five-minute reset window.
#[tracing::instrument(name = "Forgot password", skip_all)]
pub async fn forgot_password<U, E, P>(
    State(state): State<AppState<U, E, P>>,
    Json(request): Json<ForgotPasswordRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone,
    E: EmailClient + Clone,
    P: IdentityProvider + Clone,
{
    let Some(email) = request.email else {
        return Err(ApiError::Validation("All fields are required".to_string()));
    };

    let email = Email::try_from(email)?;

    ForgotPasswordUseCase::new(
        &state.user_store,
        &state.token_codec,
        &state.email_client,
        &state.settings.auth.reset_link_base,
    )
    .execute(email)
    .await?;

    Ok(Json(MessageResponse::new("Reset link sent to your email")))
}
