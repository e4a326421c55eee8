use axum::{Json, extract::State, response::IntoResponse};
use lectern_application::RegisterUseCase;
use lectern_core::{Email, EmailClient, IdentityProvider, Password, UserStore};
use secrecy::Secret;
use serde::Deserialize;

use crate::{error::ApiError, responses::RegisterResponse, state::AppState};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<Secret<String>>,
    pub password: Option<Secret<String>>,
}

/// Registration initiate step: emails a one-time code and hands back
/// the activation token that carries the pending account.
#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<U, E, P>(
    State(state): State<AppState<U, E, P>>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone,
    E: EmailClient + Clone,
    P: IdentityProvider + Clone,
{
    let (Some(name), Some(email), Some(password)) =
        (request.name, request.email, request.password)
    else {
        return Err(ApiError::Validation("All fields are required".to_string()));
    };

    let email = Email::try_from(email)?;
    let password = Password::try_from(password)?;

    let activation_token = RegisterUseCase::new(
        &state.user_store,
        &state.password_hasher,
        &state.token_codec,
        &state.email_client,
    )
    .execute(name, email, password)
    .await?;

    Ok(Json(RegisterResponse {
        message: "OTP sent to your email".to_string(),
        activation_token,
    }))
}
