use axum::{Json, extract::State, response::IntoResponse};
use lectern_application::LoginUseCase;
use lectern_core::{Email, EmailClient, IdentityProvider, Password, UserStore};
use secrecy::Secret;
use serde::Deserialize;

use crate::{
    error::ApiError,
    responses::{LoginResponse, UserProfile},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<Secret<String>>,
    pub password: Option<Secret<String>>,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<U, E, P>(
    State(state): State<AppState<U, E, P>>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone,
    E: EmailClient + Clone,
    P: IdentityProvider + Clone,
{
    let (Some(email), Some(password)) = (request.email, request.password) else {
        return Err(ApiError::Validation("All fields are required".to_string()));
    };

    let email = Email::try_from(email)?;
    let password = Password::try_from(password)?;

    let (token, user) = LoginUseCase::new(
        &state.user_store,
        &state.password_hasher,
        &state.token_codec,
    )
    .execute(email, password)
    .await?;

    Ok(Json(LoginResponse {
        message: format!("Welcome back, {}", user.name()),
        token,
        user: UserProfile::from(&user),
    }))
}
