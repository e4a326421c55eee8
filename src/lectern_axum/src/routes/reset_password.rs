use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use lectern_application::ResetPasswordUseCase;
use lectern_core::{EmailClient, IdentityProvider, Password, UserStore};
use secrecy::Secret;
use serde::Deserialize;

use crate::{error::ApiError, responses::MessageResponse, state::AppState};

#[derive(Debug, Deserialize)]
pub struct ResetPasswordQuery {
    pub token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub password: Option<Secret<String>>,
}

/// Reset finalize step. The token arrives as a query parameter because
/// it was delivered inside a link.
#[tracing::instrument(name = "Reset password", skip_all)]
pub async fn reset_password<U, E, P>(
    State(state): State<AppState<U, E, P>>,
    Query(query): Query<ResetPasswordQuery>,
    Json(request): Json<ResetPasswordRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone,
    E: EmailClient + Clone,
    P: IdentityProvider + Clone,
{
    let (Some(token), Some(password)) = (query.token, request.password) else {
        return Err(ApiError::Validation("All fields are required".to_string()));
    };

    let password = Password::try_from(password)?;

    ResetPasswordUseCase::new(
        &state.user_store,
        &state.password_hasher,
        &state.token_codec,
    )
    .execute(&token, password)
    .await?;

    Ok(Json(MessageResponse::new("Password reset successful")))
}
