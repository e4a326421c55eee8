use axum::{Json, extract::State, response::IntoResponse};
use lectern_application::VerifyOtpUseCase;
use lectern_core::{EmailClient, IdentityProvider, Otp, UserStore};
use serde::Deserialize;

use crate::{error::ApiError, responses::MessageResponse, state::AppState};

#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    pub otp: Option<u32>,
    pub activation_token: Option<String>,
}

/// Registration finalize step: exact code match against the activation
/// token, then the account becomes durable.
#[tracing::instrument(name = "Verify OTP", skip_all)]
pub async fn verify<U, E, P>(
    State(state): State<AppState<U, E, P>>,
    Json(request): Json<VerifyRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone,
    E: EmailClient + Clone,
    P: IdentityProvider + Clone,
{
    let (Some(otp), Some(activation_token)) = (request.otp, request.activation_token) else {
        return Err(ApiError::Validation("All fields are required".to_string()));
    };

    let otp = Otp::parse(otp)?;

    VerifyOtpUseCase::new(&state.user_store, &state.token_codec)
        .execute(otp, &activation_token)
        .await?;

    Ok(Json(MessageResponse::new("Account verified, please login")))
}
