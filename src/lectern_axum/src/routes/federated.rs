use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use lectern_application::FederatedLoginUseCase;
use lectern_core::{EmailClient, IdentityProvider, UserStore};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    error::ApiError,
    gate::session_cookie,
    responses::{LoginResponse, UserProfile},
    state::AppState,
};

/// Kicks off the provider handshake with a temporary redirect to the
/// authorization challenge.
#[tracing::instrument(name = "Federated login start", skip_all)]
pub async fn google_login<U, E, P>(
    State(state): State<AppState<U, E, P>>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone,
    E: EmailClient + Clone,
    P: IdentityProvider + Clone,
{
    let challenge_state = Uuid::new_v4().to_string();
    let url = state
        .identity_provider
        .authorization_url(&challenge_state)
        .map_err(|e| ApiError::Unexpected(e.to_string()))?;

    Ok(Redirect::temporary(&url))
}

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
}

/// Provider callback. Any failure on this path sends the browser back
/// to the login page rather than surfacing an API error.
#[tracing::instrument(name = "Federated login callback", skip_all)]
pub async fn google_callback<U, E, P>(
    State(state): State<AppState<U, E, P>>,
    jar: CookieJar,
    Query(query): Query<CallbackQuery>,
) -> Response
where
    U: UserStore + Clone,
    E: EmailClient + Clone,
    P: IdentityProvider + Clone,
{
    let Some(code) = query.code else {
        return Redirect::to("/login").into_response();
    };

    let identity = match state.identity_provider.exchange_code(&code).await {
        Ok(identity) => identity,
        Err(e) => {
            tracing::warn!(error = %e, "code exchange failed");
            return Redirect::to("/login").into_response();
        }
    };

    match FederatedLoginUseCase::new(&state.user_store, &state.token_codec)
        .execute(identity)
        .await
    {
        Ok((token, user)) => {
            let jar = jar.add(session_cookie(
                &state.settings.auth.session_cookie_name,
                token.clone(),
            ));
            let body = Json(LoginResponse {
                message: format!("Welcome back, {}", user.name()),
                token,
                user: UserProfile::from(&user),
            });
            (jar, body).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "federated login failed");
            Redirect::to("/login").into_response()
        }
    }
}
