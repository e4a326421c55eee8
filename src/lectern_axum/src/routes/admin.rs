use axum::{Json, extract::State, response::IntoResponse};
use lectern_application::{ListUsersUseCase, PlatformStatsUseCase};
use lectern_core::{EmailClient, IdentityProvider, UserStore};

use crate::{
    error::ApiError, gate::AuthenticatedUser, responses::UserProfile, state::AppState,
};

/// Platform-wide counts for the admin dashboard.
#[tracing::instrument(name = "Platform stats", skip_all)]
pub async fn platform_stats<U, E, P>(
    State(state): State<AppState<U, E, P>>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone,
    E: EmailClient + Clone,
    P: IdentityProvider + Clone,
{
    let stats = PlatformStatsUseCase::new(&state.user_store).execute().await?;
    Ok(Json(stats))
}

/// Every user except the caller, as credential-free profiles.
#[tracing::instrument(name = "List users", skip_all)]
pub async fn list_users<U, E, P>(
    State(state): State<AppState<U, E, P>>,
    AuthenticatedUser(caller): AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone,
    E: EmailClient + Clone,
    P: IdentityProvider + Clone,
{
    let users = ListUsersUseCase::new(&state.user_store)
        .execute(&caller.id())
        .await?;

    let profiles: Vec<UserProfile> = users.iter().map(UserProfile::from).collect();
    Ok(Json(profiles))
}
