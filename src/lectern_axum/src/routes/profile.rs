use axum::{Json, extract::State, response::IntoResponse};
use lectern_application::MyProfileUseCase;
use lectern_core::{EmailClient, IdentityProvider, UserStore};

use crate::{
    error::ApiError, gate::AuthenticatedUser, responses::UserProfile, state::AppState,
};

/// Profile of the session holder. Re-fetched so a record deleted after
/// the gate ran still comes back as not-found.
#[tracing::instrument(name = "My profile", skip_all)]
pub async fn my_profile<U, E, P>(
    State(state): State<AppState<U, E, P>>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone,
    E: EmailClient + Clone,
    P: IdentityProvider + Clone,
{
    let user = MyProfileUseCase::new(&state.user_store)
        .execute(&user.id())
        .await?;

    Ok(Json(UserProfile::from(&user)))
}
