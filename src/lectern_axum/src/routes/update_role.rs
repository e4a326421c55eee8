use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use lectern_application::UpdateRoleUseCase;
use lectern_core::{EmailClient, IdentityProvider, UserId, UserStore};
use secrecy::ExposeSecret;

use crate::{
    error::ApiError, gate::AuthenticatedUser, responses::RoleResponse, state::AppState,
};

/// Strict two-state role flip on the target user. Only the configured
/// superadmin account may call this; an admin role alone is not enough.
#[tracing::instrument(name = "Update role", skip_all, fields(target = %target))]
pub async fn update_role<U, E, P>(
    State(state): State<AppState<U, E, P>>,
    AuthenticatedUser(caller): AuthenticatedUser,
    Path(target): Path<UserId>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone,
    E: EmailClient + Clone,
    P: IdentityProvider + Clone,
{
    if caller.email().as_ref().expose_secret() != &state.settings.auth.superadmin_email {
        return Err(ApiError::Forbidden(
            "This endpoint is assigned to superadmin".to_string(),
        ));
    }

    let role = UpdateRoleUseCase::new(&state.user_store)
        .execute(&target)
        .await?;

    Ok(Json(RoleResponse {
        message: format!("Role updated to {role}"),
        role,
    }))
}
