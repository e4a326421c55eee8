use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::cookie::CookieJar;
use lectern_core::{EmailClient, IdentityProvider, UserStore};

use crate::{gate::removal_cookie, state::AppState};

/// Expires the session cookie and sends the client home. Bearer
/// sessions need no server involvement; the token simply stops being
/// presented.
#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout<U, E, P>(
    State(state): State<AppState<U, E, P>>,
    jar: CookieJar,
) -> impl IntoResponse
where
    U: UserStore + Clone,
    E: EmailClient + Clone,
    P: IdentityProvider + Clone,
{
    let jar = jar.remove(removal_cookie(&state.settings.auth.session_cookie_name));
    (jar, Redirect::to("/"))
}
