use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use lectern_core::{
    EmailClient, IdentityProvider, Role, SessionClaims, TokenCodec, TokenKind, User, UserStore,
};

use crate::{error::ApiError, state::AppState};

/// Where the session token arrived from. The provider-established
/// cookie wins over the Authorization header when both are present.
#[derive(Debug, Clone)]
pub enum SessionCredential {
    Provider(String),
    Bearer(String),
}

impl SessionCredential {
    pub fn token(&self) -> &str {
        match self {
            SessionCredential::Provider(token) | SessionCredential::Bearer(token) => token,
        }
    }
}

/// Request extension inserted by [`authenticate`] once the session
/// resolved to a live user record.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

fn extract_credential(
    jar: &CookieJar,
    headers: &HeaderMap,
    cookie_name: &str,
) -> Option<SessionCredential> {
    if let Some(cookie) = jar.get(cookie_name) {
        return Some(SessionCredential::Provider(cookie.value().to_string()));
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| SessionCredential::Bearer(token.to_string()))
}

/// Session gate for protected routes.
///
/// A missing or unverifiable credential is `403 Forbidden` (the
/// "please login" policy); a verified token whose user record is gone
/// is `401 Unauthorized`.
#[tracing::instrument(name = "Authenticate request", skip_all)]
pub async fn authenticate<U, E, P>(
    State(state): State<AppState<U, E, P>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError>
where
    U: UserStore + Clone,
    E: EmailClient + Clone,
    P: IdentityProvider + Clone,
{
    let credential = extract_credential(
        &jar,
        request.headers(),
        &state.settings.auth.session_cookie_name,
    )
    .ok_or_else(|| ApiError::Forbidden("Please login".to_string()))?;

    let claims: SessionClaims = state
        .token_codec
        .verify(credential.token(), TokenKind::Session)
        .map_err(|_| ApiError::Forbidden("Please login".to_string()))?;

    let user = state
        .user_store
        .get_by_id(&claims.user_id)
        .await
        .map_err(|_| ApiError::Unauthorized)?;

    request.extensions_mut().insert(AuthenticatedUser(user));
    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| ApiError::Forbidden("Please login".to_string()))
    }
}

/// Role gate layered behind [`authenticate`] on the admin routes.
pub async fn require_admin(request: Request, next: Next) -> Result<Response, ApiError> {
    let authenticated = request
        .extensions()
        .get::<AuthenticatedUser>()
        .ok_or_else(|| ApiError::Forbidden("Please login".to_string()))?;

    if authenticated.0.role() != Role::Admin {
        return Err(ApiError::Forbidden("You are not an admin".to_string()));
    }

    Ok(next.run(request).await)
}

/// Session cookie set by the federated callback.
pub fn session_cookie(name: &str, token: String) -> Cookie<'static> {
    Cookie::build((name.to_string(), token))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Removal cookie with the same scope as [`session_cookie`]. The
/// session cookie is `HttpOnly`, so only the server can expire it.
pub fn removal_cookie(name: &str) -> Cookie<'static> {
    Cookie::build((name.to_string(), "")).path("/").build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_header_is_used_when_no_cookie_is_set() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Bearer abc".parse().unwrap());

        let credential = extract_credential(&CookieJar::new(), &headers, "lectern_session");
        assert!(matches!(
            credential,
            Some(SessionCredential::Bearer(token)) if token == "abc"
        ));
    }

    #[test]
    fn cookie_wins_over_the_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Bearer from-header".parse().unwrap());
        let jar = CookieJar::new().add(Cookie::new("lectern_session", "from-cookie"));

        let credential = extract_credential(&jar, &headers, "lectern_session");
        assert!(matches!(
            credential,
            Some(SessionCredential::Provider(token)) if token == "from-cookie"
        ));
    }

    #[test]
    fn absent_credential_is_none() {
        assert!(extract_credential(&CookieJar::new(), &HeaderMap::new(), "lectern_session").is_none());
    }

    #[test]
    fn malformed_authorization_header_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Token abc".parse().unwrap());

        assert!(extract_credential(&CookieJar::new(), &headers, "lectern_session").is_none());
    }

    #[test]
    fn removal_cookie_matches_the_session_scope() {
        let cookie = removal_cookie("lectern_session");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.value(), "");
    }

    #[test]
    fn session_cookie_is_scoped_and_http_only() {
        let cookie = session_cookie("lectern_session", "token".to_string());
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }
}
