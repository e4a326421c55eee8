use std::sync::Arc;

use lectern_adapters::{Argon2PasswordHasher, JwtTokenCodec, Settings};
use lectern_core::{EmailClient, IdentityProvider, UserStore};

/// Shared handler state. The pluggable ports stay generic; the token
/// codec and password hasher are concrete because every deployment uses
/// the same cryptography.
#[derive(Clone)]
pub struct AppState<U, E, P>
where
    U: UserStore + Clone,
    E: EmailClient + Clone,
    P: IdentityProvider + Clone,
{
    pub user_store: U,
    pub email_client: E,
    pub identity_provider: P,
    pub password_hasher: Argon2PasswordHasher,
    pub token_codec: JwtTokenCodec,
    pub settings: Arc<Settings>,
}

impl<U, E, P> AppState<U, E, P>
where
    U: UserStore + Clone,
    E: EmailClient + Clone,
    P: IdentityProvider + Clone,
{
    pub fn new(user_store: U, email_client: E, identity_provider: P, settings: Arc<Settings>) -> Self {
        let token_codec = JwtTokenCodec::from_settings(&settings.auth);
        Self {
            user_store,
            email_client,
            identity_provider,
            password_hasher: Argon2PasswordHasher::new(),
            token_codec,
            settings,
        }
    }
}
