use chrono::Utc;
use jsonwebtoken::{
    DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use lectern_core::{TokenCodec, TokenError, TokenKind};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::config::settings::AuthSettings;

/// JWT-backed implementation of the token codec. One distinct secret per
/// token kind, so an activation token is cryptographically meaningless
/// to the session or reset verifier.
#[derive(Clone)]
pub struct JwtTokenCodec {
    activation_secret: Secret<String>,
    session_secret: Secret<String>,
    reset_secret: Secret<String>,
}

impl JwtTokenCodec {
    pub fn new(
        activation_secret: Secret<String>,
        session_secret: Secret<String>,
        reset_secret: Secret<String>,
    ) -> Self {
        Self {
            activation_secret,
            session_secret,
            reset_secret,
        }
    }

    pub fn from_settings(auth: &AuthSettings) -> Self {
        Self::new(
            auth.activation_secret.clone(),
            auth.session_secret.clone(),
            auth.reset_secret.clone(),
        )
    }

    fn secret(&self, kind: TokenKind) -> &[u8] {
        match kind {
            TokenKind::Activation => &self.activation_secret,
            TokenKind::Session => &self.session_secret,
            TokenKind::Reset => &self.reset_secret,
        }
        .expose_secret()
        .as_bytes()
    }
}

// The payload is flattened next to the registered claims so it
// round-trips bit-for-bit.
#[derive(Serialize)]
struct SignedEnvelope<'a, P> {
    iat: i64,
    exp: i64,
    #[serde(flatten)]
    payload: &'a P,
}

#[derive(Deserialize)]
struct VerifiedEnvelope<P> {
    #[serde(flatten)]
    payload: P,
}

impl TokenCodec for JwtTokenCodec {
    fn sign<P: Serialize>(
        &self,
        payload: &P,
        kind: TokenKind,
        ttl_seconds: i64,
    ) -> Result<String, TokenError> {
        let iat = Utc::now().timestamp();
        let exp = iat
            .checked_add(ttl_seconds)
            .ok_or_else(|| TokenError::Unexpected("token ttl out of range".to_string()))?;

        let envelope = SignedEnvelope { iat, exp, payload };

        encode(
            &Header::default(),
            &envelope,
            &EncodingKey::from_secret(self.secret(kind)),
        )
        .map_err(|e| TokenError::Unexpected(e.to_string()))
    }

    fn verify<P: DeserializeOwned>(&self, token: &str, kind: TokenKind) -> Result<P, TokenError> {
        // Boundary-exact expiry: no clock leeway.
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<VerifiedEnvelope<P>>(
            token,
            &DecodingKey::from_secret(self.secret(kind)),
            &validation,
        )
        .map(|data| data.claims.payload)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid,
        })
    }
}
