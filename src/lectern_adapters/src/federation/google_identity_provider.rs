use lectern_core::{IdentityProvider, IdentityProviderError, VerifiedIdentity};
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::config::settings::GoogleSettings;

/// Google OAuth 2.0 code-exchange client. Redeems the callback code for
/// an access token, then reads the OpenID userinfo document.
#[derive(Clone)]
pub struct GoogleIdentityProvider {
    http_client: Client,
    client_id: String,
    client_secret: Secret<String>,
    redirect_url: String,
    auth_url: String,
    token_url: String,
    userinfo_url: String,
}

impl GoogleIdentityProvider {
    pub fn new(settings: &GoogleSettings, http_client: Client) -> Self {
        Self {
            http_client,
            client_id: settings.client_id.clone(),
            client_secret: settings.client_secret.clone(),
            redirect_url: settings.redirect_url.clone(),
            auth_url: settings.auth_url.clone(),
            token_url: settings.token_url.clone(),
            userinfo_url: settings.userinfo_url.clone(),
        }
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[async_trait::async_trait]
impl IdentityProvider for GoogleIdentityProvider {
    fn authorization_url(&self, state: &str) -> Result<String, IdentityProviderError> {
        let url = Url::parse_with_params(
            &self.auth_url,
            &[
                ("client_id", self.client_id.as_str()),
                ("redirect_uri", self.redirect_url.as_str()),
                ("response_type", "code"),
                ("scope", "openid profile email"),
                ("state", state),
            ],
        )
        .map_err(|e| IdentityProviderError::Exchange(e.to_string()))?;

        Ok(url.into())
    }

    #[tracing::instrument(name = "Exchanging authorization code", skip_all)]
    async fn exchange_code(&self, code: &str) -> Result<VerifiedIdentity, IdentityProviderError> {
        let token: TokenResponse = self
            .http_client
            .post(&self.token_url)
            .form(&[
                ("code", code),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.expose_secret()),
                ("redirect_uri", self.redirect_url.as_str()),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await
            .map_err(|e| IdentityProviderError::Exchange(e.to_string()))?
            .error_for_status()
            .map_err(|e| IdentityProviderError::Exchange(e.to_string()))?
            .json()
            .await
            .map_err(|e| IdentityProviderError::Exchange(e.to_string()))?;

        let identity: VerifiedIdentity = self
            .http_client
            .get(&self.userinfo_url)
            .bearer_auth(&token.access_token)
            .send()
            .await
            .map_err(|e| IdentityProviderError::Exchange(e.to_string()))?
            .error_for_status()
            .map_err(|e| IdentityProviderError::Exchange(e.to_string()))?
            .json()
            .await
            .map_err(|e| IdentityProviderError::InvalidIdentity(e.to_string()))?;

        Ok(identity)
    }
}
