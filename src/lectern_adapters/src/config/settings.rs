use config::{Config, ConfigError, Environment, File};
use http::HeaderValue;
use secrecy::Secret;
use serde::Deserialize;

use crate::config::constants::{env, prod};

/// Process configuration, constructed once at startup and passed by
/// reference into each component constructor. No ambient lookup exists
/// past this point.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub app: AppSettings,
    pub auth: AuthSettings,
    pub email_client: EmailClientSettings,
    pub google: GoogleSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_address")]
    pub address: String,
    pub allowed_origins: Option<AllowedOrigins>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    /// Signing secret for activation tokens. Each of the three secrets
    /// must be distinct; none may ever be logged.
    pub activation_secret: Secret<String>,
    pub session_secret: Secret<String>,
    pub reset_secret: Secret<String>,
    /// Distinguished principal allowed to flip other users' roles.
    pub superadmin_email: String,
    #[serde(default = "default_session_cookie_name")]
    pub session_cookie_name: String,
    /// Base URL of the front-end reset page; the token is appended as a
    /// query parameter.
    pub reset_link_base: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailClientSettings {
    #[serde(default = "default_email_base_url")]
    pub base_url: String,
    pub sender: String,
    pub auth_token: Secret<String>,
    #[serde(default = "default_email_timeout_millis")]
    pub timeout_in_millis: u64,
}

impl EmailClientSettings {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_in_millis)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleSettings {
    pub client_id: String,
    pub client_secret: Secret<String>,
    pub redirect_url: String,
    #[serde(default = "default_google_auth_url")]
    pub auth_url: String,
    #[serde(default = "default_google_token_url")]
    pub token_url: String,
    #[serde(default = "default_google_userinfo_url")]
    pub userinfo_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new(origins: Vec<String>) -> Self {
        Self(origins)
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        origin
            .to_str()
            .map(|origin| self.0.iter().any(|allowed| allowed == origin))
            .unwrap_or(false)
    }
}

impl Settings {
    /// Layered load: optional config file, overridden by `LECTERN__*`
    /// environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config_file = std::env::var(env::CONFIG_FILE_ENV_VAR)
            .unwrap_or_else(|_| "config/base".to_string());

        Config::builder()
            .add_source(File::with_name(&config_file).required(false))
            .add_source(Environment::with_prefix(env::ENV_PREFIX).separator(env::ENV_SEPARATOR))
            .build()?
            .try_deserialize()
    }
}

fn default_app_address() -> String {
    prod::APP_ADDRESS.to_string()
}

fn default_session_cookie_name() -> String {
    "lectern_session".to_string()
}

fn default_email_base_url() -> String {
    prod::email_client::BASE_URL.to_string()
}

fn default_email_timeout_millis() -> u64 {
    prod::email_client::TIMEOUT.as_millis() as u64
}

fn default_google_auth_url() -> String {
    prod::google::AUTH_URL.to_string()
}

fn default_google_token_url() -> String {
    prod::google::TOKEN_URL.to_string()
}

fn default_google_userinfo_url() -> String {
    prod::google::USERINFO_URL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_origins_matches_exact_strings() {
        let origins = AllowedOrigins::new(vec!["https://app.lectern.dev".to_string()]);
        assert!(origins.contains(&HeaderValue::from_static("https://app.lectern.dev")));
        assert!(!origins.contains(&HeaderValue::from_static("https://evil.example")));
    }
}
