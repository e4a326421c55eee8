use std::sync::Arc;

use color_eyre::eyre::Result;
use lectern_adapters::{
    GoogleIdentityProvider, HashMapUserStore, PostmarkEmailClient, Settings,
};
use lectern_auth_service::{AuthService, init_tracing};
use lectern_core::Email;
use secrecy::Secret;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    color_eyre::install()?;
    init_tracing()?;

    let settings = Arc::new(Settings::load()?);

    let http_client = reqwest::Client::builder()
        .timeout(settings.email_client.timeout())
        .build()?;

    let email_client = PostmarkEmailClient::new(
        settings.email_client.base_url.clone(),
        Email::try_from(Secret::from(settings.email_client.sender.clone()))?,
        settings.email_client.auth_token.clone(),
        http_client.clone(),
    );

    let identity_provider = GoogleIdentityProvider::new(&settings.google, http_client);
    let user_store = HashMapUserStore::new();

    let service = AuthService::new(
        user_store,
        email_client,
        identity_provider,
        settings.clone(),
    );

    let listener = TcpListener::bind(&settings.app.address).await?;
    service.run(listener, settings.app.allowed_origins.clone()).await?;

    Ok(())
}
