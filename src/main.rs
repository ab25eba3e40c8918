mod db;
mod error;
mod handlers;
mod models;
mod oauth;
mod providers;

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use axum::{Router, routing::get};
    use handlers::index_handler;
    use handlers::oauth::{callback_handler, login_handler, logout_handler};
    use models::{AppConfig, AppState};
    use oauth::registry::ProviderRegistry;
    use oauth::{CookieLogin, OauthClient};
    use time::Duration;
    use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let app_config = AppConfig::from_env()?;

    // Bad config or an unreachable database aborts startup.
    let pool = db::connect("config/db.toml").await?;
    info!("database pool ready");

    let registry = ProviderRegistry::new()
        .register(providers::facebook(
            &app_config.facebook,
            &format!("{}/auth/facebook/callback", app_config.base_url),
        ))
        .register(providers::twitter(
            &app_config.twitter,
            &format!("{}/auth/twitter/callback", app_config.base_url),
        ));

    let oauth_client = OauthClient::new(registry, Arc::new(CookieLogin))
        .with_default_provider("facebook");

    let app_state = AppState {
        oauth: Arc::new(oauth_client),
        db: pool,
    };

    let session_store = MemoryStore::default();
    let session_expiry = Expiry::OnInactivity(Duration::hours(6));
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_expiry(session_expiry);

    let app = Router::new()
        .route("/", get(index_handler))
        .route("/auth/{provider}", get(login_handler))
        .route("/auth/{provider}/callback", get(callback_handler))
        .route("/logout", get(logout_handler))
        .layer(session_layer)
        .with_state(app_state);

    info!("listening on http://{}", app_config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&app_config.bind_addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
