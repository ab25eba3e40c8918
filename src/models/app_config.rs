use std::sync::Arc;

use sqlx::MySqlPool;

use crate::oauth::OauthClient;

#[derive(Clone)]
pub struct ProviderCredentials {
    pub client_id: String,
    pub client_secret: String,
}

#[derive(Clone)]
pub struct AppConfig {
    pub facebook: ProviderCredentials,
    pub twitter: ProviderCredentials,
    pub base_url: String,
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        use dotenvy::dotenv;
        use std::env;

        dotenv().ok();

        let facebook = ProviderCredentials {
            client_id: env::var("FACEBOOK_KEY")
                .map_err(|e| format!("FACEBOOK_KEY not found: {}", e))?,
            client_secret: env::var("FACEBOOK_SECRET")
                .map_err(|e| format!("FACEBOOK_SECRET not found: {}", e))?,
        };
        let twitter = ProviderCredentials {
            client_id: env::var("TWITTER_KEY")
                .map_err(|e| format!("TWITTER_KEY not found: {}", e))?,
            client_secret: env::var("TWITTER_SECRET")
                .map_err(|e| format!("TWITTER_SECRET not found: {}", e))?,
        };
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        Ok(Self {
            facebook,
            twitter,
            base_url,
            bind_addr,
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub oauth: Arc<OauthClient>,
    pub db: MySqlPool,
}
