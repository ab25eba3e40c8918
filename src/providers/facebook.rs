use crate::models::ProviderCredentials;

use super::{OAuth2Provider, ProfileAuth};

pub fn facebook(credentials: &ProviderCredentials, redirect_url: &str) -> OAuth2Provider {
    OAuth2Provider {
        name: "facebook".into(),
        auth_url: "https://www.facebook.com/v18.0/dialog/oauth".into(),
        token_url: "https://graph.facebook.com/v18.0/oauth/access_token".into(),
        profile_url: "https://graph.facebook.com/me?fields=name,picture.type(large)".into(),
        scopes: vec!["public_profile".into()],
        client_id: credentials.client_id.clone(),
        client_secret: credentials.client_secret.clone(),
        redirect_url: redirect_url.into(),
        profile_auth: ProfileAuth::AccessTokenParam,
        map_profile: |raw| {
            (
                raw["name"].as_str().unwrap_or_default().to_owned(),
                raw["picture"]["data"]["url"]
                    .as_str()
                    .unwrap_or_default()
                    .to_owned(),
            )
        },
        http: reqwest::Client::new(),
    }
}
