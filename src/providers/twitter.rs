use crate::models::ProviderCredentials;

use super::{OAuth2Provider, ProfileAuth};

pub fn twitter(credentials: &ProviderCredentials, redirect_url: &str) -> OAuth2Provider {
    OAuth2Provider {
        name: "twitter".into(),
        auth_url: "https://twitter.com/i/oauth2/authorize".into(),
        token_url: "https://api.twitter.com/2/oauth2/token".into(),
        profile_url: "https://api.twitter.com/2/users/me?user.fields=profile_image_url".into(),
        scopes: vec!["users.read".into(), "tweet.read".into()],
        client_id: credentials.client_id.clone(),
        client_secret: credentials.client_secret.clone(),
        redirect_url: redirect_url.into(),
        profile_auth: ProfileAuth::BearerHeader,
        map_profile: |raw| {
            (
                raw["data"]["name"].as_str().unwrap_or_default().to_owned(),
                raw["data"]["profile_image_url"]
                    .as_str()
                    .unwrap_or_default()
                    .to_owned(),
            )
        },
        http: reqwest::Client::new(),
    }
}
