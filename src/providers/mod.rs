mod facebook;
mod twitter;

pub use facebook::facebook;
pub use twitter::twitter;

use async_trait::async_trait;
use oauth2::{PkceCodeChallenge, PkceCodeVerifier};
use serde::Deserialize;

use crate::error::AuthError;
use crate::models::{AccessGrant, CallbackParams, FlowBegin, FlowState, UserProfile};

/// One OAuth provider as seen by the client wrapper. Protocol mechanics live
/// behind this trait; the wrapper only shuttles flow state between the two
/// legs.
#[async_trait]
pub trait Provider: Send + Sync {
    fn name(&self) -> &str;

    /// First leg: build the authorization URL carrying `state`, and the flow
    /// state to stash until the callback.
    fn begin_auth(&self, state: &str) -> Result<FlowBegin, AuthError>;

    /// Second leg: trade the callback's authorization code for an access
    /// grant.
    async fn exchange(
        &self,
        flow: &FlowState,
        params: &CallbackParams,
    ) -> Result<AccessGrant, AuthError>;

    async fn fetch_user(&self, grant: &AccessGrant) -> Result<UserProfile, AuthError>;
}

/// How the profile endpoint expects the access token.
#[derive(Debug, Clone, Copy)]
pub enum ProfileAuth {
    BearerHeader,
    AccessTokenParam,
}

/// Generic authorization-code provider with PKCE. Facebook and Twitter are
/// both configurations of this.
pub struct OAuth2Provider {
    pub(crate) name: String,
    pub(crate) auth_url: String,
    pub(crate) token_url: String,
    pub(crate) profile_url: String,
    pub(crate) scopes: Vec<String>,
    pub(crate) client_id: String,
    pub(crate) client_secret: String,
    pub(crate) redirect_url: String,
    pub(crate) profile_auth: ProfileAuth,
    pub(crate) map_profile: fn(&serde_json::Value) -> (String, String),
    pub(crate) http: reqwest::Client,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[async_trait]
impl Provider for OAuth2Provider {
    fn name(&self) -> &str {
        &self.name
    }

    fn begin_auth(&self, state: &str) -> Result<FlowBegin, AuthError> {
        let (pkce_challenge, pkce_verifier) = PkceCodeChallenge::new_random_sha256();

        let mut url = reqwest::Url::parse(&self.auth_url)
            .map_err(|e| AuthError::Endpoint(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &self.redirect_url)
            .append_pair("response_type", "code")
            .append_pair("state", state)
            .append_pair("scope", &self.scopes.join(" "))
            .append_pair("code_challenge", pkce_challenge.as_str())
            .append_pair("code_challenge_method", "S256");

        Ok(FlowBegin {
            auth_url: url.to_string(),
            flow: FlowState {
                state: state.to_owned(),
                pkce_verifier: pkce_verifier.secret().to_owned(),
            },
        })
    }

    async fn exchange(
        &self,
        flow: &FlowState,
        params: &CallbackParams,
    ) -> Result<AccessGrant, AuthError> {
        let pkce_verifier = PkceCodeVerifier::new(flow.pkce_verifier.clone());

        let form = [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("code", params.code.as_str()),
            ("code_verifier", pkce_verifier.secret()),
            ("grant_type", "authorization_code"),
            ("redirect_uri", self.redirect_url.as_str()),
        ];

        let response = self
            .http
            .post(&self.token_url)
            .form(&form)
            .send()
            .await
            .map_err(|e| AuthError::Exchange(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::Exchange(format!("HTTP {}: {}", status, body)));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Exchange(e.to_string()))?;

        Ok(AccessGrant {
            access_token: token.access_token,
        })
    }

    async fn fetch_user(&self, grant: &AccessGrant) -> Result<UserProfile, AuthError> {
        let request = self.http.get(&self.profile_url);
        let request = match self.profile_auth {
            ProfileAuth::BearerHeader => request.bearer_auth(&grant.access_token),
            ProfileAuth::AccessTokenParam => {
                request.query(&[("access_token", grant.access_token.as_str())])
            }
        };

        let response = request
            .send()
            .await
            .map_err(|e| AuthError::Profile(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::Profile(format!("HTTP {}: {}", status, body)));
        }

        let raw: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AuthError::Profile(e.to_string()))?;
        let (name, avatar_url) = (self.map_profile)(&raw);

        Ok(UserProfile {
            provider: self.name.clone(),
            name,
            avatar_url,
            raw,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::models::ProviderCredentials;

    fn credentials() -> ProviderCredentials {
        ProviderCredentials {
            client_id: "id".into(),
            client_secret: "secret".into(),
        }
    }

    fn query_map(auth_url: &str) -> HashMap<String, String> {
        url::Url::parse(auth_url)
            .unwrap()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn facebook_auth_url_carries_state_and_pkce() {
        let provider = facebook(&credentials(), "http://localhost:3000/auth/facebook/callback");
        let begun = provider.begin_auth("abc").unwrap();
        let query = query_map(&begun.auth_url);

        assert_eq!(query.get("state").map(String::as_str), Some("abc"));
        assert_eq!(query.get("client_id").map(String::as_str), Some("id"));
        assert_eq!(
            query.get("code_challenge_method").map(String::as_str),
            Some("S256")
        );
        assert!(!query.get("code_challenge").unwrap().is_empty());
        assert_eq!(begun.flow.state, "abc");
        assert!(!begun.flow.pkce_verifier.is_empty());
    }

    #[test]
    fn twitter_auth_url_requests_profile_scopes() {
        let provider = twitter(&credentials(), "http://localhost:3000/auth/twitter/callback");
        let begun = provider.begin_auth("xyz").unwrap();
        let query = query_map(&begun.auth_url);

        assert!(query.get("scope").unwrap().contains("users.read"));
        assert_eq!(
            query.get("redirect_uri").map(String::as_str),
            Some("http://localhost:3000/auth/twitter/callback")
        );
    }

    #[test]
    fn profile_mappers_read_provider_shapes() {
        let facebook_raw = serde_json::json!({
            "name": "Alice",
            "picture": { "data": { "url": "http://x/a.png" } },
        });
        let provider = facebook(&credentials(), "http://localhost/cb");
        assert_eq!(
            (provider.map_profile)(&facebook_raw),
            ("Alice".to_string(), "http://x/a.png".to_string())
        );

        let twitter_raw = serde_json::json!({
            "data": { "name": "Bob", "profile_image_url": "http://x/b.png" },
        });
        let provider = twitter(&credentials(), "http://localhost/cb");
        assert_eq!(
            (provider.map_profile)(&twitter_raw),
            ("Bob".to_string(), "http://x/b.png".to_string())
        );
    }
}
