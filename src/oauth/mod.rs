pub mod cookie;
pub mod registry;
pub mod session;

use std::sync::Arc;

use async_trait::async_trait;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::Cookie;
use oauth2::CsrfToken;
use tracing::{debug, warn};

use crate::error::AuthError;
use crate::models::{CallbackParams, FlowState, UserProfile};
use crate::providers::Provider;
use registry::ProviderRegistry;
use session::{FLOW_SESSION_KEY, SessionAccessor};

/// Strategy invoked once the callback leg resolves. Owns all response side
/// effects: result cookie, redirect target.
#[async_trait]
pub trait LoginCompletion: Send + Sync {
    async fn complete(&self, outcome: Result<UserProfile, AuthError>, jar: CookieJar) -> Response;
}

/// Default completion: encode the profile into the `auth` cookie and send the
/// visitor home. Failures are logged at warn and the visitor is still sent
/// home without a cookie.
pub struct CookieLogin;

#[async_trait]
impl LoginCompletion for CookieLogin {
    async fn complete(&self, outcome: Result<UserProfile, AuthError>, jar: CookieJar) -> Response {
        match outcome {
            Ok(user) => {
                debug!(provider = %user.provider, name = %user.name, "login completed");
                let jar = jar.add(cookie::login_cookie(&user));
                (jar, Redirect::to("/")).into_response()
            }
            Err(err) => {
                warn!(%err, "oauth callback failed");
                (jar, Redirect::to("/")).into_response()
            }
        }
    }
}

/// Thin wrapper orchestrating begin/callback/end against a named provider.
/// Protocol mechanics belong to the providers, persistence to the session
/// accessor; this only shuttles flow state between the two legs.
pub struct OauthClient {
    default_provider: Option<String>,
    registry: ProviderRegistry,
    completion: Arc<dyn LoginCompletion>,
}

impl OauthClient {
    pub fn new(registry: ProviderRegistry, completion: Arc<dyn LoginCompletion>) -> Self {
        Self {
            default_provider: None,
            registry,
            completion,
        }
    }

    pub fn with_default_provider(mut self, name: &str) -> Self {
        self.default_provider = Some(name.to_owned());
        self
    }

    fn resolve(&self, name: Option<&str>) -> Result<Arc<dyn Provider>, AuthError> {
        let name = name
            .filter(|n| !n.is_empty())
            .or(self.default_provider.as_deref())
            .ok_or(AuthError::UndefinedProvider)?;
        self.registry.resolve(name)
    }

    /// First leg: stash the provider's flow state in the session and hand
    /// back the authorization URL to redirect to. The `state` query param is
    /// honored when present; otherwise a random token is generated.
    pub async fn begin(
        &self,
        provider: Option<&str>,
        state_param: Option<&str>,
        session: &dyn SessionAccessor,
    ) -> Result<String, AuthError> {
        let provider = self.resolve(provider)?;

        let state = match state_param.filter(|s| !s.is_empty()) {
            Some(s) => s.to_owned(),
            None => CsrfToken::new_random().secret().clone(),
        };

        let begun = provider.begin_auth(&state)?;
        session
            .set(FLOW_SESSION_KEY, serde_json::to_string(&begun.flow)?)
            .await?;
        session.save().await?;

        debug!(provider = provider.name(), "oauth flow started");
        Ok(begun.auth_url)
    }

    /// Second leg: consume the stashed flow state (single use), verify the
    /// returned state, finish the exchange, fetch the profile. The caller
    /// hands the outcome to the completion strategy.
    pub async fn callback(
        &self,
        provider: Option<&str>,
        params: &CallbackParams,
        session: &dyn SessionAccessor,
    ) -> Result<UserProfile, AuthError> {
        let provider = self.resolve(provider)?;

        let blob = session
            .get(FLOW_SESSION_KEY)
            .await?
            .ok_or(AuthError::NoPendingFlow)?;
        session.delete(FLOW_SESSION_KEY).await?;
        session.save().await?;

        let flow: FlowState = serde_json::from_str(&blob)?;
        if flow.state != params.state {
            return Err(AuthError::StateMismatch);
        }

        let grant = provider.exchange(&flow, params).await?;
        provider.fetch_user(&grant).await
    }

    pub async fn complete(&self, outcome: Result<UserProfile, AuthError>, jar: CookieJar) -> Response {
        self.completion.complete(outcome, jar).await
    }

    /// Logout. Clears the result cookie unconditionally; no session-store
    /// interaction.
    pub fn end(&self) -> (Cookie<'static>, Redirect) {
        (cookie::removal_cookie(), Redirect::to("/"))
    }
}
