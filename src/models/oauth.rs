use serde::{Deserialize, Serialize};

/// Transient state bridging the begin and callback legs of one OAuth
/// exchange. Serialized into the session during begin and consumed exactly
/// once during callback.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlowState {
    pub state: String,
    pub pkce_verifier: String,
}

/// Query parameters the provider appends when redirecting back to us.
/// Defaulted so that a provider error redirect (no `code`) still reaches the
/// completion strategy instead of failing extraction.
#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub state: String,
}

/// What a provider hands back from the first leg: where to send the visitor,
/// and the flow state to stash until they return.
#[derive(Debug)]
pub struct FlowBegin {
    pub auth_url: String,
    pub flow: FlowState,
}

/// Result of a completed code-for-token exchange.
#[derive(Debug, Clone)]
pub struct AccessGrant {
    pub access_token: String,
}
