use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Per-request OAuth flow errors. Startup errors (bad DB config, missing
/// credentials) are not represented here; those abort the process in `main`.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("no provider name given and no default configured")]
    UndefinedProvider,

    #[error("unknown provider `{0}`")]
    UnknownProvider(String),

    #[error("session store: {0}")]
    SessionStore(String),

    #[error("no login flow in progress")]
    NoPendingFlow,

    #[error("state parameter does not match the pending flow")]
    StateMismatch,

    #[error("corrupt flow state: {0}")]
    BadFlowState(#[from] serde_json::Error),

    #[error("invalid endpoint URL: {0}")]
    Endpoint(String),

    #[error("token exchange failed: {0}")]
    Exchange(String),

    #[error("profile fetch failed: {0}")]
    Profile(String),
}

impl From<tower_sessions::session::Error> for AuthError {
    fn from(err: tower_sessions::session::Error) -> Self {
        Self::SessionStore(err.to_string())
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}
