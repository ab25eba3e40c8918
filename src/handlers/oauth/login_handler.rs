use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;
use tracing::warn;

use crate::models::AppState;
use crate::oauth::session::FlowStore;

#[derive(Debug, Deserialize)]
pub struct BeginParams {
    pub state: Option<String>,
}

/// `GET /auth/{provider}` — first leg. Redirects to the provider's
/// authorization URL, or answers 400 with the error text.
pub async fn login_handler(
    State(app_state): State<AppState>,
    Path(provider): Path<String>,
    Query(params): Query<BeginParams>,
    FlowStore(session): FlowStore,
) -> Response {
    match app_state
        .oauth
        .begin(Some(&provider), params.state.as_deref(), session.as_ref())
        .await
    {
        Ok(auth_url) => Redirect::to(&auth_url).into_response(),
        Err(err) => {
            warn!(%provider, %err, "oauth begin failed");
            err.into_response()
        }
    }
}
