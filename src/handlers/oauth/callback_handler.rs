use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum_extra::extract::CookieJar;

use crate::models::{AppState, CallbackParams};
use crate::oauth::session::FlowStore;

/// `GET /auth/{provider}/callback` — second leg. The completion strategy
/// owns the response: cookie on success, logged warning and a plain redirect
/// home on failure.
pub async fn callback_handler(
    State(app_state): State<AppState>,
    Path(provider): Path<String>,
    Query(params): Query<CallbackParams>,
    FlowStore(session): FlowStore,
    jar: CookieJar,
) -> Response {
    let outcome = app_state
        .oauth
        .callback(Some(&provider), &params, session.as_ref())
        .await;
    app_state.oauth.complete(outcome, jar).await
}
