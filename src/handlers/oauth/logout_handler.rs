use axum::extract::State;
use axum::response::IntoResponse;
use axum_extra::extract::CookieJar;

use crate::models::AppState;

/// `GET /logout` — clears the `auth` cookie and sends the visitor home,
/// regardless of prior login state.
pub async fn logout_handler(State(app_state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let (cleared, redirect) = app_state.oauth.end();
    (jar.add(cleared), redirect)
}
