use axum_extra::extract::cookie::Cookie;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::models::{UserData, UserProfile};

/// Name of the result cookie holding the encoded post-login profile snippet.
pub const AUTH_COOKIE: &str = "auth";

/// base64(JSON) of the display fields. Used only client-side for rendering.
pub fn encode(user: &UserProfile) -> String {
    let data = UserData {
        name: user.name.clone(),
        avatar_url: user.avatar_url.clone(),
    };
    STANDARD.encode(serde_json::to_vec(&data).unwrap_or_default())
}

/// Absent or undecodable cookies yield `None`; the page just renders
/// logged-out.
pub fn decode(raw: &str) -> Option<UserData> {
    let bytes = STANDARD.decode(raw).ok()?;
    serde_json::from_slice(&bytes).ok()
}

pub fn login_cookie(user: &UserProfile) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE, encode(user))).path("/").build()
}

/// Empty value, immediate expiry. Logout sets this unconditionally.
pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::new(AUTH_COOKIE, "");
    cookie.set_path("/");
    cookie.make_removal();
    cookie
}
