use axum::response::Html;
use axum_extra::extract::CookieJar;

use crate::models::UserData;
use crate::oauth::cookie;

/// Home page. Shows the decoded `auth` cookie when one is present; a missing
/// or undecodable cookie renders the logged-out page.
pub async fn index_handler(jar: CookieJar) -> Html<String> {
    let user = jar
        .get(cookie::AUTH_COOKIE)
        .and_then(|c| cookie::decode(c.value()));
    Html(render_index(user.as_ref()))
}

fn render_index(user: Option<&UserData>) -> String {
    match user {
        Some(user) => format!(
            r#"<!DOCTYPE html>
<html>
<head><title>Login demo</title></head>
<body>
    <p>Signed in as <strong>{}</strong></p>
    <img src="{}" alt="avatar" width="48" height="48">
    <p><a href="/logout">Log out</a></p>
</body>
</html>
"#,
            user.name, user.avatar_url
        ),
        None => r#"<!DOCTYPE html>
<html>
<head><title>Login demo</title></head>
<body>
    <p>You are not signed in.</p>
    <ul>
        <li><a href="/auth/facebook">Sign in with Facebook</a></li>
        <li><a href="/auth/twitter">Sign in with Twitter</a></li>
    </ul>
</body>
</html>
"#
        .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logged_out_page_has_no_user_data() {
        let page = render_index(None);
        assert!(!page.contains("Signed in"));
        assert!(page.contains("/auth/facebook"));
        assert!(page.contains("/auth/twitter"));
    }

    #[test]
    fn logged_in_page_shows_name_and_avatar() {
        let user = UserData {
            name: "Alice".into(),
            avatar_url: "http://x/a.png".into(),
        };
        let page = render_index(Some(&user));
        assert!(page.contains("Alice"));
        assert!(page.contains("http://x/a.png"));
        assert!(page.contains("/logout"));
    }
}
