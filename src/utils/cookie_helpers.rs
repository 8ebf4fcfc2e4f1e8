use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

const PERSISTENT_SESSION_DAYS: i64 = 14;

pub fn session_cookie(name: &str, account_id: &str, persistent: bool) -> Cookie<'static> {
    let builder = Cookie::build((name.to_string(), account_id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);

    if persistent {
        builder.max_age(Duration::days(PERSISTENT_SESSION_DAYS)).build()
    } else {
        // Session-scoped cookie, dropped when the browser closes.
        builder.build()
    }
}
