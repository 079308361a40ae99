//! Auth-session cookie management.
//!
//! ARCHITECTURE
//! ============
//! The session is a single boolean fact encoded in the `canfs_auth` cookie.
//! There is no server-side record and no user identity; the cookie's
//! lifetime is the session's lifetime. Cookie absence, a malformed value,
//! and an explicit "false" all collapse into unauthenticated — there is no
//! separate error state.
//!
//! The cookie is intentionally NOT HttpOnly: the client-side guard mirror
//! reads it through `document.cookie` on every page mount.

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use routing::AUTH_COOKIE;

/// The only cookie value that counts as authenticated.
const AUTHENTICATED_VALUE: &str = "true";

/// Whether the jar carries an authenticated session.
///
/// Returns `false` for an absent cookie or any value other than the
/// literal `"true"`.
#[must_use]
pub fn is_authenticated(jar: &CookieJar) -> bool {
    jar.get(AUTH_COOKIE).map(Cookie::value) == Some(AUTHENTICATED_VALUE)
}

/// Build the cookie marking this browser as authenticated.
///
/// Scoped to the root path with a lax cross-site policy so top-level
/// navigation keeps working; `secure` follows the serving transport.
#[must_use]
pub fn login_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE, AUTHENTICATED_VALUE))
        .path("/")
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

/// Build the expired cookie that clears the session.
#[must_use]
pub fn clear_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE, ""))
        .path("/")
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}
