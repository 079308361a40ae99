//! Auth routes — advisor access-code login, logout, session probe.
//!
//! SYSTEM CONTEXT
//! ==============
//! The credential check here is a stand-in for an external identity
//! service: a single advisor access code from the environment. What this
//! app actually owns is the boolean session cookie it sets and clears;
//! the guard logic never looks at credentials, only at that cookie.

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::services::session;
use crate::state::AppState;

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

/// Whether session cookies should carry the `secure` flag.
///
/// `COOKIE_SECURE` wins when set; otherwise inferred from the scheme of
/// `PUBLIC_BASE_URL`.
pub(crate) fn cookie_secure() -> bool {
    if let Some(value) = env_bool("COOKIE_SECURE") {
        return value;
    }

    std::env::var("PUBLIC_BASE_URL")
        .map(|url| url.starts_with("https://"))
        .unwrap_or(false)
}

#[derive(Deserialize)]
pub struct LoginRequest {
    access_code: String,
}

/// `POST /api/auth/login` — check the advisor access code and set the
/// session cookie.
pub async fn login(State(state): State<AppState>, jar: CookieJar, Json(body): Json<LoginRequest>) -> Response {
    let Some(access) = &state.access else {
        return (StatusCode::SERVICE_UNAVAILABLE, "advisor login not configured").into_response();
    };

    if body.access_code.trim() != access.access_code {
        tracing::info!("login rejected: access code mismatch");
        return (StatusCode::UNAUTHORIZED, "invalid access code").into_response();
    }

    let jar = jar.add(session::login_cookie(cookie_secure()));
    (jar, StatusCode::NO_CONTENT).into_response()
}

/// `POST /api/auth/logout` — clear the session cookie.
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    let jar = jar.add(session::clear_cookie(cookie_secure()));
    (jar, StatusCode::NO_CONTENT)
}

/// `GET /api/auth/session` — report the cookie-derived session state.
pub async fn session_state(jar: CookieJar) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "authenticated": session::is_authenticated(&jar) }))
}
