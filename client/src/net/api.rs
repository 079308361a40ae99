//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs, since these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<(), String>` outputs instead of panics so login
//! failures degrade into form messages without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use serde::Serialize;

#[cfg(feature = "hydrate")]
#[derive(Serialize)]
struct LoginBody<'a> {
    access_code: &'a str,
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    match status {
        401 => "Invalid access code.".to_owned(),
        503 => "Advisor login is not configured.".to_owned(),
        other => format!("Login failed: {other}"),
    }
}

/// Submit the advisor access code to `POST /api/auth/login`.
///
/// On success the server sets the session cookie; the caller only needs to
/// navigate. On failure the returned message is suitable for the form.
pub async fn login(access_code: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&LoginBody { access_code })
            .map_err(|e| format!("Login request failed: {e}"))?
            .send()
            .await
            .map_err(|e| format!("Login request failed: {e}"))?;
        if resp.ok() {
            Ok(())
        } else {
            Err(login_failed_message(resp.status()))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = access_code;
        Err("login is only available in the browser".to_owned())
    }
}

/// Log out by calling `POST /api/auth/logout`; the server expires the
/// session cookie.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout").send().await;
    }
}
