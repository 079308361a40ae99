//! Client-side session cookie access.
//!
//! Reads and clears the `canfs_auth` cookie through `document.cookie`.
//! Outside a browser (SSR, tests) the cookie store is unavailable and
//! every read reports unauthenticated — there is no separate error state.
//!
//! The parsing and serialization cores are plain string functions so they
//! can be tested natively without a DOM.

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use routing::AUTH_COOKIE;

/// Whether a `document.cookie` header string carries `canfs_auth=true`.
///
/// Any other value for the cookie, or its absence, is unauthenticated.
#[must_use]
pub fn cookie_header_has_auth(header: &str) -> bool {
    header
        .split("; ")
        .filter_map(|pair| pair.split_once('='))
        .any(|(name, value)| name == AUTH_COOKIE && value == "true")
}

/// Serialize the expired cookie that clears the session: empty value,
/// root path, immediate expiry, lax cross-site policy, `secure` over TLS.
#[must_use]
pub fn clear_cookie_string(secure: bool) -> String {
    let secure_flag = if secure { "; secure" } else { "" };
    format!("{AUTH_COOKIE}=; path=/; max-age=0; samesite=lax{secure_flag}")
}

/// Whether the current browser session is authenticated.
///
/// Returns `false` when no DOM is available.
#[must_use]
pub fn has_auth_cookie() -> bool {
    #[cfg(feature = "hydrate")]
    {
        document_cookie().is_some_and(|header| cookie_header_has_auth(&header))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Clear the session cookie. No-op outside a browser.
pub fn clear_auth_cookie() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(html_document) = document.dyn_into::<web_sys::HtmlDocument>() else {
            return;
        };
        let secure = web_sys::window()
            .and_then(|w| w.location().protocol().ok())
            .is_some_and(|protocol| protocol == "https:");
        let _ = html_document.set_cookie(&clear_cookie_string(secure));
    }
}

#[cfg(feature = "hydrate")]
fn document_cookie() -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let html_document = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
    html_document.cookie().ok()
}
