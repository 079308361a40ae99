//! Page-level guard mirror.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server middleware gates full navigations, but client-side route
//! transitions never reach it. Every routed page therefore re-checks the
//! session on mount using the SAME shared decision function; producing a
//! different outcome than the server for any input would be a defect, and
//! sharing `routing::decide` rules that out structurally.

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_location;

use crate::util::session;

/// The redirect target the mirror would apply for a path and auth state,
/// or `None` to stay put.
#[must_use]
pub fn mirror_redirect(path: &str, authenticated: bool) -> Option<String> {
    routing::decide(path, authenticated).redirect_target()
}

/// Re-run the guard against the current location whenever it changes,
/// navigating away on a redirect outcome. Install once per routed page.
///
/// Effects only run in the browser, so SSR output is untouched — the
/// server middleware has already made the same decision for that request.
pub fn install_route_guard<F>(navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let location = use_location();
    Effect::new(move || {
        let path = location.pathname.get();
        if let Some(target) = mirror_redirect(&path, session::has_auth_cookie()) {
            navigate(&target, NavigateOptions::default());
        }
    });
}
