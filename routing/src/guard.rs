//! Route-guard decision function.
//!
//! SYSTEM CONTEXT
//! ==============
//! Invoked on every navigable request (server middleware) and on every
//! page mount (client mirror). Pure over its inputs: the request path and
//! an injected "is authenticated" boolean. It never reads cookies itself
//! and never mutates session state.

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

use crate::{HOME_ROUTE, LOGIN_ROUTE, NEXT_PARAM, PROTECTED_PREFIXES, PUBLIC_PREFIXES};

/// Prefix-based classification of a request path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteClass {
    /// Requires authentication to view.
    Protected,
    /// Login surface, redirected away from once authenticated.
    Public,
    /// Everything else; the guard does not care.
    Neither,
}

/// Outcome of the guard for one request. Exactly one is produced; the
/// guard has no failure mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "outcome")]
pub enum RouteDecision {
    /// Pass the request through unchanged.
    Allow,
    /// Redirect to the login route, carrying the original path so the
    /// login flow can return the user afterward.
    ToLogin {
        /// The originally requested path, for the `next` query parameter.
        next: String,
    },
    /// Redirect to the default authenticated landing route.
    ToHome,
}

/// Classify a path by literal prefix match.
///
/// Matching is a plain `starts_with` test, so `/fnax` is Protected because
/// `/fna` is a protected prefix. That mirrors the original behavior and is
/// kept intentionally; segment-aware matching would be a behavior change.
#[must_use]
pub fn classify(path: &str) -> RouteClass {
    if PROTECTED_PREFIXES.iter().any(|p| path.starts_with(p)) {
        RouteClass::Protected
    } else if PUBLIC_PREFIXES.iter().any(|p| path.starts_with(p)) {
        RouteClass::Public
    } else {
        RouteClass::Neither
    }
}

/// Decide what to do with a request. First matching rule wins:
///
/// 1. Protected path without authentication → [`RouteDecision::ToLogin`].
/// 2. Exactly the login route while authenticated → [`RouteDecision::ToHome`].
/// 3. Otherwise → [`RouteDecision::Allow`].
#[must_use]
pub fn decide(path: &str, authenticated: bool) -> RouteDecision {
    match classify(path) {
        RouteClass::Protected if !authenticated => RouteDecision::ToLogin { next: path.to_owned() },
        RouteClass::Public if authenticated && path == LOGIN_ROUTE => RouteDecision::ToHome,
        RouteClass::Protected | RouteClass::Public | RouteClass::Neither => RouteDecision::Allow,
    }
}

/// Build the login redirect target for a [`RouteDecision::ToLogin`] outcome.
#[must_use]
pub fn login_redirect(next: &str) -> String {
    format!("{LOGIN_ROUTE}?{NEXT_PARAM}={next}")
}

impl RouteDecision {
    /// The redirect target for this decision, or `None` for pass-through.
    #[must_use]
    pub fn redirect_target(&self) -> Option<String> {
        match self {
            Self::Allow => None,
            Self::ToLogin { next } => Some(login_redirect(next)),
            Self::ToHome => Some(HOME_ROUTE.to_owned()),
        }
    }
}

/// Paths the guard must not intercept: API calls, framework assets, the
/// liveness probe, and plain image files.
#[must_use]
pub fn is_guard_exempt(path: &str) -> bool {
    const EXEMPT_PREFIXES: &[&str] = &["/api/", "/pkg/", "/healthz", "/favicon.ico"];
    const EXEMPT_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".svg"];

    EXEMPT_PREFIXES.iter().any(|p| path.starts_with(p))
        || EXEMPT_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}
