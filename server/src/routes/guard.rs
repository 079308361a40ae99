//! Route-guard middleware.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs on every navigable request before any SSR output is produced.
//! The decision itself lives in the shared `routing` crate; this layer
//! only feeds it the request path and the cookie-derived auth state, then
//! translates the outcome into a pass-through or a redirect.

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

use routing::RouteDecision;

use crate::services::session;

/// Gate a request on the shared guard decision.
///
/// API calls, framework assets, and image files bypass the guard entirely
/// — redirecting those would break the login page's own resources.
pub async fn route_guard(jar: CookieJar, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    if routing::is_guard_exempt(&path) {
        return next.run(request).await;
    }

    let authenticated = session::is_authenticated(&jar);
    match routing::decide(&path, authenticated) {
        RouteDecision::Allow => next.run(request).await,
        RouteDecision::ToLogin { next: original } => {
            tracing::debug!(%path, "unauthenticated access to protected route");
            Redirect::temporary(&routing::login_redirect(&original)).into_response()
        }
        RouteDecision::ToHome => {
            tracing::debug!(%path, "authenticated visitor on login route");
            Redirect::temporary(routing::HOME_ROUTE).into_response()
        }
    }
}
