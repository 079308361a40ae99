//! Shared route-authorization model for the CANFS app.
//!
//! This crate owns the guard decision used by both `server` (as an Axum
//! middleware gating SSR) and `client` (as a mount-time re-check on
//! client-side route transitions). Keeping the decision in one pure
//! function means the two checks cannot drift apart.

pub mod guard;

pub use guard::{RouteClass, RouteDecision, classify, decide, is_guard_exempt, login_redirect};

/// Cookie carrying the authenticated flag. Readable by client-side code,
/// so it is deliberately not HttpOnly.
pub const AUTH_COOKIE: &str = "canfs_auth";

/// The exact login route. Authenticated visitors are bounced away from it.
pub const LOGIN_ROUTE: &str = "/auth";

/// Default landing route for authenticated users.
pub const HOME_ROUTE: &str = "/dashboard";

/// Query parameter carrying the originally requested path through the
/// login redirect.
pub const NEXT_PARAM: &str = "next";

/// Path prefixes requiring authentication. Matching is literal
/// `starts_with`, not segment-aware.
pub const PROTECTED_PREFIXES: &[&str] = &["/dashboard", "/fna", "/prospect"];

/// Path prefixes of the public login surface. Must stay disjoint from
/// [`PROTECTED_PREFIXES`]; a path matching both is ambiguous.
pub const PUBLIC_PREFIXES: &[&str] = &["/auth"];
