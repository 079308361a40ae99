use super::*;

// =============================================================================
// classify — literal prefix semantics
// =============================================================================

#[test]
fn classify_protected_prefixes() {
    assert_eq!(classify("/dashboard"), RouteClass::Protected);
    assert_eq!(classify("/fna"), RouteClass::Protected);
    assert_eq!(classify("/prospect"), RouteClass::Protected);
    assert_eq!(classify("/prospect/123"), RouteClass::Protected);
}

#[test]
fn classify_is_literal_prefix_not_segment_aware() {
    // `/fnax` starts with `/fna`, so it is Protected. Intentional.
    assert_eq!(classify("/fnax"), RouteClass::Protected);
    assert_eq!(classify("/dashboard-v2"), RouteClass::Protected);
}

#[test]
fn classify_public_prefix() {
    assert_eq!(classify("/auth"), RouteClass::Public);
    assert_eq!(classify("/auth/reset"), RouteClass::Public);
}

#[test]
fn classify_neither() {
    assert_eq!(classify("/"), RouteClass::Neither);
    assert_eq!(classify("/about"), RouteClass::Neither);
    assert_eq!(classify("/fn"), RouteClass::Neither);
}

// =============================================================================
// decide — the three-rule decision table
// =============================================================================

#[test]
fn protected_without_auth_redirects_to_login_with_next() {
    for path in ["/dashboard", "/fna", "/prospect/123", "/fnax"] {
        let decision = decide(path, false);
        assert_eq!(decision, RouteDecision::ToLogin { next: path.to_owned() }, "path {path:?}");
    }
}

#[test]
fn protected_with_auth_is_allowed() {
    for path in ["/dashboard", "/fna", "/prospect/123"] {
        assert_eq!(decide(path, true), RouteDecision::Allow, "path {path:?}");
    }
}

#[test]
fn login_route_while_authenticated_redirects_home() {
    assert_eq!(decide("/auth", true), RouteDecision::ToHome);
}

#[test]
fn login_route_while_unauthenticated_is_allowed() {
    assert_eq!(decide("/auth", false), RouteDecision::Allow);
}

#[test]
fn login_subpath_while_authenticated_is_allowed() {
    // Rule 2 requires the exact login path, not just the prefix.
    assert_eq!(decide("/auth/reset", true), RouteDecision::Allow);
}

#[test]
fn unclassified_paths_are_allowed_regardless_of_auth() {
    for path in ["/", "/about", "/fn"] {
        assert_eq!(decide(path, false), RouteDecision::Allow, "path {path:?}");
        assert_eq!(decide(path, true), RouteDecision::Allow, "path {path:?}");
    }
}

#[test]
fn decide_is_idempotent() {
    for path in ["/dashboard", "/auth", "/about"] {
        for authed in [false, true] {
            assert_eq!(decide(path, authed), decide(path, authed));
        }
    }
}

// =============================================================================
// redirect targets — concrete scenarios
// =============================================================================

#[test]
fn dashboard_without_cookie_targets_login_with_next() {
    let target = decide("/dashboard", false).redirect_target();
    assert_eq!(target.as_deref(), Some("/auth?next=/dashboard"));
}

#[test]
fn prospect_subpath_without_auth_targets_login_with_full_path() {
    let target = decide("/prospect/123", false).redirect_target();
    assert_eq!(target.as_deref(), Some("/auth?next=/prospect/123"));
}

#[test]
fn login_while_authenticated_targets_home() {
    let target = decide("/auth", true).redirect_target();
    assert_eq!(target.as_deref(), Some("/dashboard"));
}

#[test]
fn allow_has_no_redirect_target() {
    assert_eq!(decide("/fna", true).redirect_target(), None);
}

// =============================================================================
// guard exemptions
// =============================================================================

#[test]
fn api_and_assets_are_exempt() {
    assert!(is_guard_exempt("/api/auth/login"));
    assert!(is_guard_exempt("/pkg/canfs.wasm"));
    assert!(is_guard_exempt("/healthz"));
    assert!(is_guard_exempt("/favicon.ico"));
    assert!(is_guard_exempt("/can-logo.png"));
    assert!(is_guard_exempt("/img/hero.jpeg"));
}

#[test]
fn navigable_pages_are_not_exempt() {
    assert!(!is_guard_exempt("/dashboard"));
    assert!(!is_guard_exempt("/fna"));
    assert!(!is_guard_exempt("/auth"));
    assert!(!is_guard_exempt("/"));
}

// =============================================================================
// prefix tables
// =============================================================================

#[test]
fn protected_and_public_prefix_sets_are_disjoint() {
    for p in crate::PROTECTED_PREFIXES {
        for q in crate::PUBLIC_PREFIXES {
            assert!(!p.starts_with(*q) && !q.starts_with(*p), "{p:?} vs {q:?}");
        }
    }
}
