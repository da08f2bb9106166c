use super::*;

// =============================================================
// Public allow-list
// =============================================================

#[test]
fn login_register_and_static_paths_are_public() {
    assert!(is_public("/login"));
    assert!(is_public("/register"));
    assert!(is_public("/pkg/rssdeck.wasm"));
    assert!(is_public("/favicon.ico"));
    assert!(is_public("/api/public/status"));
}

#[test]
fn protected_paths_are_not_public() {
    assert!(!is_public("/"));
    assert!(!is_public("/feeds"));
    assert!(!is_public("/posts"));
    assert!(!is_public("/settings"));
}

// =============================================================
// decide
// =============================================================

#[test]
fn absent_token_redirects_protected_paths_to_login() {
    for path in ["/", "/feeds", "/posts", "/settings"] {
        assert_eq!(decide(path, false), GuardDecision::RedirectLogin, "path {path}");
    }
}

#[test]
fn absent_token_allows_public_paths() {
    for path in ["/login", "/register", "/pkg/rssdeck.js", "/favicon.ico"] {
        assert_eq!(decide(path, false), GuardDecision::Allow, "path {path}");
    }
}

#[test]
fn present_token_allows_protected_paths() {
    for path in ["/", "/feeds", "/posts", "/settings"] {
        assert_eq!(decide(path, true), GuardDecision::Allow, "path {path}");
    }
}

#[test]
fn present_token_on_login_page_redirects_home() {
    assert_eq!(decide("/login", true), GuardDecision::RedirectHome);
}

#[test]
fn present_token_on_register_page_still_renders() {
    assert_eq!(decide("/register", true), GuardDecision::Allow);
}

#[test]
fn redirect_target_maps_decisions_to_paths() {
    assert_eq!(redirect_target(GuardDecision::Allow), None);
    assert_eq!(redirect_target(GuardDecision::RedirectLogin), Some("/login"));
    assert_eq!(redirect_target(GuardDecision::RedirectHome), Some("/"));
}
