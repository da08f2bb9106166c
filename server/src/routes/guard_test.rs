use super::*;

fn jar_with(name: &str, value: &str) -> CookieJar {
    CookieJar::new().add(Cookie::new(name.to_owned(), value.to_owned()))
}

// ============================================================================
// Cookie presence
// ============================================================================

#[test]
fn has_session_true_for_nonempty_token() {
    assert!(has_session(&jar_with(TOKEN_COOKIE, "abc123")));
}

#[test]
fn has_session_false_for_missing_cookie() {
    assert!(!has_session(&CookieJar::new()));
}

#[test]
fn has_session_false_for_empty_token() {
    assert!(!has_session(&jar_with(TOKEN_COOKIE, "")));
}

#[test]
fn has_session_ignores_other_cookies() {
    assert!(!has_session(&jar_with("userEmail", "a@b.com")));
}

// ============================================================================
// Shared policy agreement
// ============================================================================

#[test]
fn gate_redirects_follow_shared_policy() {
    use models::guard::{GuardDecision, decide};

    assert_eq!(decide("/feeds", false), GuardDecision::RedirectLogin);
    assert_eq!(decide("/login", true), GuardDecision::RedirectHome);
    assert_eq!(decide("/feeds", true), GuardDecision::Allow);
    assert_eq!(decide("/login", false), GuardDecision::Allow);
}
