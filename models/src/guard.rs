//! Route-guard policy shared by the browser client and the SSR host.
//!
//! DESIGN
//! ======
//! The guard is a pure function of `(path, token-presence)` so the exact
//! same decision runs in the axum middleware on every server-rendered
//! navigation and in the client-side navigation effect after hydration.
//! Side effects (issuing the redirect) belong to the callers.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

/// Paths reachable without a session: auth screens, static assets, and the
/// public API prefix. Matching is by prefix, like the original middleware
/// matcher.
pub const PUBLIC_PATHS: &[&str] = &["/login", "/register", "/pkg", "/favicon.ico", "/api/public"];

/// The path of the login screen.
pub const LOGIN_PATH: &str = "/login";

/// The authenticated landing path.
pub const HOME_PATH: &str = "/";

/// Outcome of the guard for one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested page.
    Allow,
    /// Send the visitor to the login screen.
    RedirectLogin,
    /// Send an already-authenticated visitor back home.
    RedirectHome,
}

/// Whether `path` is on the public allow-list.
#[must_use]
pub fn is_public(path: &str) -> bool {
    PUBLIC_PATHS.iter().any(|public| path.starts_with(public))
}

/// Decide whether a navigation to `path` may render.
///
/// Policy, in order:
/// - a logged-in visit to the login page goes home
/// - a logged-out visit to any non-public path goes to login
/// - everything else renders
#[must_use]
pub fn decide(path: &str, has_token: bool) -> GuardDecision {
    if has_token && path == LOGIN_PATH {
        return GuardDecision::RedirectHome;
    }
    if !has_token && !is_public(path) {
        return GuardDecision::RedirectLogin;
    }
    GuardDecision::Allow
}

/// The redirect target for a decision, if it redirects.
#[must_use]
pub fn redirect_target(decision: GuardDecision) -> Option<&'static str> {
    match decision {
        GuardDecision::Allow => None,
        GuardDecision::RedirectLogin => Some(LOGIN_PATH),
        GuardDecision::RedirectHome => Some(HOME_PATH),
    }
}
