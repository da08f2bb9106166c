//! Session state tracking the current user's identity.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use models::User;

/// Current-user state shared via context. The token itself stays in the
/// cookie store; this only caches the `/v1/user/me` summary, which is
/// re-fetched on every page load that needs it.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl SessionState {
    /// Whether the navbar should render the identity chrome.
    #[must_use]
    pub fn signed_in(&self) -> bool {
        self.user.is_some()
    }
}
