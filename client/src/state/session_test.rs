use super::*;

#[test]
fn default_session_is_signed_out_and_idle() {
    let state = SessionState::default();
    assert!(!state.signed_in());
    assert!(!state.loading);
}

#[test]
fn session_with_user_is_signed_in() {
    let state = SessionState {
        user: Some(User { name: "Alice".to_owned(), email: "a@b.com".to_owned(), avatar: None }),
        loading: false,
    };
    assert!(state.signed_in());
}
