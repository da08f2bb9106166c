use super::*;

#[test]
fn login_url_joins_backend_origin() {
    assert_eq!(login_url("http://localhost:8080"), "http://localhost:8080/v1/auth/login");
}

#[test]
fn backend_response_parses_token() {
    let parsed: BackendLoginResponse =
        serde_json::from_str(r#"{"token":"abc123","expires_in":3600}"#).expect("valid body");
    assert_eq!(parsed.token, "abc123");
}

#[test]
fn backend_response_rejects_missing_token() {
    let parsed = serde_json::from_str::<BackendLoginResponse>(r#"{"ok":true}"#);
    assert!(parsed.is_err());
}

#[test]
fn session_error_messages_are_user_safe() {
    assert_eq!(SessionError::InvalidCredentials.to_string(), "invalid credentials");
}
