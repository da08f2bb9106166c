//! Credential validation against the feed backend.
//!
//! ARCHITECTURE
//! ============
//! The SSR host never mints tokens itself. It forwards credentials to the
//! backend's login endpoint and relays the opaque token back to the browser,
//! which persists it as the `authToken` cookie. That keeps one token format
//! across the product with the backend as the only authority.

use serde::Deserialize;

use models::LoginRequest;

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("backend login failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("unexpected login response: {0}")]
    BadResponse(String),
}

#[derive(Debug, Deserialize)]
struct BackendLoginResponse {
    token: String,
}

pub(crate) fn login_url(api_base: &str) -> String {
    format!("{api_base}/v1/auth/login")
}

/// Forward credentials to the backend and return the session token.
///
/// # Errors
///
/// `InvalidCredentials` for a 401 from the backend, `Upstream` for transport
/// or other HTTP failures, `BadResponse` when the body has no token.
pub async fn validate_credentials(
    http: &reqwest::Client,
    api_base: &str,
    credentials: &LoginRequest,
) -> Result<String, SessionError> {
    let resp = http.post(login_url(api_base)).json(credentials).send().await?;

    if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
        return Err(SessionError::InvalidCredentials);
    }
    let resp = resp.error_for_status()?;

    let body = resp.text().await?;
    let parsed: BackendLoginResponse = serde_json::from_str(&body)
        .map_err(|_| SessionError::BadResponse(body.chars().take(200).collect()))?;
    if parsed.token.is_empty() {
        return Err(SessionError::BadResponse("empty token".to_owned()));
    }
    Ok(parsed.token)
}
