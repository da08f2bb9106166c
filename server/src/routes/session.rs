//! Session API route.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use models::{LoginRequest, LoginResponse};

use crate::services::session::{self, SessionError};
use crate::state::AppState;

/// `POST /api/session` — validate credentials, return the backend token.
///
/// The handler never sets cookies; the browser persists the token itself so
/// there is exactly one cookie write surface in the product.
pub async fn create(
    State(state): State<AppState>,
    Json(credentials): Json<LoginRequest>,
) -> Response {
    match session::validate_credentials(&state.http, &state.config.api_base, &credentials).await {
        Ok(token) => Json(LoginResponse { token }).into_response(),
        Err(SessionError::InvalidCredentials) => {
            tracing::debug!(email = %credentials.email, "login rejected");
            (
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({ "error": "invalid credentials" })),
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "backend login unavailable");
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "error": "login temporarily unavailable" })),
            )
                .into_response()
        }
    }
}
