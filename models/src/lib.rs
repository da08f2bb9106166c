//! Shared view models and route policy for the RSS Deck client/server pair.
//!
//! DESIGN
//! ======
//! These types mirror the aggregation backend's `/v1/*` JSON bodies one to
//! one so both the browser client and the SSR host deserialize the same
//! shapes. Unknown fields are ignored; the client never invents identity
//! beyond the backend-assigned `id`.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

pub mod guard;

use serde::{Deserialize, Serialize};

/// A feed in the public directory, as returned by `GET /v1/feeds`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    /// Backend-assigned feed identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Source URL of the feed.
    pub url: String,
    /// Short description; may be absent upstream.
    #[serde(default)]
    pub description: String,
    /// RFC 3339 timestamp of the last backend refresh.
    #[serde(default)]
    pub updated_at: String,
}

/// A follow record linking the current user to a feed,
/// as returned by `GET /v1/feed_follows`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowedFeed {
    /// The followed feed's identifier.
    pub feed_id: String,
}

/// A saved post, as returned by `GET /v1/posts`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Backend-assigned post identifier (UUID string).
    pub id: String,
    /// Post title.
    pub title: String,
    /// Link to the post.
    pub url: String,
    /// Post body or summary; may be absent upstream.
    #[serde(default)]
    pub description: String,
    /// Feed this post belongs to.
    pub feed_id: String,
    /// RFC 3339 publication timestamp.
    #[serde(default)]
    pub published_at: String,
}

/// The authenticated user's summary, as returned by `GET /v1/user/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Avatar image URL, if the account has one.
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Body of `POST /v1/auth/login` and of the SSR host's `POST /api/session`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response carrying the opaque session token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Body of `POST /v1/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /v1/feed_follows`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowRequest {
    pub feed_id: String,
}

/// Body of `POST /v1/feeds`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFeedRequest {
    pub name: String,
    pub url: String,
}
