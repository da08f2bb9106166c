//! REST API helpers for the feed backend and the SSR host.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch
//! failures degrade to empty/loading UI without crashing hydration. Nothing
//! here retries; failed sections surface a notification at the call site.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use models::{Feed, FollowedFeed, Post, User};
#[cfg(feature = "hydrate")]
use models::{CreateFeedRequest, FollowRequest, LoginRequest, LoginResponse, RegisterRequest};

/// Fallback backend origin when no `api-base` meta tag is rendered.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Login goes through the SSR host so credentials validation stays
/// server-side; same-origin, no base prefix.
pub const SESSION_ENDPOINT: &str = "/api/session";

/// The backend origin the SSR shell was configured with. Rendered into a
/// `<meta name="api-base">` tag that [`api_base`] reads after hydration.
#[must_use]
pub fn configured_api_base() -> String {
    #[cfg(feature = "ssr")]
    {
        std::env::var("API_BASE_URL")
            .map(|raw| raw.trim_end_matches('/').to_owned())
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_owned())
    }
    #[cfg(not(feature = "ssr"))]
    {
        DEFAULT_API_BASE.to_owned()
    }
}

/// Resolve the backend origin in the browser from the shell's meta tag.
#[must_use]
pub fn api_base() -> String {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Ok(Some(meta)) = doc.query_selector("meta[name='api-base']") {
                if let Some(content) = meta.get_attribute("content") {
                    if !content.is_empty() {
                        return content;
                    }
                }
            }
        }
    }
    DEFAULT_API_BASE.to_owned()
}

#[cfg(any(test, feature = "hydrate"))]
fn feeds_url(base: &str) -> String {
    format!("{base}/v1/feeds")
}

#[cfg(any(test, feature = "hydrate"))]
fn follows_url(base: &str) -> String {
    format!("{base}/v1/feed_follows")
}

#[cfg(any(test, feature = "hydrate"))]
fn follow_delete_url(base: &str, feed_id: &str) -> String {
    format!("{base}/v1/feed_follows/{feed_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn posts_url(base: &str) -> String {
    format!("{base}/v1/posts")
}

#[cfg(any(test, feature = "hydrate"))]
fn me_url(base: &str) -> String {
    format!("{base}/v1/user/me")
}

#[cfg(any(test, feature = "hydrate"))]
fn register_url(base: &str) -> String {
    format!("{base}/v1/auth/register")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} request failed: {status}")
}

#[cfg(feature = "hydrate")]
fn bearer_header() -> Option<String> {
    crate::session::get().map(|token| format!("Bearer {token}"))
}

#[cfg(feature = "hydrate")]
fn with_bearer(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match bearer_header() {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    }
}

/// Validate credentials via the SSR host and return the session token.
///
/// # Errors
///
/// Returns an error string on transport failure, a non-OK status, or a
/// malformed response body. A 401 reads as invalid credentials.
pub async fn login(email: &str, password: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let resp = gloo_net::http::Request::post(SESSION_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.status() == 401 {
            return Err("invalid credentials".to_owned());
        }
        if !resp.ok() {
            return Err(request_failed_message("login", resp.status()));
        }
        let body: LoginResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /v1/auth/register`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the backend
/// responds with a non-OK status.
pub async fn register(name: &str, email: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = RegisterRequest {
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let resp = gloo_net::http::Request::post(&register_url(&api_base()))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("register", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password);
        Err("not available on server".to_owned())
    }
}

/// Fetch the public feed directory from `GET /v1/feeds`.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-OK status.
pub async fn fetch_feeds() -> Result<Vec<Feed>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&feeds_url(&api_base()))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("feeds", resp.status()));
        }
        resp.json().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch the current user's follow records from `GET /v1/feed_follows`.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-OK status.
pub async fn fetch_follows() -> Result<Vec<FollowedFeed>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::get(&follows_url(&api_base())))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("follows", resp.status()));
        }
        resp.json().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch saved posts for followed feeds from `GET /v1/posts`.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-OK status.
pub async fn fetch_posts() -> Result<Vec<Post>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::get(&posts_url(&api_base())))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("posts", resp.status()));
        }
        resp.json().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Register a new feed via `POST /v1/feeds`. The backend follows it for the
/// creating user, so callers mark it followed on success.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-OK status.
pub async fn create_feed(name: &str, url: &str) -> Result<Feed, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = CreateFeedRequest { name: name.to_owned(), url: url.to_owned() };
        let resp = with_bearer(gloo_net::http::Request::post(&feeds_url(&api_base())))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("create feed", resp.status()));
        }
        resp.json().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, url);
        Err("not available on server".to_owned())
    }
}

/// Follow a feed via `POST /v1/feed_follows`.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-OK status.
pub async fn follow(feed_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = FollowRequest { feed_id: feed_id.to_owned() };
        let resp = with_bearer(gloo_net::http::Request::post(&follows_url(&api_base())))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("follow", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = feed_id;
        Err("not available on server".to_owned())
    }
}

/// Unfollow a feed via `DELETE /v1/feed_follows/{feed_id}`.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-OK status.
pub async fn unfollow(feed_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::delete(&follow_delete_url(
            &api_base(),
            feed_id,
        )))
        .send()
        .await
        .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("unfollow", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = feed_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch the authenticated user's summary from `GET /v1/user/me`.
/// Returns `None` if not authenticated, on failure, or on the server.
pub async fn fetch_me() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::get(&me_url(&api_base())))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
