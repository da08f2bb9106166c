//! Session gate middleware for SSR page routes.
//!
//! DESIGN
//! ======
//! The gate checks cookie *presence* only. Token validity is established by
//! the backend on every API call the page subsequently makes; rendering a
//! shell for a stale token costs nothing, while validating on every page
//! request would put the backend in the render path. The redirect policy
//! itself lives in `models::guard` so the client-side router applies the
//! identical rules during navigation.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

const TOKEN_COOKIE: &str = "authToken";

fn has_session(jar: &CookieJar) -> bool {
    jar.get(TOKEN_COOKIE).map(Cookie::value).is_some_and(|value| !value.is_empty())
}

/// Redirect page requests according to the shared route policy.
pub async fn route_guard(jar: CookieJar, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let decision = models::guard::decide(&path, has_session(&jar));
    if let Some(target) = models::guard::redirect_target(decision) {
        tracing::debug!(%path, %target, "session gate redirect");
        return Redirect::temporary(target).into_response();
    }
    next.run(request).await
}
