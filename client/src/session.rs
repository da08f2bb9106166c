//! Cookie-backed session token store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `authToken` cookie is the one session mechanism in the product: this
//! module is its single read/write surface. The SSR host's route guard only
//! checks cookie *presence*; everything that writes or deletes session
//! cookies goes through here.
//!
//! Cookie strings are built and parsed by pure helpers so the attribute
//! contract (7-day expiry, `SameSite=Lax`, `Secure` over HTTPS) is testable
//! without a browser; `document.cookie` access is hydrate-only.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Cookie holding the opaque bearer token.
pub const TOKEN_COOKIE: &str = "authToken";
/// Cached identity cookie, cleared together with the token.
pub const EMAIL_COOKIE: &str = "userEmail";
/// Cached identity cookie, cleared together with the token.
pub const NAME_COOKIE: &str = "userName";

const DEFAULT_EXPIRY_DAYS: f64 = 7.0;

/// Attributes applied when persisting a session cookie.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CookieAttrs {
    /// Days until the cookie expires.
    pub expiry_days: f64,
    /// Whether to mark the cookie `Secure` (HTTPS origins).
    pub secure: bool,
}

impl Default for CookieAttrs {
    fn default() -> Self {
        Self { expiry_days: DEFAULT_EXPIRY_DAYS, secure: false }
    }
}

impl CookieAttrs {
    /// Attributes for the current origin: 7-day expiry, `Secure` iff the
    /// page is served over HTTPS.
    #[must_use]
    pub fn for_origin() -> Self {
        Self { secure: secure_origin(), ..Self::default() }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn build_set_cookie(name: &str, value: &str, expires_utc: &str, secure: bool) -> String {
    let mut cookie = format!("{name}={value}; Expires={expires_utc}; Path=/; SameSite=Lax");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

#[cfg(any(test, feature = "hydrate"))]
fn build_clear_cookie(name: &str) -> String {
    format!("{name}=; Max-Age=0; Path=/; SameSite=Lax")
}

#[cfg(any(test, feature = "hydrate"))]
fn cookie_value(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name && !value.is_empty()).then(|| value.to_owned())
    })
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;
    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

#[cfg(feature = "hydrate")]
fn expiry_utc_string(days: f64) -> String {
    let date = js_sys::Date::new_0();
    date.set_time(date.get_time() + days * 86_400_000.0);
    String::from(date.to_utc_string())
}

#[cfg(feature = "hydrate")]
fn write_cookie(cookie: &str) {
    if let Some(doc) = html_document() {
        let _ = doc.set_cookie(cookie);
    }
}

/// Whether the page is served over HTTPS (cookies should be `Secure`).
#[must_use]
pub fn secure_origin() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().protocol().ok())
            .is_some_and(|protocol| protocol == "https:")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Persist the session token under `authToken` with the given attributes.
pub fn set(token: &str, attrs: CookieAttrs) {
    #[cfg(feature = "hydrate")]
    {
        let expires = expiry_utc_string(attrs.expiry_days);
        write_cookie(&build_set_cookie(TOKEN_COOKIE, token, &expires, attrs.secure));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, attrs);
    }
}

/// Cache the account email alongside the token, same attributes.
pub fn remember_email(email: &str, attrs: CookieAttrs) {
    #[cfg(feature = "hydrate")]
    {
        let expires = expiry_utc_string(attrs.expiry_days);
        write_cookie(&build_set_cookie(EMAIL_COOKIE, email, &expires, attrs.secure));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, attrs);
    }
}

/// Cache the display name alongside the token, same attributes.
pub fn remember_name(name: &str, attrs: CookieAttrs) {
    #[cfg(feature = "hydrate")]
    {
        let expires = expiry_utc_string(attrs.expiry_days);
        write_cookie(&build_set_cookie(NAME_COOKIE, name, &expires, attrs.secure));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, attrs);
    }
}

/// The current session token, if any. `None` on the server or logged out.
#[must_use]
pub fn get() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let header = html_document()?.cookie().ok()?;
        cookie_value(&header, TOKEN_COOKIE)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Remove the token and any cached identity cookies.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        for name in [TOKEN_COOKIE, EMAIL_COOKIE, NAME_COOKIE] {
            write_cookie(&build_clear_cookie(name));
        }
    }
}
