//! Server configuration loaded from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Runtime configuration for the SSR host.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP server binds to.
    pub port: u16,
    /// Origin of the feed backend, without a trailing slash.
    pub api_base: String,
}

impl AppConfig {
    /// Load from `PORT` and `API_BASE_URL`, falling back to defaults for
    /// anything missing or unparseable.
    #[must_use]
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let api_base = std::env::var("API_BASE_URL")
            .map(|raw| normalize_base(&raw))
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_owned());
        Self { port, api_base }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, api_base: DEFAULT_API_BASE.to_owned() }
    }
}

/// Trim whitespace and any trailing slashes so URL joins stay predictable.
fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
