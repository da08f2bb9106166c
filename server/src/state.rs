//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the loaded configuration and one shared `reqwest` client so
//! credential validation reuses backend connections.

use crate::config::AppConfig;

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub http: reqwest::Client,
}

impl AppState {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self { config, http: reqwest::Client::new() }
    }
}
