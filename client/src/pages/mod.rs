//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (parallel fetches, optimistic
//! actions) and delegates rendering details to `components`.

pub mod dashboard;
pub mod feeds;
pub mod login;
pub mod posts;
pub mod register;
pub mod settings;
