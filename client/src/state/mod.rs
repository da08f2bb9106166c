//! Reactive application state provided through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! State structs are plain data wrapped in `RwSignal` by `app::App`; pages
//! mutate them through reducer-style methods so the optimistic-update and
//! rollback logic stays testable off the DOM.

pub mod feeds;
pub mod posts;
pub mod session;
pub mod ui;
