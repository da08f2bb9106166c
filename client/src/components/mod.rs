//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and list items while reading/writing
//! shared state from Leptos context providers.

pub mod feed_card;
pub mod navbar;
pub mod notice_stack;
pub mod post_card;
