//! Business logic called from route handlers.

pub mod session;
