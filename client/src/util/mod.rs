//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure input validation and formatting live here so pages stay focused on
//! orchestration and the rules remain testable off the DOM.

pub mod relative_time;
pub mod validate;
