//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod dom;
pub mod revealers;
pub mod schedule;
pub mod smooth_scroll;
pub mod theme_storage;
