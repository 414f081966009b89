//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page sections and chrome while reading/writing
//! shared state from Leptos context providers.

pub mod contact_form;
pub mod navbar;
pub mod preloader;
pub mod project_overlay;
pub mod projects;
pub mod scroll_to_top;
pub mod sections;
pub mod theme_toggle;
