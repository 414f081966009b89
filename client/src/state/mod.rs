//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each page component owns one plain state value, held in an `RwSignal` and
//! provided through context by `App`. State types make every decision without
//! touching the DOM so they are tested natively; browser effects live in
//! `util` and `components`.

pub mod chrome;
pub mod contact;
pub mod overlay;
pub mod reveal;
pub mod scroll;
pub mod theme;
