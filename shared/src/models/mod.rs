//! Data models
//!
//! Shared between the session core and the UI shell. Everything here is
//! synthesized locally; nothing is persisted.

pub mod account;
pub mod menu_item;
pub mod reservation;
pub mod restaurant;

// Re-exports
pub use account::*;
pub use menu_item::*;
pub use reservation::*;
pub use restaurant::*;
