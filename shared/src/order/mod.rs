//! Order Session Types
//!
//! Types exchanged between the order-session core and the UI shell:
//! - Commands: user intents dispatched to a session
//! - Responses: outcome of a command, including validation failures
//! - Summary: the immutable snapshot produced when an order is placed

pub mod command;
pub mod summary;
pub mod types;

// Re-exports
pub use command::{SessionCommand, SessionCommandPayload};
pub use summary::{LineItem, OrderSummary};
pub use types::*;
