//! Shared types for the DineIn workspace
//!
//! Plain data exchanged between the order-session core and the UI shell:
//! menu and reservation models, session commands and responses, the
//! order summary snapshot, route parameters, and the unified error system.

pub mod error;
pub mod models;
pub mod order;
pub mod route;

// Re-exports
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use models::{MenuItem, ReservationDetails, Restaurant};
pub use order::{
    CommandError, CommandErrorCode, CommandResponse, FlowKind, LineItem, OrderSummary,
    SessionCommand, SessionCommandPayload, SessionState, ValidationError, ValidationField,
};
