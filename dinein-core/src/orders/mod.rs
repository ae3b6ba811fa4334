//! Order/Reservation Session Module
//!
//! - **session**: `OrderSession`, the per-restaurant state machine
//! - **selection**: quantity-per-item cart
//! - **reservation**: reservation form draft and submit validation
//! - **money**: decimal totals and formatting
//! - **actions**: one handler per `SessionCommandPayload` variant
//!
//! # State Machine
//!
//! ```text
//! Reserving ──submit──▶ Ordering ──place──▶ Submitted
//!                         │  ▲
//!                         └──┘ cancel
//! ```
//!
//! Reserve-only flows and declined ordering end in `Reserved`.

pub mod actions;
pub mod money;
pub mod reservation;
pub mod selection;
pub mod session;
pub mod traits;

// Re-exports
pub use money::{compute_total, format_money, line_total};
pub use reservation::ReservationDraft;
pub use selection::SelectionMap;
pub use session::OrderSession;
pub use traits::{ActionOutcome, CommandHandler, SessionError};

// Re-export shared types for convenience
pub use shared::order::{
    CommandError, CommandErrorCode, CommandResponse, FlowKind, LineItem, OrderSummary,
    SessionCommand, SessionCommandPayload, SessionState, ValidationError, ValidationField,
};
