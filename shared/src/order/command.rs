//! Session commands (user intents)
//!
//! The UI shell never mutates session state directly; each user action
//! is expressed as a [`SessionCommand`] and dispatched to the session.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Command envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCommand {
    /// Client-generated ID echoed back in the response
    pub command_id: String,
    pub payload: SessionCommandPayload,
}

impl SessionCommand {
    pub fn new(payload: SessionCommandPayload) -> Self {
        Self {
            command_id: uuid::Uuid::new_v4().to_string(),
            payload,
        }
    }
}

/// Command payloads
///
/// ```json
/// { "type": "INCREMENT", "item_id": 1 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionCommandPayload {
    /// Raw guest-count text as typed; validated on submit
    SetGuestCount { value: String },
    SetDateTime { date: NaiveDate, time: NaiveTime },
    SelectTable { table: i64 },
    SubmitReservation,
    /// Decline ordering after a confirmed reservation
    SkipOrdering,
    Increment { item_id: i64 },
    Decrement { item_id: i64 },
    PlaceOrder,
    CancelOrder,
}

impl SessionCommandPayload {
    /// Short name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            SessionCommandPayload::SetGuestCount { .. } => "set_guest_count",
            SessionCommandPayload::SetDateTime { .. } => "set_date_time",
            SessionCommandPayload::SelectTable { .. } => "select_table",
            SessionCommandPayload::SubmitReservation => "submit_reservation",
            SessionCommandPayload::SkipOrdering => "skip_ordering",
            SessionCommandPayload::Increment { .. } => "increment",
            SessionCommandPayload::Decrement { .. } => "decrement",
            SessionCommandPayload::PlaceOrder => "place_order",
            SessionCommandPayload::CancelOrder => "cancel_order",
        }
    }
}
