//! Session state, validation and command response types

use super::summary::OrderSummary;
use crate::error::{AppError, ErrorCode};
use crate::models::ReservationDetails;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which screen sequence a session serves
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlowKind {
    /// Reserve a table, then order food for it
    #[default]
    ReserveAndOrder,
    /// Reserve a table without choosing a table number or ordering
    ReserveOnly,
    /// Browse a menu and order without a reservation
    MenuOnly,
}

impl FlowKind {
    /// Whether the flow starts with the reservation form
    pub fn requires_reservation(&self) -> bool {
        !matches!(self, FlowKind::MenuOnly)
    }

    /// Whether a table number must be picked before submit
    pub fn requires_table(&self) -> bool {
        matches!(self, FlowKind::ReserveAndOrder)
    }

    /// Whether the flow has an ordering step
    pub fn has_ordering(&self) -> bool {
        !matches!(self, FlowKind::ReserveOnly)
    }

    pub fn initial_state(&self) -> SessionState {
        if self.requires_reservation() {
            SessionState::Reserving
        } else {
            SessionState::Ordering
        }
    }
}

/// Session state machine
///
/// ```text
/// Reserving ──submit──▶ Ordering ──place──▶ Submitted
///     │                   │  ▲
///     │                   └──┘ cancel (cart cleared)
///     │                   │
///     └──submit (reserve-only)──▶ Reserved ◀──skip ordering
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionState {
    Reserving,
    Ordering,
    /// Order placed (terminal)
    Submitted,
    /// Reservation confirmed without an order (terminal)
    Reserved,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Submitted | SessionState::Reserved)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Reserving => "reserving",
            SessionState::Ordering => "ordering",
            SessionState::Submitted => "submitted",
            SessionState::Reserved => "reserved",
        };
        f.write_str(name)
    }
}

/// Reservation form field that failed validation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ValidationField {
    Guests,
    Table,
}

impl ValidationField {
    /// Field name used by form renderers for inline errors
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationField::Guests => "guests",
            ValidationField::Table => "table",
        }
    }
}

impl fmt::Display for ValidationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reservation validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: ValidationField,
    pub code: ErrorCode,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: ValidationField, code: ErrorCode, reason: impl Into<String>) -> Self {
        Self {
            field,
            code,
            reason: reason.into(),
        }
    }

    pub fn guests() -> Self {
        let code = ErrorCode::GuestCountInvalid;
        Self::new(ValidationField::Guests, code, code.message())
    }

    pub fn table_missing() -> Self {
        let code = ErrorCode::TableNotSelected;
        Self::new(ValidationField::Table, code, code.message())
    }

    pub fn table_out_of_range(table: i64, max: u8) -> Self {
        Self::new(
            ValidationField::Table,
            ErrorCode::TableOutOfRange,
            format!("Table number must be between 1 and {max}, got {table}."),
        )
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::with_message(err.code, err.reason).with_detail("field", err.field.as_str())
    }
}

/// Command response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    /// The command ID this responds to
    pub command_id: String,
    /// Whether the command succeeded
    pub success: bool,
    /// Session state after the command
    pub state: SessionState,
    /// Placed order snapshot (only for PlaceOrder)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<OrderSummary>,
    /// Confirmed reservation (only for SubmitReservation)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation: Option<ReservationDetails>,
    /// Error details if failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CommandError>,
}

impl CommandResponse {
    pub fn success(command_id: String, state: SessionState) -> Self {
        Self {
            command_id,
            success: true,
            state,
            summary: None,
            reservation: None,
            error: None,
        }
    }

    pub fn error(command_id: String, state: SessionState, error: CommandError) -> Self {
        Self {
            command_id,
            success: false,
            state,
            summary: None,
            reservation: None,
            error: Some(error),
        }
    }

    pub fn with_summary(mut self, summary: OrderSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_reservation(mut self, reservation: ReservationDetails) -> Self {
        self.reservation = Some(reservation);
        self
    }
}

/// Command error
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandError {
    pub code: CommandErrorCode,
    pub message: String,
    /// Offending form field for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<ValidationField>,
}

impl CommandError {
    pub fn new(code: CommandErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            field: None,
        }
    }

    pub fn with_field(mut self, field: ValidationField) -> Self {
        self.field = Some(field);
        self
    }
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::new(CommandErrorCode::Validation, err.reason).with_field(err.field)
    }
}

impl From<CommandError> for AppError {
    fn from(err: CommandError) -> Self {
        let app = AppError::with_message(err.code.error_code(), err.message);
        match err.field {
            Some(field) => app.with_detail("field", field.as_str()),
            None => app,
        }
    }
}

/// Command error codes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandErrorCode {
    Validation,
    EmptySelection,
    InvalidState,
    ItemNotFound,
    InternalError,
}

impl CommandErrorCode {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            CommandErrorCode::Validation => ErrorCode::ValidationFailed,
            CommandErrorCode::EmptySelection => ErrorCode::OrderEmpty,
            CommandErrorCode::InvalidState => ErrorCode::InvalidSessionState,
            CommandErrorCode::ItemNotFound => ErrorCode::MenuItemNotFound,
            CommandErrorCode::InternalError => ErrorCode::InternalError,
        }
    }
}
