//! Unified error codes
//!
//! Error codes are grouped by range:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 4xxx: Order / reservation errors
//! - 6xxx: Menu errors
//! - 7xxx: Table errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Unified error code enum
///
/// Represented as u16 values so the UI shell can switch on a number
/// regardless of the language it is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: Auth ====================
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,

    // ==================== 4xxx: Order ====================
    /// Order has already been paid
    OrderAlreadyPaid = 4002,
    /// Order is empty
    OrderEmpty = 4007,
    /// Command not allowed in the current session state
    InvalidSessionState = 4008,
    /// Guest count missing or not positive
    GuestCountInvalid = 4101,

    // ==================== 6xxx: Menu ====================
    /// Menu item not found in the catalog
    MenuItemNotFound = 6001,

    // ==================== 7xxx: Table ====================
    /// Table not selected
    TableNotSelected = 7001,
    /// Table number outside the selectable range
    TableOutOfRange = 7002,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Network error
    NetworkError = 9003,
    /// Operation timeout
    TimeoutError = 9004,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidRequest => "Invalid request",

            // Auth
            ErrorCode::InvalidCredentials => "Invalid username or password",

            // Order
            ErrorCode::OrderAlreadyPaid => "Order has already been paid",
            ErrorCode::OrderEmpty => "Please select at least one item to place an order.",
            ErrorCode::InvalidSessionState => "Operation not allowed in the current step",
            ErrorCode::GuestCountInvalid => "Please enter a valid number of guests.",

            // Menu
            ErrorCode::MenuItemNotFound => "Menu item not found",

            // Table
            ErrorCode::TableNotSelected => "Please select a table number.",
            ErrorCode::TableOutOfRange => "Table number is out of range",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            5 => Ok(ErrorCode::InvalidRequest),

            // Auth
            1002 => Ok(ErrorCode::InvalidCredentials),

            // Order
            4002 => Ok(ErrorCode::OrderAlreadyPaid),
            4007 => Ok(ErrorCode::OrderEmpty),
            4008 => Ok(ErrorCode::InvalidSessionState),
            4101 => Ok(ErrorCode::GuestCountInvalid),

            // Menu
            6001 => Ok(ErrorCode::MenuItemNotFound),

            // Table
            7001 => Ok(ErrorCode::TableNotSelected),
            7002 => Ok(ErrorCode::TableOutOfRange),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
