//! Command handler trait and session errors

use shared::models::ReservationDetails;
use shared::order::{
    CommandError, CommandErrorCode, OrderSummary, SessionState, ValidationError,
};
use thiserror::Error;

use super::session::OrderSession;

/// Session errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Please select at least one item to place an order.")]
    EmptySelection,

    #[error("Cannot {action} while the session is {state}")]
    InvalidState {
        action: &'static str,
        state: SessionState,
    },

    #[error("Menu item not found: {0}")]
    ItemNotFound(i64),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
}

impl From<SessionError> for CommandError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Validation(e) => e.into(),
            SessionError::EmptySelection => {
                CommandError::new(CommandErrorCode::EmptySelection, err.to_string())
            }
            SessionError::InvalidState { .. } => {
                CommandError::new(CommandErrorCode::InvalidState, err.to_string())
            }
            SessionError::ItemNotFound(_) => {
                CommandError::new(CommandErrorCode::ItemNotFound, err.to_string())
            }
            SessionError::InvalidCatalog(_) => {
                CommandError::new(CommandErrorCode::InternalError, err.to_string())
            }
        }
    }
}

/// What a successfully executed action produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// State updated, nothing to hand downstream
    Applied,
    /// Reservation confirmed
    Reserved(ReservationDetails),
    /// Order placed
    Placed(OrderSummary),
}

/// Command handler trait
///
/// Each action validates that the session is in a state that accepts it,
/// then applies itself through the session's own operations.
pub trait CommandHandler {
    fn execute(&self, session: &mut OrderSession) -> Result<ActionOutcome, SessionError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::order::ValidationField;

    #[test]
    fn test_session_error_to_command_error() {
        let err: CommandError = SessionError::EmptySelection.into();
        assert_eq!(err.code, CommandErrorCode::EmptySelection);
        assert_eq!(
            err.message,
            "Please select at least one item to place an order."
        );

        let err: CommandError = SessionError::from(ValidationError::table_missing()).into();
        assert_eq!(err.code, CommandErrorCode::Validation);
        assert_eq!(err.field, Some(ValidationField::Table));

        let err: CommandError = SessionError::InvalidState {
            action: "place an order",
            state: SessionState::Reserving,
        }
        .into();
        assert_eq!(err.code, CommandErrorCode::InvalidState);
        assert_eq!(
            err.message,
            "Cannot place an order while the session is reserving"
        );
    }
}
