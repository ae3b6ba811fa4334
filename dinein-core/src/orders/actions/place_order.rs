//! PlaceOrder command handler

use crate::orders::session::OrderSession;
use crate::orders::traits::{ActionOutcome, CommandHandler, SessionError};

/// PlaceOrder action
///
/// Ended sessions are rejected outright; otherwise the session's own
/// empty-selection check runs before its state check.
#[derive(Debug, Clone)]
pub struct PlaceOrderAction;

impl CommandHandler for PlaceOrderAction {
    fn execute(&self, session: &mut OrderSession) -> Result<ActionOutcome, SessionError> {
        if session.state().is_terminal() {
            return Err(SessionError::InvalidState {
                action: "place an order",
                state: session.state(),
            });
        }
        let summary = session.place_order()?;
        Ok(ActionOutcome::Placed(summary))
    }
}
