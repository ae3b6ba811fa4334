//! Cart quantity actions

use super::require_state;
use crate::orders::session::OrderSession;
use crate::orders::traits::{ActionOutcome, CommandHandler, SessionError};
use shared::order::SessionState;

/// Increment action
///
/// Unlike the direct session operation, the command rejects ids that are
/// not on the menu so the shell can surface a stale-menu bug.
#[derive(Debug, Clone)]
pub struct IncrementAction {
    pub item_id: i64,
}

impl CommandHandler for IncrementAction {
    fn execute(&self, session: &mut OrderSession) -> Result<ActionOutcome, SessionError> {
        require_state(session, SessionState::Ordering, "change quantities")?;
        if session.menu_item(self.item_id).is_none() {
            return Err(SessionError::ItemNotFound(self.item_id));
        }
        session.increment(self.item_id);
        Ok(ActionOutcome::Applied)
    }
}

/// Decrement action
///
/// Allowed in any state, like the direct session operation.
#[derive(Debug, Clone)]
pub struct DecrementAction {
    pub item_id: i64,
}

impl CommandHandler for DecrementAction {
    fn execute(&self, session: &mut OrderSession) -> Result<ActionOutcome, SessionError> {
        session.decrement(self.item_id);
        Ok(ActionOutcome::Applied)
    }
}

/// CancelOrder action - clears the cart in any state, state unchanged
#[derive(Debug, Clone)]
pub struct CancelOrderAction;

impl CommandHandler for CancelOrderAction {
    fn execute(&self, session: &mut OrderSession) -> Result<ActionOutcome, SessionError> {
        session.cancel_order();
        Ok(ActionOutcome::Applied)
    }
}
