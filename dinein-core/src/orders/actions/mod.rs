//! Command action implementations
//!
//! Each action implements the `CommandHandler` trait and handles one
//! `SessionCommandPayload` variant. State-machine guards live here; the
//! session's direct operations stay total.

use shared::order::{SessionCommandPayload, SessionState};

use super::session::OrderSession;
use super::traits::{ActionOutcome, CommandHandler, SessionError};

mod cart;
mod place_order;
mod reservation;

pub use cart::{CancelOrderAction, DecrementAction, IncrementAction};
pub use place_order::PlaceOrderAction;
pub use reservation::{
    SelectTableAction, SetDateTimeAction, SetGuestCountAction, SkipOrderingAction,
    SubmitReservationAction,
};

/// Reject the action unless the session is in `expected`
pub(crate) fn require_state(
    session: &OrderSession,
    expected: SessionState,
    action: &'static str,
) -> Result<(), SessionError> {
    if session.state() != expected {
        return Err(SessionError::InvalidState {
            action,
            state: session.state(),
        });
    }
    Ok(())
}

/// CommandAction enum - dispatches to concrete action implementations
#[derive(Debug, Clone)]
pub enum CommandAction {
    SetGuestCount(SetGuestCountAction),
    SetDateTime(SetDateTimeAction),
    SelectTable(SelectTableAction),
    SubmitReservation(SubmitReservationAction),
    SkipOrdering(SkipOrderingAction),
    Increment(IncrementAction),
    Decrement(DecrementAction),
    PlaceOrder(PlaceOrderAction),
    CancelOrder(CancelOrderAction),
}

impl CommandHandler for CommandAction {
    fn execute(&self, session: &mut OrderSession) -> Result<ActionOutcome, SessionError> {
        match self {
            CommandAction::SetGuestCount(action) => action.execute(session),
            CommandAction::SetDateTime(action) => action.execute(session),
            CommandAction::SelectTable(action) => action.execute(session),
            CommandAction::SubmitReservation(action) => action.execute(session),
            CommandAction::SkipOrdering(action) => action.execute(session),
            CommandAction::Increment(action) => action.execute(session),
            CommandAction::Decrement(action) => action.execute(session),
            CommandAction::PlaceOrder(action) => action.execute(session),
            CommandAction::CancelOrder(action) => action.execute(session),
        }
    }
}

/// Convert a payload to its action
///
/// This is the ONLY place with a match on SessionCommandPayload.
impl From<&SessionCommandPayload> for CommandAction {
    fn from(payload: &SessionCommandPayload) -> Self {
        match payload {
            SessionCommandPayload::SetGuestCount { value } => {
                CommandAction::SetGuestCount(SetGuestCountAction {
                    value: value.clone(),
                })
            }
            SessionCommandPayload::SetDateTime { date, time } => {
                CommandAction::SetDateTime(SetDateTimeAction {
                    date: *date,
                    time: *time,
                })
            }
            SessionCommandPayload::SelectTable { table } => {
                CommandAction::SelectTable(SelectTableAction { table: *table })
            }
            SessionCommandPayload::SubmitReservation => {
                CommandAction::SubmitReservation(SubmitReservationAction)
            }
            SessionCommandPayload::SkipOrdering => CommandAction::SkipOrdering(SkipOrderingAction),
            SessionCommandPayload::Increment { item_id } => {
                CommandAction::Increment(IncrementAction { item_id: *item_id })
            }
            SessionCommandPayload::Decrement { item_id } => {
                CommandAction::Decrement(DecrementAction { item_id: *item_id })
            }
            SessionCommandPayload::PlaceOrder => CommandAction::PlaceOrder(PlaceOrderAction),
            SessionCommandPayload::CancelOrder => CommandAction::CancelOrder(CancelOrderAction),
        }
    }
}
