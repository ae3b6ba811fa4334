//! Reservation form actions

use chrono::{NaiveDate, NaiveTime};

use super::require_state;
use crate::orders::session::OrderSession;
use crate::orders::traits::{ActionOutcome, CommandHandler, SessionError};
use shared::order::SessionState;

/// SetGuestCount action
#[derive(Debug, Clone)]
pub struct SetGuestCountAction {
    pub value: String,
}

impl CommandHandler for SetGuestCountAction {
    fn execute(&self, session: &mut OrderSession) -> Result<ActionOutcome, SessionError> {
        require_state(session, SessionState::Reserving, "change the guest count")?;
        session.set_guest_count(&self.value);
        Ok(ActionOutcome::Applied)
    }
}

/// SetDateTime action
#[derive(Debug, Clone)]
pub struct SetDateTimeAction {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl CommandHandler for SetDateTimeAction {
    fn execute(&self, session: &mut OrderSession) -> Result<ActionOutcome, SessionError> {
        require_state(session, SessionState::Reserving, "change the reservation time")?;
        session.set_reservation_date_time(self.date, self.time);
        Ok(ActionOutcome::Applied)
    }
}

/// SelectTable action
#[derive(Debug, Clone)]
pub struct SelectTableAction {
    pub table: i64,
}

impl CommandHandler for SelectTableAction {
    fn execute(&self, session: &mut OrderSession) -> Result<ActionOutcome, SessionError> {
        require_state(session, SessionState::Reserving, "select a table")?;
        session.select_table(self.table)?;
        Ok(ActionOutcome::Applied)
    }
}

/// SubmitReservation action
#[derive(Debug, Clone)]
pub struct SubmitReservationAction;

impl CommandHandler for SubmitReservationAction {
    fn execute(&self, session: &mut OrderSession) -> Result<ActionOutcome, SessionError> {
        let details = session.submit_reservation()?;
        Ok(ActionOutcome::Reserved(details))
    }
}

/// SkipOrdering action
#[derive(Debug, Clone)]
pub struct SkipOrderingAction;

impl CommandHandler for SkipOrderingAction {
    fn execute(&self, session: &mut OrderSession) -> Result<ActionOutcome, SessionError> {
        let details = session.skip_ordering()?;
        Ok(ActionOutcome::Reserved(details))
    }
}
