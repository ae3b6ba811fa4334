//! OrderSession - per-restaurant cart and reservation state
//!
//! One session covers one user's interaction with one restaurant: it owns
//! the immutable catalog, the current selection, the reservation draft
//! and the state machine. It is single-threaded by construction; the UI
//! shell drives it one event at a time.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use shared::models::{MenuItem, ReservationDetails};
use shared::order::{
    CommandResponse, FlowKind, LineItem, OrderSummary, SessionCommand, SessionState,
    ValidationError,
};
use std::ops::RangeInclusive;
use tracing::{debug, info, warn};

use super::actions::CommandAction;
use super::money::{compute_total, line_total};
use super::reservation::ReservationDraft;
use super::selection::SelectionMap;
use super::traits::{ActionOutcome, CommandHandler, SessionError};
use crate::catalog::{MenuProvider, validate_catalog};
use crate::core::config::DEFAULT_TABLE_COUNT;

#[derive(Debug, Clone)]
pub struct OrderSession {
    session_id: String,
    restaurant_name: String,
    flow: FlowKind,
    catalog: Vec<MenuItem>,
    selection: SelectionMap,
    reservation: ReservationDraft,
    confirmed: Option<ReservationDetails>,
    state: SessionState,
    table_count: u8,
}

impl OrderSession {
    /// Start a session against a fixed catalog
    ///
    /// `now` seeds the reservation date and time.
    pub fn new(
        restaurant_name: impl Into<String>,
        catalog: Vec<MenuItem>,
        flow: FlowKind,
        now: NaiveDateTime,
    ) -> Result<Self, SessionError> {
        validate_catalog(&catalog)?;
        let session = Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            restaurant_name: restaurant_name.into(),
            flow,
            catalog,
            selection: SelectionMap::new(),
            reservation: ReservationDraft::new(now),
            confirmed: None,
            state: flow.initial_state(),
            table_count: DEFAULT_TABLE_COUNT,
        };
        info!(
            session_id = %session.session_id,
            restaurant = %session.restaurant_name,
            flow = ?flow,
            items = session.catalog.len(),
            "Order session started"
        );
        Ok(session)
    }

    /// Start a session with the catalog fetched from `provider`
    pub fn from_provider(
        restaurant_name: impl Into<String>,
        provider: &dyn MenuProvider,
        flow: FlowKind,
        now: NaiveDateTime,
    ) -> Result<Self, SessionError> {
        let restaurant_name = restaurant_name.into();
        let catalog = provider.menu(&restaurant_name);
        Self::new(restaurant_name, catalog, flow, now)
    }

    /// Override the highest selectable table number
    pub fn with_table_count(mut self, table_count: u8) -> Self {
        self.table_count = table_count.max(1);
        self
    }

    // ========== Accessors ==========

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn restaurant_name(&self) -> &str {
        &self.restaurant_name
    }

    pub fn flow(&self) -> FlowKind {
        self.flow
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn catalog(&self) -> &[MenuItem] {
        &self.catalog
    }

    pub fn menu_item(&self, item_id: i64) -> Option<&MenuItem> {
        self.catalog.iter().find(|item| item.id == item_id)
    }

    pub fn selection(&self) -> &SelectionMap {
        &self.selection
    }

    pub fn quantity(&self, item_id: i64) -> u32 {
        self.selection.quantity(item_id)
    }

    pub fn reservation(&self) -> &ReservationDraft {
        &self.reservation
    }

    /// Reservation confirmed by the last successful submit
    pub fn confirmed_reservation(&self) -> Option<&ReservationDetails> {
        self.confirmed.as_ref()
    }

    /// Table numbers offered by the table picker
    pub fn available_tables(&self) -> RangeInclusive<u8> {
        1..=self.table_count
    }

    // ========== Reservation fields ==========

    /// Store the raw guest input; validation happens on submit
    pub fn set_guest_count(&mut self, value: impl ToString) {
        self.reservation.set_guest_count(value);
    }

    pub fn set_reservation_date_time(&mut self, date: NaiveDate, time: NaiveTime) {
        self.reservation.set_date_time(date, time);
    }

    /// Pick a table in `1..=table_count`
    ///
    /// No availability check: any session may pick any table.
    pub fn select_table(&mut self, table: i64) -> Result<(), ValidationError> {
        self.reservation.select_table(table, self.table_count)?;
        debug!(session_id = %self.session_id, table, "Table selected");
        Ok(())
    }

    /// Check the reservation fields without changing state
    pub fn validate_for_submit(&self) -> Result<(), ValidationError> {
        self.reservation
            .validate(self.flow.requires_table())
            .map(|_| ())
    }

    // ========== Cart ==========

    /// Add one unit of `item_id`
    ///
    /// Never fails. Ids missing from the catalog and edits after the
    /// session has ended are ignored. Returns the resulting quantity.
    pub fn increment(&mut self, item_id: i64) -> u32 {
        if self.state.is_terminal() {
            warn!(session_id = %self.session_id, item_id, state = %self.state, "Increment ignored after session end");
            return self.selection.quantity(item_id);
        }
        if self.menu_item(item_id).is_none() {
            warn!(session_id = %self.session_id, item_id, "Increment ignored for unknown menu item");
            return 0;
        }
        let qty = self.selection.increment(item_id);
        debug!(session_id = %self.session_id, item_id, qty, "Item incremented");
        qty
    }

    /// Remove one unit of `item_id`; at quantity 1 the entry is dropped
    ///
    /// Never fails; absent items are a no-op. Returns the resulting quantity.
    pub fn decrement(&mut self, item_id: i64) -> u32 {
        if self.state.is_terminal() {
            warn!(session_id = %self.session_id, item_id, state = %self.state, "Decrement ignored after session end");
            return self.selection.quantity(item_id);
        }
        let qty = self.selection.decrement(item_id);
        debug!(session_id = %self.session_id, item_id, qty, "Item decremented");
        qty
    }

    /// Cart total, rounded to 2 dp; zero for an empty cart
    pub fn compute_total(&self) -> Decimal {
        compute_total(&self.catalog, &self.selection)
    }

    /// Current cart as priced lines, in catalog order
    pub fn line_items(&self) -> Vec<LineItem> {
        self.catalog
            .iter()
            .filter_map(|item| {
                let quantity = self.selection.quantity(item.id);
                (quantity > 0).then(|| LineItem {
                    item_id: item.id,
                    name: item.name.clone(),
                    unit_price: item.unit_price,
                    quantity,
                    line_total: line_total(item.unit_price, quantity),
                })
            })
            .collect()
    }

    /// Empty the cart; the session stays where it is
    pub fn cancel_order(&mut self) {
        let cleared = self.selection.total_units();
        self.selection.clear();
        info!(session_id = %self.session_id, cleared, "Order canceled");
    }

    // ========== Transitions ==========

    /// `Reserving → Ordering` (or `→ Reserved` for reserve-only flows)
    ///
    /// Invalid fields keep the session in `Reserving` and name the field.
    pub fn submit_reservation(&mut self) -> Result<ReservationDetails, SessionError> {
        if self.state != SessionState::Reserving {
            return Err(SessionError::InvalidState {
                action: "submit a reservation",
                state: self.state,
            });
        }
        let details = self
            .reservation
            .finalize(&self.restaurant_name, self.flow.requires_table())
            .inspect_err(|e| {
                warn!(session_id = %self.session_id, field = %e.field, "Reservation rejected");
            })?;

        self.state = if self.flow.has_ordering() {
            SessionState::Ordering
        } else {
            SessionState::Reserved
        };
        self.confirmed = Some(details.clone());
        info!(
            session_id = %self.session_id,
            guests = details.guest_count,
            table = ?details.table_number,
            state = %self.state,
            "Reservation confirmed"
        );
        Ok(details)
    }

    /// `Ordering → Reserved`: keep the reservation, order nothing
    pub fn skip_ordering(&mut self) -> Result<ReservationDetails, SessionError> {
        let details = match (&self.state, &self.confirmed) {
            (SessionState::Ordering, Some(details)) => details.clone(),
            _ => {
                return Err(SessionError::InvalidState {
                    action: "skip ordering",
                    state: self.state,
                });
            }
        };
        self.selection.clear();
        self.state = SessionState::Reserved;
        info!(session_id = %self.session_id, "Ordering skipped, reservation kept");
        Ok(details)
    }

    /// `Ordering → Submitted`: snapshot the cart and clear it
    ///
    /// Fails with `EmptySelection` (state untouched) when nothing with a
    /// positive total is selected.
    pub fn place_order(&mut self) -> Result<OrderSummary, SessionError> {
        let total = self.compute_total();
        if self.selection.is_empty() || total <= Decimal::ZERO {
            warn!(session_id = %self.session_id, "Place order rejected: empty selection");
            return Err(SessionError::EmptySelection);
        }
        if self.state != SessionState::Ordering {
            return Err(SessionError::InvalidState {
                action: "place an order",
                state: self.state,
            });
        }

        let summary = OrderSummary {
            order_id: uuid::Uuid::new_v4().to_string(),
            restaurant_name: self.restaurant_name.clone(),
            line_items: self.line_items(),
            total,
            reservation: self.confirmed.clone(),
        };
        self.selection.clear();
        self.state = SessionState::Submitted;
        info!(
            session_id = %self.session_id,
            order_id = %summary.order_id,
            lines = summary.line_items.len(),
            total = %summary.total,
            "Order placed"
        );
        Ok(summary)
    }

    // ========== Command dispatch ==========

    /// Execute a command and report the outcome
    ///
    /// Failures never change state; the response carries the error and,
    /// for validation failures, the offending field.
    pub fn execute(&mut self, cmd: SessionCommand) -> CommandResponse {
        let action = CommandAction::from(&cmd.payload);
        debug!(
            session_id = %self.session_id,
            command_id = %cmd.command_id,
            command = cmd.payload.name(),
            "Executing command"
        );
        match action.execute(self) {
            Ok(ActionOutcome::Applied) => CommandResponse::success(cmd.command_id, self.state),
            Ok(ActionOutcome::Reserved(details)) => {
                CommandResponse::success(cmd.command_id, self.state).with_reservation(details)
            }
            Ok(ActionOutcome::Placed(summary)) => {
                CommandResponse::success(cmd.command_id, self.state).with_summary(summary)
            }
            Err(err) => {
                warn!(
                    session_id = %self.session_id,
                    command = cmd.payload.name(),
                    error = %err,
                    "Command rejected"
                );
                CommandResponse::error(cmd.command_id, self.state, err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests;
