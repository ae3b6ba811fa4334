//! Reservation screen state
//!
//! Owns the picker and table-modal toggles. Field changes are returned
//! as intents for the session rather than applied here.

use chrono::{NaiveDate, NaiveTime};
use shared::order::SessionCommandPayload;
use shared::route::RestaurantParams;

use crate::orders::ReservationDraft;

#[derive(Debug, Clone, Default)]
pub struct ReservationView {
    params: RestaurantParams,
    date_picker_open: bool,
    time_picker_open: bool,
    table_modal_open: bool,
}

impl ReservationView {
    pub fn new(params: RestaurantParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    pub fn title(&self) -> String {
        self.params.title()
    }

    pub fn restaurant_name(&self) -> &str {
        self.params.restaurant_name()
    }

    pub fn guests_changed(&self, text: impl Into<String>) -> SessionCommandPayload {
        SessionCommandPayload::SetGuestCount { value: text.into() }
    }

    pub fn open_date_picker(&mut self) {
        self.date_picker_open = true;
    }

    pub fn open_time_picker(&mut self) {
        self.time_picker_open = true;
    }

    pub fn is_date_picker_open(&self) -> bool {
        self.date_picker_open
    }

    pub fn is_time_picker_open(&self) -> bool {
        self.time_picker_open
    }

    /// Close the date picker; a dismissed picker yields no intent
    pub fn pick_date(
        &mut self,
        draft: &ReservationDraft,
        picked: Option<NaiveDate>,
    ) -> Option<SessionCommandPayload> {
        self.date_picker_open = false;
        picked.map(|date| SessionCommandPayload::SetDateTime {
            date,
            time: draft.time(),
        })
    }

    pub fn pick_time(
        &mut self,
        draft: &ReservationDraft,
        picked: Option<NaiveTime>,
    ) -> Option<SessionCommandPayload> {
        self.time_picker_open = false;
        picked.map(|time| SessionCommandPayload::SetDateTime {
            date: draft.date(),
            time,
        })
    }

    pub fn open_table_modal(&mut self) {
        self.table_modal_open = true;
    }

    pub fn close_table_modal(&mut self) {
        self.table_modal_open = false;
    }

    pub fn is_table_modal_open(&self) -> bool {
        self.table_modal_open
    }

    /// Choosing a table closes the modal
    pub fn choose_table(&mut self, table: u8) -> SessionCommandPayload {
        self.table_modal_open = false;
        SessionCommandPayload::SelectTable {
            table: i64::from(table),
        }
    }

    pub fn submit(&self) -> SessionCommandPayload {
        SessionCommandPayload::SubmitReservation
    }
}
