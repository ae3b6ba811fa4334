//! Reservation form draft
//!
//! Holds the reservation fields while the user edits them. Nothing is
//! validated on set; [`ReservationDraft::validate`] runs at submit time.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use shared::models::ReservationDetails;
use shared::order::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationDraft {
    /// Guest count exactly as typed
    guests_input: String,
    date: NaiveDate,
    time: NaiveTime,
    table_number: Option<u8>,
}

impl ReservationDraft {
    /// Empty draft with date and time preset to `now`
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            guests_input: String::new(),
            date: now.date(),
            time: now.time(),
            table_number: None,
        }
    }

    /// Store the raw guest input; intermediate keystrokes are never rejected
    pub fn set_guest_count(&mut self, value: impl ToString) {
        self.guests_input = value.to_string();
    }

    pub fn guests_input(&self) -> &str {
        &self.guests_input
    }

    /// Parsed guest count, `None` unless the input is a positive integer
    pub fn guest_count(&self) -> Option<u32> {
        self.guests_input
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
    }

    /// Replace date and time; past moments are accepted
    pub fn set_date_time(&mut self, date: NaiveDate, time: NaiveTime) {
        self.date = date;
        self.time = time;
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Pick a table in `1..=max_table`
    pub fn select_table(&mut self, table: i64, max_table: u8) -> Result<u8, ValidationError> {
        match u8::try_from(table) {
            Ok(n) if (1..=max_table).contains(&n) => {
                self.table_number = Some(n);
                Ok(n)
            }
            _ => Err(ValidationError::table_out_of_range(table, max_table)),
        }
    }

    pub fn table_number(&self) -> Option<u8> {
        self.table_number
    }

    /// Check guests first, then the table when the flow needs one
    pub fn validate(&self, requires_table: bool) -> Result<u32, ValidationError> {
        let guests = self.guest_count().ok_or_else(ValidationError::guests)?;
        if requires_table && self.table_number.is_none() {
            return Err(ValidationError::table_missing());
        }
        Ok(guests)
    }

    /// Validate and freeze into [`ReservationDetails`]
    pub fn finalize(
        &self,
        restaurant_name: &str,
        requires_table: bool,
    ) -> Result<ReservationDetails, ValidationError> {
        let guest_count = self.validate(requires_table)?;
        Ok(ReservationDetails {
            restaurant_name: restaurant_name.to_string(),
            guest_count,
            date: self.date,
            time: self.time,
            table_number: if requires_table { self.table_number } else { None },
        })
    }
}
