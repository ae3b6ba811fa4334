//! Reservation Model

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display format for reservation dates (e.g. `10/16/2026`)
pub const DATE_DISPLAY_FORMAT: &str = "%m/%d/%Y";
/// Display format for reservation times (e.g. `19:30`)
pub const TIME_DISPLAY_FORMAT: &str = "%H:%M";

/// Validated reservation details
///
/// Produced only by a successful reservation submit, so `guest_count` is
/// always positive. `table_number` is `None` in flows that do not ask
/// for a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationDetails {
    pub restaurant_name: String,
    pub guest_count: u32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_number: Option<u8>,
}

impl ReservationDetails {
    pub fn date_display(&self) -> String {
        self.date.format(DATE_DISPLAY_FORMAT).to_string()
    }

    pub fn time_display(&self) -> String {
        self.time.format(TIME_DISPLAY_FORMAT).to_string()
    }
}

/// Confirmation prompt text, e.g.
/// `Table 5 for 3 guests at Restaurant 1 on 10/16/2026 at 19:30.`
impl fmt::Display for ReservationDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.table_number {
            Some(table) => write!(f, "Table {} for {} guests", table, self.guest_count)?,
            None => write!(f, "Table for {} guests", self.guest_count)?,
        }
        write!(
            f,
            " at {} on {} at {}.",
            self.restaurant_name,
            self.date_display(),
            self.time_display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(table_number: Option<u8>) -> ReservationDetails {
        ReservationDetails {
            restaurant_name: "Restaurant 1".to_string(),
            guest_count: 3,
            date: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
            time: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
            table_number,
        }
    }

    #[test]
    fn test_confirmation_with_table() {
        assert_eq!(
            details(Some(5)).to_string(),
            "Table 5 for 3 guests at Restaurant 1 on 10/16/2026 at 19:30."
        );
    }

    #[test]
    fn test_confirmation_without_table() {
        assert_eq!(
            details(None).to_string(),
            "Table for 3 guests at Restaurant 1 on 10/16/2026 at 19:30."
        );
    }

    #[test]
    fn test_serialize_omits_missing_table() {
        let json = serde_json::to_value(details(None)).unwrap();
        assert!(json.get("table_number").is_none());
        assert_eq!(json["date"], "2026-10-16");
    }
}
