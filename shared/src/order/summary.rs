//! Order summary - the finalized snapshot handed to the receipt

use crate::models::ReservationDetails;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One priced line of a placed order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub item_id: i64,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    /// `unit_price * quantity`, rounded to 2 dp
    pub line_total: Decimal,
}

/// Immutable snapshot produced when an order is placed
///
/// Never mutated after creation; a new order produces a new summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub order_id: String,
    pub restaurant_name: String,
    /// Line items in catalog order
    pub line_items: Vec<LineItem>,
    /// Sum of line totals, rounded to 2 dp
    pub total: Decimal,
    /// Reservation the order belongs to (absent in menu-only flows)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reservation: Option<ReservationDetails>,
}

impl OrderSummary {
    /// Total number of units across all lines
    pub fn item_count(&self) -> u32 {
        self.line_items.iter().map(|l| l.quantity).sum()
    }

    pub fn table_number(&self) -> Option<u8> {
        self.reservation.as_ref().and_then(|r| r.table_number)
    }
}
