//! Screen route parameters
//!
//! Each screen receives an explicit parameter struct. Optional fields
//! declare their fallback here rather than in the screen.

use crate::models::ReservationDetails;
use crate::order::{FlowKind, OrderSummary};
use serde::{Deserialize, Serialize};

/// Greeting shown on Home when navigation did not carry a username
pub const NO_USERNAME_FALLBACK: &str = "No username provided";
/// Title fallback for screens opened without a restaurant name
pub const RESTAURANT_FALLBACK: &str = "Restaurant";

/// Home screen parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeParams {
    #[serde(default)]
    pub username: Option<String>,
}

impl HomeParams {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
        }
    }

    /// Name to greet; blank usernames fall back like missing ones
    pub fn display_name(&self) -> &str {
        match self.username.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => NO_USERNAME_FALLBACK,
        }
    }

    pub fn greeting(&self) -> String {
        format!("Welcome {}!", self.display_name())
    }
}

/// Parameters for screens scoped to one restaurant (menu, reservation)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantParams {
    #[serde(default)]
    pub restaurant_name: Option<String>,
    #[serde(default)]
    pub flow: FlowKind,
}

impl RestaurantParams {
    pub fn new(restaurant_name: impl Into<String>, flow: FlowKind) -> Self {
        Self {
            restaurant_name: Some(restaurant_name.into()),
            flow,
        }
    }

    pub fn restaurant_name(&self) -> &str {
        match self.restaurant_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => RESTAURANT_FALLBACK,
        }
    }

    /// Screen title, e.g. `Menu of Restaurant 1`
    pub fn title(&self) -> String {
        match self.flow {
            FlowKind::MenuOnly => format!("Menu of {}", self.restaurant_name()),
            _ => format!("Reserve a Table at {}", self.restaurant_name()),
        }
    }
}

/// Receipt screen parameters
///
/// Required: the placed order snapshot. Reservation data travels inside
/// the snapshot, so there is nothing optional to fall back on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptParams {
    pub summary: OrderSummary,
}

impl ReceiptParams {
    pub fn reservation(&self) -> Option<&ReservationDetails> {
        self.summary.reservation.as_ref()
    }
}
