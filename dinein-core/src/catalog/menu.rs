//! Menu provider

use rust_decimal::Decimal;
use shared::models::MenuItem;
use std::collections::HashSet;

use crate::orders::SessionError;

const PLACEHOLDER_IMAGE_BASE: &str = "https://dummyimage.com/300x200/000/fff.png&text=";

/// Source of a restaurant's orderable items
pub trait MenuProvider {
    fn menu(&self, restaurant_name: &str) -> Vec<MenuItem>;
}

/// Fixed five-item menu served for every restaurant
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticMenuProvider;

impl MenuProvider for StaticMenuProvider {
    fn menu(&self, _restaurant_name: &str) -> Vec<MenuItem> {
        [
            (1, "Burger", Decimal::new(899, 2)),
            (2, "Pizza", Decimal::new(1299, 2)),
            (3, "Pasta", Decimal::new(1099, 2)),
            (4, "Salad", Decimal::new(699, 2)),
            (5, "Fries", Decimal::new(399, 2)),
        ]
        .into_iter()
        .map(|(id, name, price)| {
            MenuItem::new(id, name, price).with_image(format!("{PLACEHOLDER_IMAGE_BASE}{name}"))
        })
        .collect()
    }
}

/// Reject catalogs with negative prices or duplicate ids
pub fn validate_catalog(items: &[MenuItem]) -> Result<(), SessionError> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if item.unit_price < Decimal::ZERO {
            return Err(SessionError::InvalidCatalog(format!(
                "{} has a negative price ({})",
                item.name, item.unit_price
            )));
        }
        if !seen.insert(item.id) {
            return Err(SessionError::InvalidCatalog(format!(
                "duplicate menu item id {}",
                item.id
            )));
        }
    }
    Ok(())
}
