//! Money calculation utilities using rust_decimal for precision
//!
//! Each line total is rounded to 2 decimal places (half away from zero);
//! the cart total is the sum of the rounded lines, so a receipt always
//! adds up.

use rust_decimal::prelude::*;
use shared::models::MenuItem;

use super::selection::SelectionMap;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Round a monetary value to 2 decimal places
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// `unit_price * quantity`, rounded
pub fn line_total(unit_price: Decimal, quantity: u32) -> Decimal {
    round_money(unit_price * Decimal::from(quantity))
}

/// Sum of the rounded line totals over every selected catalog item
///
/// Selected ids missing from the catalog contribute nothing.
pub fn compute_total(catalog: &[MenuItem], selection: &SelectionMap) -> Decimal {
    catalog
        .iter()
        .map(|item| line_total(item.unit_price, selection.quantity(item.id)))
        .sum()
}

/// Format a monetary value for display, e.g. `$30.97`
pub fn format_money(value: Decimal, currency_symbol: &str) -> String {
    format!("{}{:.2}", currency_symbol, round_money(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<MenuItem> {
        vec![
            MenuItem::new(1, "Burger", Decimal::new(899, 2)),
            MenuItem::new(2, "Pizza", Decimal::new(1299, 2)),
        ]
    }

    #[test]
    fn test_line_total() {
        assert_eq!(line_total(Decimal::new(899, 2), 2), Decimal::new(1798, 2));
        assert_eq!(line_total(Decimal::new(899, 2), 0), Decimal::ZERO);
    }

    #[test]
    fn test_compute_total_burger_pizza() {
        let mut selection = SelectionMap::new();
        selection.increment(1);
        selection.increment(1);
        selection.increment(2);
        assert_eq!(compute_total(&catalog(), &selection), Decimal::new(3097, 2));
    }

    #[test]
    fn test_compute_total_empty_is_zero() {
        assert_eq!(compute_total(&catalog(), &SelectionMap::new()), Decimal::ZERO);
    }

    #[test]
    fn test_compute_total_ignores_unknown_ids() {
        let mut selection = SelectionMap::new();
        selection.increment(99);
        assert_eq!(compute_total(&catalog(), &selection), Decimal::ZERO);
    }

    #[test]
    fn test_compute_total_sums_rounded_lines() {
        let catalog = vec![
            MenuItem::new(1, "Mint", Decimal::new(5, 3)),
            MenuItem::new(2, "Gum", Decimal::new(5, 3)),
        ];
        let mut selection = SelectionMap::new();
        selection.increment(1);
        selection.increment(2);
        // The exact sum 0.010 would round to 0.01
        assert_eq!(compute_total(&catalog, &selection), Decimal::new(2, 2));
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_money(Decimal::new(1005, 3)), Decimal::new(101, 2));
        assert_eq!(round_money(Decimal::new(1004, 3)), Decimal::new(100, 2));
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Decimal::new(3097, 2), "$"), "$30.97");
        assert_eq!(format_money(Decimal::ZERO, "$"), "$0.00");
        assert_eq!(format_money(Decimal::new(129, 1), "€"), "€12.90");
    }
}
