//! Selection map - quantity per menu item
//!
//! Invariant: every stored quantity is at least 1. Decrementing an entry
//! at quantity 1 removes it; there are no zero-quantity entries.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionMap {
    quantities: BTreeMap<i64, u32>,
}

impl SelectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit; inserts the entry at 1 when absent
    ///
    /// Returns the new quantity.
    pub fn increment(&mut self, item_id: i64) -> u32 {
        let qty = self.quantities.entry(item_id).or_insert(0);
        *qty = qty.saturating_add(1);
        *qty
    }

    /// Remove one unit; drops the entry at 1, no-op when absent
    ///
    /// Returns the new quantity (0 when the entry is gone).
    pub fn decrement(&mut self, item_id: i64) -> u32 {
        match self.quantities.get(&item_id).copied() {
            Some(qty) if qty > 1 => {
                self.quantities.insert(item_id, qty - 1);
                qty - 1
            }
            Some(_) => {
                self.quantities.remove(&item_id);
                0
            }
            None => 0,
        }
    }

    pub fn quantity(&self, item_id: i64) -> u32 {
        self.quantities.get(&item_id).copied().unwrap_or(0)
    }

    pub fn contains(&self, item_id: i64) -> bool {
        self.quantities.contains_key(&item_id)
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Number of distinct items selected
    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    /// Total units across all items
    pub fn total_units(&self) -> u32 {
        self.quantities.values().sum()
    }

    /// Entries in ascending item id order
    pub fn iter(&self) -> impl Iterator<Item = (i64, u32)> + '_ {
        self.quantities.iter().map(|(id, qty)| (*id, *qty))
    }

    pub fn clear(&mut self) {
        self.quantities.clear();
    }
}
