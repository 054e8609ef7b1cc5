//! Shopping Cart Domain Models
//!
//! This module contains the cart store: an insertion-ordered mapping from
//! product id to order line.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;

// =============================================================================
// Cart Domain Models
// =============================================================================

/// A product snapshot plus the ordered quantity (always >= 1).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderItem {
    #[serde(flatten)]
    pub product: Product,

    pub qty: u32,
}

impl OrderItem {
    /// Saturates at `u64::MAX`.
    pub fn line_total(&self) -> u64 {
        self.product.price_rub.saturating_mul(u64::from(self.qty))
    }
}

/// Session-local selection of items pending submission.
///
/// At most one line per product id; quantities never drop below 1. Removing a
/// line is a separate, explicit operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: IndexMap<String, OrderItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit, refreshing the stored snapshot to `product`.
    pub fn add(&mut self, product: &Product) {
        let qty = self.lines.get(&product.id).map_or(0, |line| line.qty)
            .saturating_add(1);
        self.lines.insert(
            product.id.clone(),
            OrderItem {
                product: product.clone(),
                qty,
            },
        );
    }

    /// Deletes the line for `id`; absent ids are ignored.
    pub fn remove(&mut self, id: &str) {
        self.lines.shift_remove(id);
    }

    /// Adjusts a line's quantity, clamping at 1. Absent ids are ignored.
    pub fn change_qty(&mut self, id: &str, delta: i64) {
        if let Some(line) = self.lines.get_mut(id) {
            let next = i64::from(line.qty)
                .saturating_add(delta)
                .clamp(1, i64::from(u32::MAX));
            line.qty = u32::try_from(next).unwrap_or(1);
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn get(&self, id: &str) -> Option<&OrderItem> {
        self.lines.get(id)
    }

    pub fn items(&self) -> impl Iterator<Item = &OrderItem> {
        self.lines.values()
    }

    /// Owned copy of the lines, in iteration order.
    pub fn to_items(&self) -> Vec<OrderItem> {
        self.lines.values().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total quantity across all lines, saturating at `u32::MAX`.
    pub fn count(&self) -> u32 {
        self.lines
            .values()
            .fold(0u32, |acc, line| acc.saturating_add(line.qty))
    }

    /// Sum of price × quantity, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.lines
            .values()
            .fold(0u64, |acc, line| acc.saturating_add(line.line_total()))
    }
}
