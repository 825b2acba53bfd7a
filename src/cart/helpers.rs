//! Shopping Cart Business Logic Helpers
//!
//! This module contains the reconciliation rules that fold gateway responses
//! into the local line list, plus totals and formatting.

use super::models::{CartLine, CartTotals};

/// Recomputes totals from scratch over `items`.
pub fn calculate_totals(items: &[CartLine]) -> CartTotals {
    CartTotals {
        item_count: items
            .iter()
            .fold(0u64, |count, l| count.saturating_add(u64::from(l.quantity))),
        subtotal: items.iter().map(CartLine::line_total).sum(),
    }
}

/// Folds a line returned by an add into `items`.
///
/// # Behaviour
///
/// * If a line with the same `id` already exists, its `quantity` is
///   increased by exactly 1, whatever quantity was requested or returned.
///   The increment saturates at `u32::MAX`.
/// * Otherwise the returned line is appended as-is.
///
/// This function mutates `items` in-place.
pub fn merge_added_line(items: &mut Vec<CartLine>, added: CartLine) {
    if let Some(existing) = items.iter_mut().find(|l| l.id == added.id) {
        existing.quantity = existing.quantity.saturating_add(1);
    } else {
        items.push(added);
    }
}

/// Replaces the line with `updated.id` wholesale. A returned quantity of 0
/// drops the line. Returns `false` when no such line exists locally.
pub fn replace_line(items: &mut Vec<CartLine>, updated: CartLine) -> bool {
    let Some(index) = items.iter().position(|l| l.id == updated.id) else {
        return false;
    };

    if updated.quantity == 0 {
        items.remove(index);
    } else {
        items[index] = updated;
    }
    true
}

/// Removes the line with `line_id`. Returns `false` when it was not present.
pub fn remove_line(items: &mut Vec<CartLine>, line_id: u64) -> bool {
    let before = items.len();
    items.retain(|l| l.id != line_id);
    items.len() != before
}

/// Drops lines whose quantity fell to zero.
pub fn drop_empty_lines(items: Vec<CartLine>) -> Vec<CartLine> {
    items.into_iter().filter(|l| l.quantity > 0).collect()
}

/// Produces a human-readable one-line summary for a list of cart lines.
///
/// Example output: `"2x Yoga Mat, 1x Blender"`.
pub fn format_item_summary(items: &[CartLine]) -> String {
    items
        .iter()
        .map(|l| format!("{}x {}", l.quantity, l.name))
        .collect::<Vec<_>>()
        .join(", ")
}
