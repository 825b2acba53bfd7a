//! Mock Cart API State Management
//!
//! This module holds the single in-memory cart served by the mock API and
//! the catalog it lists products from.

use super::error::ApiError;
use crate::cart::{AddToCartRequest, CartLine};
use crate::catalog::{fixtures::sample_products, Product};
use dashmap::{mapref::entry::Entry, DashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state containing the mock cart and the catalog
pub struct AppState {
    /// Cart lines keyed by product id, one line per product.
    /// DashMap allows concurrent access without external Mutexes.
    pub cart: DashMap<u64, CartLine>,

    /// Products served by the catalog endpoint.
    pub catalog: Vec<Product>,

    /// Highest line id handed out so far.
    last_line_id: AtomicU64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates an empty cart over the sample catalog
    pub fn new() -> Self {
        Self::with_catalog(sample_products())
    }

    pub fn with_catalog(catalog: Vec<Product>) -> Self {
        Self {
            cart: DashMap::new(),
            catalog,
            last_line_id: AtomicU64::new(0),
        }
    }

    /// All cart lines, oldest first
    pub fn cart_lines(&self) -> Vec<CartLine> {
        let mut lines: Vec<CartLine> = self.cart.iter().map(|e| e.value().clone()).collect();
        lines.sort_by_key(|l| l.id);
        lines
    }

    /// Adds `request` to the cart.
    ///
    /// A product already in the cart gains the requested quantity (0 counts
    /// as 1) and keeps its line id; otherwise a new line is created. The
    /// product's entry stays locked for the whole lookup-and-insert, so
    /// concurrent adds of one product always land on a single line.
    pub fn add_line(&self, request: AddToCartRequest) -> Result<CartLine, ApiError> {
        let quantity = request.quantity.max(1);

        match self.cart.entry(request.product_id) {
            Entry::Occupied(mut entry) => {
                let line = entry.get_mut();
                line.quantity = line
                    .quantity
                    .checked_add(quantity)
                    .ok_or_else(|| ApiError::BadRequest("Quantity is too large".to_string()))?;
                Ok(line.clone())
            }
            Entry::Vacant(entry) => {
                let line = CartLine {
                    id: self.next_line_id(),
                    product_id: request.product_id,
                    name: request.name,
                    price: request.price,
                    quantity,
                    image: request.image,
                };
                Ok(entry.insert(line).value().clone())
            }
        }
    }

    /// Sets the quantity of `line_id`; `None` when the line does not exist.
    pub fn update_line(&self, line_id: u64, quantity: u32) -> Option<CartLine> {
        let product_id = self.product_of(line_id)?;
        let mut line = self.cart.get_mut(&product_id)?;
        if line.id != line_id {
            return None;
        }
        line.quantity = quantity;
        Some(line.clone())
    }

    /// Deletes `line_id`, returning the removed line.
    pub fn remove_line(&self, line_id: u64) -> Option<CartLine> {
        let product_id = self.product_of(line_id)?;
        self.cart
            .remove_if(&product_id, |_, line| line.id == line_id)
            .map(|(_, line)| line)
    }

    fn product_of(&self, line_id: u64) -> Option<u64> {
        self.cart
            .iter()
            .find(|e| e.value().id == line_id)
            .map(|e| *e.key())
    }

    /// Millisecond timestamp, bumped past the last issued id so that rapid
    /// successive adds never collide.
    fn next_line_id(&self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();

        let previous = self
            .last_line_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or_else(|last| last);

        now.max(previous + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(product_id: u64, quantity: u32) -> AddToCartRequest {
        AddToCartRequest {
            product_id,
            quantity,
            name: format!("Product {}", product_id),
            price: 10.0,
            image: None,
        }
    }

    #[test]
    fn test_rapid_adds_get_distinct_increasing_ids() {
        let state = AppState::new();
        let ids: Vec<u64> = (1..=50)
            .map(|p| state.add_line(request(p, 1)).unwrap().id)
            .collect();

        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(state.cart_lines().len(), 50);
    }

    #[test]
    fn test_same_product_accumulates_on_one_line() {
        let state = AppState::new();
        let first = state.add_line(request(1, 3)).unwrap();
        let second = state.add_line(request(1, 5)).unwrap();
        let third = state.add_line(request(1, 0)).unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.quantity, 8);
        assert_eq!(third.quantity, 9);
        assert_eq!(state.cart_lines().len(), 1);
    }

    #[test]
    fn test_update_and_remove_unknown_line() {
        let state = AppState::new();
        assert!(state.update_line(1, 2).is_none());
        assert!(state.remove_line(1).is_none());

        let line = state.add_line(request(2, 1)).unwrap();
        assert_eq!(state.update_line(line.id, 4).map(|l| l.quantity), Some(4));
        assert_eq!(state.remove_line(line.id).map(|l| l.id), Some(line.id));
        assert!(state.cart_lines().is_empty());
    }

    #[test]
    fn test_quantity_overflow_is_rejected() {
        let state = AppState::new();
        state.add_line(request(3, u32::MAX)).unwrap();

        let err = state.add_line(request(3, 1)).unwrap_err();

        assert_eq!(err, ApiError::BadRequest("Quantity is too large".into()));
        assert_eq!(state.cart_lines()[0].quantity, u32::MAX);
    }

    #[test]
    fn test_concurrent_adds_of_one_product_share_a_line() {
        let state = AppState::new();

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for _ in 0..25 {
                        state.add_line(request(4, 1)).unwrap();
                    }
                });
            }
        });

        let lines = state.cart_lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 200);
    }
}
