//! Shopping Cart Domain Models
//!
//! This module contains all data structures related to the shopping cart
//! business domain: cart lines, gateway payloads and the observable state.

use serde::{Deserialize, Serialize};

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Returns the default quantity (1) for add requests
fn default_quantity() -> u32 {
    1
}

/// One row in the cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Line identifier assigned by the gateway
    pub id: u64,

    /// Catalog product this line refers to
    pub product_id: u64,

    /// Product name at the time it was added
    pub name: String,

    /// Unit price snapshot taken when the line was created
    pub price: f64,

    /// Number of units, always at least 1
    pub quantity: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CartLine {
    /// Price multiplied by quantity.
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Payload for adding a product to the cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: u64,

    /// Requested quantity (defaults to 1)
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    pub name: String,

    pub price: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl AddToCartRequest {
    /// Builds a request for `quantity` units of `product`.
    pub fn for_product(product: &crate::catalog::Product, quantity: u32) -> Self {
        Self {
            product_id: product.id,
            quantity,
            name: product.name.clone(),
            price: product.price,
            image: Some(product.image.clone()),
        }
    }
}

/// Body of a quantity update
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct UpdateCartItemRequest {
    pub quantity: u32,
}

/// Authoritative cart contents returned by a fetch
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CartResponse {
    #[serde(default)]
    pub items: Vec<CartLine>,
}

/// Totals derived from the cart lines
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Sum of quantities, wide enough that no two `u32` lines overflow it
    pub item_count: u64,

    /// Sum of price times quantity
    pub subtotal: f64,
}

// =============================================================================
// Request Lifecycle
// =============================================================================

/// Cart commands that need a gateway round trip
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum CartCommand {
    Fetch,
    Add,
    Update,
    Remove,
}

/// Lifecycle of the most recent cart command.
///
/// A single status is shared by every command, so it doubles as the global
/// loading flag.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(tag = "state", content = "command", rename_all = "camelCase")]
pub enum RequestStatus {
    #[default]
    Idle,
    Pending(CartCommand),
    Fulfilled(CartCommand),
    Rejected(CartCommand),
}

impl RequestStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestStatus::Pending(_))
    }
}

/// Snapshot of the cart as observers see it
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    pub items: Vec<CartLine>,

    pub totals: CartTotals,

    /// Whether the cart view is open
    pub is_open: bool,

    pub status: RequestStatus,

    /// Message of the last gateway failure, cleared when a command starts
    pub error: Option<String>,
}

impl CartState {
    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }
}
