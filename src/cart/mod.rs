//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (CartLine, gateway payloads, CartState)
//! - Reconciliation helpers (merging gateway responses, totals)
//! - The gateway boundary and its error type
//! - The cart state container

pub mod error;
pub mod gateway;
pub mod helpers;
pub mod models;
pub mod store;

// Re-export commonly used types for convenience
pub use error::{CartError, GatewayError};
pub use gateway::CartGateway;
pub use models::{
    AddToCartRequest, CartCommand, CartLine, CartResponse, CartState, CartTotals, RequestStatus,
    UpdateCartItemRequest,
};
pub use store::CartStore;
