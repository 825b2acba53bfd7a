//! Remote Cart Gateway
//!
//! The cart store never owns authoritative cart state; every command goes
//! through a [`CartGateway`].

use super::error::GatewayError;
use super::models::{AddToCartRequest, CartLine, CartResponse};
use async_trait::async_trait;
use std::sync::Arc;

/// Service boundary that holds the authoritative cart.
#[async_trait]
pub trait CartGateway: Send + Sync {
    /// Returns every line in the cart. An empty response is an empty cart.
    async fn fetch(&self) -> Result<CartResponse, GatewayError>;

    /// Adds a product and returns the line the gateway stored.
    async fn add(&self, request: &AddToCartRequest) -> Result<CartLine, GatewayError>;

    /// Sets the quantity of `line_id` and returns the updated line.
    async fn update(&self, line_id: u64, quantity: u32) -> Result<CartLine, GatewayError>;

    /// Deletes `line_id`.
    async fn delete(&self, line_id: u64) -> Result<(), GatewayError>;
}

#[async_trait]
impl<G> CartGateway for Arc<G>
where
    G: CartGateway + ?Sized,
{
    async fn fetch(&self) -> Result<CartResponse, GatewayError> {
        (**self).fetch().await
    }

    async fn add(&self, request: &AddToCartRequest) -> Result<CartLine, GatewayError> {
        (**self).add(request).await
    }

    async fn update(&self, line_id: u64, quantity: u32) -> Result<CartLine, GatewayError> {
        (**self).update(line_id, quantity).await
    }

    async fn delete(&self, line_id: u64) -> Result<(), GatewayError> {
        (**self).delete(line_id).await
    }
}
