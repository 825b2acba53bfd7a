//! Shopping Cart State Management
//!
//! [`CartStore`] keeps the local copy of the cart in step with a
//! [`CartGateway`]. Commands take `&mut self`, so a store never has two
//! gateway calls in flight and responses are reconciled in issue order.

use super::error::{CartError, GatewayError};
use super::gateway::CartGateway;
use super::helpers::{
    self, drop_empty_lines, format_item_summary, merge_added_line, remove_line, replace_line,
};
use super::models::{
    AddToCartRequest, CartCommand, CartLine, CartState, CartTotals, RequestStatus,
};
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Cart state container backed by a gateway.
pub struct CartStore<G> {
    gateway: G,
    state: CartState,
    snapshots: watch::Sender<CartState>,
}

impl<G: CartGateway> CartStore<G> {
    /// Creates an empty, closed cart that talks to `gateway`.
    pub fn new(gateway: G) -> Self {
        let state = CartState::default();
        let (snapshots, _) = watch::channel(state.clone());
        Self {
            gateway,
            state,
            snapshots,
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn items(&self) -> &[CartLine] {
        &self.state.items
    }

    pub fn totals(&self) -> CartTotals {
        self.state.totals
    }

    /// Receives a snapshot after every transition, pending states included.
    pub fn subscribe(&self) -> watch::Receiver<CartState> {
        self.snapshots.subscribe()
    }

    /// Recomputes item count and subtotal from the current lines.
    pub fn calculate_totals(&mut self) -> CartTotals {
        self.state.totals = helpers::calculate_totals(&self.state.items);
        self.state.totals
    }

    /// Replaces the local lines with the gateway's cart.
    pub async fn fetch_cart(&mut self) -> Result<(), CartError> {
        self.begin(CartCommand::Fetch);

        let outcome = match self.gateway.fetch().await {
            Ok(response) => {
                self.state.items = drop_empty_lines(response.items);
                info!(
                    lines = self.state.items.len(),
                    "cart fetched: {}",
                    format_item_summary(&self.state.items)
                );
                Ok(())
            }
            Err(err) => Err(err),
        };

        self.finish(CartCommand::Fetch, outcome)
    }

    /// Adds a product through the gateway.
    ///
    /// When the gateway answers with a line that is already in the cart, the
    /// local quantity goes up by exactly 1 regardless of `request.quantity`.
    pub async fn add_to_cart(&mut self, request: AddToCartRequest) -> Result<(), CartError> {
        if request.quantity < 1 {
            return Err(CartError::Validation(
                "quantity must be at least 1".to_string(),
            ));
        }

        self.begin(CartCommand::Add);

        let outcome = match self.gateway.add(&request).await {
            Ok(line) => {
                info!(
                    line_id = line.id,
                    product_id = request.product_id,
                    "added to cart: {}",
                    request.name
                );
                merge_added_line(&mut self.state.items, line);
                Ok(())
            }
            Err(err) => Err(err),
        };

        self.finish(CartCommand::Add, outcome)
    }

    /// Sets the quantity of `line_id`. Quantities below 1 never reach the gateway.
    pub async fn update_cart_item(&mut self, line_id: u64, quantity: u32) -> Result<(), CartError> {
        if quantity < 1 {
            return Err(CartError::Validation(format!(
                "quantity for line {} must be at least 1",
                line_id
            )));
        }

        self.begin(CartCommand::Update);

        let outcome = match self.gateway.update(line_id, quantity).await {
            Ok(line) => {
                if !replace_line(&mut self.state.items, line) {
                    debug!(line_id, "updated line is not in the local cart");
                }
                Ok(())
            }
            Err(err) => Err(err),
        };

        self.finish(CartCommand::Update, outcome)
    }

    /// Deletes `line_id` through the gateway; the local line stays on failure.
    pub async fn remove_from_cart(&mut self, line_id: u64) -> Result<(), CartError> {
        self.begin(CartCommand::Remove);

        let outcome = match self.gateway.delete(line_id).await {
            Ok(()) => {
                if !remove_line(&mut self.state.items, line_id) {
                    debug!(line_id, "removed line was not in the local cart");
                }
                Ok(())
            }
            Err(err) => Err(err),
        };

        self.finish(CartCommand::Remove, outcome)
    }

    /// Opens the cart view and hydrates it from the gateway.
    pub async fn open_cart(&mut self) -> Result<(), CartError> {
        self.state.is_open = true;
        self.publish();
        self.fetch_cart().await
    }

    pub fn close_cart(&mut self) {
        self.state.is_open = false;
        self.publish();
    }

    /// Closes an open cart, or opens (and fetches) a closed one.
    pub async fn toggle_cart(&mut self) -> Result<(), CartError> {
        if self.state.is_open {
            self.close_cart();
            Ok(())
        } else {
            self.open_cart().await
        }
    }

    pub fn clear_error(&mut self) {
        self.state.error = None;
        self.publish();
    }

    fn begin(&mut self, command: CartCommand) {
        debug!(?command, "cart command pending");
        self.state.status = RequestStatus::Pending(command);
        self.state.error = None;
        self.publish();
    }

    fn finish(
        &mut self,
        command: CartCommand,
        outcome: Result<(), GatewayError>,
    ) -> Result<(), CartError> {
        let result = match outcome {
            Ok(()) => {
                self.calculate_totals();
                self.state.status = RequestStatus::Fulfilled(command);
                Ok(())
            }
            Err(err) => {
                warn!(?command, error = %err, "cart command rejected");
                self.state.status = RequestStatus::Rejected(command);
                self.state.error = Some(err.message.clone());
                Err(err.into())
            }
        };

        self.publish();
        result
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.state.clone());
    }
}
