//! Mock cart API route handlers
//!
//! This module implements the HTTP endpoints a storefront front end talks
//! to: the product listing and the four cart operations.

use super::{error::ApiError, models::*, state::SharedState};
use crate::cart::{
    helpers::format_item_summary, AddToCartRequest, CartLine, CartResponse, UpdateCartItemRequest,
};
use crate::catalog::{helpers::apply_criteria, Product};
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    routing::{get, patch, post},
    Json, Router,
};
use tracing::{debug, info, warn};

/// Creates routes for the catalog and cart endpoints
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/api/products", get(list_products))
        .route("/api/cart", get(get_cart))
        .route("/api/cart/add", post(add_to_cart))
        .route("/api/cart/items/:id", patch(update_item).delete(remove_item))
}

/// Endpoint: GET /api/products
/// Lists the catalog filtered and sorted by the query string.
async fn list_products(
    State(state): State<SharedState>,
    Query(query): Query<ProductQuery>,
) -> Json<Vec<Product>> {
    let criteria = query.into_criteria();
    Json(apply_criteria(&state.catalog, &criteria))
}

/// Endpoint: GET /api/cart
async fn get_cart(State(state): State<SharedState>) -> Json<CartResponse> {
    let items = state.cart_lines();
    debug!("cart contents: {}", format_item_summary(&items));
    Json(CartResponse { items })
}

/// Endpoint: POST /api/cart/add
/// Adds a product, accumulating quantity when it is already in the cart.
async fn add_to_cart(
    State(state): State<SharedState>,
    body: Result<Json<AddToCartRequest>, JsonRejection>,
) -> Result<Json<CartLine>, ApiError> {
    let Json(request) = body.map_err(|e| {
        warn!("add to cart rejected: {}", e.body_text());
        ApiError::BadRequest("Invalid request body".to_string())
    })?;

    let line = state.add_line(request).map_err(|e| {
        warn!("add to cart rejected: {}", e);
        e
    })?;
    info!(line_id = line.id, "cart line now {}x {}", line.quantity, line.name);
    Ok(Json(line))
}

/// Endpoint: PATCH /api/cart/items/:id
async fn update_item(
    State(state): State<SharedState>,
    Path(line_id): Path<u64>,
    body: Result<Json<UpdateCartItemRequest>, JsonRejection>,
) -> Result<Json<CartLine>, ApiError> {
    let Json(update) = body.map_err(|_| ApiError::BadRequest("Invalid request body".to_string()))?;

    if update.quantity < 1 {
        return Err(ApiError::BadRequest("Quantity must be at least 1".to_string()));
    }

    state
        .update_line(line_id, update.quantity)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Item not found".to_string()))
}

/// Endpoint: DELETE /api/cart/items/:id
async fn remove_item(
    State(state): State<SharedState>,
    Path(line_id): Path<u64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let line = state
        .remove_line(line_id)
        .ok_or_else(|| ApiError::NotFound("Item not found".to_string()))?;

    info!(line_id, "removed {} from cart", line.name);
    Ok(Json(DeleteResponse { success: true }))
}
