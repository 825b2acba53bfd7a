//! Cart store scenarios against the mock cart API
//!
//! Each test drives a `CartStore` through `ApiCartGateway`, so every command
//! makes a real HTTP round trip through the router.

use std::sync::Arc;

use storefront::api::{ApiCartGateway, AppState};
use storefront::cart::{
    AddToCartRequest, CartCommand, CartError, CartLine, CartStore, RequestStatus,
};
use storefront::catalog::ProductCatalogStore;

fn create_store() -> (Arc<AppState>, CartStore<ApiCartGateway>) {
    let state = Arc::new(AppState::new());
    let gateway = ApiCartGateway::with_state(state.clone());
    (state, CartStore::new(gateway))
}

fn request(product_id: u64, quantity: u32) -> AddToCartRequest {
    let catalog = ProductCatalogStore::with_sample_catalog();
    let product = catalog
        .products()
        .iter()
        .find(|p| p.id == product_id)
        .unwrap();
    AddToCartRequest::for_product(product, quantity)
}

#[tokio::test]
async fn test_first_add_uses_gateway_quantity() {
    let (_state, mut store) = create_store();

    store.add_to_cart(request(1, 3)).await.unwrap();

    let items = store.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].product_id, 1);
    assert_eq!(items[0].name, "Wireless Headphones");
    assert_eq!(items[0].quantity, 3);
    assert_eq!(store.totals().item_count, 3);
    assert!((store.totals().subtotal - 3.0 * 79.99).abs() < 1e-9);
}

#[tokio::test]
async fn test_repeat_add_increments_local_line_by_exactly_one() {
    let (state, mut store) = create_store();

    store.add_to_cart(request(1, 3)).await.unwrap();
    store.add_to_cart(request(1, 3)).await.unwrap();

    // The local line gains one unit even though three were requested.
    assert_eq!(store.items().len(), 1);
    assert_eq!(store.items()[0].quantity, 4);
    assert_eq!(store.totals().item_count, 4);

    // The gateway itself accumulated the full requested quantity.
    assert_eq!(state.cart_lines()[0].quantity, 6);

    // Refetching adopts the authoritative quantity.
    store.fetch_cart().await.unwrap();
    assert_eq!(store.items()[0].quantity, 6);
    assert_eq!(store.totals().item_count, 6);
}

#[tokio::test]
async fn test_update_to_zero_is_rejected_without_gateway_call() {
    let (state, mut store) = create_store();
    store.add_to_cart(request(6, 2)).await.unwrap();
    let line_id = store.items()[0].id;
    let before = store.state().clone();

    let err = store.update_cart_item(line_id, 0).await.unwrap_err();

    assert!(matches!(err, CartError::Validation(_)));
    assert_eq!(store.state(), &before);
    assert_eq!(state.cart_lines()[0].quantity, 2);
}

#[tokio::test]
async fn test_update_replaces_line_with_gateway_copy() {
    let (_state, mut store) = create_store();
    store.add_to_cart(request(6, 1)).await.unwrap();
    let line_id = store.items()[0].id;

    store.update_cart_item(line_id, 5).await.unwrap();

    assert_eq!(store.items()[0].quantity, 5);
    assert_eq!(store.totals().item_count, 5);
    assert!((store.totals().subtotal - 5.0 * 59.99).abs() < 1e-9);
    assert_eq!(store.state().status, RequestStatus::Fulfilled(CartCommand::Update));
}

#[tokio::test]
async fn test_update_unknown_line_surfaces_error() {
    let (_state, mut store) = create_store();

    let err = store.update_cart_item(999, 2).await.unwrap_err();

    assert_eq!(err, CartError::Gateway("Item not found".into()));
    assert_eq!(store.state().error.as_deref(), Some("Item not found"));
    assert!(store.items().is_empty());
}

#[tokio::test]
async fn test_remove_nonexistent_line_keeps_state() {
    let (_state, mut store) = create_store();
    store.add_to_cart(request(2, 1)).await.unwrap();
    let items_before: Vec<CartLine> = store.items().to_vec();
    let totals_before = store.totals();

    let err = store.remove_from_cart(424242).await.unwrap_err();

    assert_eq!(err, CartError::Gateway("Item not found".into()));
    assert_eq!(store.items(), items_before.as_slice());
    assert_eq!(store.totals(), totals_before);
    assert_eq!(store.state().status, RequestStatus::Rejected(CartCommand::Remove));
    assert_eq!(store.state().error.as_deref(), Some("Item not found"));
}

#[tokio::test]
async fn test_remove_line() {
    let (state, mut store) = create_store();
    store.add_to_cart(request(2, 1)).await.unwrap();
    store.add_to_cart(request(7, 2)).await.unwrap();
    let line_id = store.items()[0].id;

    store.remove_from_cart(line_id).await.unwrap();

    assert_eq!(store.items().len(), 1);
    assert_eq!(store.items()[0].product_id, 7);
    assert_eq!(store.totals().item_count, 2);
    assert_eq!(state.cart_lines().len(), 1);
}

#[tokio::test]
async fn test_open_cart_hydrates_from_gateway() {
    let (state, mut store) = create_store();
    state.add_line(request(11, 2)).unwrap();
    state.add_line(request(12, 1)).unwrap();

    store.open_cart().await.unwrap();

    assert!(store.state().is_open);
    let names: Vec<&str> = store.items().iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Water Bottle", "Blender"]);
    assert_eq!(store.totals().item_count, 3);
    assert!((store.totals().subtotal - (2.0 * 24.99 + 89.99)).abs() < 1e-9);

    store.close_cart();
    assert!(!store.state().is_open);
}

#[tokio::test]
async fn test_subscribers_see_final_snapshot() {
    let (_state, mut store) = create_store();
    let mut rx = store.subscribe();

    store.add_to_cart(request(5, 2)).await.unwrap();

    assert!(rx.has_changed().unwrap());
    let snapshot = rx.borrow_and_update().clone();
    assert_eq!(snapshot, *store.state());
    assert!(!snapshot.is_loading());
    assert_eq!(snapshot.totals.item_count, 2);
}
