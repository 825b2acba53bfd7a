//! Cart gateway over the mock API
//!
//! [`ApiCartGateway`] drives a [`CartStore`](crate::cart::CartStore) against
//! the mock cart endpoints by sending real HTTP requests through the router
//! in-process.

use super::state::SharedState;
use crate::cart::{
    AddToCartRequest, CartGateway, CartLine, CartResponse, GatewayError, UpdateCartItemRequest,
};
use crate::router::create_app_router;
use async_trait::async_trait;
use axum::{
    body::{Body, Bytes},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot`

const INVALID_RESPONSE: &str = "Invalid response format from server";

/// Gateway that dispatches cart commands to an axum router.
#[derive(Clone)]
pub struct ApiCartGateway {
    router: Router,
}

impl ApiCartGateway {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// Builds the full application router over `state`.
    pub fn with_state(state: SharedState) -> Self {
        Self::new(create_app_router(state))
    }

    async fn send<B: Serialize>(
        &self,
        method: Method,
        uri: &str,
        body: Option<&B>,
    ) -> Result<(StatusCode, Bytes), GatewayError> {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(payload) => {
                let bytes =
                    serde_json::to_vec(payload).map_err(|e| GatewayError::new(e.to_string()))?;
                builder
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(bytes))
            }
            None => builder.body(Body::empty()),
        }
        .map_err(|e| GatewayError::new(e.to_string()))?;

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| GatewayError::new(e.to_string()))?;

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| GatewayError::new(e.to_string()))?;

        Ok((status, bytes))
    }
}

/// Picks the `message` or `error` field of a failure body, or `fallback`.
fn failure_message(body: &[u8], fallback: &str) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .or_else(|| v.get("error"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| fallback.to_string())
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, GatewayError> {
    serde_json::from_slice(body).map_err(|_| GatewayError::new(INVALID_RESPONSE))
}

fn ensure_success(status: StatusCode, body: &[u8], fallback: &str) -> Result<(), GatewayError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(GatewayError::new(failure_message(body, fallback)))
    }
}

#[async_trait]
impl CartGateway for ApiCartGateway {
    async fn fetch(&self) -> Result<CartResponse, GatewayError> {
        let (status, body) = self.send::<()>(Method::GET, "/api/cart", None).await?;
        ensure_success(status, &body, "Failed to fetch cart")?;

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(CartResponse::default());
        }
        decode(&body)
    }

    async fn add(&self, request: &AddToCartRequest) -> Result<CartLine, GatewayError> {
        let (status, body) = self.send(Method::POST, "/api/cart/add", Some(request)).await?;
        ensure_success(status, &body, "Failed to add to cart")?;
        decode(&body)
    }

    async fn update(&self, line_id: u64, quantity: u32) -> Result<CartLine, GatewayError> {
        let uri = format!("/api/cart/items/{}", line_id);
        let payload = UpdateCartItemRequest { quantity };
        let (status, body) = self.send(Method::PATCH, &uri, Some(&payload)).await?;
        ensure_success(status, &body, "Failed to update item")?;
        decode(&body)
    }

    async fn delete(&self, line_id: u64) -> Result<(), GatewayError> {
        let uri = format!("/api/cart/items/{}", line_id);
        let (status, body) = self.send::<()>(Method::DELETE, &uri, None).await?;
        ensure_success(status, &body, "Failed to remove item")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;

    #[test]
    fn test_failure_message_prefers_body_fields() {
        assert_eq!(failure_message(br#"{"message":"nope"}"#, "fallback"), "nope");
        assert_eq!(
            failure_message(br#"{"error":"Item not found"}"#, "fallback"),
            "Item not found"
        );
        assert_eq!(failure_message(b"", "Failed to remove item"), "Failed to remove item");
        assert_eq!(failure_message(b"<html>", "fallback"), "fallback");
    }

    #[test]
    fn test_decode_reports_invalid_format() {
        let err = decode::<CartResponse>(b"not json").unwrap_err();
        assert_eq!(err.message, INVALID_RESPONSE);
    }

    #[tokio::test]
    async fn test_blank_fetch_body_is_an_empty_cart() {
        let gateway = ApiCartGateway::new(Router::new().route("/api/cart", get(|| async { "  " })));

        let cart = gateway.fetch().await.unwrap();

        assert_eq!(cart, CartResponse::default());
    }

    #[tokio::test]
    async fn test_fetch_failure_uses_default_message() {
        let gateway = ApiCartGateway::new(Router::new().route(
            "/api/cart",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "") }),
        ));

        let err = gateway.fetch().await.unwrap_err();

        assert_eq!(err.message, "Failed to fetch cart");
    }
}
