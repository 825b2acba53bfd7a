//! Routing module for the storefront application

use crate::api::SharedState;
use axum::{
    body::Body,
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use uuid::Uuid;

/// Response header carrying the id assigned to each request
pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    // Middleware: Log requests under a fresh request id
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        let request_id = Uuid::new_v4().simple().to_string();
        info!(%request_id, method = %req.method(), uri = %req.uri(), "request");

        let mut res = next.run(req).await;
        if !res.status().is_success() {
            warn!(%request_id, status = %res.status(), "request failed");
        }
        if let Ok(value) = HeaderValue::from_str(&request_id) {
            res.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        res
    });

    // Middleware: CORS (Permissive for local dev)
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Routes
    Router::new()
        .merge(crate::api::routes())
        .layer(log_layer)
        .layer(cors_layer)
        .with_state(state)
}
