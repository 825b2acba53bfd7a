//! Mock Cart API Module
//!
//! This module contains the in-memory cart service the storefront talks to,
//! including:
//! - HTTP models and errors
//! - Application state (the single mock cart and the catalog)
//! - Route handlers for the catalog and cart endpoints
//! - A cart gateway that calls those endpoints in-process

pub mod error;
pub mod gateway;
pub mod handlers;
pub mod models;
pub mod state;

// Re-export commonly used types and functions
pub use gateway::ApiCartGateway;
pub use handlers::routes;
pub use state::{AppState, SharedState};
