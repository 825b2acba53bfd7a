//! Storefront Library
//!
//! This library provides the core of a small storefront: a filterable
//! product catalog, a shopping cart reconciled against a remote cart
//! gateway, and the mock cart API that gateway talks to.

// Domain modules
pub mod cart;
pub mod catalog;

// Infrastructure
pub mod api;
pub mod config;
pub mod router;
