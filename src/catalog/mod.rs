//! Product Catalog Domain Module
//!
//! This module contains the product catalog logic, including:
//! - Domain models (Product, FilterCriteria, SortKey)
//! - The bundled sample catalog
//! - Pure filtering and sorting helpers
//! - The catalog state container

pub mod fixtures;
pub mod helpers;
pub mod models;
pub mod store;

// Re-export commonly used types for convenience
pub use models::{
    CatalogError, CriteriaUpdate, FilterCriteria, PriceRange, Product, SortKey, PRICE_SLIDER_MAX,
    PRICE_SLIDER_MIN,
};
pub use store::ProductCatalogStore;
