//! Product Catalog Domain Models
//!
//! This module contains the product record and the filter criteria that
//! drive the derived catalog view.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Constants
// =============================================================================

/// Lower bound of the price slider offered to shoppers
pub const PRICE_SLIDER_MIN: f64 = 0.0;
/// Upper bound of the price slider offered to shoppers
pub const PRICE_SLIDER_MAX: f64 = 1000.0;

// =============================================================================
// Catalog Domain Models
// =============================================================================

/// A product in the catalog. Loaded once and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier within the catalog
    pub id: u64,

    /// Display name
    pub name: String,

    /// Unit price, non-negative
    pub price: f64,

    pub category: String,

    pub brand: String,

    /// Average rating between 0 and 5
    pub rating: f64,

    /// Image URL
    pub image: String,

    pub description: String,

    pub in_stock: bool,
}

/// Inclusive price bounds applied to every product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// True when `price` lies within `[min, max]`.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(PRICE_SLIDER_MIN, PRICE_SLIDER_MAX)
    }
}

/// Ordering applied to the filtered view.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    #[serde(rename = "name")]
    NameAsc,
    #[serde(rename = "price-asc")]
    PriceAsc,
    #[serde(rename = "price-desc")]
    PriceDesc,
    #[serde(rename = "rating")]
    RatingDesc,
}

/// Active search, filter and sort settings.
///
/// The default value filters nothing out and sorts by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// Selected categories in selection order; empty means all
    pub categories: Vec<String>,

    /// Selected brands in selection order; empty means all
    pub brands: Vec<String>,

    pub price_range: PriceRange,

    pub in_stock_only: bool,

    /// Free-text search over name, description and brand
    pub search: String,

    pub sort_by: SortKey,
}

/// A single change to the filter criteria.
#[derive(Debug, Clone, PartialEq)]
pub enum CriteriaUpdate {
    SetSearchQuery(String),
    ToggleCategory(String),
    ToggleBrand(String),
    SetPriceRange(PriceRange),
    ToggleInStockOnly,
    SetSortBy(SortKey),
    ClearFilters,
}

/// Errors raised while building a catalog.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("duplicate product id {0} in catalog")]
    DuplicateProductId(u64),
}
