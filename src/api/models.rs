//! Mock Cart API Models
//!
//! Request and response bodies that only exist at the HTTP boundary. Cart
//! lines and add requests reuse the cart domain types.

use crate::catalog::{FilterCriteria, PriceRange, SortKey, PRICE_SLIDER_MAX, PRICE_SLIDER_MIN};
use serde::{Deserialize, Serialize};

/// Response for a successful delete
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// Query string accepted by `GET /api/products`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    pub search: Option<String>,

    /// Comma-separated category names
    pub category: Option<String>,

    /// Comma-separated brand names
    pub brand: Option<String>,

    pub min_price: Option<f64>,

    pub max_price: Option<f64>,

    #[serde(default)]
    pub in_stock_only: bool,

    pub sort: Option<SortKey>,
}

impl ProductQuery {
    /// Converts the query into catalog criteria, defaulting whatever is absent.
    pub fn into_criteria(self) -> FilterCriteria {
        FilterCriteria {
            categories: split_list(self.category),
            brands: split_list(self.brand),
            price_range: PriceRange::new(
                self.min_price.unwrap_or(PRICE_SLIDER_MIN),
                self.max_price.unwrap_or(PRICE_SLIDER_MAX),
            ),
            in_stock_only: self.in_stock_only,
            search: self.search.unwrap_or_default(),
            sort_by: self.sort.unwrap_or_default(),
        }
    }
}

fn split_list(raw: Option<String>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
