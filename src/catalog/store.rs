//! Product Catalog State Management
//!
//! [`ProductCatalogStore`] owns the immutable product list and the active
//! [`FilterCriteria`], and keeps the derived view in step with them.

use super::fixtures::sample_products;
use super::helpers::{apply_criteria, distinct_values, ensure_unique_ids, update_criteria};
use super::models::{CatalogError, CriteriaUpdate, FilterCriteria, PriceRange, Product, SortKey};
use tracing::debug;

/// Catalog state container.
///
/// Every mutator changes one criteria field and then rebuilds the view from
/// the full product list, so stale filters never compound.
#[derive(Debug, Clone)]
pub struct ProductCatalogStore {
    products: Vec<Product>,
    criteria: FilterCriteria,
    filtered: Vec<Product>,
}

impl Default for ProductCatalogStore {
    fn default() -> Self {
        Self::with_sample_catalog()
    }
}

impl ProductCatalogStore {
    /// Builds a store over `products` with default criteria.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        ensure_unique_ids(&products)?;
        Ok(Self::from_products(products))
    }

    /// Builds a store over the bundled sample catalog, whose ids are known
    /// to be unique.
    pub fn with_sample_catalog() -> Self {
        Self::from_products(sample_products())
    }

    fn from_products(products: Vec<Product>) -> Self {
        let criteria = FilterCriteria::default();
        let filtered = apply_criteria(&products, &criteria);
        Self {
            products,
            criteria,
            filtered,
        }
    }

    /// Full catalog in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Current derived view.
    pub fn filtered(&self) -> &[Product] {
        &self.filtered
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Distinct categories in catalog order.
    pub fn categories(&self) -> Vec<String> {
        distinct_values(&self.products, |p| p.category.as_str())
    }

    /// Distinct brands in catalog order.
    pub fn brands(&self) -> Vec<String> {
        distinct_values(&self.products, |p| p.brand.as_str())
    }

    /// Applies `update` and recomputes the view.
    pub fn apply(&mut self, update: CriteriaUpdate) -> &[Product] {
        debug!(?update, "applying catalog criteria update");
        update_criteria(&mut self.criteria, update);
        self.filtered = apply_criteria(&self.products, &self.criteria);
        debug!(
            visible = self.filtered.len(),
            total = self.products.len(),
            "catalog view recomputed"
        );
        &self.filtered
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) -> &[Product] {
        self.apply(CriteriaUpdate::SetSearchQuery(query.into()))
    }

    pub fn toggle_category(&mut self, category: impl Into<String>) -> &[Product] {
        self.apply(CriteriaUpdate::ToggleCategory(category.into()))
    }

    pub fn toggle_brand(&mut self, brand: impl Into<String>) -> &[Product] {
        self.apply(CriteriaUpdate::ToggleBrand(brand.into()))
    }

    /// Stores `range` exactly as given; bounds outside the slider range are kept.
    pub fn set_price_range(&mut self, range: PriceRange) -> &[Product] {
        self.apply(CriteriaUpdate::SetPriceRange(range))
    }

    pub fn toggle_in_stock_only(&mut self) -> &[Product] {
        self.apply(CriteriaUpdate::ToggleInStockOnly)
    }

    pub fn set_sort_by(&mut self, sort_by: SortKey) -> &[Product] {
        self.apply(CriteriaUpdate::SetSortBy(sort_by))
    }

    /// Resets every criteria field, search and sort included.
    pub fn clear_filters(&mut self) -> &[Product] {
        self.apply(CriteriaUpdate::ClearFilters)
    }
}
