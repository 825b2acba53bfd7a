//! Catalog Filtering and Sorting Helpers
//!
//! Pure functions that turn the full product list plus a set of
//! [`FilterCriteria`] into the derived view. They never mutate their input.

use super::models::{CatalogError, CriteriaUpdate, FilterCriteria, Product, SortKey};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Returns `true` when `product` passes every active filter.
///
/// The search, category, brand and stock filters only apply when set; the
/// price range is always applied.
pub fn matches_criteria(product: &Product, criteria: &FilterCriteria) -> bool {
    matches_search(product, &criteria.search)
        && (criteria.categories.is_empty() || criteria.categories.contains(&product.category))
        && (criteria.brands.is_empty() || criteria.brands.contains(&product.brand))
        && criteria.price_range.contains(product.price)
        && (!criteria.in_stock_only || product.in_stock)
}

fn matches_search(product: &Product, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }

    let query = search.to_lowercase();
    product.name.to_lowercase().contains(&query)
        || product.description.to_lowercase().contains(&query)
        || product.brand.to_lowercase().contains(&query)
}

/// Compares two display strings the way a shopper expects to see them listed.
///
/// Letters compare case-insensitively first; on a tie the lowercase form
/// sorts before the uppercase one, then raw code points decide.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    folded
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

/// Stable sort of `products` by `sort_by`. Equal keys keep their relative order.
pub fn sort_products(products: &mut [Product], sort_by: SortKey) {
    match sort_by {
        SortKey::NameAsc => products.sort_by(|a, b| locale_cmp(&a.name, &b.name)),
        SortKey::PriceAsc => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::RatingDesc => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
}

/// Computes the derived view: filter `products`, then sort the survivors.
pub fn apply_criteria(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    let mut view: Vec<Product> = products
        .iter()
        .filter(|p| matches_criteria(p, criteria))
        .cloned()
        .collect();

    sort_products(&mut view, criteria.sort_by);
    view
}

/// Applies a single criteria change in place.
pub fn update_criteria(criteria: &mut FilterCriteria, update: CriteriaUpdate) {
    match update {
        CriteriaUpdate::SetSearchQuery(query) => criteria.search = query,
        CriteriaUpdate::ToggleCategory(category) => {
            toggle_selection(&mut criteria.categories, category)
        }
        CriteriaUpdate::ToggleBrand(brand) => toggle_selection(&mut criteria.brands, brand),
        CriteriaUpdate::SetPriceRange(range) => criteria.price_range = range,
        CriteriaUpdate::ToggleInStockOnly => criteria.in_stock_only = !criteria.in_stock_only,
        CriteriaUpdate::SetSortBy(sort_by) => criteria.sort_by = sort_by,
        CriteriaUpdate::ClearFilters => *criteria = FilterCriteria::default(),
    }
}

/// Removes `value` if selected, otherwise appends it.
fn toggle_selection(selection: &mut Vec<String>, value: String) {
    if let Some(pos) = selection.iter().position(|v| *v == value) {
        selection.remove(pos);
    } else {
        selection.push(value);
    }
}

/// Distinct values of `field` across `products`, in first-seen order.
pub fn distinct_values<'a, F>(products: &'a [Product], field: F) -> Vec<String>
where
    F: Fn(&'a Product) -> &'a str,
{
    let mut seen = HashSet::new();
    products
        .iter()
        .map(field)
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

/// Fails on the first product id that appears twice.
pub fn ensure_unique_ids(products: &[Product]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for product in products {
        if !seen.insert(product.id) {
            return Err(CatalogError::DuplicateProductId(product.id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::sample_products;
    use crate::catalog::models::PriceRange;

    fn product(id: u64, name: &str, price: f64, rating: f64) -> Product {
        Product {
            id,
            name: name.into(),
            price,
            category: "Misc".into(),
            brand: "Acme".into(),
            rating,
            image: String::new(),
            description: String::new(),
            in_stock: true,
        }
    }

    #[test]
    fn test_locale_cmp_ignores_case_first() {
        assert_eq!(locale_cmp("Laptop Backpack", "LED Desk Lamp"), Ordering::Less);
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("apple", "Apple"), Ordering::Less);
        assert_eq!(locale_cmp("Apple", "Apple"), Ordering::Equal);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut products = vec![
            product(1, "B", 10.0, 4.0),
            product(2, "A", 5.0, 4.5),
            product(3, "C", 10.0, 4.0),
            product(4, "D", 5.0, 4.0),
        ];

        sort_products(&mut products, SortKey::PriceAsc);
        let ids: Vec<u64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);

        sort_products(&mut products, SortKey::RatingDesc);
        let ids: Vec<u64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_search_matches_name_description_or_brand() {
        let products = sample_products();
        let mut criteria = FilterCriteria {
            search: "AUDIOTECH".into(),
            ..Default::default()
        };

        let ids: Vec<u64> = apply_criteria(&products, &criteria).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![6, 1]);

        criteria.search = "carafe".into();
        let view = apply_criteria(&products, &criteria);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "Coffee Maker");
    }

    #[test]
    fn test_every_predicate_holds_for_each_result() {
        let products = sample_products();
        let criteria = FilterCriteria {
            categories: vec!["Electronics".into(), "Sportswear".into()],
            brands: vec!["AudioTech".into(), "FitLife".into(), "TypeMaster".into()],
            price_range: PriceRange::new(30.0, 150.0),
            in_stock_only: true,
            search: "e".into(),
            sort_by: SortKey::PriceDesc,
        };

        let view = apply_criteria(&products, &criteria);
        assert!(!view.is_empty());
        for p in &view {
            assert!(products.contains(p));
            assert!(matches_criteria(p, &criteria));
        }

        let expected = products.iter().filter(|p| matches_criteria(p, &criteria)).count();
        assert_eq!(view.len(), expected);
        assert!(view.windows(2).all(|w| w[0].price >= w[1].price));
    }

    #[test]
    fn test_toggle_selection_is_symmetric() {
        let mut criteria = FilterCriteria::default();
        update_criteria(&mut criteria, CriteriaUpdate::ToggleBrand("B".into()));
        update_criteria(&mut criteria, CriteriaUpdate::ToggleBrand("A".into()));
        assert_eq!(criteria.brands, vec!["B".to_string(), "A".to_string()]);

        update_criteria(&mut criteria, CriteriaUpdate::ToggleBrand("B".into()));
        assert_eq!(criteria.brands, vec!["A".to_string()]);
    }

    #[test]
    fn test_distinct_values_keep_first_seen_order() {
        let products = sample_products();
        let categories = distinct_values(&products, |p| p.category.as_str());
        assert_eq!(
            categories,
            vec!["Electronics", "Sportswear", "Home & Kitchen", "Accessories"]
        );
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let products = vec![product(1, "A", 1.0, 1.0), product(1, "B", 2.0, 2.0)];
        assert_eq!(
            ensure_unique_ids(&products),
            Err(CatalogError::DuplicateProductId(1))
        );
    }
}
