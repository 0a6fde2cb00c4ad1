//! Search query and the derivation pipeline.

use crate::catalog::{Catalog, Product};
use crate::search::{FilterCriteria, SearchResults};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Sort options for the derived list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Catalog order.
    #[default]
    Default,
    /// Sort by price, low to high.
    PriceLow,
    /// Sort by price, high to low.
    PriceHigh,
    /// Sort by rating, highest first.
    Rating,
    /// Sort by name A-Z (case-sensitive).
    Name,
}

impl SortMode {
    /// Every sort mode, in toolbar order.
    pub const ALL: [SortMode; 5] = [
        SortMode::Default,
        SortMode::PriceLow,
        SortMode::PriceHigh,
        SortMode::Rating,
        SortMode::Name,
    ];

    /// Stable key used in forms and config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Default => "default",
            SortMode::PriceLow => "price-low",
            SortMode::PriceHigh => "price-high",
            SortMode::Rating => "rating",
            SortMode::Name => "name",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortMode::Default => "Sort by",
            SortMode::PriceLow => "Price: Low to High",
            SortMode::PriceHigh => "Price: High to Low",
            SortMode::Rating => "Highest Rated",
            SortMode::Name => "Name: A to Z",
        }
    }

    /// Parse a sort key. Unknown keys fall back to [`SortMode::Default`].
    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == key.trim())
            .unwrap_or_default()
    }

    /// Sort in place. The sort is stable, so ties keep catalog order.
    pub fn apply(&self, products: &mut [&Product]) {
        match self {
            SortMode::Default => {}
            SortMode::PriceLow => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortMode::PriceHigh => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
            SortMode::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            SortMode::Name => products.sort_by(|a, b| a.name.cmp(&b.name)),
        }
    }
}

/// A query over the catalog: search text, filters and sort mode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SearchQuery {
    /// Search text. Empty matches everything.
    #[serde(default)]
    pub text: String,
    /// Filter criteria.
    #[serde(default)]
    pub filters: FilterCriteria,
    /// Sort mode.
    #[serde(default)]
    pub sort: SortMode,
}

impl SearchQuery {
    /// Create a query that returns the whole catalog in order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the filter criteria.
    pub fn with_filters(mut self, filters: FilterCriteria) -> Self {
        self.filters = filters;
        self
    }

    /// Set the sort mode.
    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// Whether `product` passes the text filter and every criterion.
    pub fn matches(&self, product: &Product) -> bool {
        product.matches_text(&self.text.to_lowercase()) && self.filters.matches(product)
    }

    /// Derive the displayed list from the catalog.
    ///
    /// Filters run in order (text, price, rating, color) and the sort is
    /// applied last. The catalog is never modified.
    pub fn run<'a>(&self, catalog: &'a Catalog) -> SearchResults<&'a Product> {
        let needle = self.text.to_lowercase();
        let mut items: Vec<&Product> = catalog
            .products()
            .iter()
            .filter(|p| p.matches_text(&needle))
            .filter(|p| self.filters.matches_price(p))
            .filter(|p| self.filters.matches_rating(p))
            .filter(|p| self.filters.matches_colors(p))
            .collect();
        self.sort.apply(&mut items);

        debug!(
            text = %self.text,
            sort = self.sort.as_str(),
            matched = items.len(),
            total = catalog.len(),
            "derived list recomputed"
        );
        SearchResults::new(items, catalog.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::PriceRange;

    fn catalog() -> Catalog {
        Catalog::from_products(vec![
            Product::new("1", "banana", 30.0).with_rating(200.0),
            Product::new("2", "Apple", 10.0).with_rating(900.0),
            Product::new("3", "cherry", 20.0).with_rating(900.0),
            Product::new("4", "apple", 10.0).with_rating(100.0),
        ])
    }

    fn names(results: &SearchResults<&Product>) -> Vec<String> {
        results.items.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_sort_mode_keys() {
        for mode in SortMode::ALL {
            assert_eq!(SortMode::from_key(mode.as_str()), mode);
        }
        assert_eq!(SortMode::from_key("bogus"), SortMode::Default);
    }

    #[test]
    fn test_sort_mode_serde_keys() {
        let json = serde_json::to_string(&SortMode::PriceHigh).unwrap();
        assert_eq!(json, "\"price-high\"");
    }

    #[test]
    fn test_default_keeps_catalog_order() {
        let catalog = catalog();
        let results = SearchQuery::new().run(&catalog);
        assert_eq!(names(&results), vec!["banana", "Apple", "cherry", "apple"]);
    }

    #[test]
    fn test_price_low_is_stable() {
        let catalog = catalog();
        let results = SearchQuery::new().with_sort(SortMode::PriceLow).run(&catalog);
        assert_eq!(names(&results), vec!["Apple", "apple", "cherry", "banana"]);
    }

    #[test]
    fn test_price_high() {
        let catalog = catalog();
        let results = SearchQuery::new().with_sort(SortMode::PriceHigh).run(&catalog);
        assert_eq!(names(&results), vec!["banana", "cherry", "Apple", "apple"]);
    }

    #[test]
    fn test_rating_desc_is_stable() {
        let catalog = catalog();
        let results = SearchQuery::new().with_sort(SortMode::Rating).run(&catalog);
        assert_eq!(names(&results), vec!["Apple", "cherry", "banana", "apple"]);
    }

    #[test]
    fn test_name_sort_is_case_sensitive() {
        let catalog = catalog();
        let results = SearchQuery::new().with_sort(SortMode::Name).run(&catalog);
        assert_eq!(names(&results), vec!["Apple", "apple", "banana", "cherry"]);
    }

    #[test]
    fn test_text_search_case_insensitive() {
        let catalog = catalog();
        let results = SearchQuery::new().with_text("APPLE").run(&catalog);
        assert_eq!(names(&results), vec!["Apple", "apple"]);
    }

    #[test]
    fn test_filters_then_sort() {
        let query = SearchQuery::new()
            .with_filters(FilterCriteria::new().with_price_range(PriceRange::new(10.0, 20.0)))
            .with_sort(SortMode::PriceHigh);
        let catalog = catalog();
        let results = query.run(&catalog);
        assert_eq!(names(&results), vec!["cherry", "Apple", "apple"]);
        assert_eq!(results.total, 4);
    }

    #[test]
    fn test_matches_agrees_with_run() {
        let catalog = catalog();
        let query = SearchQuery::new()
            .with_text("a")
            .with_filters(FilterCriteria::new().with_min_rating(150.0));
        let results = query.run(&catalog);
        for product in catalog.products() {
            let included = results.items.iter().any(|p| p.id == product.id);
            assert_eq!(included, query.matches(product));
        }
    }
}
