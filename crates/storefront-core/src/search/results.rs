//! Derived list and color facets.

use crate::catalog::{Catalog, Product};
use crate::search::FilterCriteria;
use serde::{Deserialize, Serialize};

/// The derived list: products currently shown, in display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResults<T> {
    /// The result items.
    pub items: Vec<T>,
    /// Number of products in the whole catalog.
    pub total: usize,
}

impl<T> SearchResults<T> {
    /// Create new search results.
    pub fn new(items: Vec<T>, total: usize) -> Self {
        Self { items, total }
    }

    /// Create empty results.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items shown.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Transform every item, keeping order and total.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> SearchResults<U> {
        SearchResults {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }

    /// Result count line, e.g. "Showing 3 of 12 products".
    pub fn summary(&self) -> String {
        format!("Showing {} of {} products", self.items.len(), self.total)
    }
}

impl<T> Default for SearchResults<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Message shown when the derived list is empty.
pub const NO_RESULTS_MESSAGE: &str = "No products found matching your criteria";

/// A single color facet value with count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacetValue {
    /// The color label.
    pub value: String,
    /// Number of catalog products offering this color.
    pub count: usize,
    /// Whether the color is part of the active filter.
    pub selected: bool,
}

/// Color facets for the whole catalog, in first-seen order.
pub fn color_facets(catalog: &Catalog, filters: &FilterCriteria) -> Vec<FacetValue> {
    catalog
        .available_colors()
        .into_iter()
        .map(|color| FacetValue {
            value: color.to_string(),
            count: catalog
                .products()
                .iter()
                .filter(|p: &&Product| p.colors.iter().any(|c| c == color))
                .count(),
            selected: filters.colors.contains(color),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_results() {
        let results = SearchResults::new(vec![1, 2, 3], 10);
        assert_eq!(results.len(), 3);
        assert!(!results.is_empty());
        assert_eq!(results.summary(), "Showing 3 of 10 products");
    }

    #[test]
    fn test_map_keeps_total() {
        let results = SearchResults::new(vec![1, 2], 5).map(|n| n * 10);
        assert_eq!(results.items, vec![10, 20]);
        assert_eq!(results.total, 5);
    }

    #[test]
    fn test_empty() {
        let results: SearchResults<u8> = SearchResults::empty();
        assert!(results.is_empty());
        assert_eq!(results.summary(), "Showing 0 of 0 products");
    }

    #[test]
    fn test_color_facets() {
        let catalog = Catalog::from_products(vec![
            Product::new("1", "A", 1.0).with_colors(["red", "blue"]),
            Product::new("2", "B", 1.0).with_colors(["red"]),
            Product::new("3", "C", 1.0),
        ]);
        let filters = FilterCriteria::new().with_color("blue");
        let facets = color_facets(&catalog, &filters);

        assert_eq!(facets.len(), 2);
        assert_eq!(facets[0].value, "red");
        assert_eq!(facets[0].count, 2);
        assert!(!facets[0].selected);
        assert_eq!(facets[1].value, "blue");
        assert_eq!(facets[1].count, 1);
        assert!(facets[1].selected);
    }
}
