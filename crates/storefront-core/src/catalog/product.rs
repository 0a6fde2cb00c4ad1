//! Canonical product record.

use std::collections::BTreeSet;

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A product in the catalog, after field normalization.
///
/// Every field is guaranteed to be present. Records that were missing data
/// carry the documented defaults (empty text, zero rating, no images).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name. Empty when the source record had none.
    pub name: String,
    /// Full description. Empty when the source record had none.
    pub description: String,
    /// Current selling price.
    pub price: f64,
    /// Original price, shown struck through next to the current price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    /// Discount percentage (e.g. `20.0` for "-20%").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<f64>,
    /// Rating on the catalog's own scale (not clamped).
    pub rating: f64,
    /// Ordered image references. May be empty; renderers substitute a placeholder.
    #[serde(default)]
    pub images: Vec<String>,
    /// Color labels in source order, de-duplicated.
    #[serde(default)]
    pub colors: Vec<String>,
}

impl Product {
    /// Create a product with the given id, name and price and every other
    /// field at its default.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            original_price: None,
            discount_percent: None,
            rating: 0.0,
            images: Vec::new(),
            colors: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Set the image references.
    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    /// Set the color labels.
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Set the original price and discount percentage.
    pub fn with_discount(mut self, original_price: Option<f64>, discount_percent: Option<f64>) -> Self {
        self.original_price = original_price;
        self.discount_percent = discount_percent;
        self
    }

    /// First image reference, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Number of images in the gallery.
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Whether the detail view should show the discount block.
    ///
    /// Requires both a discount percentage and an original price.
    pub fn has_discount(&self) -> bool {
        self.discount_percent.is_some() && self.original_price.is_some()
    }

    /// Case-insensitive substring match against name or description.
    ///
    /// `needle` must already be lowercased. An empty needle matches every
    /// product; an empty field never matches a non-empty needle.
    pub fn matches_text(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(needle) || self.description.to_lowercase().contains(needle)
    }

    /// Whether any of this product's colors is in `allowed`.
    ///
    /// A product without colors never matches.
    pub fn has_any_color(&self, allowed: &BTreeSet<String>) -> bool {
        self.colors.iter().any(|c| allowed.contains(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shoe() -> Product {
        Product::new("1", "Red Shoe", 50.0)
            .with_description("Comfortable running shoe")
            .with_rating(800.0)
            .with_colors(["red", "white"])
    }

    #[test]
    fn test_product_creation() {
        let product = Product::new("SKU-001", "Test Product", 10.0);
        assert_eq!(product.id.as_str(), "SKU-001");
        assert_eq!(product.name, "Test Product");
        assert_eq!(product.rating, 0.0);
        assert!(product.primary_image().is_none());
    }

    #[test]
    fn test_text_match_is_case_insensitive() {
        let product = shoe();
        assert!(product.matches_text("shoe"));
        assert!(product.matches_text("running"));
        assert!(!product.matches_text("hat"));
    }

    #[test]
    fn test_empty_needle_matches_everything() {
        let product = Product::new("2", "", 1.0);
        assert!(product.matches_text(""));
    }

    #[test]
    fn test_missing_name_falls_back_to_description() {
        let product = Product::new("3", "", 1.0).with_description("Wool scarf");
        assert!(product.matches_text("scarf"));
        assert!(!product.matches_text("hat"));
    }

    #[test]
    fn test_color_intersection() {
        let product = shoe();
        let allowed: BTreeSet<String> = ["blue".to_string(), "white".to_string()].into();
        assert!(product.has_any_color(&allowed));

        let none = Product::new("4", "Plain", 1.0);
        assert!(!none.has_any_color(&allowed));
    }

    #[test]
    fn test_discount_requires_both_fields() {
        let only_percent = shoe().with_discount(None, Some(20.0));
        assert!(!only_percent.has_discount());

        let both = shoe().with_discount(Some(65.0), Some(20.0));
        assert!(both.has_discount());
    }
}
