//! Product catalog module.
//!
//! The catalog is loaded once at startup and is read-only afterwards.
//! Clones share the same backing slice.

mod normalize;
mod product;

pub use normalize::{
    normalize_record, COLOR_FIELDS, DESCRIPTION_FIELDS, DISCOUNT_FIELDS, ID_FIELDS, IMAGE_FIELDS,
    NAME_FIELDS, ORIGINAL_PRICE_FIELDS, PRICE_FIELDS, RATING_FIELDS,
};
pub use product::Product;

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use crate::error::{CatalogError, Result};
use crate::ids::ProductId;

/// The product collection compiled into the crate.
const BUNDLED_CATALOG: &str = include_str!("../../data/products.json");

/// The full, static collection of products.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::from_products(Vec::new())
    }
}

impl Catalog {
    /// Load the catalog bundled with the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_CATALOG)
    }

    /// Load a catalog from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Load a catalog from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Normalize an already-parsed JSON array of records.
    ///
    /// Non-object entries are skipped. Missing or repeated ids are replaced
    /// by positional ids so every product key stays unique.
    pub fn from_value(value: &Value) -> Result<Self> {
        let records = value.as_array().ok_or(CatalogError::NotAnArray(json_kind(value)))?;

        let mut seen: HashSet<ProductId> = HashSet::with_capacity(records.len());
        let mut products = Vec::with_capacity(records.len());
        let mut skipped = 0usize;

        for (index, record) in records.iter().enumerate() {
            let Some(mut product) = normalize_record(index, record) else {
                warn!(index, kind = json_kind(record), "skipping non-object catalog entry");
                skipped += 1;
                continue;
            };
            if seen.contains(&product.id) {
                let mut replacement = ProductId::positional(index);
                let mut suffix = 1;
                while seen.contains(&replacement) {
                    replacement = ProductId::new(format!("product-{}-{}", index, suffix));
                    suffix += 1;
                }
                warn!(
                    index,
                    duplicate = %product.id,
                    replacement = %replacement,
                    "duplicate product id"
                );
                product.id = replacement;
            }
            seen.insert(product.id.clone());
            products.push(product);
        }

        info!(products = products.len(), skipped, "catalog loaded");
        Ok(Self::from_products(products))
    }

    /// Build a catalog from canonical products.
    pub fn from_products(products: Vec<Product>) -> Self {
        Self {
            products: products.into(),
        }
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Every distinct color label, in first-seen order.
    pub fn available_colors(&self) -> Vec<&str> {
        let mut colors: Vec<&str> = Vec::new();
        for color in self.products.iter().flat_map(|p| p.colors.iter()) {
            if !colors.contains(&color.as_str()) {
                colors.push(color);
            }
        }
        colors
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.is_empty());
        let ids: HashSet<_> = catalog.products().iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_not_an_array() {
        let err = Catalog::from_json_str(r#"{"products": []}"#).unwrap_err();
        assert!(matches!(err, CatalogError::NotAnArray("object")));
    }

    #[test]
    fn test_invalid_json() {
        let err = Catalog::from_json_str("[{").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Catalog::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_non_objects_skipped() {
        let catalog = Catalog::from_value(&json!([{"id": 1, "name": "A"}, 42, null])).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_duplicate_ids_replaced() {
        let catalog = Catalog::from_value(&json!([
            {"id": 1, "name": "A"},
            {"id": 1, "name": "B"}
        ]))
        .unwrap();
        assert_eq!(catalog.products()[0].id.as_str(), "1");
        assert_eq!(catalog.products()[1].id.as_str(), "product-1");
    }

    #[test]
    fn test_available_colors_first_seen_order() {
        let catalog = Catalog::from_value(&json!([
            {"id": 1, "color": ["red", "blue"]},
            {"id": 2},
            {"id": 3, "color": ["blue", "green"]}
        ]))
        .unwrap();
        assert_eq!(catalog.available_colors(), vec!["red", "blue", "green"]);
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::from_products(vec![
            Product::new("a", "A", 10.0),
            Product::new("b", "B", 250.0),
        ]);
        assert_eq!(catalog.get(&ProductId::new("b")).map(|p| p.price), Some(250.0));
        assert!(catalog.get(&ProductId::new("z")).is_none());
    }

    #[test]
    fn test_clones_share_products() {
        let catalog = Catalog::from_products(vec![Product::new("a", "A", 1.0)]);
        let clone = catalog.clone();
        assert!(std::ptr::eq(catalog.products(), clone.products()));
    }
}
