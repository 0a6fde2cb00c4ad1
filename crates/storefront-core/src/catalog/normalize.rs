//! Field normalization for raw catalog records.
//!
//! Source exports disagree on field names (`yulduz` / `stars` / `rating`,
//! `img` / `images`, ...). Each canonical attribute has an ordered alias
//! list; the first alias holding a usable value wins. For the rating a
//! zero counts as unset, so `{"yulduz": 0, "stars": 400}` rates 400. This
//! runs once, at load time.

use serde_json::{Map, Value};
use tracing::debug;

use crate::catalog::Product;
use crate::ids::ProductId;

/// Aliases for the product key.
pub const ID_FIELDS: &[&str] = &["id"];
/// Aliases for the product name.
pub const NAME_FIELDS: &[&str] = &["name", "nom"];
/// Aliases for the description.
pub const DESCRIPTION_FIELDS: &[&str] = &["description"];
/// Aliases for the selling price.
pub const PRICE_FIELDS: &[&str] = &["price", "narx"];
/// Aliases for the original (pre-discount) price.
pub const ORIGINAL_PRICE_FIELDS: &[&str] = &["oldPrice", "old_price"];
/// Aliases for the discount percentage.
pub const DISCOUNT_FIELDS: &[&str] = &["off", "discount"];
/// Aliases for the rating, in precedence order.
pub const RATING_FIELDS: &[&str] = &["yulduz", "stars", "rating"];
/// Aliases for the image list, in precedence order.
pub const IMAGE_FIELDS: &[&str] = &["img", "images"];
/// Aliases for the color labels.
pub const COLOR_FIELDS: &[&str] = &["color", "colors"];

/// Normalize one raw record into a [`Product`].
///
/// Returns `None` only when the record is not a JSON object. The id is
/// taken from the record when present; uniqueness is enforced by the
/// caller.
pub fn normalize_record(index: usize, record: &Value) -> Option<Product> {
    let obj = record.as_object()?;

    let id = first_id(obj).unwrap_or_else(|| {
        debug!(index, "record has no id, using positional id");
        ProductId::positional(index)
    });

    let rating = RATING_FIELDS
        .iter()
        .find_map(|field| number_field(obj, field).filter(|r| *r != 0.0))
        .unwrap_or_else(|| {
            debug!(product_id = %id, "no rating field, defaulting to 0");
            0.0
        });

    let images = first_string_list(obj, IMAGE_FIELDS);
    if images.is_empty() {
        debug!(product_id = %id, "no images, placeholder will be used");
    }

    let price = first_number(obj, PRICE_FIELDS).unwrap_or_else(|| {
        debug!(product_id = %id, "no price field, defaulting to 0");
        0.0
    });

    let original_price = first_number(obj, ORIGINAL_PRICE_FIELDS).filter(|p| *p > 0.0);
    let discount_percent = first_number(obj, DISCOUNT_FIELDS).filter(|d| *d > 0.0);

    let mut colors: Vec<String> = Vec::new();
    for color in first_string_list(obj, COLOR_FIELDS) {
        if !colors.contains(&color) {
            colors.push(color);
        }
    }

    Some(Product {
        id,
        name: first_string(obj, NAME_FIELDS).unwrap_or_default(),
        description: first_string(obj, DESCRIPTION_FIELDS).unwrap_or_default(),
        price,
        original_price,
        discount_percent,
        rating,
        images,
        colors,
    })
}

fn first_id(obj: &Map<String, Value>) -> Option<ProductId> {
    ID_FIELDS.iter().find_map(|field| match obj.get(*field)? {
        Value::String(s) if !s.trim().is_empty() => Some(ProductId::new(s.trim())),
        Value::Number(n) => Some(ProductId::new(n.to_string())),
        _ => None,
    })
}

fn first_number(obj: &Map<String, Value>, fields: &[&str]) -> Option<f64> {
    fields.iter().find_map(|field| number_field(obj, field))
}

fn number_field(obj: &Map<String, Value>, field: &str) -> Option<f64> {
    let value = match obj.get(field)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    value.is_finite().then_some(value)
}

fn first_string(obj: &Map<String, Value>, fields: &[&str]) -> Option<String> {
    fields.iter().find_map(|field| match obj.get(*field)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    })
}

/// First alias holding a string or a non-empty array of strings.
///
/// Blank entries are dropped, and non-string array members are ignored.
fn first_string_list(obj: &Map<String, Value>, fields: &[&str]) -> Vec<String> {
    fields
        .iter()
        .find_map(|field| {
            let list: Vec<String> = match obj.get(*field)? {
                Value::String(s) => vec![s.trim().to_string()],
                Value::Array(items) => items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(|s| s.trim().to_string())
                    .collect(),
                _ => return None,
            };
            let list: Vec<String> = list.into_iter().filter(|s| !s.is_empty()).collect();
            (!list.is_empty()).then_some(list)
        })
        .unwrap_or_default()
}
