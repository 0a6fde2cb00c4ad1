//! Product card view model.

use crate::catalog::Product;
use crate::config::DisplayConfig;
use crate::ids::ProductId;
use crate::view::{format_amount, truncate, Swatch};
use serde::{Deserialize, Serialize};

/// Number of star glyphs in a rating row.
pub const MAX_STARS: u8 = 5;

/// Rating points represented by one star.
pub const RATING_PER_STAR: f64 = 200.0;

/// Filled star count for a rating: `round(rating / 200)` clamped to `0..=5`.
pub fn stars_for(rating: f64) -> u8 {
    let stars = (rating / RATING_PER_STAR).round();
    if stars.is_nan() || stars <= 0.0 {
        0
    } else if stars >= f64::from(MAX_STARS) {
        MAX_STARS
    } else {
        stars as u8
    }
}

/// Everything a product card displays.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardView {
    /// Product shown by this card; the "View Details" action selects it.
    pub id: ProductId,
    /// First image, or the card placeholder.
    pub image: String,
    /// Whether `image` is the placeholder.
    pub image_is_placeholder: bool,
    pub name: String,
    /// Description truncated to the configured length.
    pub description: String,
    /// Discount badge text such as `-20%`.
    pub discount_badge: Option<String>,
    /// Filled stars, `0..=5`.
    pub stars: u8,
    /// Current price text.
    pub price: String,
    /// Struck-through original price text.
    pub original_price: Option<String>,
    /// Leading color swatches.
    pub swatches: Vec<Swatch>,
    /// Colors not shown as swatches ("+N").
    pub extra_colors: usize,
}

impl CardView {
    /// Build the card for one product.
    pub fn from_product(product: &Product, config: &DisplayConfig) -> Self {
        let (image, image_is_placeholder) = match product.primary_image() {
            Some(src) => (src.to_string(), false),
            None => (config.card_placeholder.clone(), true),
        };

        let swatches: Vec<Swatch> = product
            .colors
            .iter()
            .take(config.card_swatch_limit)
            .map(|c| Swatch::new(c))
            .collect();
        let extra_colors = product.colors.len().saturating_sub(swatches.len());

        Self {
            id: product.id.clone(),
            image,
            image_is_placeholder,
            name: product.name.clone(),
            description: truncate(&product.description, config.card_description_chars),
            discount_badge: product
                .discount_percent
                .map(|off| format!("-{}%", format_amount(off))),
            stars: stars_for(product.rating),
            price: config.price(product.price),
            original_price: product.original_price.map(|p| config.price(p)),
            swatches,
            extra_colors,
        }
    }

    /// Overflow label such as `+2`, when colors were cut.
    pub fn extra_colors_label(&self) -> Option<String> {
        (self.extra_colors > 0).then(|| format!("+{}", self.extra_colors))
    }
}
