//! Detail overlay view model and gallery index arithmetic.

use crate::catalog::Product;
use crate::config::DisplayConfig;
use crate::ids::ProductId;
use crate::view::card::stars_for;
use crate::view::{format_amount, Swatch};
use serde::{Deserialize, Serialize};

/// Index arithmetic over a product's image list.
///
/// Navigation clamps to `[0, count - 1]`; there is no wraparound. With an
/// empty gallery the index stays at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gallery {
    count: usize,
    index: usize,
}

impl Gallery {
    /// Create a gallery positioned at `index`, clamped to the image count.
    pub fn new(count: usize, index: usize) -> Self {
        Self {
            count,
            index: index.min(count.saturating_sub(1)),
        }
    }

    /// Current index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of images.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether prev/next controls and thumbnails are shown.
    pub fn is_navigable(&self) -> bool {
        self.count > 1
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.count
    }

    /// Move one image back, stopping at the first.
    pub fn prev(self) -> Self {
        Self::new(self.count, self.index.saturating_sub(1))
    }

    /// Move one image forward, stopping at the last.
    pub fn next(self) -> Self {
        Self::new(self.count, self.index.saturating_add(1))
    }

    /// Jump to `index`, clamped to the last image.
    pub fn show(self, index: usize) -> Self {
        Self::new(self.count, index)
    }
}

/// A thumbnail in the gallery strip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Thumbnail {
    pub src: String,
    /// Image index this thumbnail jumps to.
    pub index: usize,
    /// Whether this is the image currently shown.
    pub active: bool,
}

/// Original price and badge, shown only when the product is discounted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiscountBlock {
    /// Struck-through original price.
    pub original_price: String,
    /// Badge text such as `20% OFF`.
    pub badge: String,
}

/// Everything the detail overlay displays for the selected product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetailView {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Image at the current gallery index, or the detail placeholder.
    pub main_image: String,
    pub image_index: usize,
    pub image_count: usize,
    /// Previous/next controls are rendered.
    pub show_navigation: bool,
    pub has_prev: bool,
    pub has_next: bool,
    /// Thumbnail strip; empty unless there is more than one image.
    pub thumbnails: Vec<Thumbnail>,
    /// Filled stars, `0..=5`.
    pub stars: u8,
    /// Rating caption such as `(920 reviews)`.
    pub rating_text: String,
    /// Every color, with alias resolution applied.
    pub swatches: Vec<Swatch>,
    /// Current price text.
    pub price: String,
    pub discount: Option<DiscountBlock>,
    pub quantity: u32,
    /// The "-" stepper button has an effect.
    pub can_decrement: bool,
}

impl DetailView {
    /// Build the overlay for `product` at the given gallery index and quantity.
    pub fn new(product: &Product, image_index: usize, quantity: u32, config: &DisplayConfig) -> Self {
        let gallery = Gallery::new(product.image_count(), image_index);

        let main_image = product
            .images
            .get(gallery.index())
            .or_else(|| product.images.first())
            .cloned()
            .unwrap_or_else(|| config.detail_placeholder.clone());

        let thumbnails = if gallery.is_navigable() {
            product
                .images
                .iter()
                .enumerate()
                .map(|(index, src)| Thumbnail {
                    src: src.clone(),
                    index,
                    active: index == gallery.index(),
                })
                .collect()
        } else {
            Vec::new()
        };

        let discount = match (product.original_price, product.discount_percent) {
            (Some(original), Some(off)) => Some(DiscountBlock {
                original_price: config.price(original),
                badge: format!("{}% OFF", format_amount(off)),
            }),
            _ => None,
        };

        let quantity = quantity.max(1);

        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            main_image,
            image_index: gallery.index(),
            image_count: gallery.count(),
            show_navigation: gallery.is_navigable(),
            has_prev: gallery.has_prev(),
            has_next: gallery.has_next(),
            thumbnails,
            stars: stars_for(product.rating),
            rating_text: format!("({} reviews)", format_amount(product.rating)),
            swatches: product.colors.iter().map(|c| Swatch::new(c)).collect(),
            price: config.price(product.price),
            discount,
            quantity,
            can_decrement: quantity > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery_product(images: usize) -> Product {
        Product::new("1", "Laptop", 2399.0)
            .with_rating(890.0)
            .with_images((0..images).map(|i| format!("img-{}.png", i)))
    }

    #[test]
    fn test_gallery_clamps_without_wraparound() {
        let g = Gallery::new(3, 0);
        assert!(!g.has_prev());
        assert_eq!(g.prev().index(), 0);
        assert_eq!(g.next().next().next().index(), 2);
        assert!(!g.next().next().has_next());
    }

    #[test]
    fn test_gallery_show_clamps() {
        assert_eq!(Gallery::new(3, 0).show(1).index(), 1);
        assert_eq!(Gallery::new(3, 0).show(10).index(), 2);
    }

    #[test]
    fn test_empty_gallery() {
        let g = Gallery::new(0, 4);
        assert_eq!(g.index(), 0);
        assert_eq!(g.next().index(), 0);
        assert!(!g.is_navigable());
        assert!(!g.has_next());
    }

    #[test]
    fn test_detail_main_image_follows_index() {
        let view = DetailView::new(&gallery_product(3), 2, 1, &DisplayConfig::default());
        assert_eq!(view.main_image, "img-2.png");
        assert_eq!(view.thumbnails.len(), 3);
        assert!(view.thumbnails[2].active);
        assert!(!view.thumbnails[0].active);
        assert!(view.show_navigation);
        assert!(view.has_prev);
        assert!(!view.has_next);
    }

    #[test]
    fn test_single_image_has_no_strip() {
        let view = DetailView::new(&gallery_product(1), 0, 1, &DisplayConfig::default());
        assert!(view.thumbnails.is_empty());
        assert!(!view.show_navigation);
    }

    #[test]
    fn test_placeholder_when_no_images() {
        let config = DisplayConfig::default();
        let view = DetailView::new(&gallery_product(0), 0, 1, &config);
        assert_eq!(view.main_image, config.detail_placeholder);
    }

    #[test]
    fn test_discount_block_requires_both_fields() {
        let config = DisplayConfig::default();
        let partial = gallery_product(1).with_discount(None, Some(20.0));
        assert!(DetailView::new(&partial, 0, 1, &config).discount.is_none());

        let full = gallery_product(1).with_discount(Some(2999.0), Some(20.0));
        let block = DetailView::new(&full, 0, 1, &config).discount.unwrap();
        assert_eq!(block.original_price, "$2999");
        assert_eq!(block.badge, "20% OFF");
    }

    #[test]
    fn test_rating_caption_and_swatches() {
        let product = gallery_product(1).with_colors(["silver", "red"]);
        let view = DetailView::new(&product, 0, 3, &DisplayConfig::default());
        assert_eq!(view.rating_text, "(890 reviews)");
        assert_eq!(view.stars, 4);
        assert_eq!(view.swatches[0].css, "#C0C0C0");
        assert_eq!(view.swatches[1].css, "red");
        assert_eq!(view.quantity, 3);
        assert!(view.can_decrement);
    }
}
