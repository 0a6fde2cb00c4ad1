//! Session view state and its transitions.
//!
//! All mutation goes through [`ViewState::update`]. The detail overlay is
//! either closed, or open on one product with an image index and a
//! quantity; opening and closing reset both together.

use std::collections::BTreeSet;

use crate::catalog::Catalog;
use crate::ids::ProductId;
use crate::search::{FilterCriteria, PriceRange, SearchQuery, SortMode};
use crate::view::Gallery;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Transient per-session UI state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewState {
    /// Search box contents.
    #[serde(default)]
    pub search: String,
    /// Active sort mode.
    #[serde(default)]
    pub sort: SortMode,
    /// Active filters.
    #[serde(default)]
    pub filters: FilterCriteria,
    /// Product shown in the detail overlay, if open.
    #[serde(default)]
    pub selected: Option<ProductId>,
    /// Gallery index in the open overlay.
    #[serde(default)]
    pub image_index: usize,
    /// Requested quantity, always at least 1.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: SortMode::Default,
            filters: FilterCriteria::default(),
            selected: None,
            image_index: 0,
            quantity: default_quantity(),
        }
    }
}

/// A user input event.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewMsg {
    SetSearch(String),
    SetSort(SortMode),
    SetPriceRange(PriceRange),
    SetMinRating(f64),
    SetColors(BTreeSet<String>),
    /// Add the color to the filter, or remove it if already selected.
    ToggleColor(String),
    /// Reset price, rating and color filters.
    ClearFilters,
    /// Open the detail overlay on a product.
    Select(ProductId),
    /// Close the detail overlay.
    Close,
    NextImage,
    PrevImage,
    ShowImage(usize),
    IncrementQuantity,
    DecrementQuantity,
    /// Raw text typed into the quantity field.
    QuantityInput(String),
    AddToCart,
    BuyNow,
}

/// Which terminal action was taken in the detail overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PurchaseKind {
    AddToCart,
    BuyNow,
}

impl PurchaseKind {
    pub fn label(&self) -> &'static str {
        match self {
            PurchaseKind::AddToCart => "ADD TO CART",
            PurchaseKind::BuyNow => "BUY NOW",
        }
    }
}

/// A purchase request raised from the detail overlay.
///
/// Nothing in this crate fulfils it; hosts may forward it to a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PurchaseIntent {
    pub kind: PurchaseKind,
    pub product_id: ProductId,
    pub quantity: u32,
}

/// What the host must do after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEffect {
    /// Nothing beyond re-rendering.
    None,
    /// A query input changed; the derived list must be recomputed.
    Recompute,
    /// A purchase action was taken.
    Purchase(PurchaseIntent),
}

impl ViewState {
    /// Create the initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The query described by the current search, filters and sort.
    pub fn query(&self) -> SearchQuery {
        SearchQuery::new()
            .with_text(self.search.clone())
            .with_filters(self.filters.clone())
            .with_sort(self.sort)
    }

    /// Whether the detail overlay is open.
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Bring a restored state back within its invariants.
    ///
    /// An unknown selection closes the overlay, the image index is clamped
    /// to the selected product's gallery and quantity floors at 1.
    pub fn normalize(&mut self, catalog: &Catalog) {
        if !self.filters.min_rating.is_finite() {
            self.filters.min_rating = 0.0;
        }
        match self.selected.as_ref().and_then(|id| catalog.get(id)) {
            Some(product) => {
                self.image_index = Gallery::new(product.image_count(), self.image_index).index();
                self.quantity = self.quantity.max(1);
            }
            None => {
                if let Some(id) = self.selected.take() {
                    warn!(product_id = %id, "restored selection dropped: unknown product");
                }
                self.reset_viewer();
            }
        }
    }

    /// Apply one input event.
    pub fn update(&mut self, msg: ViewMsg, catalog: &Catalog) -> ViewEffect {
        match msg {
            ViewMsg::SetSearch(text) => self.recompute_if(|s| {
                if s.search == text {
                    return false;
                }
                s.search = text;
                true
            }),
            ViewMsg::SetSort(sort) => self.recompute_if(|s| {
                std::mem::replace(&mut s.sort, sort) != sort
            }),
            ViewMsg::SetPriceRange(range) => self.recompute_if(|s| {
                std::mem::replace(&mut s.filters.price_range, range) != range
            }),
            ViewMsg::SetMinRating(min) => self.recompute_if(|s| {
                let min = if min.is_finite() { min } else { 0.0 };
                std::mem::replace(&mut s.filters.min_rating, min) != min
            }),
            ViewMsg::SetColors(colors) => self.recompute_if(|s| {
                if s.filters.colors == colors {
                    return false;
                }
                s.filters.colors = colors;
                true
            }),
            ViewMsg::ToggleColor(color) => {
                if !self.filters.colors.remove(&color) {
                    self.filters.colors.insert(color);
                }
                ViewEffect::Recompute
            }
            ViewMsg::ClearFilters => self.recompute_if(|s| {
                let cleared = FilterCriteria::default();
                if s.filters == cleared {
                    return false;
                }
                s.filters = cleared;
                true
            }),
            ViewMsg::Select(id) => {
                if catalog.get(&id).is_none() {
                    warn!(product_id = %id, "select ignored: unknown product");
                    return ViewEffect::None;
                }
                debug!(product_id = %id, "detail opened");
                self.selected = Some(id);
                self.reset_viewer();
                ViewEffect::None
            }
            ViewMsg::Close => {
                self.selected = None;
                self.reset_viewer();
                ViewEffect::None
            }
            ViewMsg::NextImage => self.move_gallery(catalog, Gallery::next),
            ViewMsg::PrevImage => self.move_gallery(catalog, Gallery::prev),
            ViewMsg::ShowImage(index) => self.move_gallery(catalog, |g| g.show(index)),
            ViewMsg::IncrementQuantity => self.set_quantity(self.quantity.saturating_add(1)),
            ViewMsg::DecrementQuantity => self.set_quantity(self.quantity.saturating_sub(1)),
            ViewMsg::QuantityInput(input) => self.set_quantity(parse_quantity(&input)),
            ViewMsg::AddToCart => self.purchase(PurchaseKind::AddToCart),
            ViewMsg::BuyNow => self.purchase(PurchaseKind::BuyNow),
        }
    }

    fn recompute_if(&mut self, change: impl FnOnce(&mut Self) -> bool) -> ViewEffect {
        if change(self) {
            ViewEffect::Recompute
        } else {
            ViewEffect::None
        }
    }

    fn reset_viewer(&mut self) {
        self.image_index = 0;
        self.quantity = 1;
    }

    fn move_gallery(&mut self, catalog: &Catalog, step: impl FnOnce(Gallery) -> Gallery) -> ViewEffect {
        let Some(product) = self.selected.as_ref().and_then(|id| catalog.get(id)) else {
            return ViewEffect::None;
        };
        self.image_index = step(Gallery::new(product.image_count(), self.image_index)).index();
        ViewEffect::None
    }

    fn set_quantity(&mut self, quantity: u32) -> ViewEffect {
        if self.is_open() {
            self.quantity = quantity.max(1);
        }
        ViewEffect::None
    }

    fn purchase(&self, kind: PurchaseKind) -> ViewEffect {
        let Some(product_id) = self.selected.clone() else {
            return ViewEffect::None;
        };
        info!(
            action = kind.label(),
            product_id = %product_id,
            quantity = self.quantity,
            "purchase action"
        );
        ViewEffect::Purchase(PurchaseIntent {
            kind,
            product_id,
            quantity: self.quantity,
        })
    }
}

/// Parse the quantity field the way a browser number input does.
///
/// Leading whitespace, an optional sign and a run of digits are read;
/// anything after is ignored. Non-numeric input yields 1, and the result is
/// never below 1. Values too large for `u32` saturate.
pub fn parse_quantity(input: &str) -> u32 {
    let s = input.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 || negative {
        return 1;
    }
    let digits = &rest[..digits_len];
    digits.parse::<u32>().unwrap_or(u32::MAX).max(1)
}
