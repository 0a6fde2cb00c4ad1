//! Filter criteria for the query pipeline.

use std::collections::BTreeSet;
use std::fmt;

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// An inclusive price range `[min, max]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PriceRange {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
}

impl PriceRange {
    /// Create a range. Bounds are swapped if given in the wrong order.
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// The range that accepts every non-negative price.
    pub fn unbounded() -> Self {
        Self {
            min: 0.0,
            max: f64::MAX,
        }
    }

    /// Whether this is the unbounded range.
    pub fn is_unbounded(&self) -> bool {
        self.min <= 0.0 && self.max >= f64::MAX
    }

    /// Whether `price` lies within the range, both ends inclusive.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }

    /// Parse a `"min-max"` pair such as `"100-500"`.
    ///
    /// A missing upper bound (`"1000-"`) means no upper limit.
    pub fn parse(s: &str) -> Option<Self> {
        let (min, max) = s.trim().split_once('-')?;
        let min: f64 = min.trim().parse().ok()?;
        let max: f64 = match max.trim() {
            "" => f64::MAX,
            max => max.parse().ok()?,
        };
        (min.is_finite() && max.is_finite()).then(|| Self::new(min, max))
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unbounded() {
            write!(f, "any price")
        } else if self.max >= f64::MAX {
            write!(f, "{}+", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

/// Preset price buckets offered by the storefront toolbar.
///
/// Serialized names match [`PricePreset::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PricePreset {
    /// No price restriction.
    #[default]
    #[serde(rename = "all")]
    All,
    /// Up to $100.
    #[serde(rename = "under-100")]
    Under100,
    /// $100 to $500.
    #[serde(rename = "from-100-to-500")]
    From100To500,
    /// $500 to $1000.
    #[serde(rename = "from-500-to-1000")]
    From500To1000,
    /// $1000 to $3000.
    #[serde(rename = "over-1000")]
    Over1000,
}

impl PricePreset {
    /// Every preset, in toolbar order.
    pub const ALL: [PricePreset; 5] = [
        PricePreset::All,
        PricePreset::Under100,
        PricePreset::From100To500,
        PricePreset::From500To1000,
        PricePreset::Over1000,
    ];

    /// The price range this preset selects.
    pub fn range(&self) -> PriceRange {
        match self {
            PricePreset::All => PriceRange::unbounded(),
            PricePreset::Under100 => PriceRange::new(0.0, 100.0),
            PricePreset::From100To500 => PriceRange::new(100.0, 500.0),
            PricePreset::From500To1000 => PriceRange::new(500.0, 1000.0),
            PricePreset::Over1000 => PriceRange::new(1000.0, 3000.0),
        }
    }

    /// Stable key used in forms and config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            PricePreset::All => "all",
            PricePreset::Under100 => "under-100",
            PricePreset::From100To500 => "from-100-to-500",
            PricePreset::From500To1000 => "from-500-to-1000",
            PricePreset::Over1000 => "over-1000",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PricePreset::All => "All Prices",
            PricePreset::Under100 => "Under $100",
            PricePreset::From100To500 => "$100 - $500",
            PricePreset::From500To1000 => "$500 - $1000",
            PricePreset::Over1000 => "$1000+",
        }
    }

    /// Parse a preset key. Unknown keys return `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == key.trim())
    }

    /// The preset whose range equals `range`, if any.
    pub fn matching(range: &PriceRange) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.range() == *range)
    }
}

/// Active filter criteria. All predicates must hold (conjunction).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FilterCriteria {
    /// Inclusive price range.
    #[serde(default)]
    pub price_range: PriceRange,
    /// Minimum rating threshold (inclusive).
    #[serde(default)]
    pub min_rating: f64,
    /// Allowed colors. Empty means no color restriction.
    #[serde(default)]
    pub colors: BTreeSet<String>,
}

impl FilterCriteria {
    /// Create criteria that accept everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the price range.
    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }

    /// Set the minimum rating.
    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = min_rating;
        self
    }

    /// Allow a color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.colors.insert(color.into());
        self
    }

    /// Whether the product passes the price filter.
    pub fn matches_price(&self, product: &Product) -> bool {
        self.price_range.contains(product.price)
    }

    /// Whether the product passes the rating filter.
    pub fn matches_rating(&self, product: &Product) -> bool {
        product.rating >= self.min_rating
    }

    /// Whether the product passes the color filter.
    ///
    /// With no colors selected every product passes. Otherwise the
    /// product's own colors must intersect the selection; a product with
    /// no colors is excluded.
    pub fn matches_colors(&self, product: &Product) -> bool {
        self.colors.is_empty() || product.has_any_color(&self.colors)
    }

    /// Whether the product passes every filter.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_price(product) && self.matches_rating(product) && self.matches_colors(product)
    }

    /// Number of filters that currently restrict the result.
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if !self.price_range.is_unbounded() {
            count += 1;
        }
        if self.min_rating > 0.0 {
            count += 1;
        }
        if !self.colors.is_empty() {
            count += 1;
        }
        count
    }
}
