//! CLI command implementations.

pub mod colors;
pub mod config;
pub mod list;
pub mod render;
pub mod show;

use std::path::PathBuf;

use clap::Args;
use storefront_core::search::{PricePreset, PriceRange, SortMode};
use storefront_core::view::ViewMsg;

/// Query flags shared by the listing commands.
#[derive(Args, Debug, Default)]
pub struct QueryArgs {
    /// Case-insensitive text matched against name and description.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort mode: default, price-low, price-high, rating, name.
    #[arg(long, value_parser = parse_sort)]
    pub sort: Option<SortMode>,

    /// Price preset (all, under-100, from-100-to-500, from-500-to-1000,
    /// over-1000) or a `min-max` range.
    #[arg(long, value_parser = parse_price, conflicts_with_all = ["min_price", "max_price"])]
    pub price: Option<PriceRange>,

    /// Lower price bound (inclusive).
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Upper price bound (inclusive).
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Minimum rating.
    #[arg(long)]
    pub min_rating: Option<f64>,

    /// Only products offering this color; repeat for several.
    #[arg(short, long = "color")]
    pub colors: Vec<String>,
}

impl QueryArgs {
    /// View messages that apply these flags on top of the configured defaults.
    pub fn messages(&self) -> Vec<ViewMsg> {
        let mut msgs = Vec::new();
        if let Some(search) = &self.search {
            msgs.push(ViewMsg::SetSearch(search.clone()));
        }
        if let Some(sort) = self.sort {
            msgs.push(ViewMsg::SetSort(sort));
        }
        if let Some(range) = self.price_range() {
            msgs.push(ViewMsg::SetPriceRange(range));
        }
        if let Some(min) = self.min_rating {
            msgs.push(ViewMsg::SetMinRating(min));
        }
        if !self.colors.is_empty() {
            msgs.push(ViewMsg::SetColors(self.colors.iter().cloned().collect()));
        }
        msgs
    }

    fn price_range(&self) -> Option<PriceRange> {
        if self.price.is_some() {
            return self.price;
        }
        match (self.min_price, self.max_price) {
            (None, None) => None,
            (min, max) => Some(PriceRange::new(min.unwrap_or(0.0), max.unwrap_or(f64::MAX))),
        }
    }
}

fn parse_sort(s: &str) -> Result<SortMode, String> {
    SortMode::ALL
        .into_iter()
        .find(|m| m.as_str() == s)
        .ok_or_else(|| {
            let keys: Vec<&str> = SortMode::ALL.iter().map(|m| m.as_str()).collect();
            format!("unknown sort '{}', expected one of: {}", s, keys.join(", "))
        })
}

fn parse_price(s: &str) -> Result<PriceRange, String> {
    PricePreset::from_key(s)
        .map(|p| p.range())
        .or_else(|| PriceRange::parse(s))
        .ok_or_else(|| format!("invalid price '{}': use a preset key or MIN-MAX", s))
}

/// Arguments for the list command.
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Show at most N products.
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the show command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Product id.
    pub id: String,

    /// Gallery image index.
    #[arg(long, default_value_t = 0)]
    pub image: usize,

    /// Quantity, parsed like the quantity field (non-numeric means 1).
    #[arg(short, long)]
    pub quantity: Option<String>,
}

/// Arguments for the colors command.
#[derive(Args, Debug)]
pub struct ColorsArgs {
    #[command(flatten)]
    pub query: QueryArgs,
}

/// Arguments for the render command.
#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Page state as a query string, e.g. `q=lamp&sort=name&product=3`.
    /// Applied before the other flags.
    #[arg(long)]
    pub params: Option<String>,

    /// Open the detail overlay on this product.
    #[arg(long)]
    pub select: Option<String>,

    /// Gallery image index for the selected product.
    #[arg(long)]
    pub image: Option<usize>,

    /// Quantity for the selected product.
    #[arg(long)]
    pub quantity: Option<String>,

    /// Page title.
    #[arg(long)]
    pub title: Option<String>,

    /// Output file (default: stdout).
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Write a default storefront.toml to this path instead of printing
    /// the effective configuration.
    #[arg(long, value_name = "PATH")]
    pub init: Option<PathBuf>,

    /// Overwrite an existing file with --init.
    #[arg(short, long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort() {
        assert_eq!(parse_sort("price-high"), Ok(SortMode::PriceHigh));
        assert!(parse_sort("cheapest").unwrap_err().contains("price-low"));
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("under-100"), Ok(PriceRange::new(0.0, 100.0)));
        assert_eq!(parse_price("20-40"), Ok(PriceRange::new(20.0, 40.0)));
        assert!(parse_price("cheap").is_err());
    }

    #[test]
    fn test_open_bounds() {
        let args = QueryArgs {
            min_price: Some(500.0),
            ..QueryArgs::default()
        };
        assert_eq!(
            args.messages(),
            vec![ViewMsg::SetPriceRange(PriceRange::new(500.0, f64::MAX))]
        );
    }

    #[test]
    fn test_messages_order() {
        let args = QueryArgs {
            search: Some("lamp".into()),
            sort: Some(SortMode::Name),
            min_rating: Some(200.0),
            colors: vec!["red".into()],
            ..QueryArgs::default()
        };
        let msgs = args.messages();
        assert_eq!(msgs.len(), 4);
        assert_eq!(msgs[0], ViewMsg::SetSearch("lamp".into()));
        assert!(matches!(msgs[3], ViewMsg::SetColors(ref c) if c.contains("red")));
    }
}
