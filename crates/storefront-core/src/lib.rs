//! Catalog, query pipeline and view state for the storefront.
//!
//! This crate holds everything the storefront needs apart from drawing
//! pixels:
//!
//! - **Catalog**: loading and normalizing product records
//! - **Search**: text search, price/rating/color filters, sorting
//! - **View**: card and detail view models, session state transitions
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_core::prelude::*;
//!
//! let catalog = Catalog::bundled()?;
//! let mut storefront = Storefront::new(catalog, DisplayConfig::default());
//!
//! storefront.dispatch(ViewMsg::SetPriceRange(PriceRange::new(0.0, 100.0)));
//! storefront.dispatch(ViewMsg::SetSort(SortMode::PriceHigh));
//!
//! println!("{}", storefront.results().summary());
//! for card in storefront.cards() {
//!     println!("{} {}", card.name, card.price);
//! }
//! ```

pub mod config;
pub mod error;
pub mod ids;

pub mod catalog;
pub mod search;
pub mod view;

pub use config::DisplayConfig;
pub use error::CatalogError;
pub use ids::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::DisplayConfig;
    pub use crate::error::CatalogError;
    pub use crate::ids::*;

    // Catalog
    pub use crate::catalog::{Catalog, Product};

    // Search
    pub use crate::search::{
        color_facets, FacetValue, FilterCriteria, PricePreset, PriceRange, SearchQuery,
        SearchResults, SortMode, NO_RESULTS_MESSAGE,
    };

    // View
    pub use crate::view::{
        CardView, DetailView, Gallery, PurchaseIntent, PurchaseKind, Storefront, Swatch,
        ViewEffect, ViewMsg, ViewState,
    };
}
