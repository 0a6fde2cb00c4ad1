//! Search module.
//!
//! The query pipeline: text search, price/rating/color filters and sorting
//! over the static catalog.

mod filter;
mod query;
mod results;

pub use filter::{FilterCriteria, PricePreset, PriceRange};
pub use query::{SearchQuery, SortMode};
pub use results::{color_facets, FacetValue, SearchResults, NO_RESULTS_MESSAGE};
