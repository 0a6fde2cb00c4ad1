//! View models and session state for the storefront UI.
//!
//! Everything here is presentation-agnostic: the HTML renderer, the CLI and
//! the browser app all draw from the same [`CardView`] and [`DetailView`]
//! values and drive the same [`ViewState`] transitions.

mod card;
mod colors;
mod detail;
mod format;
mod session;
mod state;

pub use card::{stars_for, CardView, MAX_STARS, RATING_PER_STAR};
pub use colors::{resolve_color, Swatch, COLOR_ALIASES, FALLBACK_COLOR};
pub use detail::{DetailView, DiscountBlock, Gallery, Thumbnail};
pub use format::{format_amount, truncate};
pub use session::Storefront;
pub use state::{parse_quantity, PurchaseIntent, PurchaseKind, ViewEffect, ViewMsg, ViewState};
