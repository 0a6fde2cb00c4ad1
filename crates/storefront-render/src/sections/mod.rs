//! Section renderers for the storefront page.

mod detail;
mod grid;
mod header;
mod toolbar;

pub use detail::*;
pub use grid::*;
pub use header::*;
pub use toolbar::*;
