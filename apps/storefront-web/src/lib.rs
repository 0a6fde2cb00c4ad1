//! Browser storefront.
//!
//! A client-side Leptos app over the bundled catalog: search, filters and
//! sorting in a toolbar, a product card grid, and a detail overlay. All
//! state lives in one [`storefront_core::view::Storefront`] session and
//! changes only through its `dispatch`.

mod app;

pub use app::App;
