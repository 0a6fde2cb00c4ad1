//! Server-side HTML rendering for the storefront.
//!
//! Each section renderer is a pure function from view models to an HTML
//! string. [`render_page`] assembles them into a complete document for a
//! [`Storefront`] session; the page keeps its state in the query string
//! (see [`params`]) so every control works without client-side code.

pub mod escape;
pub mod params;
pub mod sections;
pub mod shell;
mod styles;

use storefront_core::search::color_facets;
use storefront_core::view::Storefront;
use tracing::debug;

pub use escape::escape_html;
pub use params::{query_string, view_messages};
pub use sections::{
    render_card, render_detail, render_grid, render_header, render_stars, render_summary,
    render_toolbar,
};
pub use shell::{HeadContent, Shell};
pub use styles::STOREFRONT_STYLES;

/// Page-level text.
#[derive(Debug, Clone)]
pub struct PageOptions {
    /// Document title and header heading.
    pub title: String,
    /// Line under the heading.
    pub tagline: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "Product Store".to_string(),
            tagline: "Discover amazing products at great prices".to_string(),
        }
    }
}

/// Render the full storefront page for the session's current state.
pub fn render_page(storefront: &Storefront, options: &PageOptions) -> String {
    let state = storefront.state();
    let facets = color_facets(storefront.catalog(), &state.filters);

    let mut sections = vec![
        render_header(&options.title, &options.tagline),
        r#"<div class="container">"#.to_string(),
        render_toolbar(state, &facets),
        render_summary(&storefront.results().summary()),
        render_grid(&storefront.cards(), state),
        "</div>".to_string(),
    ];

    if let Some(detail) = storefront.detail() {
        sections.push(render_detail(&detail, state));
    }
    sections.push(PAGE_SCRIPT.to_string());

    debug!(
        visible = storefront.results().len(),
        detail_open = state.is_open(),
        "page rendered"
    );

    let head = HeadContent::new(options.title.clone())
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_meta("description", &options.tagline)
        .with_style(STOREFRONT_STYLES);

    Shell::new(head)
        .with_body_start("<body>\n")
        .with_body_end("</body>\n</html>")
        .wrap(&sections)
}

/// Purchase buttons raise a `storefront:purchase` DOM event for the host
/// page to handle.
const PAGE_SCRIPT: &str = r#"<script>
document.querySelectorAll('[data-action]').forEach(btn => {
    btn.addEventListener('click', () => {
        document.dispatchEvent(new CustomEvent('storefront:purchase', {
            detail: {
                action: btn.dataset.action,
                productId: btn.dataset.productId,
                quantity: Number(btn.dataset.quantity),
            },
        }));
    });
});
</script>"#;

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::catalog::{Catalog, Product};
    use storefront_core::view::ViewMsg;
    use storefront_core::{DisplayConfig, ProductId};

    fn storefront() -> Storefront {
        let catalog = Catalog::from_products(vec![
            Product::new("1", "Red Shoe", 50.0).with_rating(800.0).with_colors(["red"]),
            Product::new("2", "Blue Hat", 150.0).with_rating(400.0).with_colors(["blue"]),
        ]);
        Storefront::new(catalog, DisplayConfig::default())
    }

    #[test]
    fn test_page_lists_cards_and_summary() {
        let html = render_page(&storefront(), &PageOptions::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Product Store</title>"));
        assert!(html.contains("Showing 2 of 2 products"));
        assert_eq!(html.matches(r#"<article class="product-card""#).count(), 2);
        assert!(!html.contains(r#"data-section="detail""#));
    }

    #[test]
    fn test_page_reflects_query_params() {
        let mut s = storefront();
        for msg in view_messages("price=under-100&product=2") {
            s.dispatch(msg);
        }
        let html = render_page(&s, &PageOptions::default());
        assert!(html.contains("Showing 1 of 2 products"));
        assert!(html.contains(r#"data-section="detail" data-product-id="2""#));
    }

    #[test]
    fn test_empty_page_message() {
        let mut s = storefront();
        s.dispatch(ViewMsg::SetSearch("umbrella".into()));
        let html = render_page(&s, &PageOptions::default());
        assert!(html.contains("No products found matching your criteria"));
    }

    #[test]
    fn test_detail_after_select() {
        let mut s = storefront();
        s.dispatch(ViewMsg::Select(ProductId::new("1")));
        let html = render_page(&s, &PageOptions::default());
        assert!(html.contains("ADD TO CART"));
        assert!(html.contains("BUY NOW"));
    }
}
