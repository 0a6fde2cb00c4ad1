//! Results section: summary line and product card grid.

use storefront_core::search::NO_RESULTS_MESSAGE;
use storefront_core::view::{CardView, Swatch, ViewState, MAX_STARS};

use crate::escape::escape_html;
use crate::params::select_href;

/// Render the "Showing N of M products" line.
pub fn render_summary(summary: &str) -> String {
    format!(
        r#"<div class="results-summary" data-section="summary">
    <p>{}</p>
</div>"#,
        escape_html(summary)
    )
}

/// Render the product grid, or the empty-state message.
pub fn render_grid(cards: &[CardView], state: &ViewState) -> String {
    if cards.is_empty() {
        return format!(
            r#"<section class="product-grid-empty" data-section="results">
    <p>{}</p>
</section>"#,
            NO_RESULTS_MESSAGE
        );
    }

    let cards_html: String = cards.iter().map(|card| render_card(card, state)).collect();

    format!(
        r#"<section class="product-grid" data-section="results">
    {}
</section>"#,
        cards_html
    )
}

/// Render a single product card.
pub fn render_card(card: &CardView, state: &ViewState) -> String {
    let badge = card
        .discount_badge
        .as_deref()
        .map(|b| format!(r#"<span class="discount-badge">{}</span>"#, escape_html(b)))
        .unwrap_or_default();

    let original_price = card
        .original_price
        .as_deref()
        .map(|p| format!(r#"<span class="price-original">{}</span>"#, escape_html(p)))
        .unwrap_or_default();

    let mut swatches: String = card.swatches.iter().map(|s| render_swatch(s, "swatch")).collect();
    if let Some(extra) = card.extra_colors_label() {
        swatches.push_str(&format!(r#"<span class="swatch-more">{}</span>"#, extra));
    }

    format!(
        r#"<article class="product-card" data-product-id="{id}">
    <div class="product-card-media">
        <img src="{image}" alt="{name}" loading="lazy">
        {badge}
    </div>
    <div class="product-card-body">
        <h3 class="product-name">{name}</h3>
        <p class="product-description">{description}</p>
        {stars}
        <div class="product-price">
            <span class="price-current">{price}</span>
            {original_price}
        </div>
        <div class="product-swatches">{swatches}</div>
        <a class="view-details" href="{href}">View Details</a>
    </div>
</article>"#,
        id = escape_html(card.id.as_str()),
        image = escape_html(&card.image),
        name = escape_html(&card.name),
        badge = badge,
        description = escape_html(&card.description),
        stars = render_stars(card.stars),
        price = escape_html(&card.price),
        original_price = original_price,
        swatches = swatches,
        href = escape_html(&select_href(state, &card.id)),
    )
}

/// Render a five-glyph star row with `filled` stars lit.
pub fn render_stars(filled: u8) -> String {
    let filled = filled.min(MAX_STARS);
    let mut html = format!(
        r#"<div class="stars" aria-label="{} out of {} stars">"#,
        filled, MAX_STARS
    );
    for i in 0..MAX_STARS {
        if i < filled {
            html.push_str(r#"<span class="star full">★</span>"#);
        } else {
            html.push_str(r#"<span class="star empty">☆</span>"#);
        }
    }
    html.push_str(&format!(r#"<span class="star-count">({})</span></div>"#, filled));
    html
}

pub(crate) fn render_swatch(swatch: &Swatch, class: &str) -> String {
    format!(
        r#"<span class="{}" style="background-color: {}" title="{}"></span>"#,
        class,
        escape_html(&swatch.css),
        escape_html(&swatch.label)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::catalog::Product;
    use storefront_core::DisplayConfig;

    fn card(product: Product) -> CardView {
        CardView::from_product(&product, &DisplayConfig::default())
    }

    #[test]
    fn test_stars_row() {
        let html = render_stars(3);
        assert_eq!(html.matches("star full").count(), 3);
        assert_eq!(html.matches("star empty").count(), 2);
        assert!(html.contains("(3)"));
    }

    #[test]
    fn test_stars_never_exceed_five() {
        let html = render_stars(9);
        assert_eq!(html.matches("star full").count(), 5);
        assert_eq!(html.matches("star empty").count(), 0);
    }

    #[test]
    fn test_card_markup() {
        let product = Product::new("7", "Desk Lamp", 59.0)
            .with_rating(800.0)
            .with_discount(Some(79.0), Some(25.0))
            .with_colors(["black", "white", "silver", "gold"]);
        let html = render_card(&card(product), &ViewState::default());
        assert!(html.contains(r#"data-product-id="7""#));
        assert!(html.contains(r#"<span class="discount-badge">-25%</span>"#));
        assert!(html.contains(r#"<span class="price-current">$59</span>"#));
        assert!(html.contains(r#"<span class="price-original">$79</span>"#));
        assert!(html.contains("background-color: #C0C0C0"));
        assert!(html.contains(r#"<span class="swatch-more">+1</span>"#));
        assert!(html.contains(r#"href="?product=7""#));
        assert_eq!(html.matches("star full").count(), 4);
    }

    #[test]
    fn test_card_placeholder_and_no_badge() {
        let html = render_card(&card(Product::new("1", "Vase", 45.0)), &ViewState::default());
        assert!(html.contains("https://via.placeholder.com/300x200"));
        assert!(!html.contains("discount-badge"));
        assert!(!html.contains("price-original"));
        assert!(!html.contains("swatch-more"));
    }

    #[test]
    fn test_swatch_style_holds_only_a_color() {
        let product = Product::new("9", "Mug", 12.0).with_colors(["red; background-image:url(//x)"]);
        let html = render_card(&card(product), &ViewState::default());
        assert!(html.contains(r#"style="background-color: transparent""#));
        assert!(!html.contains("background-color: red"));
        assert!(html.contains(r#"title="red; background-image:url(//x)""#));
    }

    #[test]
    fn test_empty_grid_message() {
        let html = render_grid(&[], &ViewState::default());
        assert!(html.contains(NO_RESULTS_MESSAGE));
    }

    #[test]
    fn test_summary() {
        let html = render_summary("Showing 1 of 2 products");
        assert!(html.contains("<p>Showing 1 of 2 products</p>"));
    }
}
