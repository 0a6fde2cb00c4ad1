//! Detail overlay section.

use storefront_core::view::{DetailView, ViewState};

use super::grid::{render_stars, render_swatch};
use crate::escape::{escape_html, urlencoding_decode};
use crate::params::{close_href, page_href, query_string};

/// Render the detail overlay for the selected product.
pub fn render_detail(detail: &DetailView, state: &ViewState) -> String {
    let at_image = |index: usize| {
        let mut next = state.clone();
        next.image_index = index;
        escape_html(&page_href(&next))
    };
    let with_quantity = |quantity: u32| {
        let mut next = state.clone();
        next.quantity = quantity.max(1);
        escape_html(&page_href(&next))
    };

    let navigation = if detail.show_navigation {
        let prev = if detail.has_prev {
            format!(
                r#"<a class="gallery-prev" href="{}" aria-label="Previous image">&lsaquo;</a>"#,
                at_image(detail.image_index - 1)
            )
        } else {
            r#"<span class="gallery-prev disabled">&lsaquo;</span>"#.to_string()
        };
        let next = if detail.has_next {
            format!(
                r#"<a class="gallery-next" href="{}" aria-label="Next image">&rsaquo;</a>"#,
                at_image(detail.image_index + 1)
            )
        } else {
            r#"<span class="gallery-next disabled">&rsaquo;</span>"#.to_string()
        };
        format!("{}{}", prev, next)
    } else {
        String::new()
    };

    let thumbnails = if detail.thumbnails.is_empty() {
        String::new()
    } else {
        let thumbs: String = detail
            .thumbnails
            .iter()
            .map(|t| {
                format!(
                    r#"<a class="thumbnail{}" href="{}"><img src="{}" alt=""></a>"#,
                    if t.active { " active" } else { "" },
                    at_image(t.index),
                    escape_html(&t.src)
                )
            })
            .collect();
        format!(r#"<div class="gallery-thumbnails">{}</div>"#, thumbs)
    };

    let colors = if detail.swatches.is_empty() {
        String::new()
    } else {
        let swatches: String = detail
            .swatches
            .iter()
            .map(|s| render_swatch(s, "swatch swatch-large"))
            .collect();
        format!(
            r#"<div class="detail-colors">
                <span class="detail-label">Available Colors:</span>
                <div class="detail-swatches">{}</div>
            </div>"#,
            swatches
        )
    };

    let discount = detail
        .discount
        .as_ref()
        .map(|d| {
            format!(
                r#"<span class="price-original">{}</span><span class="discount-pill">{}</span>"#,
                escape_html(&d.original_price),
                escape_html(&d.badge)
            )
        })
        .unwrap_or_default();

    let decrement = if detail.can_decrement {
        format!(
            r#"<a class="qty-btn" href="{}" aria-label="Decrease quantity">-</a>"#,
            with_quantity(detail.quantity - 1)
        )
    } else {
        r#"<span class="qty-btn disabled">-</span>"#.to_string()
    };

    format!(
        r#"<div class="detail-overlay" data-section="detail" data-product-id="{id}">
    <div class="detail-panel" role="dialog" aria-modal="true" aria-label="{name}">
        <a class="detail-close" href="{close}" aria-label="Close">&times;</a>
        <div class="detail-grid">
            <div class="detail-gallery">
                <div class="gallery-main">
                    <img src="{main_image}" alt="{name}">
                    {navigation}
                </div>
                {thumbnails}
            </div>
            <div class="detail-info">
                <div class="detail-rating">
                    {stars}
                    <span class="detail-reviews">{rating_text}</span>
                </div>
                <h2 class="detail-name">{name}</h2>
                <p class="detail-description">{description}</p>
                {colors}
                <div class="detail-price">
                    <span class="price-current">{price}</span>
                    {discount}
                </div>
                <form class="detail-actions" method="GET">
                    {hidden}
                    <div class="qty-stepper">
                        {decrement}
                        <input type="number" name="qty" min="1" value="{quantity}" aria-label="Quantity" onchange="this.form.submit()">
                        <a class="qty-btn" href="{increment}" aria-label="Increase quantity">+</a>
                    </div>
                    <div class="detail-buttons">
                        <button type="button" class="btn-cart" data-action="add-to-cart" data-product-id="{id}" data-quantity="{quantity}">ADD TO CART</button>
                        <button type="button" class="btn-buy" data-action="buy-now" data-product-id="{id}" data-quantity="{quantity}">BUY NOW</button>
                    </div>
                </form>
            </div>
        </div>
    </div>
</div>"#,
        id = escape_html(detail.id.as_str()),
        name = escape_html(&detail.name),
        close = escape_html(&close_href(state)),
        main_image = escape_html(&detail.main_image),
        navigation = navigation,
        thumbnails = thumbnails,
        stars = render_stars(detail.stars),
        rating_text = escape_html(&detail.rating_text),
        description = escape_html(&detail.description),
        colors = colors,
        price = escape_html(&detail.price),
        discount = discount,
        hidden = hidden_inputs(state),
        decrement = decrement,
        quantity = detail.quantity,
        increment = with_quantity(detail.quantity.saturating_add(1)),
    )
}

/// Hidden fields that carry everything but the quantity through the
/// quantity form submit.
fn hidden_inputs(state: &ViewState) -> String {
    let mut without_quantity = state.clone();
    without_quantity.quantity = 1;
    let qs = query_string(&without_quantity);
    qs.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            format!(
                r#"<input type="hidden" name="{}" value="{}">"#,
                escape_html(key),
                escape_html(&urlencoding_decode(value))
            )
        })
        .collect()
}
