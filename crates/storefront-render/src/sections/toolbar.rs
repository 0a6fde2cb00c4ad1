//! Toolbar section: search box, sort, price and color selects.
//!
//! The toolbar is a GET form; every select submits on change.

use storefront_core::search::{FacetValue, PricePreset, SortMode};
use storefront_core::view::ViewState;

use crate::escape::escape_html;
use crate::params::price_param;

/// Render the toolbar for the current state and catalog color facets.
pub fn render_toolbar(state: &ViewState, facets: &[FacetValue]) -> String {
    let sort_html: String = SortMode::ALL
        .iter()
        .map(|mode| {
            option(
                mode.as_str(),
                mode.display_name(),
                *mode == state.sort,
            )
        })
        .collect();

    let active_preset = PricePreset::matching(&state.filters.price_range);
    let mut price_html: String = PricePreset::ALL
        .iter()
        .map(|preset| {
            option(
                preset.as_str(),
                preset.display_name(),
                Some(*preset) == active_preset,
            )
        })
        .collect();
    if active_preset.is_none() {
        let custom = price_param(&state.filters.price_range);
        price_html.push_str(&option(&custom, &state.filters.price_range.to_string(), true));
    }

    let single_color = match state.filters.colors.len() {
        1 => state.filters.colors.iter().next().map(String::as_str),
        _ => None,
    };
    let mut color_html = option("all", "All Colors", state.filters.colors.is_empty());
    for facet in facets {
        color_html.push_str(&option(
            &facet.value,
            &format!("{} ({})", facet.value, facet.count),
            single_color == Some(facet.value.as_str()),
        ));
    }

    format!(
        r#"<section class="toolbar" data-section="toolbar">
    <form class="toolbar-form" method="GET">
        <div class="toolbar-search">
            <input type="text" name="q" value="{search}" placeholder="Search products..." aria-label="Search products">
        </div>
        <select name="sort" aria-label="Sort" onchange="this.form.submit()">
            {sort_html}
        </select>
        <select name="price" aria-label="Price range" onchange="this.form.submit()">
            {price_html}
        </select>
        <select name="color" aria-label="Color" onchange="this.form.submit()">
            {color_html}
        </select>
    </form>
</section>"#,
        search = escape_html(&state.search),
        sort_html = sort_html,
        price_html = price_html,
        color_html = color_html,
    )
}

fn option(value: &str, label: &str, selected: bool) -> String {
    format!(
        r#"<option value="{}"{}>{}</option>"#,
        escape_html(value),
        if selected { " selected" } else { "" },
        escape_html(label)
    )
}
