//! Query-string form of the view state.
//!
//! The static page keeps its state in the URL so that every control is a
//! plain link or form submit. Parsing yields [`ViewMsg`]s to replay on a
//! fresh session; unknown keys and unparseable values are ignored.

use std::collections::BTreeSet;

use storefront_core::search::{PricePreset, PriceRange, SortMode};
use storefront_core::view::{ViewMsg, ViewState};
use storefront_core::ProductId;

use crate::escape::{urlencoding_decode, urlencoding_encode};

/// Parse a query string (without the leading `?`) into view messages.
///
/// Query inputs come first, then selection, then gallery index and
/// quantity, regardless of their order in `qs`. Repeated `image` or `qty`
/// keys keep the last value.
pub fn view_messages(qs: &str) -> Vec<ViewMsg> {
    let mut query = Vec::new();
    let mut colors = BTreeSet::new();
    let mut select = None;
    let mut image = None;
    let mut quantity = None;

    for pair in qs.trim_start_matches('?').split('&') {
        let mut parts = pair.splitn(2, '=');
        let key = parts.next().unwrap_or("");
        let value = urlencoding_decode(parts.next().unwrap_or(""));

        match key {
            "q" => query.push(ViewMsg::SetSearch(value)),
            "sort" => query.push(ViewMsg::SetSort(SortMode::from_key(&value))),
            "price" => {
                if let Some(range) = parse_price(&value) {
                    query.push(ViewMsg::SetPriceRange(range));
                }
            }
            "rating" => {
                if let Ok(min) = value.trim().parse::<f64>() {
                    query.push(ViewMsg::SetMinRating(min));
                }
            }
            "color" if !value.is_empty() && value != "all" => {
                colors.insert(value);
            }
            "product" if !value.is_empty() => select = Some(ProductId::new(value)),
            "image" => {
                if let Ok(index) = value.trim().parse::<usize>() {
                    image = Some(index);
                }
            }
            "qty" => quantity = Some(value),
            _ => {}
        }
    }

    if !colors.is_empty() {
        query.push(ViewMsg::SetColors(colors));
    }
    if let Some(id) = select {
        query.push(ViewMsg::Select(id));
        query.extend(image.map(ViewMsg::ShowImage));
        query.extend(quantity.map(ViewMsg::QuantityInput));
    }
    query
}

fn parse_price(value: &str) -> Option<PriceRange> {
    PricePreset::from_key(value)
        .map(|preset| preset.range())
        .or_else(|| PriceRange::parse(value))
}

/// Price parameter value: a preset key when one matches, else `min-max`.
pub fn price_param(range: &PriceRange) -> String {
    match PricePreset::matching(range) {
        Some(preset) => preset.as_str().to_string(),
        None if range.max >= f64::MAX => format!("{}-", range.min),
        None => format!("{}-{}", range.min, range.max),
    }
}

/// Encode a view state as a query string, omitting default values.
pub fn query_string(state: &ViewState) -> String {
    let mut params: Vec<(&str, String)> = Vec::new();

    if !state.search.is_empty() {
        params.push(("q", state.search.clone()));
    }
    if state.sort != SortMode::Default {
        params.push(("sort", state.sort.as_str().to_string()));
    }
    if !state.filters.price_range.is_unbounded() {
        params.push(("price", price_param(&state.filters.price_range)));
    }
    if state.filters.min_rating > 0.0 {
        params.push(("rating", state.filters.min_rating.to_string()));
    }
    for color in &state.filters.colors {
        params.push(("color", color.clone()));
    }
    if let Some(id) = &state.selected {
        params.push(("product", id.to_string()));
        if state.image_index > 0 {
            params.push(("image", state.image_index.to_string()));
        }
        if state.quantity > 1 {
            params.push(("qty", state.quantity.to_string()));
        }
    }

    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Relative link to the page showing `state`.
pub fn page_href(state: &ViewState) -> String {
    let qs = query_string(state);
    if qs.is_empty() {
        "?".to_string()
    } else {
        format!("?{}", qs)
    }
}

/// Link that opens the detail overlay on `id`, keeping the current query.
pub fn select_href(state: &ViewState, id: &ProductId) -> String {
    let mut next = state.clone();
    next.selected = Some(id.clone());
    next.image_index = 0;
    next.quantity = 1;
    page_href(&next)
}

/// Link that closes the detail overlay, keeping the current query.
pub fn close_href(state: &ViewState) -> String {
    let mut next = state.clone();
    next.selected = None;
    next.image_index = 0;
    next.quantity = 1;
    page_href(&next)
}
