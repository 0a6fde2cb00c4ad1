//! List the derived product list.

use anyhow::Result;
use serde::Serialize;
use storefront_core::catalog::Product;
use storefront_core::search::NO_RESULTS_MESSAGE;
use storefront_core::view::{Storefront, MAX_STARS};

use super::ListArgs;
use crate::context::Context;
use crate::output::star_bar;

#[derive(Serialize)]
struct ListOutput<'a> {
    summary: String,
    /// Products in this output, after `--limit`.
    shown: usize,
    /// Products matching the query.
    matched: usize,
    total: usize,
    active_filters: usize,
    products: Vec<&'a Product>,
}

impl<'a> ListOutput<'a> {
    fn new(storefront: &'a Storefront, limit: Option<usize>) -> Self {
        let results = storefront.results();
        let mut products: Vec<_> = storefront.visible_products().collect();
        if let Some(limit) = limit {
            products.truncate(limit);
        }
        Self {
            summary: results.summary(),
            shown: products.len(),
            matched: results.len(),
            total: results.total,
            active_filters: storefront.state().filters.active_count(),
            products,
        }
    }
}

/// Run the list command.
pub fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront_with(args.query.messages());
    let listing = ListOutput::new(&storefront, args.limit);

    if ctx.output.is_json() {
        ctx.output.json(&listing);
        return Ok(());
    }
    let products = &listing.products;

    ctx.output.header("Products");

    if products.is_empty() {
        ctx.output.info(NO_RESULTS_MESSAGE);
    } else {
        let widths = [12, 32, 12, 10, 24];
        ctx.output.table_row(&["ID", "NAME", "PRICE", "RATING", "COLORS"], &widths);
        for card in storefront.cards().iter().take(products.len()) {
            let colors: Vec<&str> = card.swatches.iter().map(|s| s.label.as_str()).collect();
            let mut colors = colors.join(", ");
            if let Some(extra) = card.extra_colors_label() {
                colors.push_str(&format!(" {}", extra));
            }
            let price = match &card.original_price {
                Some(original) => format!("{} ({})", card.price, original),
                None => card.price.clone(),
            };
            ctx.output.table_row(
                &[
                    card.id.as_str(),
                    &card.name,
                    &price,
                    &star_bar(card.stars, MAX_STARS),
                    &colors,
                ],
                &widths,
            );
        }
    }

    println!();
    ctx.output.info(&listing.summary);
    if listing.shown < listing.matched {
        ctx.output.info(&format!("Listed the first {}", listing.shown));
    }
    if listing.active_filters > 0 {
        ctx.output.debug(&format!("{} filter(s) active", listing.active_filters));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::catalog::Catalog;
    use storefront_core::search::PriceRange;
    use storefront_core::view::ViewMsg;
    use storefront_core::DisplayConfig;

    fn storefront() -> Storefront {
        let catalog = Catalog::from_products(vec![
            Product::new("1", "Red Shoe", 50.0),
            Product::new("2", "Blue Hat", 150.0),
            Product::new("3", "Green Scarf", 20.0),
        ]);
        Storefront::new(catalog, DisplayConfig::default())
    }

    #[test]
    fn test_limit_counts_listed_products() {
        let s = storefront();
        let listing = ListOutput::new(&s, Some(2));
        assert_eq!(listing.shown, 2);
        assert_eq!(listing.products.len(), 2);
        assert_eq!(listing.matched, 3);
        assert_eq!(listing.total, 3);
        assert_eq!(listing.summary, "Showing 3 of 3 products");
    }

    #[test]
    fn test_without_limit_lists_all_matches() {
        let mut s = storefront();
        s.dispatch(ViewMsg::SetPriceRange(PriceRange::new(0.0, 100.0)));
        let listing = ListOutput::new(&s, None);
        assert_eq!(listing.shown, 2);
        assert_eq!(listing.matched, 2);
        assert_eq!(listing.active_filters, 1);
    }
}
