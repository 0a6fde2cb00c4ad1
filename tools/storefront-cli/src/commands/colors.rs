//! List color facets.

use anyhow::Result;
use storefront_core::search::color_facets;
use storefront_core::view::resolve_color;

use super::ColorsArgs;
use crate::context::Context;

/// Run the colors command.
pub fn run(args: ColorsArgs, ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront_with(args.query.messages());
    let facets = color_facets(storefront.catalog(), &storefront.state().filters);

    if ctx.output.is_json() {
        ctx.output.json(&facets);
        return Ok(());
    }

    ctx.output.header("Colors");

    if facets.is_empty() {
        ctx.output.info("No colors in catalog");
        return Ok(());
    }

    let widths = [16, 10, 8, 8];
    ctx.output.table_row(&["COLOR", "CSS", "COUNT", "ACTIVE"], &widths);
    for facet in &facets {
        ctx.output.table_row(
            &[
                &facet.value,
                &resolve_color(&facet.value),
                &facet.count.to_string(),
                if facet.selected { "yes" } else { "" },
            ],
            &widths,
        );
    }

    Ok(())
}
