//! Show one product's detail view.

use anyhow::{bail, Result};
use storefront_core::view::{ViewMsg, MAX_STARS};
use storefront_core::ProductId;

use super::ShowArgs;
use crate::context::Context;
use crate::output::star_bar;

/// Run the show command.
pub fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let id = ProductId::new(args.id);
    if ctx.catalog.get(&id).is_none() {
        bail!("Product '{}' not found", id);
    }

    let mut msgs = vec![ViewMsg::Select(id.clone()), ViewMsg::ShowImage(args.image)];
    if let Some(quantity) = args.quantity {
        msgs.push(ViewMsg::QuantityInput(quantity));
    }
    let storefront = ctx.storefront_with(msgs);

    let Some(detail) = storefront.detail() else {
        bail!("Product '{}' could not be opened", id);
    };

    if ctx.output.is_json() {
        ctx.output.json(&detail);
        return Ok(());
    }

    ctx.output.header(&detail.name);
    ctx.output.kv("id", detail.id.as_str());
    ctx.output.kv(
        "rating",
        &format!("{} {}", star_bar(detail.stars, MAX_STARS), detail.rating_text),
    );
    match &detail.discount {
        Some(discount) => ctx.output.kv(
            "price",
            &format!("{} (was {}, {})", detail.price, discount.original_price, discount.badge),
        ),
        None => ctx.output.kv("price", &detail.price),
    }
    if !detail.description.is_empty() {
        ctx.output.kv("description", &detail.description);
    }
    ctx.output.kv(
        "image",
        &format!(
            "{} [{}/{}]",
            detail.main_image,
            detail.image_index + 1,
            detail.image_count.max(1)
        ),
    );
    if !detail.swatches.is_empty() {
        ctx.output.kv("colors", "");
        for swatch in &detail.swatches {
            if swatch.css == swatch.label {
                ctx.output.list_item(&swatch.label);
            } else {
                ctx.output.list_item(&format!("{} ({})", swatch.label, swatch.css));
            }
        }
    }
    ctx.output.kv("quantity", &detail.quantity.to_string());

    Ok(())
}
