//! Render a static HTML page.

use std::fs;

use anyhow::{bail, Context as _, Result};
use storefront_core::view::ViewMsg;
use storefront_core::ProductId;
use storefront_render::{render_page, view_messages, PageOptions};
use tracing::info;

use super::RenderArgs;
use crate::context::Context;

/// Run the render command.
pub fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let mut msgs = args.params.as_deref().map(view_messages).unwrap_or_default();
    msgs.extend(args.query.messages());

    if let Some(id) = args.select {
        let id = ProductId::new(id);
        if ctx.catalog.get(&id).is_none() {
            bail!("Product '{}' not found", id);
        }
        msgs.push(ViewMsg::Select(id));
    }
    if let Some(index) = args.image {
        msgs.push(ViewMsg::ShowImage(index));
    }
    if let Some(quantity) = args.quantity {
        msgs.push(ViewMsg::QuantityInput(quantity));
    }

    let storefront = ctx.storefront_with(msgs);

    let mut options = PageOptions::default();
    if let Some(title) = args.title {
        options.title = title;
    }
    let html = render_page(&storefront, &options);

    match args.out {
        Some(path) => {
            fs::write(&path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = html.len(), "page written");
            ctx.output.success(&format!(
                "Wrote {} ({}, {} bytes)",
                path.display(),
                storefront.results().summary(),
                html.len()
            ));
        }
        None => print!("{}", html),
    }

    Ok(())
}
