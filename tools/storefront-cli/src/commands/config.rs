//! Configuration commands.

use std::fs;

use anyhow::{bail, Context as _, Result};

use super::ConfigArgs;
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    if let Some(path) = args.init {
        if path.exists() && !args.force {
            bail!("{} already exists (use --force to overwrite)", path.display());
        }
        fs::write(&path, generate_default_config())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        ctx.output.success(&format!("Created {}", path.display()));
        return Ok(());
    }

    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    match &ctx.config_path {
        Some(path) => ctx.output.info(&format!("Config file: {}", path.display())),
        None => ctx.output.info("No config file found; using defaults"),
    }
    println!();
    print!("{}", toml::to_string_pretty(&ctx.config)?);

    Ok(())
}
