//! Storefront CLI - browse and render the product catalog from a terminal.
//!
//! Commands:
//! - `storefront list` - Search, filter and sort the catalog
//! - `storefront show` - Show one product's detail view
//! - `storefront colors` - List color facets
//! - `storefront render` - Write a static HTML page
//! - `storefront config` - Show or create configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ColorsArgs, ConfigArgs, ListArgs, RenderArgs, ShowArgs};

/// Storefront CLI - browse and render the product catalog
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    /// Config file path
    #[arg(short = 'C', long, global = true)]
    config: Option<PathBuf>,

    /// Catalog JSON file (default: bundled catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search, filter and sort the catalog
    List(ListArgs),

    /// Show one product's detail view
    Show(ShowArgs),

    /// List color facets with product counts
    Colors(ColorsArgs),

    /// Render a static HTML page
    Render(RenderArgs),

    /// Show the effective configuration or create a config file
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.log_json);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    let ctx = match context::Context::load(cli.config.as_deref(), cli.catalog.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::List(args) => commands::list::run(args, &ctx),
        Commands::Show(args) => commands::show::run(args, &ctx),
        Commands::Colors(args) => commands::colors::run(args, &ctx),
        Commands::Render(args) => commands::render::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
