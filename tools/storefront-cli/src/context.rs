//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storefront_core::catalog::Catalog;
use storefront_core::view::{Storefront, ViewMsg, ViewState};

use crate::config::CliConfig;
use crate::output::Output;

const CONFIG_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Loaded catalog.
    pub catalog: Catalog,
}

impl Context {
    /// Load configuration and the catalog.
    ///
    /// `catalog_path` overrides the config file's `catalog` entry; with
    /// neither, the bundled catalog is used.
    pub fn load(config_path: Option<&Path>, catalog_path: Option<&Path>, output: Output) -> Result<Self> {
        let (config, config_path) = match config_path {
            Some(path) => (CliConfig::load(path)?, Some(path.to_path_buf())),
            None => {
                let cwd = std::env::current_dir().context("Failed to get current directory")?;
                match Self::find_config(&cwd, &output) {
                    Some((config, path)) => (config, Some(path)),
                    None => (CliConfig::default(), None),
                }
            }
        };

        if let Some(path) = &config_path {
            output.debug(&format!("Using config {}", path.display()));
        }

        let catalog = match catalog_path.or(config.catalog.as_deref()) {
            Some(path) => Catalog::from_path(path)
                .with_context(|| format!("Failed to load catalog: {}", path.display()))?,
            None => Catalog::bundled().context("Failed to load bundled catalog")?,
        };
        output.debug(&format!("Loaded {} products", catalog.len()));

        Ok(Self {
            config,
            config_path,
            output,
            catalog,
        })
    }

    /// Find a config file in the directory tree.
    fn find_config(start: &Path, output: &Output) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(&config_path) {
                        Ok(config) => return Some((config, config_path)),
                        Err(e) => {
                            output.warn(&format!("Ignoring {}: {:#}", config_path.display(), e));
                        }
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Start a session with the configured query defaults applied.
    pub fn storefront(&self) -> Storefront {
        let defaults = &self.config.defaults;
        let mut state = ViewState::default();
        state.sort = defaults.sort;
        state.filters.min_rating = defaults.min_rating;
        state.filters.price_range = defaults.price.range();
        Storefront::with_state(self.catalog.clone(), self.config.display.clone(), state)
    }

    /// Start a session and replay `msgs` on it.
    pub fn storefront_with(&self, msgs: Vec<ViewMsg>) -> Storefront {
        let mut storefront = self.storefront();
        for msg in msgs {
            storefront.dispatch(msg);
        }
        storefront
    }
}
