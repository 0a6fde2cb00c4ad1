//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_core::search::{PricePreset, SortMode};
use storefront_core::DisplayConfig;

/// CLI configuration file (`storefront.toml` or `storefront.json`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Catalog JSON file; relative paths resolve against the config file.
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Presentation settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Query defaults applied before command-line flags.
    #[serde(default)]
    pub defaults: QueryDefaults,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: CliConfig = if path.extension().map_or(false, |e| e == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?
        };

        if let (Some(catalog), Some(dir)) = (&config.catalog, path.parent()) {
            if catalog.is_relative() {
                config.catalog = Some(dir.join(catalog));
            }
        }

        Ok(config)
    }
}

/// Default query inputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryDefaults {
    /// Sort key, e.g. `price-low`.
    #[serde(default)]
    pub sort: SortMode,

    /// Minimum rating.
    #[serde(default)]
    pub min_rating: f64,

    /// Price preset key, e.g. `under-100`.
    #[serde(default)]
    pub price: PricePreset,
}

/// Generate a commented default `storefront.toml`.
pub fn generate_default_config() -> String {
    r#"# Storefront configuration

# Product data; omit to use the bundled catalog.
# catalog = "products.json"

[display]
currency_symbol = "$"
card_placeholder = "https://via.placeholder.com/300x200"
detail_placeholder = "https://via.placeholder.com/400"
card_description_chars = 100
card_swatch_limit = 3

[defaults]
sort = "default"
min_rating = 0
price = "all"
"#
    .to_string()
}
