//! Display configuration.

use serde::{Deserialize, Serialize};

/// Presentation settings shared by every renderer.
///
/// All fields have defaults so a partial config table is valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Symbol prefixed to prices.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Image shown on a card when the product has no images.
    #[serde(default = "default_card_placeholder")]
    pub card_placeholder: String,

    /// Image shown in the detail overlay when the product has no images.
    #[serde(default = "default_detail_placeholder")]
    pub detail_placeholder: String,

    /// Maximum description length on a card, in characters.
    #[serde(default = "default_card_description_chars")]
    pub card_description_chars: usize,

    /// Maximum number of color swatches on a card.
    #[serde(default = "default_card_swatch_limit")]
    pub card_swatch_limit: usize,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_card_placeholder() -> String {
    "https://via.placeholder.com/300x200".to_string()
}

fn default_detail_placeholder() -> String {
    "https://via.placeholder.com/400".to_string()
}

fn default_card_description_chars() -> usize {
    100
}

fn default_card_swatch_limit() -> usize {
    3
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            card_placeholder: default_card_placeholder(),
            detail_placeholder: default_detail_placeholder(),
            card_description_chars: default_card_description_chars(),
            card_swatch_limit: default_card_swatch_limit(),
        }
    }
}

impl DisplayConfig {
    /// Format a price with the configured currency symbol.
    pub fn price(&self, amount: f64) -> String {
        format!("{}{}", self.currency_symbol, crate::view::format_amount(amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: DisplayConfig = serde_json::from_str(r#"{"card_swatch_limit": 5}"#).unwrap();
        assert_eq!(config.card_swatch_limit, 5);
        assert_eq!(config.card_description_chars, 100);
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_price_formatting() {
        let config = DisplayConfig::default();
        assert_eq!(config.price(50.0), "$50");
        assert_eq!(config.price(19.5), "$19.50");
    }
}
