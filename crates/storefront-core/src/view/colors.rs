//! Color label resolution for swatches.
//!
//! Catalog color labels are displayed as CSS background colors. Plain CSS
//! color names pass through unchanged. Merchandising names that CSS does
//! not know (or renders poorly) go through the alias table below.
//! Labels with characters outside a CSS color token (`;`, `:`, quotes,
//! slashes, ...) are painted [`FALLBACK_COLOR`] so a label can never add
//! declarations to an inline style.

use serde::{Deserialize, Serialize};

/// Named-color aliases: `(label, css color)`.
///
/// Matching is case-insensitive after trimming whitespace.
///
/// | label | color |
/// |---|---|
/// | silver | `#C0C0C0` |
/// | gold | `#D4AF37` |
/// | rose gold | `#B76E79` |
/// | space gray / space grey | `#4A4A4A` |
/// | midnight | `#1F2A44` |
/// | starlight | `#F0E6D2` |
/// | graphite | `#41424C` |
pub const COLOR_ALIASES: &[(&str, &str)] = &[
    ("silver", "#C0C0C0"),
    ("gold", "#D4AF37"),
    ("rose gold", "#B76E79"),
    ("space gray", "#4A4A4A"),
    ("space grey", "#4A4A4A"),
    ("midnight", "#1F2A44"),
    ("starlight", "#F0E6D2"),
    ("graphite", "#41424C"),
];

/// Paint used for labels that are not a CSS color token.
pub const FALLBACK_COLOR: &str = "transparent";

/// Resolve a color label to a CSS color value.
pub fn resolve_color(label: &str) -> String {
    let key = label.trim().to_lowercase();
    if let Some((_, css)) = COLOR_ALIASES.iter().find(|(alias, _)| *alias == key) {
        return css.to_string();
    }
    let label = label.trim();
    if is_color_token(label) {
        label.to_string()
    } else {
        FALLBACK_COLOR.to_string()
    }
}

/// Names, hex codes and functional notation like `rgb(0, 0, 0)`.
fn is_color_token(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '#' | '(' | ')' | ',' | '.' | '%' | ' ' | '-'))
}

/// A color swatch: the catalog label and the CSS color used to paint it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Swatch {
    /// Label shown as the swatch title.
    pub label: String,
    /// CSS background color.
    pub css: String,
}

impl Swatch {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            css: resolve_color(label),
        }
    }
}
