//! Text formatting helpers for view models.

/// Format a numeric amount: whole numbers without decimals, everything
/// else with two.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("{:.0}", amount)
    } else {
        format!("{:.2}", amount)
    }
}

/// Truncate `text` to at most `max_chars` characters, appending `…` when
/// anything was cut. Trailing whitespace before the ellipsis is dropped.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}…", text[..cut].trim_end()),
    }
}
