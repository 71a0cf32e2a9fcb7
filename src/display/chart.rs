//! Text bar charts
//!
//! Renders category totals as horizontal bars scaled to the largest value.

use crate::models::Money;

use super::format::truncate;

const LABEL_WIDTH: usize = 20;

/// Create a single bar of `width` cells
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Render one labelled bar per entry, in the order given
///
/// Negative totals draw an empty bar but still show their amount.
pub fn format_bar_chart(entries: &[(&str, Money)], currency_symbol: &str, width: usize) -> String {
    let max_value = entries
        .iter()
        .map(|(_, amount)| amount.as_f64())
        .fold(0.0_f64, f64::max);

    let mut output = String::new();
    for (label, amount) in entries {
        output.push_str(&format!(
            "{:<label_width$} │{}│ {}\n",
            truncate(label, LABEL_WIDTH),
            format_bar(amount.as_f64(), max_value, width),
            amount.format_grouped(currency_symbol),
            label_width = LABEL_WIDTH
        ));
    }
    output
}
