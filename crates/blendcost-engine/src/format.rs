//! Display helpers for the presentation layer. No pricing logic lives here.

use blendcost_core::{ComplexityLevel, PriceRange};

/// Format a price as whole currency units with thousands separators,
/// e.g. `12345.6` → `"$12,346"`. Non-finite values render as `"N/A"`.
pub fn format_price(value: f64) -> String {
    if !value.is_finite() {
        return "N/A".to_string();
    }
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_thousands(&digits);
    if rounded < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Format the `[min, max]` band of a range, e.g. `"$5,000 – $12,500"`.
pub fn format_price_range(range: &PriceRange) -> String {
    format!("{} – {}", format_price(range.min), format_price(range.max))
}

/// Label for a complexity factor: "Simple", "Moderate" or "Complex".
pub fn complexity_text(complexity_factor: f64) -> &'static str {
    ComplexityLevel::from_factor(complexity_factor).label()
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
