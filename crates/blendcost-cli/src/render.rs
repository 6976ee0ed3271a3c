//! Plain-text rendering of a pricing result.

use std::fmt::Write;

use blendcost_core::{ContentType, PriceRange, PricingInput, PricingResult};
use blendcost_engine::{complexity_text, format_price, format_price_range};

fn range_line(range: &PriceRange) -> String {
    format!("{} (mean {})", format_price_range(range), format_price(range.mean))
}

/// Human summary of a quote.
pub fn summary(input: &PricingInput, result: &PricingResult) -> String {
    let input = input.normalized();
    let mix = &result.mix_ratio;
    let mut out = String::new();

    let _ = writeln!(out, "Duration:    {} min", input.minutes);
    let _ = writeln!(
        out,
        "Complexity:  {:.2} ({})",
        input.complexity_factor,
        complexity_text(input.complexity_factor)
    );
    let _ = writeln!(out, "Content mix:");
    for content_type in ContentType::ALL {
        let _ = writeln!(
            out,
            "  {:<16} {:>5.1}%  {:>6.2} min  {}/min",
            content_type.label(),
            mix.ratio(content_type) * 100.0,
            mix.minutes(content_type),
            format_price_range(&result.price_range(content_type)),
        );
    }
    let _ = writeln!(out, "Per minute:  {}", range_line(&result.price_per_minute_range));
    let _ = writeln!(out, "Total:       {}", range_line(&result.total_price_range));
    let _ = writeln!(
        out,
        "Confidence:  68% interval, sigma {}/min",
        format_price(result.sigma())
    );
    out
}

/// Pretty JSON for the presentation layer.
pub fn json(result: &PricingResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}
