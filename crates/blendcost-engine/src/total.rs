use blendcost_core::PriceRange;

/// Multiply every bound of a per-minute range by a duration. No rounding;
/// display rounding belongs to [`crate::format`].
pub fn scale_by_duration(range: &PriceRange, minutes: f64) -> PriceRange {
    range.scale(minutes)
}
