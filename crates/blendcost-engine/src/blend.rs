use blendcost_core::PriceRange;

/// Weighted bound-by-bound combination of two ranges.
///
/// Weights are expected to sum to 1. Negative or NaN weights count as 0,
/// other sums are renormalized, and two zero weights average the ranges.
/// A zero weight returns the other range exactly.
pub fn blend(range_a: &PriceRange, weight_a: f64, range_b: &PriceRange, weight_b: f64) -> PriceRange {
    let (weight_a, weight_b) = normalize_weights(weight_a, weight_b);
    if weight_b == 0.0 {
        return *range_a;
    }
    if weight_a == 0.0 {
        return *range_b;
    }
    PriceRange {
        min: weight_a * range_a.min + weight_b * range_b.min,
        mean: weight_a * range_a.mean + weight_b * range_b.mean,
        max: weight_a * range_a.max + weight_b * range_b.max,
    }
}

fn normalize_weights(weight_a: f64, weight_b: f64) -> (f64, f64) {
    let a = if weight_a.is_nan() { 0.0 } else { weight_a.max(0.0) };
    let b = if weight_b.is_nan() { 0.0 } else { weight_b.max(0.0) };
    let sum = a + b;
    if sum == 0.0 || !sum.is_finite() {
        (0.5, 0.5)
    } else if (sum - 1.0).abs() > 1e-12 {
        (a / sum, b / sum)
    } else {
        (a, b)
    }
}
