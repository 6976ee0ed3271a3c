//! Normalized price density curve for the 68% confidence visualization.
//!
//! The blended per-minute range is read as a one-sigma band: the price is
//! modelled as `N(range.mean, σ²)` with `σ = (range.max − range.min) / 2`.
//! The curve samples that density at evenly spaced prices across the baseline
//! range and scales it so the tallest sample is exactly 1.0.

use blendcost_core::PriceRange;

/// A lazily evaluated, restartable density curve.
///
/// Each call to [`DensityCurve::iter`] recomputes the samples from the same
/// parameters, so iterating twice yields identical values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityCurve {
    mean: f64,
    sigma: f64,
    axis_min: f64,
    axis_max: f64,
    sample_count: usize,
    /// Index of the sample position closest to `mean`.
    peak_index: Option<usize>,
}

impl DensityCurve {
    /// Curve for `range` sampled `sample_count` times across `base_range`.
    pub fn new(range: &PriceRange, base_range: &PriceRange, sample_count: usize) -> Self {
        let sigma = range.half_width();
        let mut curve = Self {
            mean: range.mean,
            sigma,
            axis_min: base_range.min,
            axis_max: base_range.max,
            sample_count,
            peak_index: None,
        };
        curve.peak_index = curve.nearest_index(curve.mean);
        curve
    }

    /// Standard deviation of the modelled price.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn len(&self) -> usize {
        self.sample_count
    }

    pub fn is_empty(&self) -> bool {
        self.sample_count == 0
    }

    /// True when σ is zero and the curve is a single unit spike.
    pub fn is_spike(&self) -> bool {
        !(self.sigma > 0.0 && self.sigma.is_finite())
    }

    /// Index of the tallest sample (the position nearest the mean).
    pub fn peak_index(&self) -> Option<usize> {
        self.peak_index
    }

    /// Price at sample `index`. A single sample sits at the axis midpoint.
    pub fn position(&self, index: usize) -> f64 {
        if self.sample_count <= 1 {
            return (self.axis_min + self.axis_max) / 2.0;
        }
        let t = index as f64 / (self.sample_count - 1) as f64;
        self.axis_min + (self.axis_max - self.axis_min) * t
    }

    /// Normalized density at sample `index`, in [0.0, 1.0].
    pub fn sample(&self, index: usize) -> f64 {
        let Some(peak) = self.peak_index else {
            return 0.0;
        };
        if self.is_spike() {
            return if index == peak { 1.0 } else { 0.0 };
        }
        self.log_ratio_to_peak(self.distance(index), self.distance(peak))
            .exp()
            .min(1.0)
    }

    /// Iterate the samples from the lowest to the highest price.
    pub fn iter(&self) -> DensitySamples<'_> {
        DensitySamples {
            curve: self,
            next: 0,
        }
    }

    /// Sample positions, aligned with [`DensityCurve::iter`].
    pub fn positions(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.sample_count).map(move |i| self.position(i))
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }

    /// `log f(x) − log f(peak)` for a sample `d` from the mean, where the
    /// peak sample is `d_peak ≤ d` from it: `−½ (d − d_peak)(d + d_peak) / σ²`.
    ///
    /// Works in standardized units so σ is never squared; huge prices and
    /// far-off means stay finite or fall cleanly to −∞.
    fn log_ratio_to_peak(&self, d: f64, d_peak: f64) -> f64 {
        let near = (d - d_peak) / self.sigma;
        if near == 0.0 {
            return 0.0;
        }
        let far = (d + d_peak) / self.sigma;
        -0.5 * near * far
    }

    /// Distance of sample `index` from the mean.
    fn distance(&self, index: usize) -> f64 {
        (self.position(index) - self.mean).abs()
    }

    fn nearest_index(&self, value: f64) -> Option<usize> {
        (0..self.sample_count).min_by(|&a, &b| {
            let da = (self.position(a) - value).abs();
            let db = (self.position(b) - value).abs();
            da.total_cmp(&db)
        })
    }
}

impl<'a> IntoIterator for &'a DensityCurve {
    type Item = f64;
    type IntoIter = DensitySamples<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the samples of a [`DensityCurve`].
#[derive(Debug, Clone)]
pub struct DensitySamples<'a> {
    curve: &'a DensityCurve,
    next: usize,
}

impl Iterator for DensitySamples<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next >= self.curve.sample_count {
            return None;
        }
        let value = self.curve.sample(self.next);
        self.next += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.curve.sample_count.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DensitySamples<'_> {}

/// Collect `sample_count` normalized density samples for `range` across
/// `base_range`.
pub fn synthesize_distribution(
    range: &PriceRange,
    base_range: &PriceRange,
    sample_count: usize,
) -> Vec<f64> {
    DensityCurve::new(range, base_range, sample_count).to_vec()
}
