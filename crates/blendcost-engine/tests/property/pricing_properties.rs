use blendcost_core::{ContentType, PriceRange, PricingInput};
use blendcost_engine::{blend, ComplexityModel, PricingEngine};
use proptest::prelude::*;

/// Relative slack for comparisons that go through a few float operations.
fn slack(value: f64) -> f64 {
    value.abs().max(1.0) * 1e-12
}

fn arb_range() -> impl Strategy<Value = PriceRange> {
    (0.0f64..10_000.0, 0.0f64..10_000.0, 0.0f64..10_000.0).prop_map(|(a, b, c)| {
        let mut v = [a, b, c];
        v.sort_by(|x, y| x.total_cmp(y));
        PriceRange::new(v[0], v[1], v[2])
    })
}

// ── Determinism ─────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn repeated_calls_are_bit_identical(minutes in 1u32..500, c in 0.0f64..=1.0) {
        let engine = PricingEngine::new();
        let input = PricingInput::new(minutes, c);
        let a = engine.calculate_price(&input);
        let b = engine.calculate_price(&input);
        prop_assert_eq!(a.to_json().unwrap(), b.to_json().unwrap());
        prop_assert_eq!(a, b);
    }
}

// ── Ratio invariant ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn ratios_sum_to_one_and_minutes_to_duration(minutes in 1u32..10_000, c in -1.0f64..2.0) {
        let result = PricingEngine::new().calculate_price(&PricingInput::new(minutes, c));
        let mix = result.mix_ratio;
        prop_assert!((0.0..=1.0).contains(&mix.cgfx_ratio));
        prop_assert!((0.0..=1.0).contains(&mix.motion_graphics_ratio));
        prop_assert!((mix.motion_graphics_ratio + mix.cgfx_ratio - 1.0).abs() <= 1e-12);
        let m = minutes as f64;
        prop_assert!((mix.total_minutes() - m).abs() <= slack(m));
    }
}

// ── Range ordering ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn every_range_is_ordered(minutes in 1u32..1000, c in 0.0f64..=1.0) {
        let result = PricingEngine::new().calculate_price(&PricingInput::new(minutes, c));
        for range in [
            result.base_range,
            result.motion_graphics_price_range,
            result.motion_graphics_total_range,
            result.cgfx_price_range,
            result.cgfx_total_range,
            result.price_per_minute_range,
            result.total_price_range,
        ] {
            prop_assert!(range.is_ordered(), "unordered range {:?}", range);
            prop_assert!(range.min >= 0.0);
        }
    }
}

// ── Monotonicity in complexity ──────────────────────────────────────────────

proptest! {
    #[test]
    fn more_complexity_never_costs_less(
        minutes in 1u32..600,
        a in 0.0f64..=1.0,
        b in 0.0f64..=1.0,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let engine = PricingEngine::new();
        let low = engine.calculate_price(&PricingInput::new(minutes, lo));
        let high = engine.calculate_price(&PricingInput::new(minutes, hi));

        prop_assert!(high.mix_ratio.cgfx_ratio >= low.mix_ratio.cgfx_ratio);
        for content_type in ContentType::ALL {
            let l = low.price_range(content_type);
            let h = high.price_range(content_type);
            prop_assert!(h.min >= l.min);
            prop_assert!(h.max >= l.max);
        }
        let (l, h) = (low.total_price_range.max, high.total_price_range.max);
        prop_assert!(h >= l - slack(l), "total max fell: {} -> {}", l, h);
    }
}

// ── Duration adjustment shape (not fixed to example values) ─────────────────

proptest! {
    #[test]
    fn duration_adjustment_is_bounded_and_non_increasing(m1 in 1u32..100_000, m2 in 1u32..100_000) {
        let model = ComplexityModel::default();
        let (short, long) = if m1 <= m2 { (m1, m2) } else { (m2, m1) };
        let f_short = model.duration_factor(short);
        let f_long = model.duration_factor(long);
        prop_assert!(f_long <= f_short);
        prop_assert!(f_long >= 1.0 - model.duration_tempering);
        prop_assert!(f_short <= 1.0);
    }

    #[test]
    fn duration_keeps_complexity_monotone(minutes in 1u32..100_000, a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let model = ComplexityModel::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            model.compute_mix_ratio(minutes, hi).cgfx_ratio
                >= model.compute_mix_ratio(minutes, lo).cgfx_ratio
        );
    }
}

// ── Scaling law and boundaries ──────────────────────────────────────────────

proptest! {
    #[test]
    fn total_is_per_minute_times_duration(minutes in 1u32..10_000, c in 0.0f64..=1.0) {
        let result = PricingEngine::new().calculate_price(&PricingInput::new(minutes, c));
        let m = minutes as f64;
        prop_assert_eq!(result.total_price_range.min, result.price_per_minute_range.min * m);
        prop_assert_eq!(result.total_price_range.mean, result.price_per_minute_range.mean * m);
        prop_assert_eq!(result.total_price_range.max, result.price_per_minute_range.max * m);
    }

    #[test]
    fn one_minute_total_is_per_minute(c in 0.0f64..=1.0) {
        let result = PricingEngine::new().calculate_price(&PricingInput::new(1, c));
        prop_assert_eq!(result.total_price_range, result.price_per_minute_range);
    }
}

// ── Confidence curve ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn curve_sigma_matches_band_and_peaks_at_nearest_mean(minutes in 1u32..100, c in 0.0f64..=1.0) {
        let engine = PricingEngine::new();
        let result = engine.calculate_price(&PricingInput::new(minutes, c));
        let curve = engine.density_curve(&result);
        let band = result.price_per_minute_range;

        prop_assert_eq!(curve.sigma(), (band.max - band.min) / 2.0);
        prop_assert_eq!(result.distribution.len(), engine.sample_count());
        prop_assert!(result.distribution.iter().all(|s| (0.0..=1.0).contains(s)));

        let peak = curve.peak_index().unwrap();
        prop_assert_eq!(result.distribution[peak], 1.0);
        let peak_distance = (curve.position(peak) - band.mean).abs();
        for position in curve.positions() {
            prop_assert!(peak_distance <= (position - band.mean).abs());
        }
    }
}

// ── Blender envelope ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn blend_stays_within_envelope(a in arb_range(), b in arb_range(), w in 0.0f64..=1.0) {
        let mixed = blend(&a, 1.0 - w, &b, w);
        prop_assert!(mixed.is_ordered());
        let lo = a.min.min(b.min);
        let hi = a.max.max(b.max);
        prop_assert!(mixed.min >= lo - slack(lo));
        prop_assert!(mixed.max <= hi + slack(hi));
    }
}
