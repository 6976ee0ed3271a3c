use blendcost_core::{ContentType, PricingConfig, PricingInput, PricingResult};
use blendcost_engine::{calculate_price, complexity_text, format_price_range, PricingEngine};

const TOLERANCE: f64 = 1e-9;

fn price(minutes: u32, complexity: f64) -> PricingResult {
    calculate_price(&PricingInput::new(minutes, complexity))
}

fn assert_close(a: f64, b: f64, what: &str) {
    let scale = a.abs().max(b.abs()).max(1.0);
    assert!(
        (a - b).abs() <= TOLERANCE * scale,
        "{what}: {a} != {b}"
    );
}

// ── Scenario 1: zero complexity ────────────────────────────────────────────

#[test]
fn zero_complexity_has_minimum_cgfx_share() {
    let result = price(5, 0.0);
    assert_eq!(result.mix_ratio.cgfx_ratio, 0.0);
    assert_close(
        result.mix_ratio.motion_graphics_minutes + result.mix_ratio.cgfx_minutes,
        5.0,
        "minutes",
    );
}

// ── Scenario 2: full complexity ────────────────────────────────────────────

#[test]
fn full_complexity_has_maximum_cgfx_share() {
    let low = price(5, 0.0);
    let high = price(5, 1.0);
    assert!(high.mix_ratio.cgfx_ratio > low.mix_ratio.cgfx_ratio);

    // No complexity in [0, 1] beats the share at 1.0.
    for step in 0..=100 {
        let c = step as f64 / 100.0;
        assert!(price(5, c).mix_ratio.cgfx_ratio <= high.mix_ratio.cgfx_ratio);
    }
}

// ── Scenario 3: one minute ─────────────────────────────────────────────────

#[test]
fn one_minute_total_equals_per_minute() {
    let result = price(1, 0.5);
    assert_eq!(result.total_price_range, result.price_per_minute_range);
}

// ── Scenario 4: determinism ────────────────────────────────────────────────

#[test]
fn identical_inputs_give_identical_results() {
    let a = price(7, 0.63);
    let b = price(7, 0.63);
    assert_eq!(a, b);
    assert_eq!(
        a.total_price_range.max.to_bits(),
        b.total_price_range.max.to_bits()
    );
    assert_eq!(a.to_json().unwrap(), b.to_json().unwrap());
}

// ── Scenario 5: monotonicity example ───────────────────────────────────────

#[test]
fn higher_complexity_costs_at_least_as_much() {
    let simple = price(4, 0.4);
    let complex = price(4, 0.9);
    assert!(complex.total_price_range.max >= simple.total_price_range.max);
    assert!(complex.mix_ratio.cgfx_ratio >= simple.mix_ratio.cgfx_ratio);
}

// ── Contract details ───────────────────────────────────────────────────────

#[test]
fn total_is_exact_multiple_of_per_minute() {
    for minutes in [1, 2, 5, 13, 90] {
        let result = price(minutes, 0.37);
        let m = minutes as f64;
        assert_eq!(result.total_price_range.min, result.price_per_minute_range.min * m);
        assert_eq!(result.total_price_range.mean, result.price_per_minute_range.mean * m);
        assert_eq!(result.total_price_range.max, result.price_per_minute_range.max * m);
    }
}

#[test]
fn per_type_totals_add_up_to_total() {
    let result = price(12, 0.75);
    let mg = result.total_range(ContentType::MotionGraphics);
    let cg = result.total_range(ContentType::Cgfx);
    assert_close(mg.min + cg.min, result.total_price_range.min, "min");
    assert_close(mg.mean + cg.mean, result.total_price_range.mean, "mean");
    assert_close(mg.max + cg.max, result.total_price_range.max, "max");
}

#[test]
fn zero_complexity_per_type_ranges_are_baseline() {
    let result = price(3, 0.0);
    assert_eq!(result.price_range(ContentType::MotionGraphics), result.base_range);
    assert_eq!(result.price_range(ContentType::Cgfx), result.base_range);
}

#[test]
fn distribution_peaks_nearest_the_blended_mean() {
    let engine = PricingEngine::new();
    for c in [0.0, 0.1, 0.25, 0.5] {
        let result = engine.calculate_price(&PricingInput::new(6, c));
        let curve = engine.density_curve(&result);
        assert_eq!(curve.sigma(), result.sigma());

        let mean = result.price_per_minute_range.mean;
        let nearest = curve
            .positions()
            .enumerate()
            .min_by(|a, b| (a.1 - mean).abs().total_cmp(&(b.1 - mean).abs()))
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(result.distribution[nearest], 1.0);
        assert!(result.distribution.iter().all(|s| (0.0..=1.0).contains(s)));
    }
}

#[test]
fn out_of_domain_input_is_clamped_not_rejected() {
    assert_eq!(price(0, 0.5), price(1, 0.5));
    assert_eq!(price(5, 1.8), price(5, 1.0));
    assert_eq!(price(5, -0.3), price(5, 0.0));
    assert_eq!(price(5, f64::NAN), price(5, 0.0));
}

#[test]
fn zero_width_baseline_yields_spike_distribution() {
    let config = PricingConfig::from_toml(
        r#"
[baseline]
min_per_minute = 1500.0
mean_per_minute = 1500.0
max_per_minute = 1500.0
"#,
    )
    .unwrap();
    let engine = PricingEngine::from_config(&config).unwrap();
    let result = engine.calculate_price(&PricingInput::new(2, 0.0));

    assert!(result.price_per_minute_range.is_degenerate());
    assert_eq!(result.sigma(), 0.0);
    assert_eq!(result.distribution.iter().filter(|&&s| s == 1.0).count(), 1);
    assert!(result.distribution.iter().all(|s| s.is_finite()));
}

#[test]
fn result_serializes_with_camel_case_fields() {
    let json = price(5, 0.5).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    for key in [
        "mixRatio",
        "baseRange",
        "motionGraphicsPriceRange",
        "motionGraphicsTotalRange",
        "cgfxPriceRange",
        "cgfxTotalRange",
        "pricePerMinuteRange",
        "totalPriceRange",
        "distribution",
    ] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
    assert!(value["mixRatio"].get("cgfxRatio").is_some());
}

#[test]
fn display_helpers_describe_result() {
    let result = price(5, 0.0);
    assert_eq!(format_price_range(&result.total_price_range), "$5,000 – $12,500");
    assert_eq!(complexity_text(0.0), "Simple");
}
