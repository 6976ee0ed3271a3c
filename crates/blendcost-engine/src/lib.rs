//! # blendcost-engine
//!
//! Deterministic pricing for blended motion graphics / CGI-VFX video work.
//!
//! ```text
//! (minutes, complexity) → mix ratio → per-type ranges → blended range → total range
//!                                                     ↘ density curve (visualization)
//! ```
//!
//! Every stage is a pure function; the same input always produces the same
//! [`PricingResult`](blendcost_core::PricingResult).

pub mod blend;
pub mod complexity;
pub mod distribution;
pub mod engine;
pub mod format;
pub mod range;
pub mod total;

pub use blend::blend;
pub use complexity::{compute_mix_ratio, ComplexityModel};
pub use distribution::{synthesize_distribution, DensityCurve, DensitySamples};
pub use engine::{calculate_price, PricingEngine};
pub use format::{complexity_text, format_price, format_price_range};
pub use range::{compute_price_range, RangeModel};
pub use total::scale_by_duration;
