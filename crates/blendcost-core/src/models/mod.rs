pub mod complexity_level;
pub mod content_type;
pub mod mix_ratio;
pub mod price_range;
pub mod pricing_input;
pub mod pricing_result;

pub use complexity_level::ComplexityLevel;
pub use content_type::ContentType;
pub use mix_ratio::MixRatio;
pub use price_range::PriceRange;
pub use pricing_input::PricingInput;
pub use pricing_result::PricingResult;
