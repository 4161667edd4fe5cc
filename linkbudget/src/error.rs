use thiserror::Error;

/// Errors surfaced for inputs that violate the engine's hard invariants.
///
/// Everything else (non-positive distances, missing terrain, missing
/// equipment, missing obstacles) is a domain sentinel or a clamp and never
/// reaches this type; see the module docs on [`crate::compute_link_budget`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinkBudgetError {
    #[error("frequency range is inverted: freq_min_mhz ({min}) > freq_max_mhz ({max})")]
    InvertedFrequencyRange { min: f64, max: f64 },

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("rain_rate_mm_h must be >= 0, got {0}")]
    NegativeRainRate(f64),

    #[error("max_power_w must be > 0, got {0}")]
    NonPositivePower(f64),
}
