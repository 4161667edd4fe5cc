//! Near-terminal clutter loss, ITU-R P.2108 (categorical median model).

use crate::terrain::GroundType;

/// Median clutter loss in dB for `ground_type` at `f_mhz`. Only
/// FOREST/SUBURBAN/URBAN/DENSE_URBAN depend on frequency; the others are
/// fixed categorical values.
pub fn clutter_loss(ground_type: GroundType, f_mhz: f64) -> f64 {
    let f_ghz = f_mhz / 1000.0;
    match ground_type {
        GroundType::Sea => 0.0,
        GroundType::Coast => 0.5,
        GroundType::OpenLand => 1.0,
        GroundType::Farmland => 2.0,
        GroundType::Forest => (5.0 + 4.0 * (f_ghz.max(0.03) / 0.03).log10()).min(15.0),
        GroundType::Suburban => 6.0 + 1.5 * (f_ghz.max(0.1) / 0.1).log10(),
        GroundType::Urban => 12.0 + 2.0 * (f_ghz.max(0.1) / 0.1).log10(),
        GroundType::DenseUrban => 20.0 + 3.0 * (f_ghz.max(0.1) / 0.1).log10(),
    }
}
