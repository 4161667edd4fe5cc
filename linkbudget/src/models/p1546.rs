//! Simplified ITU-R P.1546, 30-3000 MHz.

use super::fspl::fspl_db;
use crate::terrain::TerrainType;

/// Path-loss exponent `n` for the simplified model.
fn path_loss_exponent(terrain_type: TerrainType, f_mhz: f64) -> f64 {
    match (terrain_type, f_mhz < 300.0) {
        (TerrainType::Flat, true) => 3.0,
        (TerrainType::Flat, false) => 3.5,
        (_, true) => 3.5,
        (_, false) => 4.0,
    }
}

/// Simplified ITU-R P.1546 path loss in dB. Falls back to [`fspl_db`] at
/// 1 km outside `[30, 3000]` MHz.
pub fn itu_p1546_loss(d_km: f64, f_mhz: f64, h_tx_m: f64, terrain_type: TerrainType) -> f64 {
    if !(30.0..=3000.0).contains(&f_mhz) {
        return fspl_db(d_km, f_mhz);
    }
    let n = path_loss_exponent(terrain_type, f_mhz);
    fspl_db(1.0, f_mhz) + 10.0 * n * d_km.max(0.01).log10() - 20.0 * (h_tx_m.max(1.0) / 10.0).log10()
}
