//! Knife-edge diffraction, ITU-R P.526-15.

use crate::terrain::Obstacle;

/// Deep-clear sentinel: the Fresnel-Kirchhoff parameter returned when no
/// obstacle obstructs the path.
pub const DEEP_CLEAR_NU: f64 = -2.0;

/// Returns the Fresnel-Kirchhoff parameter ν for a single obstacle of
/// height `h_m` above the Tx-Rx sight line, at distances `d1_km`/`d2_km`
/// from each endpoint, for a signal at `f_mhz`.
pub fn fresnel_parameter(h_m: f64, d1_km: f64, d2_km: f64, f_mhz: f64) -> f64 {
    // Spec's simplified constant (300 / f_mhz), not the exact
    // `geodesy::freq_to_wavelen_m` speed-of-light figure: the two differ by
    // ~0.07%, negligible here but deliberately the literal ITU-R P.526 form.
    let lambda_m = 300.0 / f_mhz;
    let d1_m = d1_km * 1000.0;
    let d2_m = d2_km * 1000.0;
    h_m * (2.0 * (d1_m + d2_m) / (lambda_m * d1_m * d2_m)).sqrt()
}

/// The ITU-R P.526-15 piecewise diffraction loss J(ν), in dB.
pub fn diffraction_loss(nu: f64) -> f64 {
    if nu < -1.0 {
        0.0
    } else if nu < 0.0 {
        -20.0 * (0.5 - 0.62 * nu).log10()
    } else if nu < 1.0 {
        -20.0 * (0.5 * (-0.95 * nu).exp()).log10()
    } else if nu < 2.4 {
        let inner = (0.1184 - (0.38 - 0.1 * nu).powi(2)).max(0.0);
        -20.0 * (0.4 - inner.sqrt()).log10()
    } else {
        -20.0 * (0.225 / nu).log10()
    }
}

/// Height of the obstacle peak above the straight-line Tx-Rx sight line,
/// in meters, at the obstacle's along-path position. Positive values
/// obstruct the path; negative values sit below the line of sight.
fn obstacle_height_above_los_m(
    dist_km: f64,
    elevation_tx_m: f64,
    antenna_height_tx_m: f64,
    elevation_rx_m: f64,
    antenna_height_rx_m: f64,
    obstacle: Obstacle,
) -> (f64, f64, f64) {
    let d1_km = obstacle.dist_from_tx_km;
    let d2_km = dist_km - d1_km;
    let tx_sight_m = elevation_tx_m + antenna_height_tx_m;
    let rx_sight_m = elevation_rx_m + antenna_height_rx_m;
    let frac = d1_km / dist_km;
    let los_at_obstacle_m = tx_sight_m + frac * (rx_sight_m - tx_sight_m);
    let h_m = obstacle.peak_elev_m - los_at_obstacle_m;
    (h_m, d1_km, d2_km)
}

/// Knife-edge diffraction loss in dB for the given path geometry. Returns
/// `0.0` when `obstacle` is `None` (ν is the deep-clear sentinel [`DEEP_CLEAR_NU`]).
#[allow(clippy::too_many_arguments)]
pub fn knife_edge_diffraction(
    dist_km: f64,
    f_mhz: f64,
    elevation_tx_m: f64,
    antenna_height_tx_m: f64,
    elevation_rx_m: f64,
    antenna_height_rx_m: f64,
    obstacle: Option<Obstacle>,
) -> f64 {
    let nu = match obstacle {
        None => DEEP_CLEAR_NU,
        Some(o) => {
            let (h_m, d1_km, d2_km) = obstacle_height_above_los_m(
                dist_km,
                elevation_tx_m,
                antenna_height_tx_m,
                elevation_rx_m,
                antenna_height_rx_m,
                o,
            );
            fresnel_parameter(h_m, d1_km, d2_km, f_mhz)
        }
    };
    diffraction_loss(nu)
}

/// Fresnel clearance fraction in `[0, 1]`. `1.0` means the first Fresnel
/// zone is fully clear; `0.0` means the obstacle fully obstructs it (or
/// more). Returns `1.0` when `obstacle` is `None`.
#[allow(clippy::too_many_arguments)]
pub fn fresnel_clearance(
    dist_km: f64,
    f_mhz: f64,
    elevation_tx_m: f64,
    antenna_height_tx_m: f64,
    elevation_rx_m: f64,
    antenna_height_rx_m: f64,
    obstacle: Option<Obstacle>,
) -> f64 {
    let Some(o) = obstacle else {
        return 1.0;
    };
    let (h_m, d1_km, d2_km) = obstacle_height_above_los_m(
        dist_km,
        elevation_tx_m,
        antenna_height_tx_m,
        elevation_rx_m,
        antenna_height_rx_m,
        o,
    );
    let lambda_m = 300.0 / f_mhz; // same simplified constant as fresnel_parameter
    let d1_m = d1_km * 1000.0;
    let d2_m = d2_km * 1000.0;
    let r1_m = (lambda_m * d1_m * d2_m / (d1_m + d2_m)).sqrt();
    (1.0 - h_m / r1_m).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn deep_clear_sentinel_has_zero_loss() {
        assert_eq!(diffraction_loss(DEEP_CLEAR_NU), 0.0);
    }

    #[test]
    fn grazing_incidence_is_about_6_02_db() {
        assert_relative_eq!(diffraction_loss(0.0), 6.02, epsilon = 0.01);
    }

    #[test]
    fn loss_is_monotone_non_decreasing_above_zero() {
        let samples: Vec<f64> = (0..=40).map(|i| i as f64 * 0.1).collect();
        for pair in samples.windows(2) {
            let (a, b) = (diffraction_loss(pair[0]), diffraction_loss(pair[1]));
            assert!(b >= a - 1e-9, "loss decreased from nu={} to nu={}", pair[0], pair[1]);
        }
    }

    #[test]
    fn boundary_at_2_4_is_continuous_within_1_5_db() {
        let delta = (diffraction_loss(2.401) - diffraction_loss(2.399)).abs();
        assert!(delta < 1.5, "boundary jump was {delta}");
    }

    #[test]
    fn no_obstacle_yields_zero_loss_and_full_clearance() {
        assert_eq!(
            knife_edge_diffraction(10.0, 145.0, 0.0, 2.0, 0.0, 2.0, None),
            0.0
        );
        assert_eq!(
            fresnel_clearance(10.0, 145.0, 0.0, 2.0, 0.0, 2.0, None),
            1.0
        );
    }

    #[test]
    fn obstacle_on_sight_line_has_zero_height() {
        let obstacle = Obstacle {
            peak_elev_m: 52.0,
            dist_from_tx_km: 5.0,
        };
        let loss = knife_edge_diffraction(10.0, 145.0, 50.0, 2.0, 50.0, 2.0, Some(obstacle));
        assert_relative_eq!(loss, 6.02, epsilon = 0.01);
    }

    #[test]
    fn tall_obstacle_reduces_clearance_and_adds_loss() {
        let obstacle = Obstacle {
            peak_elev_m: 300.0,
            dist_from_tx_km: 5.0,
        };
        let loss = knife_edge_diffraction(10.0, 68.0, 50.0, 2.0, 100.0, 2.0, Some(obstacle));
        let clearance = fresnel_clearance(10.0, 68.0, 50.0, 2.0, 100.0, 2.0, Some(obstacle));
        assert!(loss > 0.0);
        assert!(clearance < 1.0);
    }
}
