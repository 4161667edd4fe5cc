//! Okumura-Hata empirical urban/suburban path loss, 150-1500 MHz.

use super::fspl::fspl_db;
use crate::terrain::GroundType;

/// Okumura-Hata path loss in dB. Falls back to [`fspl_db`] when
/// `d_km < 0.1` or `f_mhz` is outside `[150, 1500]`. `h_te_m` (transmitter
/// effective height) is floored at 1 m; `h_re_m` (receiver effective
/// height) is floored at 0.5 m.
pub fn okumura_hata_loss(
    d_km: f64,
    f_mhz: f64,
    h_te_m: f64,
    h_re_m: f64,
    ground_type: GroundType,
) -> f64 {
    if d_km < 0.1 || !(150.0..=1500.0).contains(&f_mhz) {
        return fspl_db(d_km, f_mhz);
    }

    let h_te = h_te_m.max(1.0);
    let h_re = h_re_m.max(0.5);
    let log_f = f_mhz.log10();
    let log_hte = h_te.log10();

    let a_hre = (1.1 * log_f - 0.7) * h_re - (1.56 * log_f - 0.8);
    let l_b = 69.55 + 26.16 * log_f - 13.82 * log_hte - a_hre
        + (44.9 - 6.55 * log_hte) * d_km.log10();

    match ground_type {
        GroundType::Urban | GroundType::DenseUrban => l_b,
        GroundType::OpenLand | GroundType::Farmland => {
            l_b - 4.78 * log_f.powi(2) + 18.33 * log_f - 40.94
        }
        _ => l_b - 2.0 * (f_mhz / 28.0).log10().powi(2) - 5.4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_fspl_outside_domain() {
        let short = okumura_hata_loss(0.05, 400.0, 30.0, 1.5, GroundType::Urban);
        assert_eq!(short, fspl_db(0.05, 400.0));

        let hf = okumura_hata_loss(5.0, 50.0, 30.0, 1.5, GroundType::Urban);
        assert_eq!(hf, fspl_db(5.0, 50.0));
    }

    #[test]
    fn open_land_less_than_suburban_less_than_urban() {
        let d = 10.0;
        let f = 400.0;
        let open = okumura_hata_loss(d, f, 30.0, 1.5, GroundType::OpenLand);
        let suburban = okumura_hata_loss(d, f, 30.0, 1.5, GroundType::Suburban);
        let urban = okumura_hata_loss(d, f, 30.0, 1.5, GroundType::Urban);
        assert!(open < suburban, "open={open} suburban={suburban}");
        assert!(suburban < urban, "suburban={suburban} urban={urban}");
    }

    #[test]
    fn loss_increases_with_distance() {
        let near = okumura_hata_loss(1.0, 400.0, 30.0, 1.5, GroundType::Urban);
        let far = okumura_hata_loss(10.0, 400.0, 30.0, 1.5, GroundType::Urban);
        assert!(far > near);
    }
}
