//! Physical unit conversions shared across the propagation engine.

/// Speed of light in m/s.
pub const SPEED_OF_LIGHT_M_S: f64 = 299_792_458.0;

/// Receiver noise figure assumed throughout the engine.
const RECEIVER_NOISE_FIGURE_DB: f64 = 6.0;

/// Converts a transmit power in watts to dBm. Defined for `w > 0`.
pub fn watt_to_dbm(w: f64) -> f64 {
    10.0 * (w * 1000.0).log10()
}

/// Inverse of [`watt_to_dbm`].
pub fn dbm_to_watt(dbm: f64) -> f64 {
    10f64.powf(dbm / 10.0) / 1000.0
}

/// Returns the EM wavelength in meters for a frequency given in MHz.
pub fn freq_to_wavelen_m(freq_mhz: f64) -> f64 {
    SPEED_OF_LIGHT_M_S / (freq_mhz * 1.0e6)
}

/// Thermal noise floor in dBm for a channel of the given bandwidth (kHz),
/// at a fixed receiver noise figure of 6 dB. `bw_khz` is clamped to at
/// least 1 kHz before the log.
pub fn thermal_noise_dbm(bw_khz: f64) -> f64 {
    let bw_khz = bw_khz.max(1.0);
    -174.0 + 10.0 * (bw_khz * 1000.0).log10() + RECEIVER_NOISE_FIGURE_DB
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn one_watt_is_30_dbm() {
        assert_relative_eq!(watt_to_dbm(1.0), 30.0, epsilon = 1e-9);
    }

    #[test]
    fn watt_dbm_roundtrip() {
        let w = 5.0;
        assert_relative_eq!(dbm_to_watt(watt_to_dbm(w)), w, epsilon = 1e-9);
    }

    #[test]
    fn wavelength_at_300_mhz_is_one_meter() {
        assert_relative_eq!(freq_to_wavelen_m(300.0), 0.999_308_19, epsilon = 1e-6);
    }

    #[test]
    fn bandwidth_is_clamped_to_1khz() {
        assert_relative_eq!(thermal_noise_dbm(0.0), thermal_noise_dbm(1.0), epsilon = 1e-12);
    }

    #[test]
    fn noise_floor_matches_standard_25khz_channel() {
        // -174 + 10*log10(25_000*1000) + 6 ~= -123.98 dBm
        let n = thermal_noise_dbm(25.0);
        assert!((-124.5..-123.5).contains(&n), "noise was {n}");
    }
}
