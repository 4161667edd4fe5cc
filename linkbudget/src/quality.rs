//! Composite connection-quality score.

use geodesy::{erf, thermal_noise_dbm};

/// Standard deviation (dB) of the Gaussian fade-margin model used for
/// availability.
const AVAILABILITY_SIGMA_DB: f64 = 8.0;

/// A five-band label and its associated display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QualityBand {
    Excellent,
    Good,
    Acceptable,
    Weak,
    Insufficient,
}

impl QualityBand {
    fn for_score(score: i32) -> Self {
        if score >= 80 {
            QualityBand::Excellent
        } else if score >= 60 {
            QualityBand::Good
        } else if score >= 40 {
            QualityBand::Acceptable
        } else if score >= 20 {
            QualityBand::Weak
        } else {
            QualityBand::Insufficient
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QualityBand::Excellent => "Excellent",
            QualityBand::Good => "Good",
            QualityBand::Acceptable => "Acceptable",
            QualityBand::Weak => "Weak",
            QualityBand::Insufficient => "Insufficient",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            QualityBand::Excellent => "#2e7d32",
            QualityBand::Good => "#8bc34a",
            QualityBand::Acceptable => "#ffeb3b",
            QualityBand::Weak => "#ff9800",
            QualityBand::Insufficient => "#f44336",
        }
    }
}

/// Composite connection quality for a link.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConnectionQuality {
    pub score: i32,
    pub label: &'static str,
    pub color: &'static str,
    pub availability: f64,
    pub snr_db: f64,
}

/// Computes the composite connection quality for a link.
///
/// `rain_db` and `cloud_fog_db` feed the weather-reliability sub-score;
/// `tx_gain_dbi`/`rx_gain_dbi` feed the gain sub-score. `received_power_dbm`
/// and `bandwidth_khz` determine SNR against the thermal noise floor.
#[allow(clippy::too_many_arguments)]
pub fn connection_quality(
    link_margin_db: f64,
    fresnel_clearance_fraction: f64,
    rain_db: f64,
    cloud_fog_db: f64,
    tx_gain_dbi: f64,
    rx_gain_dbi: f64,
    received_power_dbm: f64,
    bandwidth_khz: f64,
) -> ConnectionQuality {
    let margin_score = (link_margin_db / 30.0).clamp(0.0, 1.0) * 50.0;
    let fresnel_score = fresnel_clearance_fraction.clamp(0.0, 1.0) * 20.0;

    let w = rain_db + cloud_fog_db;
    let reliability = (1.0 - w / (w + 10.0).max(10.0)).max(0.0);
    let weather_score = reliability * 20.0;

    let gain_score = ((tx_gain_dbi + rx_gain_dbi) / 20.0).clamp(0.0, 1.0) * 10.0;

    let raw_score = margin_score + fresnel_score + weather_score + gain_score;
    let mut score = raw_score.round().clamp(0.0, 100.0);

    if link_margin_db < 0.0 {
        let cap = 19.0 + 2.0 * link_margin_db.round();
        score = cap.clamp(0.0, score);
    }
    let score = score as i32;

    let availability = 0.5 * (1.0 + erf(link_margin_db / (AVAILABILITY_SIGMA_DB * 2f64.sqrt())));
    let snr_db = received_power_dbm - thermal_noise_dbm(bandwidth_khz);

    let band = QualityBand::for_score(score);

    ConnectionQuality {
        score,
        label: band.label(),
        color: band.color(),
        availability,
        snr_db,
    }
}
