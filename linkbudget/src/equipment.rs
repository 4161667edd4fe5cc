use crate::error::LinkBudgetError;

/// Default receive sensitivity substituted when equipment is not supplied.
pub const DEFAULT_RX_SENSITIVITY_DBM: f64 = -110.0;

/// Default antenna gain substituted when equipment is not supplied.
pub const DEFAULT_ANTENNA_GAIN_DBI: f64 = 0.0;

/// Radio equipment parameters at one end of a link.
///
/// Invariant: `freq_min_mhz <= freq_max_mhz`; `max_power_w > 0`. These are
/// caller bugs, not domain sentinels, and are rejected by [`Self::validate`]
/// rather than silently corrected.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadioEquipment {
    pub freq_min_mhz: f64,
    pub freq_max_mhz: f64,
    pub max_power_w: f64,
    pub rx_sensitivity_dbm: f64,
    pub antenna_gain_dbi: f64,
}

impl RadioEquipment {
    /// Checks this equipment's hard invariants.
    pub fn validate(&self) -> Result<(), LinkBudgetError> {
        if self.freq_min_mhz > self.freq_max_mhz {
            return Err(LinkBudgetError::InvertedFrequencyRange {
                min: self.freq_min_mhz,
                max: self.freq_max_mhz,
            });
        }
        if !(self.max_power_w > 0.0) {
            return Err(LinkBudgetError::NonPositivePower(self.max_power_w));
        }
        for (field, value) in [
            ("freq_min_mhz", self.freq_min_mhz),
            ("freq_max_mhz", self.freq_max_mhz),
            ("max_power_w", self.max_power_w),
            ("rx_sensitivity_dbm", self.rx_sensitivity_dbm),
            ("antenna_gain_dbi", self.antenna_gain_dbi),
        ] {
            if !value.is_finite() {
                return Err(LinkBudgetError::NonFinite { field, value });
            }
        }
        Ok(())
    }
}

/// The subset of a radio link's parameters the propagation engine consumes.
/// Waveform, timing, and routing fields on the originating link record are
/// irrelevant here and are never represented in this type.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadioLinkInput {
    pub frequency_mhz: f64,
    pub bandwidth_khz: f64,
    pub tx_power_w: f64,
}

impl RadioLinkInput {
    pub fn validate(&self) -> Result<(), LinkBudgetError> {
        for (field, value) in [
            ("frequency_mhz", self.frequency_mhz),
            ("bandwidth_khz", self.bandwidth_khz),
            ("tx_power_w", self.tx_power_w),
        ] {
            if !value.is_finite() {
                return Err(LinkBudgetError::NonFinite { field, value });
            }
        }
        if !(self.tx_power_w > 0.0) {
            return Err(LinkBudgetError::NonPositivePower(self.tx_power_w));
        }
        Ok(())
    }
}
