//! The budget assembler: combines every loss mechanism, antenna gains, and
//! transmit power into a full link budget and composite quality score.

use crate::{
    equipment::{RadioEquipment, RadioLinkInput, DEFAULT_ANTENNA_GAIN_DBI, DEFAULT_RX_SENSITIVITY_DBM},
    error::LinkBudgetError,
    model::PropagationModel,
    models::{
        clutter_loss, cloud_fog_attenuation, fresnel_clearance, fspl_db, gas_absorption,
        itu_p1546_loss, knife_edge_diffraction, okumura_hata_loss, rain_attenuation,
    },
    quality::{connection_quality, ConnectionQuality},
    selector::select_model,
    terrain::TerrainProfile,
};
use geodesy::{distance_km, watt_to_dbm, GeoPoint};

/// Complete, ITU-aware link budget for one link.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkBudget {
    pub tx_power_dbm: f64,
    pub tx_gain_dbi: f64,
    pub rx_gain_dbi: f64,
    pub base_loss_db: f64,
    pub diffraction_loss_db: f64,
    pub gas_absorption_db: f64,
    pub rain_attenuation_db: f64,
    pub cloud_fog_attenuation_db: f64,
    pub clutter_loss_db: f64,
    pub received_power_dbm: f64,
    pub rx_sensitivity_dbm: f64,
    pub link_margin_db: f64,
    pub distance_km: f64,
    pub fresnel_clearance_fraction: f64,
    pub feasible: bool,
    pub model: PropagationModel,
    pub connection_quality: ConnectionQuality,
}

fn check_finite(field: &'static str, value: f64) -> Result<(), LinkBudgetError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(LinkBudgetError::NonFinite { field, value })
    }
}

/// Computes a complete link budget between `from` and `to`.
///
/// Domain sentinels and clamping are applied silently; only contract
/// violations (inverted frequency ranges, non-finite inputs, a negative
/// rain rate) are rejected here, via [`LinkBudgetError`].
pub fn compute_link_budget(
    from: GeoPoint,
    to: GeoPoint,
    link: RadioLinkInput,
    equip_from: Option<RadioEquipment>,
    equip_to: Option<RadioEquipment>,
    terrain: Option<TerrainProfile>,
    force_model: Option<PropagationModel>,
) -> Result<LinkBudget, LinkBudgetError> {
    check_finite("from.lat", from.lat)?;
    check_finite("from.lng", from.lng)?;
    check_finite("to.lat", to.lat)?;
    check_finite("to.lng", to.lng)?;
    link.validate()?;
    if let Some(e) = equip_from {
        e.validate()?;
    }
    if let Some(e) = equip_to {
        e.validate()?;
    }

    let terrain = terrain.unwrap_or_else(|| TerrainProfile::builder().build());
    check_finite("terrain.antenna_height_tx_m", terrain.antenna_height_tx_m)?;
    check_finite("terrain.antenna_height_rx_m", terrain.antenna_height_rx_m)?;
    check_finite("terrain.elevation_tx_m", terrain.elevation_tx_m)?;
    check_finite("terrain.elevation_rx_m", terrain.elevation_rx_m)?;
    check_finite("terrain.rain_rate_mm_h", terrain.rain_rate_mm_h)?;
    check_finite("terrain.liquid_water_content_g_m3", terrain.liquid_water_content_g_m3)?;
    if let Some(o) = terrain.obstacle {
        check_finite("terrain.obstacle.peak_elev_m", o.peak_elev_m)?;
        check_finite("terrain.obstacle.dist_from_tx_km", o.dist_from_tx_km)?;
    }
    // `!(x >= 0.0)` rather than `x < 0.0` so a NaN rain rate (neither `<`
    // nor `>=` zero) is rejected instead of silently passing through; the
    // finiteness check above already catches it, this is the same guard
    // expressed the way the spec's negativity check alone should have been.
    if !(terrain.rain_rate_mm_h >= 0.0) {
        return Err(LinkBudgetError::NegativeRainRate(terrain.rain_rate_mm_h));
    }

    let d_km = distance_km(from, to);
    let f_mhz = link.frequency_mhz;

    let tx_gain_dbi = equip_from.map_or(DEFAULT_ANTENNA_GAIN_DBI, |e| e.antenna_gain_dbi);
    let rx_gain_dbi = equip_to.map_or(DEFAULT_ANTENNA_GAIN_DBI, |e| e.antenna_gain_dbi);
    let rx_sensitivity_dbm = equip_to.map_or(DEFAULT_RX_SENSITIVITY_DBM, |e| e.rx_sensitivity_dbm);
    let tx_power_dbm = watt_to_dbm(link.tx_power_w);

    let obstacle = terrain.effective_obstacle(d_km);

    if force_model == Some(PropagationModel::ItuP452) {
        log::warn!("ITU_P452 forced for a {d_km:.1} km link but has no implementation; substituting FSPL");
    }
    let model = select_model(f_mhz, d_km, terrain.ground_type, obstacle.is_some(), force_model);

    let base_loss_db = match model {
        PropagationModel::Fspl | PropagationModel::ItuP526 => fspl_db(d_km, f_mhz),
        PropagationModel::ItuP1546 => itu_p1546_loss(d_km, f_mhz, terrain.antenna_height_tx_m, terrain.r#type),
        PropagationModel::OkumuraHata => okumura_hata_loss(
            d_km,
            f_mhz,
            terrain.antenna_height_tx_m,
            terrain.antenna_height_rx_m,
            terrain.ground_type,
        ),
        PropagationModel::ItuP452 | PropagationModel::Auto => {
            unreachable!("select_model never returns {model:?}")
        }
    };

    let diffraction_loss_db = if model == PropagationModel::ItuP526 {
        knife_edge_diffraction(
            d_km,
            f_mhz,
            terrain.elevation_tx_m,
            terrain.antenna_height_tx_m,
            terrain.elevation_rx_m,
            terrain.antenna_height_rx_m,
            obstacle,
        )
    } else {
        0.0
    };

    let gas_absorption_db = gas_absorption(d_km, f_mhz);
    let rain_attenuation_db = rain_attenuation(d_km, f_mhz, terrain.rain_rate_mm_h);
    let cloud_fog_attenuation_db =
        cloud_fog_attenuation(d_km, f_mhz, terrain.liquid_water_content_g_m3);

    let clutter_loss_db = if model == PropagationModel::OkumuraHata {
        0.0
    } else {
        clutter_loss(terrain.ground_type, f_mhz)
    };

    let fresnel_clearance_fraction = fresnel_clearance(
        d_km,
        f_mhz,
        terrain.elevation_tx_m,
        terrain.antenna_height_tx_m,
        terrain.elevation_rx_m,
        terrain.antenna_height_rx_m,
        obstacle,
    );

    let total_loss_db = base_loss_db
        + diffraction_loss_db
        + gas_absorption_db
        + rain_attenuation_db
        + cloud_fog_attenuation_db
        + clutter_loss_db;

    let received_power_dbm = tx_power_dbm + tx_gain_dbi - total_loss_db + rx_gain_dbi;
    let link_margin_db = received_power_dbm - rx_sensitivity_dbm;
    let feasible = link_margin_db > 0.0;

    let connection_quality = connection_quality(
        link_margin_db,
        fresnel_clearance_fraction,
        rain_attenuation_db,
        cloud_fog_attenuation_db,
        tx_gain_dbi,
        rx_gain_dbi,
        received_power_dbm,
        link.bandwidth_khz,
    );

    log::debug!(
        "link budget; model: {}, distance_km: {d_km:.3}, margin_db: {link_margin_db:.2}, feasible: {feasible}",
        model.as_str(),
    );

    Ok(LinkBudget {
        tx_power_dbm,
        tx_gain_dbi,
        rx_gain_dbi,
        base_loss_db,
        diffraction_loss_db,
        gas_absorption_db,
        rain_attenuation_db,
        cloud_fog_attenuation_db,
        clutter_loss_db,
        received_power_dbm,
        rx_sensitivity_dbm,
        link_margin_db,
        distance_km: d_km,
        fresnel_clearance_fraction,
        feasible,
        model,
        connection_quality,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::{GroundType, TerrainType};

    fn link(freq_mhz: f64, tx_power_w: f64) -> RadioLinkInput {
        RadioLinkInput {
            frequency_mhz: freq_mhz,
            bandwidth_khz: 25.0,
            tx_power_w,
        }
    }

    #[test]
    fn determinism() {
        let a = GeoPoint::new(59.33, 18.07);
        let b = GeoPoint::new(59.36, 18.04);
        let l = link(45.5, 50.0);
        let budget1 = compute_link_budget(a, b, l, None, None, None, None).unwrap();
        let budget2 = compute_link_budget(a, b, l, None, None, None, None).unwrap();
        assert_eq!(budget1, budget2);
    }

    #[test]
    fn power_doubling_margin_follows_10log_rule() {
        let a = GeoPoint::new(59.33, 18.07);
        let b = GeoPoint::new(59.36, 18.04);
        let terrain = TerrainProfile::builder()
            .r#type(TerrainType::Flat)
            .ground_type(GroundType::Farmland)
            .build();

        let low = compute_link_budget(a, b, link(45.5, 1.0), None, None, Some(terrain), None).unwrap();
        let high =
            compute_link_budget(a, b, link(45.5, 100.0), None, None, Some(terrain), None).unwrap();

        let delta = high.link_margin_db - low.link_margin_db;
        assert!((delta - 20.0).abs() < 0.1, "delta was {delta}");
    }

    #[test]
    fn inverted_frequency_range_is_rejected() {
        let a = GeoPoint::new(59.33, 18.07);
        let b = GeoPoint::new(59.36, 18.04);
        let equip = RadioEquipment {
            freq_min_mhz: 200.0,
            freq_max_mhz: 100.0,
            max_power_w: 10.0,
            rx_sensitivity_dbm: -110.0,
            antenna_gain_dbi: 0.0,
        };
        let result = compute_link_budget(a, b, link(45.5, 50.0), Some(equip), None, None, None);
        assert!(result.is_err());
    }

    #[test]
    fn non_finite_input_is_rejected() {
        let a = GeoPoint::new(f64::NAN, 18.07);
        let b = GeoPoint::new(59.36, 18.04);
        let result = compute_link_budget(a, b, link(45.5, 50.0), None, None, None, None);
        assert!(result.is_err());
    }

    #[test]
    fn negative_rain_rate_is_rejected() {
        let a = GeoPoint::new(59.33, 18.07);
        let b = GeoPoint::new(59.36, 18.04);
        let terrain = TerrainProfile::builder().rain_rate_mm_h(-1.0).build();
        let result = compute_link_budget(a, b, link(45.5, 50.0), None, None, Some(terrain), None);
        assert!(result.is_err());
    }

    #[test]
    fn nan_rain_rate_is_rejected() {
        let a = GeoPoint::new(59.33, 18.07);
        let b = GeoPoint::new(59.36, 18.04);
        let terrain = TerrainProfile::builder().rain_rate_mm_h(f64::NAN).build();
        let result = compute_link_budget(a, b, link(45.5, 50.0), None, None, Some(terrain), None);
        assert!(result.is_err());
    }

    #[test]
    fn non_finite_terrain_geometry_is_rejected() {
        let a = GeoPoint::new(59.33, 18.07);
        let b = GeoPoint::new(59.36, 18.04);
        let terrain = TerrainProfile::builder().elevation_tx_m(f64::NAN).build();
        let result = compute_link_budget(a, b, link(45.5, 50.0), None, None, Some(terrain), None);
        assert!(result.is_err());
    }

    #[test]
    fn non_finite_obstacle_is_rejected() {
        let a = GeoPoint::new(59.33, 18.07);
        let b = GeoPoint::new(59.36, 18.04);
        let terrain = TerrainProfile::builder().obstacle(f64::NAN, 5.0).build();
        let result = compute_link_budget(a, b, link(45.5, 50.0), None, None, Some(terrain), None);
        assert!(result.is_err());
    }

    #[test]
    fn non_positive_tx_power_is_rejected() {
        let a = GeoPoint::new(59.33, 18.07);
        let b = GeoPoint::new(59.36, 18.04);
        assert!(compute_link_budget(a, b, link(45.5, 0.0), None, None, None, None).is_err());
        assert!(compute_link_budget(a, b, link(45.5, -5.0), None, None, None, None).is_err());
    }

    #[test]
    fn feasible_matches_positive_margin() {
        let a = GeoPoint::new(59.33, 18.07);
        let b = GeoPoint::new(59.36, 18.04);
        let budget = compute_link_budget(a, b, link(45.5, 50.0), None, None, None, None).unwrap();
        assert_eq!(budget.feasible, budget.link_margin_db > 0.0);
    }
}
