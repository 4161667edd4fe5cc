//! End-to-end link-budget scenarios covering each automatic model choice.

use linkbudget::{compute_link_budget, GeoPoint, GroundType, PropagationModel, RadioLinkInput, TerrainProfile, TerrainType};

fn link(frequency_mhz: f64, bandwidth_khz: f64, tx_power_w: f64) -> RadioLinkInput {
    RadioLinkInput {
        frequency_mhz,
        bandwidth_khz,
        tx_power_w,
    }
}

#[test]
fn vhf_open_field_uses_p1546_and_is_feasible() {
    let from = GeoPoint::new(59.33, 18.07);
    let to = GeoPoint::new(59.36, 18.04);
    let terrain = TerrainProfile::builder()
        .r#type(TerrainType::Flat)
        .ground_type(GroundType::Farmland)
        .antenna_height_tx_m(2.0)
        .antenna_height_rx_m(2.0)
        .build();

    let budget = compute_link_budget(from, to, link(45.5, 25.0, 50.0), None, None, Some(terrain), None)
        .expect("valid inputs");

    assert!(budget.feasible);
    assert_eq!(budget.model, PropagationModel::ItuP1546);
    // Haversine on these two coordinates comes out to ~3.74 km, not the
    // spec scenario's "~3.5" figure; widened to match the engine's own
    // distance_km rather than the scenario's approximate literal.
    assert!(
        (3.6..=3.9).contains(&budget.distance_km),
        "distance_km was {}",
        budget.distance_km
    );
}

#[test]
fn uhf_urban_link_over_1km_uses_okumura_hata_with_no_extra_clutter() {
    let from = GeoPoint::new(59.33, 18.07);
    let to = GeoPoint::new(59.34, 18.09);
    let terrain = TerrainProfile::builder()
        .ground_type(GroundType::Urban)
        .antenna_height_tx_m(30.0)
        .antenna_height_rx_m(1.5)
        .build();

    let budget = compute_link_budget(from, to, link(400.0, 25.0, 5.0), None, None, Some(terrain), None)
        .expect("valid inputs");

    assert_eq!(budget.model, PropagationModel::OkumuraHata);
    assert_eq!(budget.clutter_loss_db, 0.0);
}

#[test]
fn hf_long_haul_falls_back_to_fspl() {
    let from = GeoPoint::new(59.33, 18.07);
    let to = GeoPoint::new(58.90, 17.80);
    let terrain = TerrainProfile::builder()
        .ground_type(GroundType::OpenLand)
        .build();

    let budget = compute_link_budget(from, to, link(8.5, 25.0, 200.0), None, None, Some(terrain), None)
        .expect("valid inputs");

    assert_eq!(budget.model, PropagationModel::Fspl);
    assert!(budget.distance_km > 30.0, "distance_km was {}", budget.distance_km);
    assert!(budget.gas_absorption_db >= 0.0);
}

#[test]
fn shf_heavy_rain_degrades_quality() {
    let from = GeoPoint::new(59.33, 18.07);
    let to = GeoPoint::new(59.34, 18.10);
    let terrain = TerrainProfile::builder()
        .ground_type(GroundType::OpenLand)
        .rain_rate_mm_h(100.0)
        .build();

    let budget = compute_link_budget(from, to, link(15_000.0, 500.0, 1.0), None, None, Some(terrain), None)
        .expect("valid inputs");

    assert!(budget.rain_attenuation_db > 1.0, "rain_attenuation_db was {}", budget.rain_attenuation_db);
    assert!(
        budget.connection_quality.score < 60,
        "score was {}",
        budget.connection_quality.score
    );
}

#[test]
fn mountain_ridge_obstacle_uses_diffraction_model() {
    let from = GeoPoint::new(59.33, 17.90);
    let to = GeoPoint::new(59.33, 18.07);
    let terrain = TerrainProfile::builder()
        .r#type(TerrainType::Mountainous)
        .elevation_tx_m(50.0)
        .elevation_rx_m(100.0)
        .obstacle(300.0, 5.0)
        .build();

    let budget = compute_link_budget(from, to, link(68.0, 25.0, 100.0), None, None, Some(terrain), None)
        .expect("valid inputs");

    assert_eq!(budget.model, PropagationModel::ItuP526);
    assert!(budget.diffraction_loss_db > 0.0);
}

#[test]
fn doubling_power_from_1w_to_100w_adds_20db_of_margin() {
    let from = GeoPoint::new(59.33, 18.07);
    let to = GeoPoint::new(59.36, 18.04);
    let terrain = TerrainProfile::builder()
        .ground_type(GroundType::Farmland)
        .build();

    let low = compute_link_budget(from, to, link(45.5, 25.0, 1.0), None, None, Some(terrain), None).unwrap();
    let high = compute_link_budget(from, to, link(45.5, 25.0, 100.0), None, None, Some(terrain), None).unwrap();

    let delta = high.link_margin_db - low.link_margin_db;
    assert!((delta - 20.0).abs() < 0.1, "delta was {delta}");
}
