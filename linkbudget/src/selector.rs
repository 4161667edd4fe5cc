//! Automatic base-loss model selection.

use crate::{model::PropagationModel, terrain::GroundType};

/// Chooses which base-loss model applies to a link.
///
/// `force_model` overrides automatic selection, except that
/// `Some(PropagationModel::Auto)` (and `None`) both mean "select
/// automatically". `Some(PropagationModel::ItuP452)` is accepted but has
/// no implementation; it resolves to [`PropagationModel::Fspl`] here, and
/// the caller ([`crate::compute_link_budget`]) is responsible for logging
/// that substitution.
///
/// Automatic priority order:
/// 1. An obstacle is present and `f_mhz >= 30.0` → [`PropagationModel::ItuP526`].
/// 2. `f_mhz < 30.0` → [`PropagationModel::Fspl`].
/// 3. `f_mhz <= 1500.0` and `ground_type` is urban-like and `d_km >= 1.0` →
///    [`PropagationModel::OkumuraHata`].
/// 4. `f_mhz <= 3000.0` → [`PropagationModel::ItuP1546`].
/// 5. Otherwise → [`PropagationModel::Fspl`].
pub fn select_model(
    f_mhz: f64,
    d_km: f64,
    ground_type: GroundType,
    obstacle_present: bool,
    force_model: Option<PropagationModel>,
) -> PropagationModel {
    match force_model {
        None | Some(PropagationModel::Auto) => {
            automatic_select(f_mhz, d_km, ground_type, obstacle_present)
        }
        Some(PropagationModel::ItuP452) => PropagationModel::Fspl,
        Some(forced) => forced,
    }
}

fn automatic_select(
    f_mhz: f64,
    d_km: f64,
    ground_type: GroundType,
    obstacle_present: bool,
) -> PropagationModel {
    if obstacle_present && f_mhz >= 30.0 {
        return PropagationModel::ItuP526;
    }
    if f_mhz < 30.0 {
        return PropagationModel::Fspl;
    }
    let urban_like = matches!(
        ground_type,
        GroundType::Suburban | GroundType::Urban | GroundType::DenseUrban
    );
    if f_mhz <= 1500.0 && urban_like && d_km >= 1.0 {
        return PropagationModel::OkumuraHata;
    }
    if f_mhz <= 3000.0 {
        return PropagationModel::ItuP1546;
    }
    PropagationModel::Fspl
}
