//! # Geodesy
//!
//! Spherical-earth geodesy and the handful of physical-unit conversions
//! and numeric helpers shared by every propagation model in `linkbudget`.
//!
//! A small, dependency-light math layer that the propagation engine
//! builds on.

mod erf;
mod point;
mod units;

pub use crate::{
    erf::erf,
    point::{bearing_deg, distance_km, GeoPoint, MEAN_EARTH_RADIUS_KM},
    units::{dbm_to_watt, freq_to_wavelen_m, thermal_noise_dbm, watt_to_dbm, SPEED_OF_LIGHT_M_S},
};
