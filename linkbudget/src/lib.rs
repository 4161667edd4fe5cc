//! # Link Budget
//!
//! `linkbudget` is a pure, stateless radio-link propagation engine. Given
//! two geographic endpoints, a link description, optional equipment, and
//! an optional terrain/weather profile, it automatically chooses among
//! several ITU-R propagation models (P.525/526/676/838/840/2108 and
//! Okumura-Hata) and composes their outputs into a full link budget and a
//! composite connection-quality score.
//!
//! The engine has no hidden state and no I/O: every call to
//! [`compute_link_budget`] is deterministic in its inputs and safe to
//! invoke concurrently from any number of threads.

mod budget;
mod equipment;
mod error;
mod model;
mod models;
mod quality;
mod selector;
mod terrain;

pub use crate::{
    budget::{compute_link_budget, LinkBudget},
    equipment::{RadioEquipment, RadioLinkInput},
    error::LinkBudgetError,
    model::PropagationModel,
    models::{
        clutter_loss, cloud_fog_attenuation, diffraction_loss, fresnel_clearance,
        fresnel_parameter, fspl_db, gas_absorption, itu_p1546_loss, knife_edge_diffraction,
        okumura_hata_loss, rain_attenuation, specific_gas_attenuation,
    },
    quality::{connection_quality, ConnectionQuality, QualityBand},
    selector::select_model,
    terrain::{ClimateZone, GroundType, Obstacle, TerrainProfile, TerrainProfileBuilder, TerrainType, Vegetation},
};

pub use geodesy::{self, bearing_deg, distance_km, GeoPoint};
