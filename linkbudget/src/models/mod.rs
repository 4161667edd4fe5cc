//! Independent, closed-form per-mechanism loss functions.
//!
//! Each model here is self-contained and independently testable; the
//! budget assembler (see [`crate::budget`]) is the only place that
//! combines them, and it does so with a single additive step.

mod clutter;
mod cloud_fog;
mod diffraction;
mod fspl;
mod gas;
mod okumura_hata;
mod p1546;
mod rain;

pub use clutter::clutter_loss;
pub use cloud_fog::cloud_fog_attenuation;
pub use diffraction::{
    diffraction_loss, fresnel_clearance, fresnel_parameter, knife_edge_diffraction, DEEP_CLEAR_NU,
};
pub use fspl::fspl_db;
pub use gas::{gas_absorption, specific_gas_attenuation};
pub use okumura_hata::okumura_hata_loss;
pub use p1546::itu_p1546_loss;
pub use rain::rain_attenuation;
