//! Terrain and weather context for a link.
//!
//! `TerrainProfile` is always constructed through [`TerrainProfile::builder`]:
//! every setter is optional, and `build()` fills in the documented defaults.
//! That keeps "caller didn't specify a value" distinguishable from "caller
//! specified the default value" right up until `build()` is called, which
//! matters because `rain_rate_mm_h` defaults to zero, the same value a
//! caller could legitimately specify.

/// Broad terrain shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainType {
    #[default]
    Flat,
    Hilly,
    Mountainous,
    Valley,
}

/// Ground cover/clutter category near the link endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GroundType {
    Sea,
    Coast,
    #[default]
    OpenLand,
    Farmland,
    Forest,
    Suburban,
    Urban,
    DenseUrban,
}

/// Climate zone. Reserved: no current model consults this field, but it is
/// preserved through the API for future P.1546/P.840 temperature
/// corrections (see spec Open Questions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClimateZone {
    Arctic,
    #[default]
    Temperate,
    Subtropical,
    Tropical,
    Arid,
}

/// Vegetation category. Reserved, same status as [`ClimateZone`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Vegetation {
    #[default]
    None,
    Crops,
    SparseTrees,
    Forest,
    Jungle,
}

/// A single dominant obstacle along the path, for knife-edge diffraction.
///
/// Bundling the two obstacle fields into one `Option` makes "one present,
/// one absent" unrepresentable at the type level, instead of a runtime rule.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    pub peak_elev_m: f64,
    pub dist_from_tx_km: f64,
}

/// Default antenna height above local ground, meters.
pub const DEFAULT_ANTENNA_HEIGHT_M: f64 = 2.0;

/// Terrain, clutter, and weather context for a link.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainProfile {
    pub r#type: TerrainType,
    pub ground_type: GroundType,
    pub climate_zone: ClimateZone,
    pub vegetation: Vegetation,
    pub antenna_height_tx_m: f64,
    pub antenna_height_rx_m: f64,
    pub elevation_tx_m: f64,
    pub elevation_rx_m: f64,
    pub obstacle: Option<Obstacle>,
    pub rain_rate_mm_h: f64,
    pub liquid_water_content_g_m3: f64,
}

impl TerrainProfile {
    pub fn builder() -> TerrainProfileBuilder {
        TerrainProfileBuilder::default()
    }

    /// Returns this profile's obstacle only if it is geometrically valid
    /// for a path of length `dist_km`: a distance outside `(0, dist_km)`
    /// means "treat the obstacle as absent".
    pub fn effective_obstacle(&self, dist_km: f64) -> Option<Obstacle> {
        self.obstacle
            .filter(|o| o.dist_from_tx_km > 0.0 && o.dist_from_tx_km < dist_km)
    }
}

/// Builder for [`TerrainProfile`]. Every field is optional; [`Self::build`]
/// substitutes the documented default for anything left unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerrainProfileBuilder {
    r#type: Option<TerrainType>,
    ground_type: Option<GroundType>,
    climate_zone: Option<ClimateZone>,
    vegetation: Option<Vegetation>,
    antenna_height_tx_m: Option<f64>,
    antenna_height_rx_m: Option<f64>,
    elevation_tx_m: Option<f64>,
    elevation_rx_m: Option<f64>,
    obstacle: Option<Obstacle>,
    rain_rate_mm_h: Option<f64>,
    liquid_water_content_g_m3: Option<f64>,
}

impl TerrainProfileBuilder {
    #[must_use]
    pub fn r#type(mut self, t: TerrainType) -> Self {
        self.r#type = Some(t);
        self
    }

    #[must_use]
    pub fn ground_type(mut self, g: GroundType) -> Self {
        self.ground_type = Some(g);
        self
    }

    #[must_use]
    pub fn climate_zone(mut self, c: ClimateZone) -> Self {
        self.climate_zone = Some(c);
        self
    }

    #[must_use]
    pub fn vegetation(mut self, v: Vegetation) -> Self {
        self.vegetation = Some(v);
        self
    }

    #[must_use]
    pub fn antenna_height_tx_m(mut self, m: f64) -> Self {
        self.antenna_height_tx_m = Some(m);
        self
    }

    #[must_use]
    pub fn antenna_height_rx_m(mut self, m: f64) -> Self {
        self.antenna_height_rx_m = Some(m);
        self
    }

    #[must_use]
    pub fn elevation_tx_m(mut self, m: f64) -> Self {
        self.elevation_tx_m = Some(m);
        self
    }

    #[must_use]
    pub fn elevation_rx_m(mut self, m: f64) -> Self {
        self.elevation_rx_m = Some(m);
        self
    }

    #[must_use]
    pub fn obstacle(mut self, peak_elev_m: f64, dist_from_tx_km: f64) -> Self {
        self.obstacle = Some(Obstacle {
            peak_elev_m,
            dist_from_tx_km,
        });
        self
    }

    #[must_use]
    pub fn rain_rate_mm_h(mut self, mm_h: f64) -> Self {
        self.rain_rate_mm_h = Some(mm_h);
        self
    }

    #[must_use]
    pub fn liquid_water_content_g_m3(mut self, g_m3: f64) -> Self {
        self.liquid_water_content_g_m3 = Some(g_m3);
        self
    }

    pub fn build(self) -> TerrainProfile {
        TerrainProfile {
            r#type: self.r#type.unwrap_or_default(),
            ground_type: self.ground_type.unwrap_or_default(),
            climate_zone: self.climate_zone.unwrap_or_default(),
            vegetation: self.vegetation.unwrap_or_default(),
            antenna_height_tx_m: self.antenna_height_tx_m.unwrap_or(DEFAULT_ANTENNA_HEIGHT_M),
            antenna_height_rx_m: self.antenna_height_rx_m.unwrap_or(DEFAULT_ANTENNA_HEIGHT_M),
            elevation_tx_m: self.elevation_tx_m.unwrap_or(0.0),
            elevation_rx_m: self.elevation_rx_m.unwrap_or(0.0),
            obstacle: self.obstacle,
            rain_rate_mm_h: self.rain_rate_mm_h.unwrap_or(0.0),
            liquid_water_content_g_m3: self.liquid_water_content_g_m3.unwrap_or(0.0),
        }
    }
}
