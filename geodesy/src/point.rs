//! Great-circle geometry on a spherical Earth.
//!
//! Scalar endpoint-to-endpoint distance and bearing only; the propagation
//! engine never needs a sampled path between two points.

/// Mean Earth radius in kilometers, matching ITU-R practice.
pub const MEAN_EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic coordinate, WGS84-interpreted but computed on a sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Returns the great-circle distance between `a` and `b` in kilometers,
/// using the haversine formula on a sphere of radius [`MEAN_EARTH_RADIUS_KM`].
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = lat2 - lat1;
    let dlng = (b.lng - a.lng).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    let h = h.clamp(0.0, 1.0);

    2.0 * MEAN_EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Returns the initial bearing from `a` to `b` in degrees, normalized to
/// `[0, 360)`.
pub fn bearing_deg(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlng = (b.lng - a.lng).to_radians();

    let y = dlng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlng.cos();
    let theta = y.atan2(x).to_degrees();

    (theta + 360.0) % 360.0
}
