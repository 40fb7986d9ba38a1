//! Geographic primitives: validated points and great-circle distance.
//!
//! This module provides:
//!
//! - **Coordinates**: raw latitude/longitude pair as delivered by a data source
//! - **GeoPoint**: validated point (latitude in [-90, 90], longitude in [-180, 180])
//! - **Distance calculations**: Haversine distance on a mean Earth radius of 6371 km

use serde::{Deserialize, Serialize};

use crate::error::GeoError;

/// Mean Earth radius used by the haversine formula (km).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Latitude/longitude pair exactly as received, possibly malformed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        GeoPoint::new(self.lat, self.lng).is_ok()
    }
}

/// A validated point on the globe, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Result<Self, GeoError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(GeoError::NonFinite { lat, lng });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(GeoError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(GeoError::LongitudeOutOfRange(lng));
        }
        Ok(Self { lat, lng })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Great-circle distance to `other` in kilometers.
    pub fn distance_km(&self, other: GeoPoint) -> f64 {
        haversine_km(*self, other)
    }
}

impl TryFrom<Coordinates> for GeoPoint {
    type Error = GeoError;

    fn try_from(value: Coordinates) -> Result<Self, Self::Error> {
        GeoPoint::new(value.lat, value.lng)
    }
}

impl From<GeoPoint> for Coordinates {
    fn from(value: GeoPoint) -> Self {
        Coordinates::new(value.lat, value.lng)
    }
}

impl<'de> Deserialize<'de> for GeoPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = Coordinates::deserialize(deserializer)?;
        GeoPoint::try_from(raw).map_err(serde::de::Error::custom)
    }
}

/// Haversine distance between two points (km).
///
/// Identical points yield exactly `0.0`, the result does not depend on
/// argument order, and it is always finite (at most half the circumference).
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let (lat1, lon1) = (a.lat.to_radians(), a.lng.to_radians());
    let (lat2, lon2) = (b.lat.to_radians(), b.lng.to_radians());
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let sin_dlat = (dlat * 0.5).sin();
    let sin_dlon = (dlon * 0.5).sin();
    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
    // Rounding can push `h` just past 1.0 for near-antipodal pairs.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}
