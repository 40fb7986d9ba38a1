use serde::Serialize;

use crate::error::MatchError;
use crate::geo::GeoPoint;
use crate::offer::RideOffer;

/// The rider's desired route plus the two acceptance radii.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchQuery {
    pub pickup: GeoPoint,
    pub dropoff: GeoPoint,
    pub pickup_radius_km: f64,
    pub dropoff_radius_km: f64,
}

impl MatchQuery {
    pub fn new(
        pickup: GeoPoint,
        dropoff: GeoPoint,
        pickup_radius_km: f64,
        dropoff_radius_km: f64,
    ) -> Self {
        Self {
            pickup,
            dropoff,
            pickup_radius_km,
            dropoff_radius_km,
        }
    }

    /// Both radii must be positive finite numbers.
    pub fn validate(&self) -> Result<(), MatchError> {
        check_radius("pickup_radius_km", self.pickup_radius_km)?;
        check_radius("dropoff_radius_km", self.dropoff_radius_km)
    }
}

fn check_radius(name: &str, value: f64) -> Result<(), MatchError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MatchError::InvalidArgument(format!(
            "{name} must be a positive finite number, got {value}"
        )))
    }
}

/// An offer that passed both radius checks, with its distances and score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredOffer {
    pub offer: RideOffer,
    pub pickup_distance_km: f64,
    pub dropoff_distance_km: f64,
    /// `pickup_distance_km + dropoff_distance_km`; lower ranks first.
    pub score: f64,
}
