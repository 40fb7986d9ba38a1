use crate::error::MatchError;
use crate::geo::{haversine_km, GeoPoint};
use crate::offer::RideOffer;

use super::types::{MatchQuery, ScoredOffer};

/// Ranks ride offers by how close they run to the rider's route.
///
/// # Algorithm Behavior
///
/// 1. Rejects the query if either radius is not a positive finite number
/// 2. Skips offers whose pickup or drop-off coordinates are malformed
/// 3. Computes haversine distance between the query pickup and the offer pickup,
///    and between the query drop-off and the offer drop-off
/// 4. Drops offers where either distance exceeds its radius (at the radius passes)
/// 5. Scores survivors by the sum of both distances and sorts ascending, keeping
///    input order for equal scores
///
/// # Performance
///
/// O(n log n) time and O(n) extra space for n offers. The matcher holds no state,
/// so one value can be shared freely across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProximityMatcher;

impl ProximityMatcher {
    /// Rank `offers` against `query`.
    ///
    /// Returns an empty list when nothing is within range; only an invalid
    /// radius fails the call.
    pub fn rank(
        &self,
        query: &MatchQuery,
        offers: &[RideOffer],
    ) -> Result<Vec<ScoredOffer>, MatchError> {
        query.validate()?;

        let mut scored: Vec<ScoredOffer> = offers
            .iter()
            .filter_map(|offer| self.score(query, offer))
            .collect();

        // `sort_by` is stable: equal scores stay in input order.
        scored.sort_by(|a, b| a.score.total_cmp(&b.score));
        Ok(scored)
    }

    /// Score a single offer, or `None` if it is malformed or out of range.
    ///
    /// Does not validate the query radii; [`ProximityMatcher::rank`] does.
    pub fn score(&self, query: &MatchQuery, offer: &RideOffer) -> Option<ScoredOffer> {
        let offer_pickup = GeoPoint::try_from(offer.pickup).ok()?;
        let offer_dropoff = GeoPoint::try_from(offer.dropoff).ok()?;

        let pickup_distance_km = haversine_km(query.pickup, offer_pickup);
        if !within_radius(pickup_distance_km, query.pickup_radius_km) {
            return None;
        }
        let dropoff_distance_km = haversine_km(query.dropoff, offer_dropoff);
        if !within_radius(dropoff_distance_km, query.dropoff_radius_km) {
            return None;
        }

        Some(ScoredOffer {
            offer: offer.clone(),
            pickup_distance_km,
            dropoff_distance_km,
            score: pickup_distance_km + dropoff_distance_km,
        })
    }
}

/// At the radius passes; a NaN distance never does.
fn within_radius(distance_km: f64, radius_km: f64) -> bool {
    distance_km <= radius_km
}
