//! Test helpers for common test setup and utilities.
//!
//! Shared by unit tests, integration tests and benchmarks.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geo::{Coordinates, GeoPoint};
use crate::matching::MatchQuery;
use crate::offer::{OfferDetails, RideOffer};

/// Central Nairobi, used as the default rider pickup in tests.
pub const TEST_PICKUP: (f64, f64) = (-1.2864, 36.8172);
/// Jomo Kenyatta International Airport, used as the default rider drop-off.
pub const TEST_DROPOFF: (f64, f64) = (-1.3192, 36.9278);

/// Build a valid `GeoPoint`.
///
/// # Panics
///
/// Panics if the coordinates are out of range.
pub fn point(lat: f64, lng: f64) -> GeoPoint {
    GeoPoint::new(lat, lng).expect("test point should be valid")
}

pub fn test_pickup() -> GeoPoint {
    point(TEST_PICKUP.0, TEST_PICKUP.1)
}

pub fn test_dropoff() -> GeoPoint {
    point(TEST_DROPOFF.0, TEST_DROPOFF.1)
}

/// Fixed "now" for reproducible searches.
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 20, 6, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// A query around the default test route with the given radii.
pub fn test_query(pickup_radius_km: f64, dropoff_radius_km: f64) -> MatchQuery {
    MatchQuery::new(test_pickup(), test_dropoff(), pickup_radius_km, dropoff_radius_km)
}

/// Active offer departing one hour after [`test_now`] with two free seats.
pub fn offer(id: &str, pickup: (f64, f64), dropoff: (f64, f64)) -> RideOffer {
    RideOffer::new(
        id,
        Coordinates::new(pickup.0, pickup.1),
        Coordinates::new(dropoff.0, dropoff.1),
        test_now() + Duration::hours(1),
        2,
    )
    .with_details(OfferDetails {
        driver_name: format!("Driver {id}"),
        price: 500.0,
        currency: "KES".to_string(),
        total_seats: 4,
        ..OfferDetails::default()
    })
}

/// Offer departing `minutes` after [`test_now`] on the default test route.
pub fn offer_departing_in(id: &str, minutes: i64) -> RideOffer {
    let mut offer = offer(id, TEST_PICKUP, TEST_DROPOFF);
    offer.departure = test_now() + Duration::minutes(minutes);
    offer
}

/// Seeded random offers scattered up to `spread_deg` degrees around the test route.
pub fn random_offers(count: usize, spread_deg: f64, seed: u64) -> Vec<RideOffer> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let mut jitter = |base: f64| base + rng.gen_range(-spread_deg..=spread_deg);
            let pickup = (jitter(TEST_PICKUP.0), jitter(TEST_PICKUP.1));
            let dropoff = (jitter(TEST_DROPOFF.0), jitter(TEST_DROPOFF.1));
            offer(&format!("offer-{i}"), pickup, dropoff)
        })
        .collect()
}
