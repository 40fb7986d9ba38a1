//! Pool search: fetch candidate offers and order them for the rider.
//!
//! When the rider supplied coordinates for both ends of the route the offers go
//! through [`ProximityMatcher`]. With only free-text addresses the matcher is
//! bypassed and offers are listed by departure time.

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::Serialize;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::geo::GeoPoint;
use crate::matching::{MatchQuery, ProximityMatcher, ScoredOffer};
use crate::offer::{OfferId, RideOffer};
use crate::repository::{OfferFilter, OfferRepository};

/// One end of the rider's route: resolved coordinates, address text, or both.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Location {
    pub coordinates: Option<GeoPoint>,
    pub address: Option<String>,
}

impl Location {
    pub fn at(point: GeoPoint) -> Self {
        Self {
            coordinates: Some(point),
            address: None,
        }
    }

    pub fn address(text: impl Into<String>) -> Self {
        Self {
            coordinates: None,
            address: Some(text.into()),
        }
    }

    pub fn with_address(mut self, text: impl Into<String>) -> Self {
        self.address = Some(text.into());
        self
    }

    /// Address text if known, else the coordinates formatted as `lat, lng`.
    pub fn label(&self) -> String {
        match (&self.address, self.coordinates) {
            (Some(address), _) => address.clone(),
            (None, Some(point)) => format!("{:.5}, {:.5}", point.lat(), point.lng()),
            (None, None) => String::from("(unspecified)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub pickup: Location,
    pub dropoff: Location,
    /// Earliest acceptable departure; searches never return past offers.
    pub departing_after: Option<DateTime<Utc>>,
    pub seats: u32,
    pub pickup_radius_km: Option<f64>,
    pub dropoff_radius_km: Option<f64>,
}

impl SearchRequest {
    pub fn new(pickup: Location, dropoff: Location) -> Self {
        Self {
            pickup,
            dropoff,
            departing_after: None,
            seats: 1,
            pickup_radius_km: None,
            dropoff_radius_km: None,
        }
    }

    pub fn with_departing_after(mut self, at: DateTime<Utc>) -> Self {
        self.departing_after = Some(at);
        self
    }

    pub fn with_seats(mut self, seats: u32) -> Self {
        self.seats = seats;
        self
    }

    pub fn with_radii_km(mut self, pickup_radius_km: f64, dropoff_radius_km: f64) -> Self {
        self.pickup_radius_km = Some(pickup_radius_km);
        self.dropoff_radius_km = Some(dropoff_radius_km);
        self
    }

    /// The proximity query, when both ends carry coordinates.
    pub fn match_query(&self, config: &SearchConfig) -> Option<MatchQuery> {
        let pickup = self.pickup.coordinates?;
        let dropoff = self.dropoff.coordinates?;
        Some(MatchQuery::new(
            pickup,
            dropoff,
            self.pickup_radius_km.unwrap_or(config.pickup_radius_km),
            self.dropoff_radius_km.unwrap_or(config.dropoff_radius_km),
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", content = "offers", rename_all = "snake_case")]
pub enum SearchResults {
    /// Offers ranked by proximity to the rider's route.
    Ranked(Vec<ScoredOffer>),
    /// Offers ordered by departure time (no coordinates available).
    Chronological(Vec<RideOffer>),
}

impl SearchResults {
    pub fn len(&self) -> usize {
        match self {
            Self::Ranked(offers) => offers.len(),
            Self::Chronological(offers) => offers.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn offer_ids(&self) -> Vec<&OfferId> {
        match self {
            Self::Ranked(offers) => offers.iter().map(|s| &s.offer.id).collect(),
            Self::Chronological(offers) => offers.iter().map(|o| &o.id).collect(),
        }
    }
}

/// Order offers by departure, earliest first. Equal departures keep input order.
pub fn departure_order(mut offers: Vec<RideOffer>) -> Vec<RideOffer> {
    offers.sort_by_key(|offer| offer.departure);
    offers
}

pub struct PoolSearch<R> {
    repository: R,
    config: SearchConfig,
    matcher: ProximityMatcher,
}

impl<R: OfferRepository> PoolSearch<R> {
    pub fn new(repository: R, config: SearchConfig) -> Self {
        Self {
            repository,
            config,
            matcher: ProximityMatcher,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Run a search as of `now`.
    pub fn search(
        &self,
        request: &SearchRequest,
        now: DateTime<Utc>,
    ) -> Result<SearchResults, SearchError> {
        if request.seats == 0 {
            return Err(SearchError::InvalidRequest(
                "at least one seat must be requested".to_string(),
            ));
        }

        let departing_after = request.departing_after.map_or(now, |at| at.max(now));
        let filter = OfferFilter::new(departing_after, request.seats);
        let offers = self.repository.fetch_active_offers(&filter)?;
        debug!(
            "Fetched {} candidate offers (departing after {}, {} seat(s))",
            offers.len(),
            departing_after,
            request.seats
        );

        let Some(query) = request.match_query(&self.config) else {
            debug!("No coordinates for pickup and drop-off, ordering by departure time");
            return Ok(SearchResults::Chronological(departure_order(offers)));
        };

        for offer in offers.iter().filter(|offer| !offer.has_valid_coordinates()) {
            warn!(
                "Skipping offer {} with malformed coordinates: pickup=({}, {}) dropoff=({}, {})",
                offer.id, offer.pickup.lat, offer.pickup.lng, offer.dropoff.lat, offer.dropoff.lng
            );
        }

        let ranked = self.matcher.rank(&query, &offers)?;
        debug!(
            "{} of {} offers within {} km pickup / {} km drop-off",
            ranked.len(),
            offers.len(),
            query.pickup_radius_km,
            query.dropoff_radius_km
        );
        Ok(SearchResults::Ranked(ranked))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coordinates;
    use chrono::TimeZone;

    fn at_hour(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 20, hour, 0, 0).unwrap()
    }

    fn offer(id: &str, hour: u32) -> RideOffer {
        RideOffer::new(
            id,
            Coordinates::new(0.0, 0.0),
            Coordinates::new(0.0, 1.0),
            at_hour(hour),
            1,
        )
    }

    #[test]
    fn departure_order_is_stable() {
        let ordered = departure_order(vec![offer("c", 11), offer("a", 9), offer("b", 9)]);
        let ids: Vec<&str> = ordered.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn match_query_needs_both_coordinates() {
        let config = SearchConfig::default();
        let point = GeoPoint::new(0.0, 0.0).expect("point");
        let partial = SearchRequest::new(Location::at(point), Location::address("Mesa"));
        assert!(partial.match_query(&config).is_none());

        let full = SearchRequest::new(Location::at(point), Location::at(point))
            .with_radii_km(1.0, 2.0);
        let query = full.match_query(&config).expect("query");
        assert_eq!(query.pickup_radius_km, 1.0);
        assert_eq!(query.dropoff_radius_km, 2.0);
    }

    #[test]
    fn label_prefers_address() {
        let point = GeoPoint::new(1.5, 2.25).expect("point");
        assert_eq!(Location::at(point).label(), "1.50000, 2.25000");
        assert_eq!(Location::at(point).with_address("Mesa").label(), "Mesa");
        assert_eq!(Location::default().label(), "(unspecified)");
    }
}
