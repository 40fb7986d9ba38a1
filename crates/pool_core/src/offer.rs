//! Ride offers published by drivers.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geo::Coordinates;

/// Opaque unique offer identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OfferId(pub String);

impl OfferId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OfferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for OfferId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for OfferId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferStatus {
    #[default]
    Active,
    Cancelled,
    Completed,
}

/// Display metadata carried alongside an offer. Matching never reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfferDetails {
    pub driver_name: String,
    pub verified: bool,
    pub rating: f64,
    pub review_count: u32,
    pub price: f64,
    /// ISO 4217 code, looked up in [`crate::currency`].
    pub currency: String,
    pub total_seats: u32,
    pub pickup_address: String,
    pub dropoff_address: String,
}

/// A driver-published ride with route, time and seat availability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideOffer {
    pub id: OfferId,
    pub pickup: Coordinates,
    pub dropoff: Coordinates,
    pub departure: DateTime<Utc>,
    pub seats_available: u32,
    #[serde(default)]
    pub status: OfferStatus,
    #[serde(default)]
    pub details: OfferDetails,
}

impl RideOffer {
    pub fn new(
        id: impl Into<OfferId>,
        pickup: Coordinates,
        dropoff: Coordinates,
        departure: DateTime<Utc>,
        seats_available: u32,
    ) -> Self {
        Self {
            id: id.into(),
            pickup,
            dropoff,
            departure,
            seats_available,
            status: OfferStatus::Active,
            details: OfferDetails::default(),
        }
    }

    pub fn with_status(mut self, status: OfferStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_details(mut self, details: OfferDetails) -> Self {
        self.details = details;
        self
    }

    pub fn has_valid_coordinates(&self) -> bool {
        self.pickup.is_valid() && self.dropoff.is_valid()
    }

    /// Active, not full, has room for `seats`, and departs strictly after `departing_after`.
    pub fn is_bookable(&self, departing_after: DateTime<Utc>, seats: u32) -> bool {
        self.status == OfferStatus::Active
            && self.seats_available > 0
            && self.seats_available >= seats
            && self.departure > departing_after
    }

    /// Seats already taken, when the total is known.
    pub fn seats_taken(&self) -> u32 {
        self.details.total_seats.saturating_sub(self.seats_available)
    }
}
