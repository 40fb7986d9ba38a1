//! Offer data sources.
//!
//! Search code only sees [`OfferRepository`]; where offers come from (a backend
//! store, a JSON file, test fixtures) stays behind the trait.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::{DateTime, Utc};
use log::debug;

use crate::error::RepositoryError;
use crate::offer::RideOffer;

/// Which offers a search is interested in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfferFilter {
    /// Only offers departing strictly after this instant.
    pub departing_after: DateTime<Utc>,
    /// Minimum free seats.
    pub min_seats: u32,
}

impl OfferFilter {
    pub fn new(departing_after: DateTime<Utc>, min_seats: u32) -> Self {
        Self {
            departing_after,
            min_seats,
        }
    }

    pub fn accepts(&self, offer: &RideOffer) -> bool {
        offer.is_bookable(self.departing_after, self.min_seats)
    }
}

/// Source of active, non-full, future-dated ride offers.
pub trait OfferRepository: Send + Sync {
    fn fetch_active_offers(&self, filter: &OfferFilter) -> Result<Vec<RideOffer>, RepositoryError>;
}

/// Offers held in memory, returned in stored order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOfferRepository {
    offers: Vec<RideOffer>,
}

impl InMemoryOfferRepository {
    pub fn new(offers: Vec<RideOffer>) -> Self {
        Self { offers }
    }

    /// Load a JSON array of offers.
    pub fn from_json_reader(reader: impl Read) -> Result<Self, RepositoryError> {
        let offers: Vec<RideOffer> = serde_json::from_reader(reader)?;
        Ok(Self::new(offers))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| RepositoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let repository = Self::from_json_reader(BufReader::new(file))?;
        debug!(
            "Loaded {} offers from {}",
            repository.offers.len(),
            path.display()
        );
        Ok(repository)
    }

    pub fn push(&mut self, offer: RideOffer) {
        self.offers.push(offer);
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}

impl OfferRepository for InMemoryOfferRepository {
    fn fetch_active_offers(&self, filter: &OfferFilter) -> Result<Vec<RideOffer>, RepositoryError> {
        Ok(self
            .offers
            .iter()
            .filter(|offer| filter.accepts(offer))
            .cloned()
            .collect())
    }
}
