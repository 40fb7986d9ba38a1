use std::sync::Mutex;

use pool_core::repository::{InMemoryOfferRepository, OfferFilter, OfferRepository};
use pool_core::{RepositoryError, RideOffer};

/// Wraps an in-memory repository and records every filter it was asked for.
#[derive(Debug, Default)]
pub struct RecordingRepository {
    inner: InMemoryOfferRepository,
    filters: Mutex<Vec<OfferFilter>>,
}

impl RecordingRepository {
    pub fn new(offers: Vec<RideOffer>) -> Self {
        Self {
            inner: InMemoryOfferRepository::new(offers),
            filters: Mutex::new(Vec::new()),
        }
    }

    pub fn filters(&self) -> Vec<OfferFilter> {
        self.filters.lock().expect("filters lock").clone()
    }
}

impl OfferRepository for RecordingRepository {
    fn fetch_active_offers(&self, filter: &OfferFilter) -> Result<Vec<RideOffer>, RepositoryError> {
        self.filters.lock().expect("filters lock").push(*filter);
        self.inner.fetch_active_offers(filter)
    }
}

/// Repository whose backend is always down.
#[derive(Debug, Default)]
pub struct UnavailableRepository;

impl OfferRepository for UnavailableRepository {
    fn fetch_active_offers(&self, _filter: &OfferFilter) -> Result<Vec<RideOffer>, RepositoryError> {
        Err(RepositoryError::Unavailable("connection refused".to_string()))
    }
}
