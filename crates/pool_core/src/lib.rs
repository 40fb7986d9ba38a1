pub mod config;
pub mod currency;
pub mod error;
pub mod geo;
pub mod matching;
pub mod offer;
pub mod rating;
pub mod repository;
pub mod search;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;

pub use error::{ConfigError, GeoError, MatchError, RatingError, RepositoryError, SearchError};
pub use geo::{haversine_km, Coordinates, GeoPoint};
pub use matching::{MatchQuery, ProximityMatcher, ScoredOffer};
pub use offer::{OfferDetails, OfferId, OfferStatus, RideOffer};
