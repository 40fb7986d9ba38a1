//! Proximity-based ranking of ride offers against a rider's route.

pub mod proximity;
pub mod types;

pub use proximity::ProximityMatcher;
pub use types::{MatchQuery, ScoredOffer};
