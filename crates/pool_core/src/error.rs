//! Error types for the pool matching and search layers.

use std::path::PathBuf;

/// A coordinate pair that cannot form a valid `GeoPoint`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeoError {
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
    #[error("coordinates ({lat}, {lng}) are not finite")]
    NonFinite { lat: f64, lng: f64 },
}

/// Call-level failure of the proximity matcher.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatchError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Failure to obtain candidate offers from a data source.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("failed to read offers from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed offer data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("offer source unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("invalid search request: {0}")]
    InvalidRequest(String),
    #[error(transparent)]
    Match(#[from] MatchError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RatingError {
    #[error("rating {0} is outside 1..=5")]
    OutOfRange(u8),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}
