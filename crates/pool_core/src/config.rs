//! Search configuration: default radii and display currency.

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_PICKUP_RADIUS_KM: f64 = 10.0;
pub const DEFAULT_DROPOFF_RADIUS_KM: f64 = 10.0;
pub const DEFAULT_CURRENCY: &str = "KES";

pub const ENV_PICKUP_RADIUS_KM: &str = "POOL_PICKUP_RADIUS_KM";
pub const ENV_DROPOFF_RADIUS_KM: &str = "POOL_DROPOFF_RADIUS_KM";
pub const ENV_CURRENCY: &str = "POOL_CURRENCY";

/// Defaults applied when a search request does not carry its own radii.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Max distance (km) between the rider's pickup and an offer's pickup.
    pub pickup_radius_km: f64,
    /// Max distance (km) between the rider's drop-off and an offer's drop-off.
    pub dropoff_radius_km: f64,
    /// Currency code used when printing prices.
    pub currency: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            pickup_radius_km: DEFAULT_PICKUP_RADIUS_KM,
            dropoff_radius_km: DEFAULT_DROPOFF_RADIUS_KM,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl SearchConfig {
    pub fn with_pickup_radius_km(mut self, radius_km: f64) -> Self {
        self.pickup_radius_km = radius_km;
        self
    }

    pub fn with_dropoff_radius_km(mut self, radius_km: f64) -> Self {
        self.dropoff_radius_km = radius_km;
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Load from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: SearchConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `POOL_*` environment variables on top of this config.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn with_overrides_from(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(raw) = lookup(ENV_PICKUP_RADIUS_KM) {
            self.pickup_radius_km = parse_radius(ENV_PICKUP_RADIUS_KM, &raw)?;
            info!("{ENV_PICKUP_RADIUS_KM} override: {} km", self.pickup_radius_km);
        }
        if let Some(raw) = lookup(ENV_DROPOFF_RADIUS_KM) {
            self.dropoff_radius_km = parse_radius(ENV_DROPOFF_RADIUS_KM, &raw)?;
            info!("{ENV_DROPOFF_RADIUS_KM} override: {} km", self.dropoff_radius_km);
        }
        if let Some(raw) = lookup(ENV_CURRENCY) {
            let code = raw.trim();
            if code.is_empty() {
                return Err(invalid(ENV_CURRENCY, "currency code cannot be empty"));
            }
            self.currency = code.to_string();
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_radius("pickup_radius_km", self.pickup_radius_km)?;
        check_radius("dropoff_radius_km", self.dropoff_radius_km)?;
        if self.currency.trim().is_empty() {
            return Err(invalid("currency", "currency code cannot be empty"));
        }
        Ok(())
    }
}

fn parse_radius(key: &str, raw: &str) -> Result<f64, ConfigError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| invalid(key, format!("'{raw}' is not a number")))?;
    check_radius(key, value)?;
    Ok(value)
}

fn check_radius(key: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(key, format!("radius must be positive, got {value}")))
    }
}

fn invalid(key: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.into(),
    }
}
