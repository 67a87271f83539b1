use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A place resolved from a free-text query.
///
/// Only the geocoding resolver constructs these. Two different queries can
/// resolve to the same place, so equality compares coordinates rather than
/// any of the display fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub display_name: String,
    /// First-level administrative region (e.g. a US state); may be empty.
    pub region: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.latitude == other.latitude && self.longitude == other.longitude
    }
}

/// One current-conditions reading.
///
/// Each fetch produces a new value; nothing mutates a snapshot in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Full-precision Fahrenheit; rounding happens only at presentation.
    pub temperature_f: f64,
    /// WMO condition code as reported by the provider.
    pub condition_code: i32,
    pub description: String,
    pub is_day: bool,
    pub fetched_at: DateTime<Utc>,
}

/// Errors from the resolution/fetch pipeline.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Could not find coordinates for {0}")]
    LocationNotFound(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Weather API error: {0}")]
    Api(String),
}
