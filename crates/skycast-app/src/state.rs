//! Owned application state, mutated only by event-loop handlers.

use skycast_core::CityRegistry;
use skycast_weather::{Location, WeatherSnapshot};

/// The one mutable application state. Background tasks never touch this;
/// they hand results back to the loop as plain values.
pub struct AppState {
    pub registry: CityRegistry,
    /// The location scheduled refreshes fetch for. Only manual submits
    /// change it.
    pub active_location: Option<Location>,
    /// Last successfully fetched reading; stays displayed until replaced.
    pub last_snapshot: Option<WeatherSnapshot>,
    /// The query text currently in the input box (mirrors the window).
    pub query_text: String,
}

impl AppState {
    pub fn new(registry: CityRegistry) -> Self {
        Self {
            registry,
            active_location: None,
            last_snapshot: None,
            query_text: String::new(),
        }
    }

    /// Location a scheduled refresh should fetch, if any. A missing
    /// location is not an error; the tick is simply skipped.
    pub fn refresh_target(&self) -> Option<Location> {
        self.active_location.clone()
    }
}
