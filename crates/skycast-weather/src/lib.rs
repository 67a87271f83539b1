//! Weather data access for Skycast.
//!
//! Resolves free-text city queries via the Open-Meteo geocoding API and
//! fetches current conditions from the Open-Meteo forecast API.

pub mod codes;
pub mod geocode;
pub mod provider;
pub mod types;

pub use codes::IconKey;
pub use geocode::LocationResolver;
pub use provider::WeatherFetcher;
pub use types::{Location, WeatherError, WeatherSnapshot};
