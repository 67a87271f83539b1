//! Current-conditions fetch from the Open-Meteo forecast API.

use std::time::Duration;

use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;

use crate::codes;
use crate::types::{Location, WeatherError, WeatherSnapshot};

const FORECAST_BASE_URL: &str = "https://api.open-meteo.com";
const REQUEST_TIMEOUT_SECS: u64 = 10;
const CURRENT_FIELDS: &str = "temperature_2m,weather_code,is_day";

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: Option<CurrentBlock>,
    /// Provider-side failure marker; `reason` carries the message.
    #[serde(default)]
    error: bool,
    reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    temperature_2m: f64,
    weather_code: i32,
    is_day: u8,
}

/// Exact affine conversion; callers round only for presentation.
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Fetches current conditions for resolved coordinates.
#[derive(Debug, Clone)]
pub struct WeatherFetcher {
    client: Client,
    base_url: String,
}

impl WeatherFetcher {
    pub fn new() -> Result<Self, WeatherError> {
        Self::with_base_url(FORECAST_BASE_URL)
    }

    /// Point the fetcher at a different server (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch the current reading for a location.
    ///
    /// Condition codes missing from the table degrade to a fallback
    /// description; they never fail the fetch.
    pub async fn fetch(&self, location: &Location) -> Result<WeatherSnapshot, WeatherError> {
        let url = format!("{}/v1/forecast", self.base_url);

        let response: ForecastResponse = self
            .client
            .get(&url)
            .query(&[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await?
            .json()
            .await?;

        if response.error {
            let reason = response
                .reason
                .unwrap_or_else(|| "unspecified provider error".to_string());
            return Err(WeatherError::Api(reason));
        }

        let current = response
            .current
            .ok_or_else(|| WeatherError::Api("response missing current conditions".to_string()))?;

        let snapshot = WeatherSnapshot {
            temperature_f: celsius_to_fahrenheit(current.temperature_2m),
            condition_code: current.weather_code,
            description: codes::describe(current.weather_code).to_string(),
            is_day: current.is_day != 0,
            fetched_at: Utc::now(),
        };
        tracing::debug!(
            "Fetched {:.1}°F, code {} for {}",
            snapshot.temperature_f,
            snapshot.condition_code,
            location.display_name
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freezing_point() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
    }

    #[test]
    fn boiling_point() {
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
    }

    #[test]
    fn scales_cross_at_minus_forty() {
        assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
    }

    #[test]
    fn conversion_keeps_full_precision() {
        let f = celsius_to_fahrenheit(21.7);
        assert!((f - 71.06).abs() < 1e-9);
    }
}
