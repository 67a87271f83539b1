//! Forward geocoding: resolve a free-text city query to coordinates.
//! Uses the Open-Meteo geocoding API - free, no API key required.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::types::{Location, WeatherError};

const GEOCODING_BASE_URL: &str = "https://geocoding-api.open-meteo.com";
const REQUEST_TIMEOUT_SECS: u64 = 10;
/// Candidates requested per query; the provider's relevance ranking is
/// kept as-is, never re-ranked.
const MAX_CANDIDATES: u32 = 10;

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<Candidate>>,
}

#[derive(Debug, Clone, Deserialize)]
struct Candidate {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
    country_code: Option<String>,
    admin1: Option<String>,
}

/// A query split into the name sent to the provider and an optional
/// normalized context hint ("Trenton, NJ" -> "Trenton" + "NEW JERSEY").
#[derive(Debug, Clone, PartialEq, Eq)]
struct ParsedQuery {
    name: String,
    context: Option<String>,
}

impl ParsedQuery {
    fn parse(raw: &str) -> Self {
        match raw.split_once(',') {
            Some((name, context)) => {
                let context = normalize_context(context.trim());
                Self {
                    name: name.trim().to_string(),
                    context: (!context.is_empty()).then_some(context),
                }
            }
            None => Self {
                name: raw.trim().to_string(),
                context: None,
            },
        }
    }
}

/// Uppercase the hint, expanding two-letter US state codes to the full
/// state name and collapsing country aliases to the provider's ISO code.
fn normalize_context(context: &str) -> String {
    let upper = context.to_uppercase();
    if let Some(state) = expand_state_code(&upper) {
        return state.to_string();
    }
    match upper.as_str() {
        "USA" | "U.S." | "U.S.A." | "UNITED STATES" => "US".to_string(),
        _ => upper,
    }
}

/// US states plus DC, the provider's `admin1` granularity for US queries.
/// Unrecognized codes pass through unchanged.
fn expand_state_code(code: &str) -> Option<&'static str> {
    let name = match code {
        "AL" => "ALABAMA",
        "AK" => "ALASKA",
        "AZ" => "ARIZONA",
        "AR" => "ARKANSAS",
        "CA" => "CALIFORNIA",
        "CO" => "COLORADO",
        "CT" => "CONNECTICUT",
        "DE" => "DELAWARE",
        "DC" => "DISTRICT OF COLUMBIA",
        "FL" => "FLORIDA",
        "GA" => "GEORGIA",
        "HI" => "HAWAII",
        "ID" => "IDAHO",
        "IL" => "ILLINOIS",
        "IN" => "INDIANA",
        "IA" => "IOWA",
        "KS" => "KANSAS",
        "KY" => "KENTUCKY",
        "LA" => "LOUISIANA",
        "ME" => "MAINE",
        "MD" => "MARYLAND",
        "MA" => "MASSACHUSETTS",
        "MI" => "MICHIGAN",
        "MN" => "MINNESOTA",
        "MS" => "MISSISSIPPI",
        "MO" => "MISSOURI",
        "MT" => "MONTANA",
        "NE" => "NEBRASKA",
        "NV" => "NEVADA",
        "NH" => "NEW HAMPSHIRE",
        "NJ" => "NEW JERSEY",
        "NM" => "NEW MEXICO",
        "NY" => "NEW YORK",
        "NC" => "NORTH CAROLINA",
        "ND" => "NORTH DAKOTA",
        "OH" => "OHIO",
        "OK" => "OKLAHOMA",
        "OR" => "OREGON",
        "PA" => "PENNSYLVANIA",
        "RI" => "RHODE ISLAND",
        "SC" => "SOUTH CAROLINA",
        "SD" => "SOUTH DAKOTA",
        "TN" => "TENNESSEE",
        "TX" => "TEXAS",
        "UT" => "UTAH",
        "VT" => "VERMONT",
        "VA" => "VIRGINIA",
        "WA" => "WASHINGTON",
        "WV" => "WEST VIRGINIA",
        "WI" => "WISCONSIN",
        "WY" => "WYOMING",
        _ => return None,
    };
    Some(name)
}

/// First candidate whose country, country code, or admin1 contains the
/// hint; provider order decides ties. Without a hint, or when nothing
/// matches, the provider's top result wins - a hint never hard-fails.
fn select_candidate<'a>(candidates: &'a [Candidate], context: Option<&str>) -> &'a Candidate {
    let Some(hint) = context else {
        return &candidates[0];
    };
    candidates
        .iter()
        .find(|c| {
            [c.country.as_deref(), c.country_code.as_deref(), c.admin1.as_deref()]
                .into_iter()
                .flatten()
                .any(|field| field.to_uppercase().contains(hint))
        })
        .unwrap_or(&candidates[0])
}

/// Resolves free-text queries against the geocoding provider.
#[derive(Debug, Clone)]
pub struct LocationResolver {
    client: Client,
    base_url: String,
}

impl LocationResolver {
    pub fn new() -> Result<Self, WeatherError> {
        Self::with_base_url(GEOCODING_BASE_URL)
    }

    /// Point the resolver at a different server (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Resolve a query like "Trenton" or "Trenton, NJ" to one location.
    ///
    /// The part after the first comma is a context hint used only to break
    /// ties among the provider's ranked candidates.
    pub async fn resolve(&self, query: &str) -> Result<Location, WeatherError> {
        let parsed = ParsedQuery::parse(query);
        let count = MAX_CANDIDATES.to_string();
        let url = format!("{}/v1/search", self.base_url);

        let response: GeocodingResponse = self
            .client
            .get(&url)
            .query(&[
                ("name", parsed.name.as_str()),
                ("count", count.as_str()),
                ("language", "en"),
                ("format", "json"),
            ])
            .send()
            .await?
            .json()
            .await?;

        let candidates = response.results.unwrap_or_default();
        if candidates.is_empty() {
            return Err(WeatherError::LocationNotFound(parsed.name));
        }

        let chosen = select_candidate(&candidates, parsed.context.as_deref());
        tracing::debug!(
            "Resolved {:?} to {} ({}, {})",
            query,
            chosen.name,
            chosen.latitude,
            chosen.longitude
        );

        Ok(Location {
            display_name: chosen.name.clone(),
            region: chosen.admin1.clone().unwrap_or_default(),
            country: chosen.country.clone().unwrap_or_default(),
            latitude: chosen.latitude,
            longitude: chosen.longitude,
        })
    }
}
