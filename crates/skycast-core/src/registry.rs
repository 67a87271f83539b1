//! Saved-city registry: ordered, deduplicated queries plus the last-used
//! one, persisted through the config store after every mutation.

use crate::config::{CityConfig, ConfigStore};
use crate::error::ConfigError;

/// Ordered distinct saved queries and the query to auto-load at startup.
#[derive(Debug)]
pub struct CityRegistry {
    store: ConfigStore,
    config: CityConfig,
}

impl CityRegistry {
    /// Load from the store; an absent file yields an empty registry.
    pub fn load(store: ConfigStore) -> Self {
        let config = store.load();
        Self { store, config }
    }

    /// Append a query unless it is already saved. Returns whether the
    /// registry changed; duplicates are rejected silently.
    pub fn add(&mut self, query: &str) -> Result<bool, ConfigError> {
        if self.config.cities.iter().any(|c| c == query) {
            return Ok(false);
        }
        self.config.cities.push(query.to_string());
        self.store.save(&self.config)?;
        Ok(true)
    }

    /// Remove a saved query. Absent entries are a no-op.
    pub fn remove(&mut self, query: &str) -> Result<bool, ConfigError> {
        let before = self.config.cities.len();
        self.config.cities.retain(|c| c != query);
        if self.config.cities.len() == before {
            return Ok(false);
        }
        self.store.save(&self.config)?;
        Ok(true)
    }

    /// Record the query to auto-load at next startup. Invoked only on an
    /// explicit save action, not on every successful lookup.
    pub fn set_last_active(&mut self, query: &str) -> Result<(), ConfigError> {
        self.config.last_city = query.to_string();
        self.store.save(&self.config)
    }

    pub fn cities(&self) -> &[String] {
        &self.config.cities
    }

    pub fn last_city(&self) -> &str {
        &self.config.last_city
    }
}
