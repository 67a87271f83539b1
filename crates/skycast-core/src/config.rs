//! Persisted configuration: the saved-cities document.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// On-disk schema: `{ "cities": [...], "last_city": "" }`.
/// Missing fields default so older files keep loading.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CityConfig {
    #[serde(default)]
    pub cities: Vec<String>,

    #[serde(default)]
    pub last_city: String,
}

/// Load/save handle for the city document.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default store location under the platform config directory.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("skycast")
            .join("cities.json")
    }

    /// Load the document. An absent file is an empty document, never an
    /// error. An unreadable or malformed file also degrades to empty, with
    /// a warning, so startup survives it; the file is rewritten on the next
    /// mutation.
    pub fn load(&self) -> CityConfig {
        if !self.path.exists() {
            return CityConfig::default();
        }
        match self.try_load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    "Could not load {}: {}; starting with an empty city list",
                    self.path.display(),
                    e
                );
                CityConfig::default()
            }
        }
    }

    fn try_load(&self) -> Result<CityConfig, ConfigError> {
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Persist the document, creating parent directories on first save.
    pub fn save(&self, config: &CityConfig) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_file_loads_as_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("cities.json"));

        let config = store.load();

        assert!(config.cities.is_empty());
        assert!(config.last_city.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("nested").join("cities.json"));

        let config = CityConfig {
            cities: vec!["Trenton, NJ".to_string(), "Paris".to_string()],
            last_city: "Trenton, NJ".to_string(),
        };
        store.save(&config).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.cities, config.cities);
        assert_eq!(loaded.last_city, "Trenton, NJ");
    }

    #[test]
    fn missing_fields_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cities.json");
        fs::write(&path, r#"{"cities": ["Paris"]}"#).unwrap();

        let config = ConfigStore::new(path).load();

        assert_eq!(config.cities, vec!["Paris".to_string()]);
        assert!(config.last_city.is_empty());
    }

    #[test]
    fn malformed_file_degrades_to_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cities.json");
        fs::write(&path, "{not json").unwrap();

        let config = ConfigStore::new(path).load();

        assert!(config.cities.is_empty());
    }
}
