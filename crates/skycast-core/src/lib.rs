//! Core services for Skycast: persisted configuration, the saved-city
//! registry, and logging setup.

pub mod config;
pub mod error;
pub mod registry;

pub use config::{CityConfig, ConfigStore};
pub use error::ConfigError;
pub use registry::CityRegistry;

use anyhow::Result;

/// Initialize tracing for the application.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Skycast core initialized");
    Ok(())
}
