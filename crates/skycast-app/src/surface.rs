//! Display-surface interfaces.
//!
//! Widget construction and tray bitmap compositing live outside this
//! crate; the event loop only ever talks to these traits.

use std::path::PathBuf;

use skycast_weather::{IconKey, WeatherSnapshot};

/// Window title of the desktop shell.
pub const WINDOW_TITLE: &str = "Weather App";
/// Placeholder shown in the empty query box.
pub const QUERY_PLACEHOLDER: &str = "Trenton, NJ";

/// Tray icon content: a bundled asset, or a generated numeric badge when
/// the asset (or the code's bucket) is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrayIcon {
    Asset(IconKey),
    /// Rendered by the tray backend as a glyph carrying the rounded °F.
    Placeholder { temp_f: i32 },
}

/// The main window's weather-facing controls.
pub trait WindowSurface {
    fn set_headline(&mut self, text: &str);
    fn set_query_text(&mut self, text: &str);
}

/// The tray icon and its tooltip.
pub trait TraySurface {
    fn update(&mut self, icon: &TrayIcon, tooltip: &str);
}

/// Lookup of bundled icon bitmaps by bucket key.
#[derive(Debug, Clone)]
pub struct IconAssets {
    dir: PathBuf,
}

impl IconAssets {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Icon for a snapshot: the bucket's asset when it exists on disk,
    /// otherwise a placeholder carrying the rounded temperature.
    pub fn resolve(&self, snapshot: &WeatherSnapshot) -> TrayIcon {
        match IconKey::from_code(snapshot.condition_code) {
            Some(key) if self.asset_path(key).is_file() => TrayIcon::Asset(key),
            _ => TrayIcon::Placeholder {
                temp_f: snapshot.temperature_f.round() as i32,
            },
        }
    }

    fn asset_path(&self, key: IconKey) -> PathBuf {
        self.dir.join(format!("{}.png", key.as_str()))
    }
}
