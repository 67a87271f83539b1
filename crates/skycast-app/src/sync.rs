//! Presentation synchronization: one snapshot in, both surfaces updated.

use skycast_weather::{Location, WeatherSnapshot};

use crate::services::FetchOrigin;
use crate::surface::{IconAssets, TrayIcon, TraySurface, WindowSurface};

/// Everything both surfaces need, derived from exactly one
/// (location, snapshot) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    pub headline: String,
    pub icon: TrayIcon,
    pub tooltip: String,
}

/// Build the display state for one location/snapshot pair.
pub fn display_state(location: &Location, snapshot: &WeatherSnapshot, assets: &IconAssets) -> DisplayState {
    let place = if location.region.is_empty() {
        location.display_name.clone()
    } else {
        format!("{}, {}", location.display_name, location.region)
    };
    DisplayState {
        headline: format!(
            "{}: {:.1}°F, {}",
            place, snapshot.temperature_f, snapshot.description
        ),
        icon: assets.resolve(snapshot),
        tooltip: format!(
            "{}: {:.1}°F, {}",
            location.display_name, snapshot.temperature_f, snapshot.description
        ),
    }
}

/// The only writer to either display surface.
///
/// Window and tray always receive content from the same snapshot: `apply`
/// builds one `DisplayState` and pushes it to both, and it only ever runs
/// on the event loop, so updates cannot interleave.
pub struct PresentationSync<W, T> {
    window: W,
    tray: T,
    assets: IconAssets,
}

impl<W: WindowSurface, T: TraySurface> PresentationSync<W, T> {
    pub fn new(window: W, tray: T, assets: IconAssets) -> Self {
        Self { window, tray, assets }
    }

    /// Push one snapshot to both surfaces. Manual refreshes also rewrite
    /// the query box with the resolved display name; automatic ones leave
    /// the user's typed text alone.
    pub fn apply(&mut self, location: &Location, snapshot: &WeatherSnapshot, origin: FetchOrigin) {
        let state = display_state(location, snapshot, &self.assets);
        self.window.set_headline(&state.headline);
        if origin == FetchOrigin::Manual {
            self.window.set_query_text(&location.display_name);
        }
        self.tray.update(&state.icon, &state.tooltip);
    }

    /// Manual-submit failure: the message replaces the headline verbatim.
    /// The tray keeps its last good state.
    pub fn apply_error(&mut self, message: &str) {
        self.window.set_headline(message);
    }
}
