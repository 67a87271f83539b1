//! The cooperative event loop: owns all mutable state and all scheduling
//! callbacks, and never blocks on network I/O.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;

use tokio::runtime::Handle;

use skycast_weather::{Location, LocationResolver, WeatherError, WeatherFetcher, WeatherSnapshot};

use crate::services::{self, FetchOrigin};
use crate::state::AppState;
use crate::surface::{TraySurface, WindowSurface};
use crate::sync::PresentationSync;

/// Everything that can reach the loop: user actions, scheduler ticks, and
/// completed background fetches.
#[derive(Debug)]
pub enum Event {
    Submit(String),
    SaveCity,
    RemoveCity(String),
    RefreshTick,
    FetchDone {
        origin: FetchOrigin,
        result: Result<(Location, WeatherSnapshot), WeatherError>,
    },
    ShowWindow,
    Quit,
}

pub struct App<W, T> {
    state: AppState,
    sync: PresentationSync<W, T>,
    runtime: Handle,
    resolver: Arc<LocationResolver>,
    fetcher: Arc<WeatherFetcher>,
    tx: Sender<Event>,
}

impl<W: WindowSurface, T: TraySurface> App<W, T> {
    pub fn new(
        state: AppState,
        sync: PresentationSync<W, T>,
        runtime: Handle,
        resolver: Arc<LocationResolver>,
        fetcher: Arc<WeatherFetcher>,
        tx: Sender<Event>,
    ) -> Self {
        Self {
            state,
            sync,
            runtime,
            resolver,
            fetcher,
            tx,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Drain events until `Quit`.
    pub fn run(&mut self, rx: &Receiver<Event>) {
        while let Ok(event) = rx.recv() {
            if !self.handle(event) {
                break;
            }
        }
    }

    /// Process one event. Returns false when the loop should stop.
    pub fn handle(&mut self, event: Event) -> bool {
        match event {
            Event::Submit(query) => self.on_submit(query),
            Event::SaveCity => self.on_save_city(),
            Event::RemoveCity(query) => self.on_remove_city(&query),
            Event::RefreshTick => self.on_refresh_tick(),
            Event::FetchDone { origin, result } => self.on_fetch_done(origin, result),
            Event::ShowWindow => {
                // Reopening the hidden window is the shell's job; state and
                // scheduler keep running while hidden.
                tracing::debug!("Window reopened from tray");
            }
            Event::Quit => return false,
        }
        true
    }

    fn on_submit(&mut self, query: String) {
        let query = query.trim().to_string();
        if query.is_empty() {
            return;
        }
        self.state.query_text = query.clone();
        services::request_submit(
            &self.runtime,
            self.tx.clone(),
            self.resolver.clone(),
            self.fetcher.clone(),
            query,
        );
    }

    fn on_save_city(&mut self) {
        let query = self.state.query_text.clone();
        if query.is_empty() {
            return;
        }
        if let Err(e) = self.state.registry.add(&query) {
            tracing::warn!("Could not save {:?}: {}", query, e);
        }
        if let Err(e) = self.state.registry.set_last_active(&query) {
            tracing::warn!("Could not record last city: {}", e);
        }
    }

    fn on_remove_city(&mut self, query: &str) {
        if let Err(e) = self.state.registry.remove(query) {
            tracing::warn!("Could not remove {:?}: {}", query, e);
        }
    }

    fn on_refresh_tick(&mut self) {
        match self.state.refresh_target() {
            Some(location) => {
                tracing::debug!("Auto-refresh for {}", location.display_name);
                services::request_refresh(
                    &self.runtime,
                    self.tx.clone(),
                    self.fetcher.clone(),
                    location,
                );
            }
            None => tracing::debug!("Auto-refresh skipped; no active location"),
        }
    }

    fn on_fetch_done(
        &mut self,
        origin: FetchOrigin,
        result: Result<(Location, WeatherSnapshot), WeatherError>,
    ) {
        match result {
            Ok((location, snapshot)) => {
                // Whichever result reaches the loop last wins the display;
                // there is no freshness check between racing fetches.
                self.sync.apply(&location, &snapshot, origin);
                if origin == FetchOrigin::Manual {
                    self.state.query_text = location.display_name.clone();
                    self.state.active_location = Some(location);
                }
                self.state.last_snapshot = Some(snapshot);
            }
            Err(e) if origin == FetchOrigin::Manual => {
                tracing::info!("Lookup failed: {}", e);
                self.sync.apply_error(&e.to_string());
            }
            Err(e) => {
                // Auto-refresh failures never disturb the last good
                // display; the next scheduled fire tries again.
                tracing::warn!("Auto-refresh failed: {}", e);
            }
        }
    }
}
