use std::io::BufRead;
use std::sync::mpsc;
use std::sync::Arc;

use anyhow::{Context, Result};

use skycast_app::app::{App, Event};
use skycast_app::scheduler;
use skycast_app::state::AppState;
use skycast_app::surface::{IconAssets, TrayIcon, WindowSurface, QUERY_PLACEHOLDER, WINDOW_TITLE};
use skycast_app::sync::PresentationSync;
use skycast_app::tray::{self, TrayBackend};
use skycast_core::{CityRegistry, ConfigStore};
use skycast_weather::{LocationResolver, WeatherFetcher};

/// Stand-in window wiring. The widget shell subscribes to the same two
/// calls; headless runs print the headline so the app stays usable.
struct ConsoleWindow;

impl WindowSurface for ConsoleWindow {
    fn set_headline(&mut self, text: &str) {
        println!("{text}");
    }

    fn set_query_text(&mut self, text: &str) {
        tracing::debug!("Query box set to {:?}", text);
    }
}

/// Stand-in tray renderer; OS tray integration replaces this at the edge.
struct ConsoleTray;

impl TrayBackend for ConsoleTray {
    fn render(&mut self, icon: &TrayIcon, tooltip: &str) {
        tracing::info!("Tray updated: {:?} ({})", icon, tooltip);
    }
}

fn main() -> Result<()> {
    skycast_core::init()?;

    let registry = CityRegistry::load(ConfigStore::new(ConfigStore::default_path()));
    tracing::info!(
        "{} starting with {} saved cities",
        WINDOW_TITLE,
        registry.cities().len()
    );
    let startup_query = registry.last_city().to_string();

    let resolver = Arc::new(LocationResolver::new().context("building geocoding client")?);
    let fetcher = Arc::new(WeatherFetcher::new().context("building forecast client")?);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("skycast-net")
        .build()
        .context("building tokio runtime")?;

    let (tx, rx) = mpsc::channel();
    let (tray_handle, tray_thread) = tray::spawn(ConsoleTray).context("spawning tray thread")?;
    scheduler::spawn(runtime.handle(), tx.clone());

    let sync = PresentationSync::new(
        ConsoleWindow,
        tray_handle.clone(),
        IconAssets::new("assets/icons"),
    );
    let mut app = App::new(
        AppState::new(registry),
        sync,
        runtime.handle().clone(),
        resolver,
        fetcher,
        tx.clone(),
    );

    if !startup_query.is_empty() {
        app.handle(Event::Submit(startup_query));
    }

    spawn_input_thread(tx)?;
    tracing::info!("Type a city like {:?}; :save, :remove <city>, :quit", QUERY_PLACEHOLDER);

    app.run(&rx);

    tray_handle.shutdown();
    let _ = tray_thread.join();
    tracing::info!("Skycast stopped");
    Ok(())
}

/// Line-based command shell standing in for the widget layer: a bare line
/// submits a query, `:save` saves it, `:remove <city>` deletes a saved
/// entry, `:quit` exits.
fn spawn_input_thread(tx: mpsc::Sender<Event>) -> Result<()> {
    std::thread::Builder::new()
        .name("skycast-input".to_string())
        .spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let event = if line == ":quit" {
                    Event::Quit
                } else if line == ":save" {
                    Event::SaveCity
                } else if let Some(query) = line.strip_prefix(":remove ") {
                    Event::RemoveCity(query.trim().to_string())
                } else {
                    Event::Submit(line.to_string())
                };
                let quit = matches!(event, Event::Quit);
                if tx.send(event).is_err() || quit {
                    break;
                }
            }
        })
        .context("spawning input thread")?;
    Ok(())
}
