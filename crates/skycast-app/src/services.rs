//! Background fetch dispatch.
//!
//! Network round-trips run on short-lived tokio tasks; results come back
//! to the event loop over the channel. Tasks never touch shared state.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::runtime::Handle;

use skycast_weather::{Location, LocationResolver, WeatherError, WeatherFetcher, WeatherSnapshot};

use crate::app::Event;

/// What triggered a fetch. Manual submits surface errors and rewrite the
/// query box; automatic refreshes do neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOrigin {
    Manual,
    Auto,
}

/// Resolve a query and fetch its weather off the loop; the outcome arrives
/// as a `FetchDone` event.
pub fn request_submit(
    runtime: &Handle,
    tx: Sender<Event>,
    resolver: Arc<LocationResolver>,
    fetcher: Arc<WeatherFetcher>,
    query: String,
) {
    runtime.spawn(async move {
        let result = resolve_and_fetch(&resolver, &fetcher, &query).await;
        let _ = tx.send(Event::FetchDone {
            origin: FetchOrigin::Manual,
            result,
        });
    });
}

/// Fetch for an already-resolved location (the scheduled-refresh path).
pub fn request_refresh(
    runtime: &Handle,
    tx: Sender<Event>,
    fetcher: Arc<WeatherFetcher>,
    location: Location,
) {
    runtime.spawn(async move {
        let result = fetcher
            .fetch(&location)
            .await
            .map(|snapshot| (location, snapshot));
        let _ = tx.send(Event::FetchDone {
            origin: FetchOrigin::Auto,
            result,
        });
    });
}

async fn resolve_and_fetch(
    resolver: &LocationResolver,
    fetcher: &WeatherFetcher,
    query: &str,
) -> Result<(Location, WeatherSnapshot), WeatherError> {
    let location = resolver.resolve(query).await?;
    let snapshot = fetcher.fetch(&location).await?;
    Ok((location, snapshot))
}
