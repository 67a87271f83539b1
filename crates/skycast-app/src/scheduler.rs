//! Jittered hourly refresh schedule.

use std::sync::mpsc::Sender;

use chrono::{DateTime, Duration as ChronoDuration, Local, Timelike};
use rand::Rng;
use tokio::runtime::Handle;

use crate::app::Event;

/// Upper bound of the random offset past the hour, in seconds.
const MAX_JITTER_SECS: i64 = 30 * 60;

/// Next fire instant: start of the next clock hour plus a fresh uniform
/// draw from [0, 30 minutes]. Spreading fires across the first half of the
/// hour avoids a synchronized burst when many instances run.
pub fn next_fire_after(now: DateTime<Local>) -> DateTime<Local> {
    let top_of_hour = now
        .with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now);
    let jitter = rand::thread_rng().gen_range(0..=MAX_JITTER_SECS);
    top_of_hour + ChronoDuration::hours(1) + ChronoDuration::seconds(jitter)
}

/// Spawn the single scheduler task for the process.
///
/// Each cycle sleeps to the next computed instant, sends one tick, and
/// reschedules - regardless of what the tick handler does with it. Missed
/// fires are not caught up; the next instant is always computed from "now"
/// at reschedule time. The task ends when the event loop goes away.
pub fn spawn(runtime: &Handle, tx: Sender<Event>) {
    runtime.spawn(async move {
        loop {
            let next = next_fire_after(Local::now());
            let wait = (next - Local::now()).to_std().unwrap_or_default();
            tracing::debug!("Next auto-refresh at {}", next.format("%H:%M:%S"));
            tokio::time::sleep(wait).await;
            if tx.send(Event::RefreshTick).is_err() {
                break;
            }
        }
    });
}
