//! System-tray thread: a persistent blocking loop fed one-way over a
//! channel for the whole process lifetime. Icon compositing happens behind
//! `TrayBackend`, outside this crate.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use crate::surface::{TrayIcon, TraySurface};

#[derive(Debug)]
pub enum TrayCommand {
    Update { icon: TrayIcon, tooltip: String },
    Shutdown,
}

/// Renders updates into the OS tray. Implementations live at the edge of
/// the application.
pub trait TrayBackend: Send {
    fn render(&mut self, icon: &TrayIcon, tooltip: &str);
}

/// Sending side of the tray channel; the `TraySurface` the event loop
/// writes to. Sends are fire-and-forget - a stopped tray drops them.
#[derive(Debug, Clone)]
pub struct TrayHandle {
    tx: Sender<TrayCommand>,
}

impl TrayHandle {
    pub fn shutdown(&self) {
        let _ = self.tx.send(TrayCommand::Shutdown);
    }
}

impl TraySurface for TrayHandle {
    fn update(&mut self, icon: &TrayIcon, tooltip: &str) {
        let _ = self.tx.send(TrayCommand::Update {
            icon: icon.clone(),
            tooltip: tooltip.to_string(),
        });
    }
}

/// Spawn the tray loop. It runs until `Shutdown` arrives or every handle
/// is dropped; hiding the window does not stop it.
pub fn spawn(mut backend: impl TrayBackend + 'static) -> std::io::Result<(TrayHandle, JoinHandle<()>)> {
    let (tx, rx) = mpsc::channel();
    let thread = thread::Builder::new()
        .name("skycast-tray".to_string())
        .spawn(move || run(rx, &mut backend))?;
    Ok((TrayHandle { tx }, thread))
}

fn run(rx: Receiver<TrayCommand>, backend: &mut dyn TrayBackend) {
    while let Ok(command) = rx.recv() {
        match command {
            TrayCommand::Update { icon, tooltip } => backend.render(&icon, &tooltip),
            TrayCommand::Shutdown => break,
        }
    }
    tracing::debug!("Tray loop stopped");
}
