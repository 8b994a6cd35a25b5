//! The cycle driver.
//!
//! Every cycle queries the sources in a fixed order (player, mixer, battery,
//! clock) and emits one block array. A probe that fails or overruns its
//! time budget just leaves its segment out. Between cycles the loop sleeps
//! for the configured interval, or less if SIGUSR1 arrives.

mod guard;
mod sources;

pub use sources::{StatusSources, SystemSources};

use crate::config::Config;
use crate::i3bar::{self, Block};
use crate::services::battery::{self, AlertLatch};
use crate::services::notifications::Notifier;
use crate::services::{clock, mpd, volume};
use guard::ProbeGuard;
use log::{debug, info};
use std::io::{self, Write};
use std::sync::Arc;
use tokio::signal::unix::{SignalKind, signal};

/// Output of a single cycle.
#[derive(Debug)]
pub struct Cycle {
    pub blocks: Vec<Block>,
    /// The battery just became critical; raise the alert.
    pub battery_low: bool,
}

pub struct StatusLine<S: StatusSources> {
    sources: Arc<S>,
    config: Arc<Config>,
    latch: AlertLatch,
    player: ProbeGuard,
    mixer: ProbeGuard,
    battery: ProbeGuard,
}

impl<S: StatusSources> StatusLine<S> {
    pub fn new(sources: S, config: Arc<Config>) -> Self {
        let limit = config.probe_timeout;
        StatusLine {
            sources: Arc::new(sources),
            config,
            latch: AlertLatch::default(),
            player: ProbeGuard::new("mpd", limit),
            mixer: ProbeGuard::new("mixer", limit),
            battery: ProbeGuard::new("battery", limit),
        }
    }

    pub async fn cycle(&mut self) -> Cycle {
        let mut blocks = Vec::with_capacity(8);
        let mut battery_low = false;

        let sources = Arc::clone(&self.sources);
        let result = self.player.run(move || sources.player()).await;
        match self.player.settle(result) {
            Some(Some(reading)) => blocks.extend(mpd::render(&reading, &self.config)),
            Some(None) => debug!("MPD has no current song"),
            None => {}
        }

        let sources = Arc::clone(&self.sources);
        let result = self
            .mixer
            .run(move || sources.mixer())
            .await
            .and_then(|reading| volume::render(reading, &self.config));
        if let Some(mixer_blocks) = self.mixer.settle(result) {
            blocks.extend(mixer_blocks);
        }

        let sources = Arc::clone(&self.sources);
        let result = self.battery.run(move || sources.battery()).await;
        if let Some(reading) = self.battery.settle(result) {
            let state = battery::classify(reading, &self.config.battery);
            let (latch, alert) = self.latch.observe(state);
            self.latch = latch;
            battery_low = alert;
            blocks.extend(battery::render(reading, state, &self.config));
        }

        blocks.extend(clock::render(&self.sources.now(), &self.config));

        Cycle {
            blocks,
            battery_low,
        }
    }

    /// Emit cycles to stdout forever. Returns only when stdout is gone.
    pub async fn run(mut self, notifier: Notifier) -> io::Result<()> {
        let mut refresh = signal(SignalKind::user_defined1())?;
        let interval = self.config.interval;

        let stdout = io::stdout();
        i3bar::write_header(&mut stdout.lock())?;

        info!("Status line running, refreshing every {:?}", interval);

        loop {
            let cycle = self.cycle().await;
            if cycle.battery_low {
                notifier.battery_low();
            }
            emit(&mut stdout.lock(), &cycle)?;

            tokio::select! {
                _ = tokio::time::sleep(interval) => {}
                _ = refresh.recv() => debug!("SIGUSR1 received, refreshing early"),
            }
        }
    }
}

fn emit<W: Write>(out: &mut W, cycle: &Cycle) -> io::Result<()> {
    i3bar::write_cycle(out, &cycle.blocks)
}
