//! CapyStatus - i3bar status line
//!
//! Polls MPD, the ALSA mixer, the battery and the clock once per second and
//! streams the result to the bar on stdout. Diagnostics go to stderr.

mod config;
mod error;
mod functions;
mod i3bar;
mod icons;
mod services;
mod status_line;

use config::Config;
use log::info;
use services::notifications::Notifier;
use status_line::{StatusLine, SystemSources};
use std::error::Error;
use std::sync::Arc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    info!("Starting CapyStatus...");

    let config = Arc::new(Config::default());
    let notifier = Notifier::connect(config.notification.clone()).await;
    let line = StatusLine::new(SystemSources::new(Arc::clone(&config)), config);

    line.run(notifier).await?;

    Ok(())
}
