use crate::config::Config;
use crate::error::ProbeError;
use crate::services::battery::{self, BatteryReading};
use crate::services::mpd::{self, PlayerReading};
use crate::services::volume::{self, MixerReading};
use chrono::{DateTime, Local};
use std::sync::Arc;

/// Everything a cycle queries. Calls may block; the driver bounds them.
pub trait StatusSources: Send + Sync + 'static {
    fn player(&self) -> Result<Option<PlayerReading>, ProbeError>;

    fn mixer(&self) -> Result<MixerReading, ProbeError>;

    fn battery(&self) -> Result<BatteryReading, ProbeError>;

    fn now(&self) -> DateTime<Local>;
}

/// The real machine: MPD over TCP, ALSA, sysfs and the system clock.
pub struct SystemSources {
    config: Arc<Config>,
}

impl SystemSources {
    pub fn new(config: Arc<Config>) -> Self {
        SystemSources { config }
    }
}

impl StatusSources for SystemSources {
    fn player(&self) -> Result<Option<PlayerReading>, ProbeError> {
        mpd::read(&self.config.mpd)
    }

    fn mixer(&self) -> Result<MixerReading, ProbeError> {
        volume::read(&self.config.mixer)
    }

    fn battery(&self) -> Result<BatteryReading, ProbeError> {
        battery::read(&self.config.battery)
    }

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
