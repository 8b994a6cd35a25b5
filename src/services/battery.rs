//! Battery and AC adapter probe.
//!
//! Reads the AC `online` flag and the battery `capacity` from sysfs on every
//! call (nothing is cached) and classifies the result. The low-battery alert
//! latch is threaded through `AlertLatch` instead of living in a global.

use crate::config::{BatteryConfig, Config};
use crate::error::ProbeError;
use crate::i3bar::Block;
use crate::icons::Icon;
use log::debug;
use std::fs;
use std::path::Path;

/// Raw values read from sysfs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatteryReading {
    pub ac_online: bool,
    pub capacity: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatteryState {
    /// Running on AC, capacity irrelevant.
    Ac,
    Critical,
    Half,
    Full,
}

/// Read both sysfs files.
pub fn read(config: &BatteryConfig) -> Result<BatteryReading, ProbeError> {
    let online = read_file(&config.ac_online_path)?;
    let capacity_raw = read_file(&config.capacity_path)?;

    let capacity = capacity_raw
        .trim()
        .parse::<u32>()
        .map_err(|_| ProbeError::Parse {
            path: config.capacity_path.clone(),
            value: capacity_raw.clone(),
        })?;

    let reading = BatteryReading {
        ac_online: online.starts_with('1'),
        capacity,
    };
    debug!("Battery reading: {:?}", reading);
    Ok(reading)
}

fn read_file(path: &Path) -> Result<String, ProbeError> {
    fs::read_to_string(path).map_err(|source| ProbeError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Classify a reading. AC wins regardless of capacity.
pub fn classify(reading: BatteryReading, config: &BatteryConfig) -> BatteryState {
    if reading.ac_online {
        BatteryState::Ac
    } else if reading.capacity <= config.low_threshold {
        BatteryState::Critical
    } else if reading.capacity < config.full_threshold {
        BatteryState::Half
    } else {
        BatteryState::Full
    }
}

/// Tracks whether the battery was fine on the previous observation, so the
/// low-battery alert fires once per entry into the critical state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlertLatch {
    battery_ok: bool,
}

impl Default for AlertLatch {
    fn default() -> Self {
        AlertLatch { battery_ok: true }
    }
}

impl AlertLatch {
    /// Feed one observed state. Returns the new latch and whether to alert now.
    pub fn observe(self, state: BatteryState) -> (AlertLatch, bool) {
        match state {
            BatteryState::Critical => (AlertLatch { battery_ok: false }, self.battery_ok),
            _ => (AlertLatch { battery_ok: true }, false),
        }
    }
}

pub fn render(reading: BatteryReading, state: BatteryState, config: &Config) -> Vec<Block> {
    let colors = &config.colors;
    let (icon, color) = match state {
        BatteryState::Ac => (Icon::Ac, &colors.default),
        BatteryState::Critical => (Icon::BatteryEmpty, &colors.critical),
        BatteryState::Half => (Icon::BatteryHalf, &colors.default),
        BatteryState::Full => (Icon::BatteryFull, &colors.default),
    };

    vec![
        Block::icon(icon, &config.icon_dir, color),
        Block::text(&reading.capacity.to_string(), color),
    ]
}
