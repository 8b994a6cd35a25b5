//! Compiled-in settings for every data source and for the output.
//!
//! The process reads no configuration file; `Config::default()` is what runs.
//! Tests build their own values to point probes at fixture files.

use std::path::PathBuf;
use std::time::Duration;

pub const COLOR_DARK: &str = "#555555";
pub const COLOR_DEFAULT: &str = "#dddd00";
pub const COLOR_CRITICAL: &str = "#ff0000";

#[derive(Clone, Debug)]
pub struct Config {
    /// Directory holding the bar's XBM icons.
    pub icon_dir: PathBuf,
    pub colors: Colors,
    pub battery: BatteryConfig,
    pub mpd: MpdConfig,
    pub mixer: MixerConfig,
    pub notification: NotificationConfig,
    /// Sleep between cycles.
    pub interval: Duration,
    /// Longest a single probe may take before its segment is dropped.
    pub probe_timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct Colors {
    pub dark: String,
    pub default: String,
    pub critical: String,
}

#[derive(Clone, Debug)]
pub struct BatteryConfig {
    pub ac_online_path: PathBuf,
    pub capacity_path: PathBuf,
    /// At or below this the battery is critical.
    pub low_threshold: u32,
    /// Below this (and above low) the battery shows as half full.
    pub full_threshold: u32,
}

#[derive(Clone, Debug)]
pub struct MpdConfig {
    pub host: String,
    pub port: u16,
    pub connect_timeout: Duration,
    pub io_timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct MixerConfig {
    pub device: String,
    pub control: String,
    pub index: u32,
}

#[derive(Clone, Debug)]
pub struct NotificationConfig {
    pub app_name: String,
    pub icon: String,
    pub summary: String,
    pub body: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            icon_dir: PathBuf::from("/usr/share/icons/stlarch_icons"),
            colors: Colors::default(),
            battery: BatteryConfig::default(),
            mpd: MpdConfig::default(),
            mixer: MixerConfig::default(),
            notification: NotificationConfig::default(),
            interval: Duration::from_secs(1),
            probe_timeout: Duration::from_millis(500),
        }
    }
}

impl Default for Colors {
    fn default() -> Self {
        Colors {
            dark: COLOR_DARK.to_string(),
            default: COLOR_DEFAULT.to_string(),
            critical: COLOR_CRITICAL.to_string(),
        }
    }
}

impl Default for BatteryConfig {
    fn default() -> Self {
        BatteryConfig {
            ac_online_path: PathBuf::from("/sys/class/power_supply/ADP1/online"),
            capacity_path: PathBuf::from("/sys/class/power_supply/BAT0/capacity"),
            low_threshold: 5,
            full_threshold: 50,
        }
    }
}

impl Default for MpdConfig {
    fn default() -> Self {
        MpdConfig {
            host: "localhost".to_string(),
            port: capy_mpd::DEFAULT_PORT,
            connect_timeout: Duration::from_millis(200),
            io_timeout: Duration::from_millis(300),
        }
    }
}

impl Default for MixerConfig {
    fn default() -> Self {
        MixerConfig {
            device: "default".to_string(),
            control: "Master".to_string(),
            index: 0,
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        NotificationConfig {
            app_name: "CapyStatus".to_string(),
            icon: "dialog-critical".to_string(),
            summary: "Battery low!".to_string(),
            body: "Battery low!".to_string(),
        }
    }
}
