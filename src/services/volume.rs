//! ALSA mixer probe.
//!
//! Opens the mixer on every call, reads the playback range, the current
//! volume and the front-left mute switch of the configured control, then
//! closes it again when the handle drops.

use crate::config::{Config, MixerConfig};
use crate::error::ProbeError;
use crate::i3bar::Block;
use crate::icons::Icon;
use alsa::mixer::{Mixer, SelemChannelId, SelemId};
use log::debug;

/// Volume status of the mixer control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MixerReading {
    pub min: i64,
    pub max: i64,
    pub volume: i64,
    pub unmuted: bool,
}

impl MixerReading {
    /// Volume rescaled to 0-100.
    ///
    /// Integer division truncates toward zero and the result is clamped to
    /// [0, 100]. An empty or inverted range has no percentage.
    pub fn percent(&self) -> Result<i64, ProbeError> {
        let span = self.max - self.min;
        if span <= 0 {
            return Err(ProbeError::EmptyVolumeRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok((100 * (self.volume - self.min) / span).clamp(0, 100))
    }
}

pub fn read(config: &MixerConfig) -> Result<MixerReading, ProbeError> {
    let mixer = Mixer::new(&config.device, false)?;

    let id = SelemId::new(&config.control, config.index);
    let selem = mixer
        .find_selem(&id)
        .ok_or_else(|| ProbeError::MixerControlMissing {
            name: config.control.clone(),
            index: config.index,
        })?;

    let (min, max) = selem.get_playback_volume_range();
    let volume = selem.get_playback_volume(SelemChannelId::FrontLeft)?;
    let unmuted = selem.get_playback_switch(SelemChannelId::FrontLeft)? != 0;

    let reading = MixerReading {
        min,
        max,
        volume,
        unmuted,
    };
    debug!("Mixer reading: {:?}", reading);
    Ok(reading)
}

pub fn render(reading: MixerReading, config: &Config) -> Result<Vec<Block>, ProbeError> {
    let percent = reading.percent()?;
    let icon = if reading.unmuted {
        Icon::Volume
    } else {
        Icon::VolumeMuted
    };

    Ok(vec![
        Block::icon(icon, &config.icon_dir, &config.colors.default),
        Block::text(&percent.to_string(), &config.colors.default),
    ])
}
