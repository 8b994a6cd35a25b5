//! Error types for the status probes

use std::path::PathBuf;
use std::time::Duration;

/// Why a probe produced no segment this cycle.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unexpected content {value:?} in {path}")]
    Parse { path: PathBuf, value: String },

    #[error("Mixer error: {0}")]
    Mixer(#[from] alsa::Error),

    #[error("Mixer control {name},{index} not found")]
    MixerControlMissing { name: String, index: u32 },

    #[error("Mixer volume range [{min}, {max}] is empty")]
    EmptyVolumeRange { min: i64, max: i64 },

    #[error("MPD error: {0}")]
    Mpd(#[from] capy_mpd::MpdError),

    #[error("{probe} probe timed out after {limit:?}")]
    TimedOut { probe: &'static str, limit: Duration },

    #[error("{probe} probe is still blocked from an earlier cycle")]
    Busy { probe: &'static str },

    #[error("{probe} probe panicked")]
    Panicked { probe: &'static str },
}
