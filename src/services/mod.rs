//! Data sources for the status line.
//!
//! Each probe is a blocking `read` returning a typed reading, plus a pure
//! `render` turning that reading into i3bar blocks.
//!
//! - `mpd` - Music Player Daemon song and playback state
//! - `volume` - ALSA mixer level and mute switch
//! - `battery` - AC adapter and battery capacity via sysfs
//! - `clock` - Local date and time
//! - `notifications` - Low-battery desktop alert

pub mod battery;
pub mod clock;
pub mod mpd;
pub mod notifications;
pub mod volume;
