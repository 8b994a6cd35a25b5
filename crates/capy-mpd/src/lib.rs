//! capy-mpd - Minimal MPD client library
//!
//! Features:
//! - Bounded connect, read and write (no call can block forever)
//! - One short-lived connection per query round, closed on drop
//! - Only the commands a status line needs: `currentsong` and `status`

pub mod client;
pub mod error;
pub mod types;

pub use client::MpdClient;
pub use error::MpdError;
pub use types::{PlayState, Song, Status};

/// Port MPD listens on unless configured otherwise.
pub const DEFAULT_PORT: u16 = 6600;
