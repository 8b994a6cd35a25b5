//! Core types for capy-mpd

/// Playback state reported by `status`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlayState {
    Play,
    Pause,
    #[default]
    Stop,
}

impl PlayState {
    pub fn from_str(s: &str) -> Self {
        match s {
            "play" => PlayState::Play,
            "pause" => PlayState::Pause,
            _ => PlayState::Stop,
        }
    }
}

/// Song returned by `currentsong`, kept as raw key/value pairs.
///
/// MPD may repeat a tag (several `Artist:` lines); lookups return the first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Song {
    pub pairs: Vec<(String, String)>,
}

impl Song {
    /// First value of a tag, matched case-insensitively like MPD does.
    pub fn tag(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn artist(&self) -> Option<&str> {
        self.tag("Artist")
    }

    pub fn title(&self) -> Option<&str> {
        self.tag("Title")
    }

    pub fn file(&self) -> Option<&str> {
        self.tag("file")
    }
}

/// Subset of the `status` response a status line cares about
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Status {
    pub state: PlayState,
    /// Mixer volume as MPD sees it, `None` when MPD has no mixer (reported as -1)
    pub volume: Option<u8>,
}

impl Status {
    pub(crate) fn from_pairs(pairs: &[(String, String)]) -> Option<Self> {
        let state = pairs
            .iter()
            .find(|(key, _)| key == "state")
            .map(|(_, value)| PlayState::from_str(value))?;

        let volume = pairs
            .iter()
            .find(|(key, _)| key == "volume")
            .and_then(|(_, value)| value.parse::<i32>().ok())
            .and_then(|v| u8::try_from(v).ok());

        Some(Status { state, volume })
    }
}
