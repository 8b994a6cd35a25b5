//! Music player probe.
//!
//! Uses capy-mpd for one short connection per cycle. Any connection or
//! query failure means no player segment this cycle.

use crate::config::{Config, MpdConfig};
use crate::error::ProbeError;
use crate::functions::formatting::{strip_quotes_and_newlines, truncate_chars};
use crate::i3bar::Block;
use crate::icons::Icon;
use capy_mpd::{MpdClient, PlayState, Song};

/// Longest display string the bar gets.
const MAX_TITLE_CHARS: usize = 63;

/// What the bar shows for the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerReading {
    /// `artist - title`, sanitized; empty unless playing or paused.
    pub title: String,
    pub state: PlayState,
}

impl PlayerReading {
    pub fn new(song: &Song, state: PlayState) -> Self {
        let title = match state {
            PlayState::Play | PlayState::Pause => display_title(song),
            PlayState::Stop => String::new(),
        };
        PlayerReading { title, state }
    }
}

fn display_title(song: &Song) -> String {
    let mut title = format!(
        "{} - {}",
        song.artist().unwrap_or_default(),
        song.title().unwrap_or_default()
    );
    strip_quotes_and_newlines(&mut title);
    truncate_chars(&mut title, MAX_TITLE_CHARS);
    title
}

/// Query the daemon. `Ok(None)` when nothing is queued.
pub fn read(config: &MpdConfig) -> Result<Option<PlayerReading>, ProbeError> {
    let mut client = MpdClient::connect(
        &config.host,
        config.port,
        config.connect_timeout,
        config.io_timeout,
    )?;

    let Some(song) = client.current_song()? else {
        return Ok(None);
    };
    let status = client.status()?;

    Ok(Some(PlayerReading::new(&song, status.state)))
}

pub fn render(reading: &PlayerReading, config: &Config) -> Vec<Block> {
    let color = &config.colors.dark;
    let mut blocks = Vec::with_capacity(2);

    match reading.state {
        PlayState::Play => blocks.push(Block::icon(Icon::Play, &config.icon_dir, color)),
        PlayState::Pause => blocks.push(Block::icon(Icon::Pause, &config.icon_dir, color)),
        PlayState::Stop => {}
    }
    blocks.push(Block::text(&reading.title, color));

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(artist: &str, title: &str) -> Song {
        Song {
            pairs: vec![
                ("Artist".to_string(), artist.to_string()),
                ("Title".to_string(), title.to_string()),
            ],
        }
    }

    #[test]
    fn test_title_is_sanitized() {
        let reading = PlayerReading::new(&song("The \"Band\"", "Line\nBreak"), PlayState::Play);
        assert_eq!(reading.title, "The Band - LineBreak");
    }

    #[test]
    fn test_missing_tags_render_empty() {
        let reading = PlayerReading::new(&Song::default(), PlayState::Pause);
        assert_eq!(reading.title, " - ");
    }

    #[test]
    fn test_title_is_limited() {
        let long = "x".repeat(200);
        let reading = PlayerReading::new(&song("A", &long), PlayState::Play);
        assert_eq!(reading.title.chars().count(), MAX_TITLE_CHARS);
        assert!(reading.title.starts_with("A - xxx"));
    }

    #[test]
    fn test_stopped_forces_empty_title() {
        let reading = PlayerReading::new(&song("Artist", "Title"), PlayState::Stop);
        assert_eq!(reading.title, "");
    }

    #[test]
    fn test_render_by_state() {
        let config = Config::default();

        let playing = PlayerReading::new(&song("A", "B"), PlayState::Play);
        let blocks = render(&playing, &config);
        assert_eq!(blocks.len(), 2);
        assert_eq!(
            blocks[0].icon.as_deref(),
            Some("/usr/share/icons/stlarch_icons/play2.xbm")
        );
        assert_eq!(blocks[1].full_text, "A - B ");
        assert!(blocks.iter().all(|b| b.color == config.colors.dark));

        let paused = PlayerReading::new(&song("A", "B"), PlayState::Pause);
        let blocks = render(&paused, &config);
        assert_eq!(
            blocks[0].icon.as_deref(),
            Some("/usr/share/icons/stlarch_icons/pause2.xbm")
        );

        let stopped = PlayerReading::new(&song("A", "B"), PlayState::Stop);
        let blocks = render(&stopped, &config);
        assert_eq!(blocks, vec![Block::text("", &config.colors.dark)]);
    }

    #[test]
    fn test_read_unreachable_daemon_fails() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let config = MpdConfig {
            host: "127.0.0.1".to_string(),
            port,
            ..MpdConfig::default()
        };

        assert!(matches!(read(&config), Err(ProbeError::Mpd(_))));
    }
}
