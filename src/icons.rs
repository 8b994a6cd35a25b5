use std::path::Path;

/// Icons used by the status line, named after their XBM files.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Clock,
    Ac,
    BatteryEmpty,
    BatteryHalf,
    BatteryFull,
    Play,
    Pause,
    Volume,
    VolumeMuted,
}

impl Icon {
    pub fn file_stem(self) -> &'static str {
        match self {
            Icon::Clock => "clock2",
            Icon::Ac => "ac1",
            Icon::BatteryEmpty => "batt1empty",
            Icon::BatteryHalf => "batt1half",
            Icon::BatteryFull => "batt1full",
            Icon::Play => "play2",
            Icon::Pause => "pause2",
            Icon::Volume => "vol1",
            Icon::VolumeMuted => "vol3",
        }
    }

    /// Full path of the icon inside `dir`.
    pub fn path(self, dir: &Path) -> String {
        dir.join(format!("{}.xbm", self.file_stem()))
            .to_string_lossy()
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_path() {
        let dir = Path::new("/usr/share/icons/stlarch_icons");
        assert_eq!(
            Icon::BatteryHalf.path(dir),
            "/usr/share/icons/stlarch_icons/batt1half.xbm"
        );
        assert_eq!(
            Icon::VolumeMuted.path(dir),
            "/usr/share/icons/stlarch_icons/vol3.xbm"
        );
    }
}
