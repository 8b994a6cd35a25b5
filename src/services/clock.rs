use crate::config::Config;
use crate::functions::formatting::format_date;
use crate::i3bar::Block;
use crate::icons::Icon;
use chrono::{DateTime, Local};

pub fn render(now: &DateTime<Local>, config: &Config) -> Vec<Block> {
    let color = &config.colors.default;
    vec![
        Block::icon(Icon::Clock, &config.icon_dir, color),
        Block::text(&format_date(now), color),
    ]
}
