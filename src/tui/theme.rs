//! Centralized theme module for TUI color constants and styles

use ratatui::prelude::*;

use crate::config::Config;

pub const TITLE_COLOR: Color = Color::Cyan;
pub const MUTED: Color = Color::Gray;
pub const INDEX_COLOR: Color = Color::DarkGray;
pub const ROW_ALT_BG: Color = Color::Indexed(235);
pub const STATUS_BAR_BG: Color = Color::Indexed(236);
pub const STATUS_KEY_COLOR: Color = Color::Cyan;
pub const FLASH_SUCCESS: Color = Color::Green;
pub const FLASH_ERROR: Color = Color::Red;
pub const GRABBED_COLOR: Color = Color::Yellow;
pub const QUALIFY_MARK: Color = Color::Green;

pub const HEADER_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);
pub const ROW_SELECTED: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for a team's rows, from its configured colors. Teams without valid
/// colors get the default style.
pub fn team_style(config: &Config, team: &str) -> Option<Style> {
    let (bg, fg) = config.team(team)?.colors()?;
    Some(
        Style::default()
            .bg(Color::Rgb(bg.0, bg.1, bg.2))
            .fg(Color::Rgb(fg.0, fg.1, fg.2)),
    )
}
