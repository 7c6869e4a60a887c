use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::scoring::ScoringConfig;

const LOGO_URL_BASE: &str = "https://schools.wiaawi.org/Directory/School/GetSchoolProfilePic";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Config {
    /// Display metadata keyed by team name as it appears in results
    #[serde(default)]
    pub teams: BTreeMap<String, TeamInfo>,

    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
}

impl Default for Config {
    fn default() -> Self {
        let teams = [
            ("Boscobel", 46, "#FF0000", "#FFFFFF"),
            ("Fennimore", 126, "#FFD700", "#000000"),
            ("Iowa-Grant", 173, "#8B0000", "#FFFFFF"),
            ("Brookwood", 54, "#000000", "#FF0000"),
        ]
        .into_iter()
        .map(|(name, org_id, color, text_color)| {
            (
                name.to_string(),
                TeamInfo {
                    org_id: Some(org_id),
                    color: Some(color.to_string()),
                    text_color: Some(text_color.to_string()),
                },
            )
        })
        .collect();

        Self {
            teams,
            scoring: Some(ScoringConfig::default()),
        }
    }
}

impl Config {
    /// Metadata for `team`. Unknown teams are simply unstyled.
    pub fn team(&self, team: &str) -> Option<&TeamInfo> {
        self.teams.get(team)
    }

    pub fn effective_scoring(&self) -> ScoringConfig {
        self.scoring.clone().unwrap_or_default()
    }
}

/// Display attributes for one school.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TeamInfo {
    /// School directory ID, used to build the logo URL
    #[serde(default)]
    pub org_id: Option<u32>,

    /// Background color, "#RRGGBB"
    #[serde(default)]
    pub color: Option<String>,

    /// Foreground color drawn on top of `color`, "#RRGGBB"
    #[serde(default)]
    pub text_color: Option<String>,
}

impl TeamInfo {
    pub fn logo_url(&self) -> Option<String> {
        self.org_id
            .map(|id| format!("{}?orgID={}", LOGO_URL_BASE, id))
    }

    /// Parsed (background, foreground) pair. None unless the background parses;
    /// a missing or bad foreground falls back to white.
    pub fn colors(&self) -> Option<(Rgb, Rgb)> {
        let bg = parse_hex_color(self.color.as_deref()?)?;
        let fg = self
            .text_color
            .as_deref()
            .and_then(parse_hex_color)
            .unwrap_or(Rgb(255, 255, 255));
        Some((bg, fg))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Parse "#RRGGBB" (leading '#' optional).
pub fn parse_hex_color(s: &str) -> Option<Rgb> {
    let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Validate team metadata. Returns all problems at once.
pub fn validate_teams(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for (name, info) in &config.teams {
        for (field, value) in [("color", &info.color), ("text_color", &info.text_color)] {
            if let Some(value) = value {
                if parse_hex_color(value).is_none() {
                    errors.push(format!(
                        "teams.{}.{}: invalid color '{}' - expected #RRGGBB",
                        name, field, value
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
