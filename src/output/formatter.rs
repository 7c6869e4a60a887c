use std::io::IsTerminal;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use terminal_size::{terminal_size, Width};

use crate::config::Config;
use crate::meet::Standings;
use crate::results::Finisher;
use crate::scoring::{Qualifier, TeamScore};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

fn join_places(places: &[usize]) -> String {
    places
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Paint `text` in a team's colors when the team has valid metadata.
fn team_styled(text: &str, team: &str, config: &Config, use_colors: bool) -> String {
    if !use_colors {
        return text.to_string();
    }
    match config.team(team).and_then(|info| info.colors()) {
        Some((bg, fg)) => text
            .truecolor(fg.0, fg.1, fg.2)
            .on_truecolor(bg.0, bg.1, bg.2)
            .to_string(),
        None => text.to_string(),
    }
}

fn finisher_line(index: usize, finisher: &Finisher, team_position: Option<usize>) -> String {
    let position = team_position
        .map(|p| format!(" #{}", p))
        .unwrap_or_default();
    format!(
        "{:>3}. {} ({}{}) - {}",
        index + 1,
        finisher.name,
        finisher.team,
        position,
        finisher.time
    )
}

/// Format the finish order, one runner per line:
/// "  1. Alice (Boscobel #1) - 18:00"
pub fn format_finish_order(standings: &Standings, config: &Config, use_colors: bool) -> String {
    if standings.finishers.is_empty() {
        return "No finishers loaded.".to_string();
    }

    let term_width = get_terminal_width();

    standings
        .finishers
        .iter()
        .enumerate()
        .map(|(idx, finisher)| {
            let line = finisher_line(idx, finisher, standings.team_position(idx));
            let line = match term_width {
                Some(width) if width > 20 => truncate(&line, width),
                _ => line,
            };
            team_styled(&line, &finisher.team, config, use_colors)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn team_score_line(score: &TeamScore) -> String {
    format!(
        "{}: {} (places {}); Displacers: {}",
        score.team,
        score.total,
        join_places(&score.scoring),
        join_places(&score.displacers)
    )
}

/// Format ranked team scores:
/// "Fennimore: 2 (places 2); Displacers: "
pub fn format_team_scores(standings: &Standings, config: &Config, use_colors: bool) -> String {
    if standings.team_scores.is_empty() {
        return "No teams scored.".to_string();
    }

    standings
        .team_scores
        .iter()
        .map(|score| team_styled(&team_score_line(score), &score.team, config, use_colors))
        .collect::<Vec<_>>()
        .join("\n")
}

fn qualifier_line(rank: usize, qualifier: &Qualifier) -> String {
    format!(
        "{:>2}. {} ({}) - Place {}",
        rank + 1,
        qualifier.finisher.name,
        qualifier.finisher.team,
        qualifier.place
    )
}

/// Format individual qualifiers: " 1. Dana (Brookwood) - Place 4"
pub fn format_qualifiers(standings: &Standings) -> String {
    if standings.qualifiers.is_empty() {
        return "No individual qualifiers.".to_string();
    }

    standings
        .qualifiers
        .iter()
        .enumerate()
        .map(|(rank, qualifier)| qualifier_line(rank, qualifier))
        .collect::<Vec<_>>()
        .join("\n")
}

/// All three sections with headings.
pub fn format_standings(standings: &Standings, config: &Config, use_colors: bool) -> String {
    let heading = |title: &str| {
        if use_colors {
            title.bold().to_string()
        } else {
            title.to_string()
        }
    };

    format!(
        "{}\n{}\n\n{}\n{}\n\n{}\n{}",
        heading("Finish Order"),
        format_finish_order(standings, config, use_colors),
        heading("Team Scores"),
        format_team_scores(standings, config, use_colors),
        heading("Individual Qualifiers"),
        format_qualifiers(standings)
    )
}

/// Format team scores as tab-separated values for scripting
/// Columns: rank, team, total, scoring places, displacers (no headers, no colors)
pub fn format_tsv(standings: &Standings) -> String {
    standings
        .team_scores
        .iter()
        .enumerate()
        .map(|(rank, score)| {
            format!(
                "{}\t{}\t{}\t{}\t{}",
                rank + 1,
                score.team,
                score.total,
                join_places(&score.scoring),
                join_places(&score.displacers)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Serialize)]
struct JsonTeamScore<'a> {
    #[serde(flatten)]
    score: &'a TeamScore,
    #[serde(skip_serializing_if = "Option::is_none")]
    logo_url: Option<String>,
}

#[derive(Serialize)]
struct JsonFinisher<'a> {
    place: usize,
    #[serde(flatten)]
    finisher: &'a Finisher,
    team_position: Option<usize>,
}

#[derive(Serialize)]
struct JsonStandings<'a> {
    finishers: Vec<JsonFinisher<'a>>,
    team_scores: Vec<JsonTeamScore<'a>>,
    qualifiers: &'a [Qualifier],
}

/// Pretty JSON document with places, team positions and logo URLs filled in.
pub fn format_json(standings: &Standings, config: &Config) -> Result<String> {
    let doc = JsonStandings {
        finishers: standings
            .finishers
            .iter()
            .enumerate()
            .map(|(idx, finisher)| JsonFinisher {
                place: idx + 1,
                finisher,
                team_position: standings.team_position(idx),
            })
            .collect(),
        team_scores: standings
            .team_scores
            .iter()
            .map(|score| JsonTeamScore {
                score,
                logo_url: config.team(&score.team).and_then(|info| info.logo_url()),
            })
            .collect(),
        qualifiers: &standings.qualifiers,
    };

    serde_json::to_string_pretty(&doc).context("Failed to serialize standings")
}
