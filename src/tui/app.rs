use crate::config::Config;
use crate::meet::{Meet, Standings};
use anyhow::Context;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    MoveInput,
    Help,
}

pub struct App {
    pub meet: Meet,
    pub standings: Standings,
    pub config: Config,
    pub source: Option<PathBuf>,
    pub table_state: ratatui::widgets::TableState,
    pub grabbed: bool,
    pub input_mode: InputMode,
    pub move_input: String,
    pub flash_message: Option<(String, Instant)>,
    pub should_quit: bool,
    pub verbose: bool,
}

impl App {
    pub fn new(meet: Meet, config: Config, source: Option<PathBuf>, verbose: bool) -> Self {
        let mut table_state = ratatui::widgets::TableState::default();
        if !meet.is_empty() {
            table_state.select(Some(0));
        }
        let standings = meet.standings();

        Self {
            meet,
            standings,
            config,
            source,
            table_state,
            grabbed: false,
            input_mode: InputMode::Normal,
            move_input: String::new(),
            flash_message: None,
            should_quit: false,
            verbose,
        }
    }

    /// Recompute every derived view from the current order.
    fn refresh_standings(&mut self) {
        self.standings = self.meet.standings();
    }

    pub fn selected(&self) -> Option<usize> {
        self.table_state
            .selected()
            .filter(|&i| i < self.meet.len())
    }

    pub fn next_row(&mut self) {
        if self.grabbed {
            self.move_selected_down();
            return;
        }
        let len = self.meet.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i >= len - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn previous_row(&mut self) {
        if self.grabbed {
            self.move_selected_up();
            return;
        }
        let len = self.meet.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.table_state.select(Some(i));
    }

    /// Pick up the selected runner, or drop it if already held.
    pub fn toggle_grab(&mut self) {
        if self.selected().is_none() {
            return;
        }
        self.grabbed = !self.grabbed;
        if !self.grabbed {
            if let Some(i) = self.selected() {
                let name = self.meet.finishers()[i].name.clone();
                self.show_flash(format!("Placed: {} in {}", name, ordinal(i + 1)));
            }
        }
    }

    /// Move the selected runner to `to`, keeping it selected.
    pub fn move_selected_to(&mut self, to: usize) -> bool {
        let Some(from) = self.selected() else {
            return false;
        };
        if !self.meet.move_finisher(from, to) {
            return false;
        }
        if self.verbose {
            crate::buffered_eprintln!("Moved place {} to place {}", from + 1, to + 1);
        }
        self.table_state.select(Some(to));
        self.refresh_standings();
        true
    }

    pub fn move_selected_up(&mut self) {
        if let Some(i) = self.selected() {
            if i > 0 {
                self.move_selected_to(i - 1);
            }
        }
    }

    pub fn move_selected_down(&mut self) {
        if let Some(i) = self.selected() {
            self.move_selected_to(i + 1);
        }
    }

    /// Restore the order from the last load
    pub fn reset(&mut self) {
        self.grabbed = false;
        self.meet.reset();
        self.refresh_standings();
        self.clamp_selection();
        self.show_flash("Reset to loaded order".to_string());
    }

    /// Re-read the results file and parse it fresh.
    pub fn reload(&mut self) -> anyhow::Result<()> {
        let Some(path) = self.source.clone() else {
            anyhow::bail!("results were read from stdin");
        };
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        self.grabbed = false;
        let stats = self.meet.load(&text);
        if self.verbose {
            crate::buffered_eprintln!(
                "Reloaded {}: {} finishers, {} lines dropped",
                path.display(),
                stats.kept,
                stats.dropped
            );
        }
        self.refresh_standings();
        self.clamp_selection();
        self.show_flash(format!("Loaded {} finishers", stats.kept));
        Ok(())
    }

    fn clamp_selection(&mut self) {
        let len = self.meet.len();
        if len == 0 {
            self.table_state.select(None);
        } else {
            match self.table_state.selected() {
                Some(i) if i >= len => self.table_state.select(Some(len - 1)),
                None => self.table_state.select(Some(0)),
                _ => {}
            }
        }
    }

    /// Start move-to-place input mode
    pub fn start_move_input(&mut self) {
        if self.selected().is_some() {
            self.grabbed = false;
            self.input_mode = InputMode::MoveInput;
            self.move_input.clear();
        }
    }

    /// Confirm the typed place (1-based) and move the selected runner there
    pub fn confirm_move_input(&mut self) {
        let input = std::mem::take(&mut self.move_input);
        self.input_mode = InputMode::Normal;

        let place = match input.trim().parse::<usize>() {
            Ok(p) if p >= 1 && p <= self.meet.len() => p,
            _ => {
                self.show_flash(format!(
                    "Invalid place: '{}' (1-{})",
                    input.trim(),
                    self.meet.len()
                ));
                return;
            }
        };

        if self.move_selected_to(place - 1) {
            let name = self.meet.finishers()[place - 1].name.clone();
            self.show_flash(format!("Placed: {} in {}", name, ordinal(place)));
        }
    }

    pub fn cancel_move_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.move_input.clear();
    }

    pub fn update_flash(&mut self) {
        if let Some((_, timestamp)) = self.flash_message {
            if timestamp.elapsed().as_secs() >= 3 {
                self.flash_message = None;
            }
        }
    }

    pub fn show_flash(&mut self, msg: String) {
        self.flash_message = Some((msg, Instant::now()));
    }

    /// Show help overlay
    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    /// Dismiss help overlay
    pub fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }
}

fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}
