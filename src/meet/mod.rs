pub mod standings;

pub use standings::Standings;

use crate::results::{parse_results_with_stats, Finisher, ParseStats};
use crate::scoring::ScoringConfig;

/// Owner of the finish-order list.
///
/// Holds the editable current order plus the snapshot taken at the last
/// load, which [`Meet::reset`] restores. All derived data comes from
/// [`Meet::standings`] and is rebuilt from scratch on each call.
#[derive(Debug, Clone, Default)]
pub struct Meet {
    current: Vec<Finisher>,
    original: Vec<Finisher>,
    scoring: ScoringConfig,
}

impl Meet {
    pub fn new(scoring: ScoringConfig) -> Self {
        Self {
            current: Vec::new(),
            original: Vec::new(),
            scoring,
        }
    }

    /// Parse `text` and replace both the current order and the reset snapshot.
    pub fn load(&mut self, text: &str) -> ParseStats {
        let (finishers, stats) = parse_results_with_stats(text);
        self.original = finishers.clone();
        self.current = finishers;
        stats
    }

    /// Remove the finisher at `from` and reinsert it at `to`, shifting the
    /// runners in between by one place.
    ///
    /// Returns false and leaves the order untouched if either index is out of
    /// range. The reset snapshot is never modified.
    pub fn move_finisher(&mut self, from: usize, to: usize) -> bool {
        let len = self.current.len();
        if from >= len || to >= len {
            return false;
        }
        if from != to {
            let moved = self.current.remove(from);
            self.current.insert(to, moved);
        }
        true
    }

    /// Restore the order captured at the last load. Does not re-parse.
    pub fn reset(&mut self) {
        self.current = self.original.clone();
    }

    pub fn finishers(&self) -> &[Finisher] {
        &self.current
    }

    pub fn original(&self) -> &[Finisher] {
        &self.original
    }

    pub fn scoring_config(&self) -> &ScoringConfig {
        &self.scoring
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// True when the current order differs from the loaded snapshot.
    pub fn is_modified(&self) -> bool {
        self.current != self.original
    }

    pub fn standings(&self) -> Standings {
        Standings::compute(&self.current, &self.scoring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "x\tAlice\tx\tBoscobel\t18:00\n\
                          x\tBob\tx\tFennimore\t18:10\n\
                          x\tCarl\tx\tBoscobel\t18:20";

    fn names(meet: &Meet) -> Vec<&str> {
        meet.finishers().iter().map(|f| f.name.as_str()).collect()
    }

    fn loaded() -> Meet {
        let mut meet = Meet::default();
        meet.load(SAMPLE);
        meet
    }

    #[test]
    fn test_load_sets_current_and_original() {
        let meet = loaded();
        assert_eq!(names(&meet), vec!["Alice", "Bob", "Carl"]);
        assert_eq!(meet.original(), meet.finishers());
        assert!(!meet.is_modified());
    }

    #[test]
    fn test_move_up() {
        let mut meet = loaded();
        assert!(meet.move_finisher(2, 0));
        assert_eq!(names(&meet), vec!["Carl", "Alice", "Bob"]);
        assert!(meet.is_modified());
    }

    #[test]
    fn test_move_down() {
        let mut meet = loaded();
        assert!(meet.move_finisher(0, 2));
        assert_eq!(names(&meet), vec!["Bob", "Carl", "Alice"]);
    }

    #[test]
    fn test_move_same_index_noop() {
        let mut meet = loaded();
        assert!(meet.move_finisher(1, 1));
        assert!(!meet.is_modified());
    }

    #[test]
    fn test_move_out_of_range_rejected() {
        let mut meet = loaded();
        assert!(!meet.move_finisher(3, 0));
        assert!(!meet.move_finisher(0, 3));
        assert_eq!(names(&meet), vec!["Alice", "Bob", "Carl"]);
    }

    #[test]
    fn test_move_does_not_touch_original() {
        let mut meet = loaded();
        meet.move_finisher(2, 0);
        let original: Vec<&str> = meet.original().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(original, vec!["Alice", "Bob", "Carl"]);
    }

    #[test]
    fn test_reset_restores_loaded_order() {
        let mut meet = loaded();
        meet.move_finisher(2, 0);
        meet.move_finisher(1, 2);
        meet.reset();
        assert_eq!(names(&meet), vec!["Alice", "Bob", "Carl"]);
        assert!(!meet.is_modified());
    }

    #[test]
    fn test_reload_replaces_snapshot() {
        let mut meet = loaded();
        meet.move_finisher(2, 0);
        meet.load("x\tDana\tx\tBrookwood\t19:00");
        meet.reset();
        assert_eq!(names(&meet), vec!["Dana"]);
    }

    #[test]
    fn test_empty_meet() {
        let mut meet = Meet::default();
        assert!(meet.is_empty());
        assert!(!meet.move_finisher(0, 0));
        meet.reset();
        let standings = meet.standings();
        assert!(standings.team_scores.is_empty());
        assert!(standings.qualifiers.is_empty());
    }
}
