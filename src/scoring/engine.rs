use std::collections::HashMap;

use serde::Serialize;

use super::config::ScoringConfig;
use crate::results::Finisher;

/// A team's score derived from the overall places of its finishers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamScore {
    pub team: String,
    pub total: usize,
    pub scoring: Vec<usize>,    // Best places, summed into total
    pub displacers: Vec<usize>, // Next places, not counted
}

impl TeamScore {
    /// Number of runners that scored. Fewer than the configured count is not an error.
    pub fn scorers(&self) -> usize {
        self.scoring.len()
    }
}

/// Compute team scores from the finish order.
///
/// A finisher's overall place is its 1-based index; time is never consulted.
/// Teams are returned in first-appearance order, which is the order
/// [`rank_teams`] preserves for equal totals. Teams with fewer runners than
/// the scoring count are scored with whatever they have.
pub fn calculate_team_scores(finishers: &[Finisher], config: &ScoringConfig) -> Vec<TeamScore> {
    let scoring_places = config.scoring_places();
    let displacers = config.displacers();

    let mut order: Vec<&str> = Vec::new();
    let mut places: HashMap<&str, Vec<usize>> = HashMap::new();
    for (index, finisher) in finishers.iter().enumerate() {
        let team = finisher.team.as_str();
        places
            .entry(team)
            .or_insert_with(|| {
                order.push(team);
                Vec::new()
            })
            .push(index + 1);
    }

    order
        .into_iter()
        .map(|team| {
            let mut team_places = places.remove(team).unwrap_or_default();
            team_places.sort();

            let scoring_end = scoring_places.min(team_places.len());
            let displacer_end = scoring_places
                .saturating_add(displacers)
                .min(team_places.len());
            let scoring = team_places[..scoring_end].to_vec();
            let displacers = team_places[scoring_end..displacer_end].to_vec();

            TeamScore {
                team: team.to_string(),
                total: scoring.iter().sum(),
                scoring,
                displacers,
            }
        })
        .collect()
}

/// Order teams by total ascending (lowest score wins).
///
/// Ties are not broken: the sort is stable, so tied teams keep the order
/// they were produced in.
pub fn rank_teams(mut scores: Vec<TeamScore>) -> Vec<TeamScore> {
    scores.sort_by_key(|score| score.total);
    scores
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finishers(teams: &[&str]) -> Vec<Finisher> {
        teams
            .iter()
            .enumerate()
            .map(|(i, team)| Finisher::new(format!("Runner {}", i + 1), *team, ""))
            .collect()
    }

    fn score_for<'a>(scores: &'a [TeamScore], team: &str) -> &'a TeamScore {
        scores.iter().find(|s| s.team == team).unwrap()
    }

    #[test]
    fn test_small_meet() {
        let list = finishers(&["Boscobel", "Fennimore", "Boscobel"]);
        let scores = calculate_team_scores(&list, &ScoringConfig::default());

        let boscobel = score_for(&scores, "Boscobel");
        assert_eq!(boscobel.scoring, vec![1, 3]);
        assert_eq!(boscobel.total, 4);
        assert!(boscobel.displacers.is_empty());

        let fennimore = score_for(&scores, "Fennimore");
        assert_eq!(fennimore.scoring, vec![2]);
        assert_eq!(fennimore.total, 2);
    }

    #[test]
    fn test_full_team_with_displacers() {
        // A runs places 1-8, B fills place 9
        let list = finishers(&["A", "A", "A", "A", "A", "A", "A", "A", "B"]);
        let scores = calculate_team_scores(&list, &ScoringConfig::default());

        let a = score_for(&scores, "A");
        assert_eq!(a.scoring, vec![1, 2, 3, 4, 5]);
        assert_eq!(a.total, 15);
        assert_eq!(a.displacers, vec![6, 7]);
        assert_eq!(a.scorers(), 5);
    }

    #[test]
    fn test_six_runners_single_displacer() {
        let list = finishers(&["A", "B", "A", "A", "B", "A", "A", "A"]);
        let scores = calculate_team_scores(&list, &ScoringConfig::default());

        let a = score_for(&scores, "A");
        assert_eq!(a.scoring, vec![1, 3, 4, 6, 7]);
        assert_eq!(a.total, 21);
        assert_eq!(a.displacers, vec![8]);
    }

    #[test]
    fn test_first_appearance_order() {
        let list = finishers(&["B", "A", "C", "A"]);
        let teams: Vec<String> = calculate_team_scores(&list, &ScoringConfig::default())
            .into_iter()
            .map(|s| s.team)
            .collect();
        assert_eq!(teams, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_rank_ascending_total() {
        let list = finishers(&["Boscobel", "Fennimore", "Boscobel"]);
        let ranked = rank_teams(calculate_team_scores(&list, &ScoringConfig::default()));
        assert_eq!(ranked[0].team, "Fennimore");
        assert_eq!(ranked[1].team, "Boscobel");
    }

    #[test]
    fn test_rank_ties_keep_first_appearance() {
        // X: 1 + 4 = 5, Y: 2 + 3 = 5
        let list = finishers(&["X", "Y", "Y", "X"]);
        let ranked = rank_teams(calculate_team_scores(&list, &ScoringConfig::default()));
        assert_eq!(ranked[0].total, ranked[1].total);
        assert_eq!(ranked[0].team, "X");
        assert_eq!(ranked[1].team, "Y");
    }

    #[test]
    fn test_custom_scoring_counts() {
        let config = ScoringConfig {
            scoring_places: Some(3),
            displacers: Some(1),
            ..ScoringConfig::default()
        };
        let list = finishers(&["A", "A", "A", "A", "A", "A"]);
        let scores = calculate_team_scores(&list, &config);
        assert_eq!(scores[0].scoring, vec![1, 2, 3]);
        assert_eq!(scores[0].total, 6);
        assert_eq!(scores[0].displacers, vec![4]);
    }

    #[test]
    fn test_huge_counts_do_not_overflow() {
        let config = ScoringConfig {
            scoring_places: Some(usize::MAX),
            displacers: Some(usize::MAX),
            ..ScoringConfig::default()
        };
        let list = finishers(&["A", "B", "A"]);
        let scores = calculate_team_scores(&list, &config);
        assert_eq!(scores[0].scoring, vec![1, 3]);
        assert!(scores[0].displacers.is_empty());

        let config = ScoringConfig {
            displacers: Some(usize::MAX),
            ..ScoringConfig::default()
        };
        let list = finishers(&["A", "A", "A", "A", "A", "A", "A", "A"]);
        let scores = calculate_team_scores(&list, &config);
        assert_eq!(scores[0].total, 15);
        assert_eq!(scores[0].displacers, vec![6, 7, 8]);
    }

    #[test]
    fn test_empty_list() {
        assert!(calculate_team_scores(&[], &ScoringConfig::default()).is_empty());
        assert!(rank_teams(Vec::new()).is_empty());
    }
}
