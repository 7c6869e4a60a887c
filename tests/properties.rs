use proptest::prelude::*;

use xc_scorer::meet::Meet;
use xc_scorer::results::{parse_results, Finisher};
use xc_scorer::scoring::{
    calculate_team_positions, calculate_team_scores, individual_qualifiers, rank_teams,
    ScoringConfig,
};

/// Tab-free, newline-free field text, with padding to exercise trimming.
fn field() -> impl Strategy<Value = String> {
    "[ a-zA-Z0-9:.-]{0,10}"
}

/// A results line as its fields; a line always has at least one field.
fn line() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(field(), 1..8)
}

/// Finish order drawn from a handful of teams.
fn finish_order() -> impl Strategy<Value = Vec<Finisher>> {
    proptest::collection::vec(0usize..6, 0..40).prop_map(|teams| {
        teams
            .into_iter()
            .enumerate()
            .map(|(i, team)| Finisher::new(format!("Runner {}", i + 1), format!("Team {}", team), "17:00"))
            .collect()
    })
}

fn to_text(finishers: &[Finisher]) -> String {
    finishers
        .iter()
        .enumerate()
        .map(|(i, f)| format!("{}\t{}\t10\t{}\t{}", i + 1, f.name, f.team, f.time))
        .collect::<Vec<_>>()
        .join("\n")
}

proptest! {
    #[test]
    fn parse_keeps_trimmed_fields_of_long_lines(lines in proptest::collection::vec(line(), 0..20)) {
        let text = lines
            .iter()
            .map(|fields| fields.join("\t"))
            .collect::<Vec<_>>()
            .join("\n");

        let expected: Vec<Finisher> = lines
            .iter()
            .filter(|fields| fields.len() >= 5)
            .map(|fields| Finisher::new(fields[1].trim(), fields[3].trim(), fields[4].trim()))
            .collect();

        prop_assert_eq!(parse_results(&text), expected);
    }

    #[test]
    fn team_positions_count_up_from_one(finishers in finish_order()) {
        let positions = calculate_team_positions(&finishers);

        let mut covered = 0;
        for (team, map) in positions.iter() {
            let sequence: Vec<usize> = map.values().copied().collect();
            let expected: Vec<usize> = (1..=sequence.len()).collect();
            prop_assert_eq!(sequence, expected);
            for &index in map.keys() {
                prop_assert_eq!(finishers[index].team.as_str(), team);
            }
            covered += map.len();
        }
        prop_assert_eq!(covered, finishers.len());
    }

    #[test]
    fn team_scores_respect_limits(finishers in finish_order()) {
        let scores = calculate_team_scores(&finishers, &ScoringConfig::default());

        for score in &scores {
            let size = finishers.iter().filter(|f| f.team == score.team).count();
            prop_assert_eq!(score.total, score.scoring.iter().sum::<usize>());
            prop_assert!(score.scoring.len() <= size.min(5));
            prop_assert!(score.displacers.len() <= 2);
            if size >= 7 {
                prop_assert_eq!(score.scoring.len(), 5);
                prop_assert_eq!(score.displacers.len(), 2);
            }
            let places: Vec<usize> = score.scoring.iter().chain(&score.displacers).copied().collect();
            prop_assert!(places.windows(2).all(|w| w[0] < w[1]));
        }

        let ranked = rank_teams(scores);
        prop_assert!(ranked.windows(2).all(|w| w[0].total <= w[1].total));
    }

    #[test]
    fn qualifiers_skip_top_teams(finishers in finish_order()) {
        let config = ScoringConfig::default();
        let ranked = rank_teams(calculate_team_scores(&finishers, &config));
        let qualifiers = individual_qualifiers(&finishers, &ranked, &config);

        let top: Vec<&str> = ranked.iter().take(2).map(|s| s.team.as_str()).collect();
        prop_assert!(qualifiers.len() <= 5);
        prop_assert!(qualifiers.iter().all(|q| !top.contains(&q.finisher.team.as_str())));
        prop_assert!(qualifiers.windows(2).all(|w| w[0].place < w[1].place));
        for q in &qualifiers {
            prop_assert_eq!(&finishers[q.place - 1], &q.finisher);
        }

        let eligible = finishers.iter().filter(|f| !top.contains(&f.team.as_str())).count();
        prop_assert_eq!(qualifiers.len(), eligible.min(5));
    }

    #[test]
    fn moves_permute_and_reset_restores(
        finishers in finish_order(),
        moves in proptest::collection::vec((0usize..64, 0usize..64), 0..20),
    ) {
        let mut meet = Meet::default();
        meet.load(&to_text(&finishers));
        let loaded = meet.finishers().to_vec();

        for (from, to) in moves {
            let in_range = from < meet.len() && to < meet.len();
            prop_assert_eq!(meet.move_finisher(from, to), in_range);
        }

        let mut before: Vec<String> = loaded.iter().map(|f| f.name.clone()).collect();
        let mut after: Vec<String> = meet.finishers().iter().map(|f| f.name.clone()).collect();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
        prop_assert_eq!(meet.original(), loaded.as_slice());

        meet.reset();
        prop_assert_eq!(meet.finishers(), loaded.as_slice());
    }
}
