use serde::Serialize;

use super::config::ScoringConfig;
use super::engine::TeamScore;
use crate::results::Finisher;

/// A runner advancing as an individual, with their true overall place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Qualifier {
    #[serde(flatten)]
    pub finisher: Finisher,
    pub place: usize,
}

/// Select individual qualifiers.
///
/// `ranked` must already be ordered by [`super::rank_teams`]. Runners from
/// the qualifying teams at the top of that ranking are skipped; the rest are
/// taken in overall-place order and truncated to the configured count.
pub fn individual_qualifiers(
    finishers: &[Finisher],
    ranked: &[TeamScore],
    config: &ScoringConfig,
) -> Vec<Qualifier> {
    let qualifying_teams: Vec<&str> = ranked
        .iter()
        .take(config.qualifying_teams())
        .map(|score| score.team.as_str())
        .collect();

    finishers
        .iter()
        .enumerate()
        .filter(|(_, finisher)| !qualifying_teams.contains(&finisher.team.as_str()))
        .take(config.individual_qualifiers())
        .map(|(index, finisher)| Qualifier {
            finisher: finisher.clone(),
            place: index + 1,
        })
        .collect()
}
