use std::collections::{BTreeMap, HashMap};

use crate::results::Finisher;

/// Per-team running positions: for each team, a map from a finisher's index in
/// the finish-order list to that finisher's 1-based position among teammates.
///
/// Teams iterate in first-appearance order of the finish-order list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamPositions {
    teams: Vec<(String, BTreeMap<usize, usize>)>,
    lookup: HashMap<String, usize>,
}

impl TeamPositions {
    /// Index-to-position map for one team, if it appears in the list.
    pub fn for_team(&self, team: &str) -> Option<&BTreeMap<usize, usize>> {
        self.lookup.get(team).map(|&slot| &self.teams[slot].1)
    }

    /// Team position of the finisher at `index`, if that finisher is on `team`.
    pub fn position(&self, team: &str, index: usize) -> Option<usize> {
        self.for_team(team)
            .and_then(|positions| positions.get(&index).copied())
    }

    /// Teams with their maps, in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeMap<usize, usize>)> {
        self.teams
            .iter()
            .map(|(team, positions)| (team.as_str(), positions))
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

/// Build team positions with a single left-to-right scan of the finish order.
pub fn calculate_team_positions(finishers: &[Finisher]) -> TeamPositions {
    let mut result = TeamPositions::default();

    for (index, finisher) in finishers.iter().enumerate() {
        let slot = match result.lookup.get(&finisher.team) {
            Some(&slot) => slot,
            None => {
                result.teams.push((finisher.team.clone(), BTreeMap::new()));
                let slot = result.teams.len() - 1;
                result.lookup.insert(finisher.team.clone(), slot);
                slot
            }
        };
        let positions = &mut result.teams[slot].1;
        let next = positions.len() + 1;
        positions.insert(index, next);
    }

    result
}
