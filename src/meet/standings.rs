use serde::Serialize;

use crate::results::Finisher;
use crate::scoring::{
    calculate_team_positions, calculate_team_scores, individual_qualifiers, rank_teams, Qualifier,
    ScoringConfig, TeamPositions, TeamScore,
};

/// Read-only view of a finish order: every derived structure the display needs.
#[derive(Debug, Clone, Serialize)]
pub struct Standings {
    pub finishers: Vec<Finisher>,
    #[serde(skip)]
    pub positions: TeamPositions,
    pub team_scores: Vec<TeamScore>, // Ranked, lowest total first
    pub qualifiers: Vec<Qualifier>,
}

impl Standings {
    pub fn compute(finishers: &[Finisher], config: &ScoringConfig) -> Self {
        let positions = calculate_team_positions(finishers);
        let team_scores = rank_teams(calculate_team_scores(finishers, config));
        let qualifiers = individual_qualifiers(finishers, &team_scores, config);

        Self {
            finishers: finishers.to_vec(),
            positions,
            team_scores,
            qualifiers,
        }
    }

    /// Position of the finisher at `index` within their own team.
    pub fn team_position(&self, index: usize) -> Option<usize> {
        let finisher = self.finishers.get(index)?;
        self.positions.position(&finisher.team, index)
    }

    pub fn team_score(&self, team: &str) -> Option<&TeamScore> {
        self.team_scores.iter().find(|score| score.team == team)
    }
}
