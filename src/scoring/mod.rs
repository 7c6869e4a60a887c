pub mod config;
pub mod engine;
pub mod positions;
pub mod qualifiers;
pub mod validation;

pub use config::*;
pub use engine::{calculate_team_scores, rank_teams, TeamScore};
pub use positions::{calculate_team_positions, TeamPositions};
pub use qualifiers::{individual_qualifiers, Qualifier};
pub use validation::validate_scoring;
