use super::config::ScoringConfig;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.scoring_places == Some(0) {
        errors.push("scoring.scoring_places: must be at least 1".to_string());
    }

    if config.qualifying_teams == Some(0) {
        errors.push("scoring.qualifying_teams: must be at least 1".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
