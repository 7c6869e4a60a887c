use serde::{Deserialize, Serialize};

pub const DEFAULT_SCORING_PLACES: usize = 5;
pub const DEFAULT_DISPLACERS: usize = 2;
pub const DEFAULT_QUALIFYING_TEAMS: usize = 2;
pub const DEFAULT_INDIVIDUAL_QUALIFIERS: usize = 5;

/// Scoring parameters.
///
/// Every field is optional; an unset field falls back to standard
/// cross-country scoring (top five score, next two displace, top two teams
/// advance, five individuals advance).
///
/// Example YAML:
/// ```yaml
/// scoring:
///   scoring_places: 5
///   displacers: 2
///   qualifying_teams: 2
///   individual_qualifiers: 5
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Places summed into a team's total (default: 5)
    #[serde(default)]
    pub scoring_places: Option<usize>,

    /// Places reported after the scoring places (default: 2)
    #[serde(default)]
    pub displacers: Option<usize>,

    /// Lowest-total teams whose runners are excluded from individual qualifying (default: 2)
    #[serde(default)]
    pub qualifying_teams: Option<usize>,

    /// Maximum number of individual qualifiers (default: 5)
    #[serde(default)]
    pub individual_qualifiers: Option<usize>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            scoring_places: Some(DEFAULT_SCORING_PLACES),
            displacers: Some(DEFAULT_DISPLACERS),
            qualifying_teams: Some(DEFAULT_QUALIFYING_TEAMS),
            individual_qualifiers: Some(DEFAULT_INDIVIDUAL_QUALIFIERS),
        }
    }
}

impl ScoringConfig {
    pub fn scoring_places(&self) -> usize {
        self.scoring_places.unwrap_or(DEFAULT_SCORING_PLACES)
    }

    pub fn displacers(&self) -> usize {
        self.displacers.unwrap_or(DEFAULT_DISPLACERS)
    }

    pub fn qualifying_teams(&self) -> usize {
        self.qualifying_teams.unwrap_or(DEFAULT_QUALIFYING_TEAMS)
    }

    pub fn individual_qualifiers(&self) -> usize {
        self.individual_qualifiers
            .unwrap_or(DEFAULT_INDIVIDUAL_QUALIFIERS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scoring_config() {
        let config = ScoringConfig::default();

        assert_eq!(config.scoring_places(), 5);
        assert_eq!(config.displacers(), 2);
        assert_eq!(config.qualifying_teams(), 2);
        assert_eq!(config.individual_qualifiers(), 5);
    }

    #[test]
    fn test_scoring_config_serde_roundtrip() {
        let config = ScoringConfig::default();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: ScoringConfig = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_scoring_config_parse() {
        let yaml = r#"
scoring_places: 4
individual_qualifiers: 10
"#;
        let config: ScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.scoring_places(), 4);
        assert_eq!(config.individual_qualifiers(), 10);
        assert!(config.displacers.is_none());
        assert_eq!(config.displacers(), 2);
    }

    #[test]
    fn test_empty_scoring_config_falls_back() {
        let config: ScoringConfig = serde_saphyr::from_str("{}").unwrap();
        assert!(config.scoring_places.is_none());
        assert_eq!(config.scoring_places(), 5);
        assert_eq!(config.qualifying_teams(), 2);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "tiebreak: sixth_runner\n";
        assert!(serde_saphyr::from_str::<ScoringConfig>(yaml).is_err());
    }
}
