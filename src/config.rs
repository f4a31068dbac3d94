use serde::{Deserialize, Serialize};

use crate::error::{Result, StandingsError};

/// Number of results kept in a team's form guide.
pub const DEFAULT_FORM_LENGTH: usize = 5;

/// Number of entries kept on the scorer, assist and clean-sheet boards.
pub const DEFAULT_LEADERBOARD_LIMIT: usize = 20;

/// Tunables for [`LeagueStats`](crate::LeagueStats).
///
/// Every field has a default, so a partial document deserializes:
///
/// ```
/// let config: league_standings::StatsConfig =
///     serde_json::from_str(r#"{ "leaderboard_limit": 5 }"#).unwrap();
/// assert_eq!(config.form_length, 5);
/// assert_eq!(config.leaderboard_limit, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    pub form_length: usize,
    pub leaderboard_limit: usize,
    /// Cut the league table after this many rows (posters show 16).
    pub table_limit: Option<usize>,
}

impl StatsConfig {
    pub fn validate(&self) -> Result<()> {
        if self.form_length == 0 {
            return Err(StandingsError::InvalidConfig("form_length must be at least 1"));
        }
        if self.leaderboard_limit == 0 {
            return Err(StandingsError::InvalidConfig(
                "leaderboard_limit must be at least 1",
            ));
        }
        if self.table_limit == Some(0) {
            return Err(StandingsError::InvalidConfig("table_limit must be at least 1"));
        }
        Ok(())
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            form_length: DEFAULT_FORM_LENGTH,
            leaderboard_limit: DEFAULT_LEADERBOARD_LIMIT,
            table_limit: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = StatsConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.form_length, 5);
        assert_eq!(config.leaderboard_limit, 20);
        assert_eq!(config.table_limit, None);
    }

    #[test]
    fn test_zero_values_are_rejected() {
        let config = StatsConfig {
            form_length: 0,
            ..StatsConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(StandingsError::InvalidConfig(_))
        ));

        let config = StatsConfig {
            leaderboard_limit: 0,
            ..StatsConfig::default()
        };
        assert!(config.validate().is_err());

        let config = StatsConfig {
            table_limit: Some(0),
            ..StatsConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let config: StatsConfig = serde_json::from_str(r#"{ "table_limit": 16 }"#).unwrap();
        assert_eq!(config.form_length, DEFAULT_FORM_LENGTH);
        assert_eq!(config.leaderboard_limit, DEFAULT_LEADERBOARD_LIMIT);
        assert_eq!(config.table_limit, Some(16));
    }
}
