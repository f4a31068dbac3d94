use tracing::instrument;

use crate::config::StatsConfig;
use crate::engine;
use crate::error::Result;
use crate::model::*;

/// Statistics for one season, computed with a fixed [`StatsConfig`].
///
/// `LeagueStats` holds no data of its own: every call recomputes from the
/// collections it is given, so callers can rerun it whenever the data
/// layer reports a change.
///
/// # Examples
///
/// ```
/// use league_standings::{LeagueStats, Match, MatchStatus, TeamRef};
///
/// let stats = LeagueStats::new();
/// let matches = vec![Match {
///     id: "m1".into(),
///     home: TeamRef::new("a", "Alpha"),
///     away: TeamRef::new("b", "Bravo"),
///     home_score: 0,
///     away_score: 0,
///     status: MatchStatus::Finished,
///     kickoff_at: None,
///     matchday: Some(1),
///     venue: None,
/// }];
///
/// let table = stats.standings(&matches);
/// assert_eq!(table.len(), 2);
/// assert_eq!(stats.form(&matches, "a").len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LeagueStats {
    config: StatsConfig,
}

impl LeagueStats {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a custom configuration, validating it first.
    pub fn with_config(config: StatsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &StatsConfig {
        &self.config
    }

    /// League table, cut at `table_limit` when one is configured.
    #[instrument(skip_all, fields(matches = matches.len()))]
    pub fn standings(&self, matches: &[Match]) -> Vec<StandingRow> {
        let mut rows = engine::standings::compute_table(matches, self.config.form_length);
        if let Some(limit) = self.config.table_limit {
            rows.truncate(limit);
        }
        rows
    }

    #[instrument(skip(self, matches))]
    pub fn form(&self, matches: &[Match], team_id: &str) -> Vec<FormResult> {
        engine::form::form_with_length(matches, team_id, self.config.form_length)
    }

    /// Table position of a team over the full (uncut) table.
    #[instrument(skip(self, matches))]
    pub fn team_position(&self, matches: &[Match], team_id: &str) -> Option<usize> {
        let rows = engine::standings::compute_table(matches, self.config.form_length);
        engine::standings::team_position(&rows, team_id)
    }

    #[instrument(skip_all, fields(events = goal_events.len()))]
    pub fn top_scorers(&self, goal_events: &[GoalEvent]) -> Vec<ScorerEntry> {
        engine::leaderboard::compute_top_scorers(goal_events, self.config.leaderboard_limit)
    }

    #[instrument(skip_all, fields(events = goal_events.len()))]
    pub fn top_assists(&self, goal_events: &[GoalEvent]) -> Vec<AssistEntry> {
        engine::leaderboard::compute_top_assists(goal_events, self.config.leaderboard_limit)
    }

    #[instrument(skip_all, fields(matches = matches.len(), lineups = lineups.len()))]
    pub fn clean_sheets(&self, matches: &[Match], lineups: &[LineupEntry]) -> Vec<CleanSheetEntry> {
        engine::clean_sheets::clean_sheets_with_limit(
            matches,
            lineups,
            Some(self.config.leaderboard_limit),
        )
    }

    #[instrument(skip(self, matches))]
    pub fn round_summary(&self, matches: &[Match], matchday: u32) -> Result<RoundSummary> {
        engine::rounds::round_summary(matches, matchday)
    }

    /// Table and every leaderboard for the season statistics page.
    #[instrument(skip_all)]
    pub fn season_stats(
        &self,
        matches: &[Match],
        goal_events: &[GoalEvent],
        lineups: &[LineupEntry],
    ) -> SeasonStats {
        SeasonStats {
            matches: matches.len(),
            finished: matches.iter().filter(|m| m.is_finished()).count(),
            standings: self.standings(matches),
            top_scorers: self.top_scorers(goal_events),
            top_assists: self.top_assists(goal_events),
            clean_sheets: self.clean_sheets(matches, lineups),
        }
    }
}
