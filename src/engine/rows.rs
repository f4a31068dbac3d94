use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::error::{Result, StandingsError};
use crate::model::{
    GoalEvent, GoalEventRow, LineupEntry, LineupRow, Match, MatchRow, MatchStatus, TeamRef, TeamRow,
};

pub(crate) fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(value.trim())?.with_timezone(&Utc))
}

fn team_ref(row: Option<TeamRow>, fallback_id: Option<String>) -> Option<TeamRef> {
    let row = row?;
    let id = row.id.or(fallback_id).filter(|id| !id.is_empty())?;
    let name = row.name.filter(|name| !name.is_empty())?;
    Some(TeamRef { id, name })
}

impl TryFrom<MatchRow> for Match {
    type Error = StandingsError;

    fn try_from(row: MatchRow) -> Result<Self> {
        let status = row
            .status
            .trim()
            .parse::<MatchStatus>()
            .map_err(|_| StandingsError::UnknownStatus {
                match_id: row.id.clone(),
                status: row.status.clone(),
            })?;

        let home = team_ref(row.home, row.home_team_id).ok_or_else(|| {
            StandingsError::MissingTeam {
                match_id: row.id.clone(),
                side: "home",
            }
        })?;
        let away = team_ref(row.away, row.away_team_id).ok_or_else(|| {
            StandingsError::MissingTeam {
                match_id: row.id.clone(),
                side: "away",
            }
        })?;

        let kickoff_at = row
            .kickoff_at
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .map(parse_timestamp)
            .transpose()?;

        Ok(Self {
            id: row.id,
            home,
            away,
            home_score: row.home_score.unwrap_or_default(),
            away_score: row.away_score.unwrap_or_default(),
            status,
            kickoff_at,
            matchday: row.matchday,
            venue: row.venue,
        })
    }
}

impl From<GoalEventRow> for GoalEvent {
    fn from(row: GoalEventRow) -> Self {
        let created_at = row
            .created_at
            .as_deref()
            .and_then(|c| parse_timestamp(c).ok());
        Self {
            match_id: row.match_id,
            team_id: row.team_id,
            scorer_id: row.player_id,
            scorer_name: row.scorer.and_then(|p| p.full_name),
            assist_id: row.assist_player_id,
            assist_name: row.assist.and_then(|p| p.full_name),
            minute: row.minute,
            extra_minute: row.extra_minute,
            created_at,
        }
    }
}

impl TryFrom<LineupRow> for LineupEntry {
    type Error = StandingsError;

    fn try_from(row: LineupRow) -> Result<Self> {
        let team_id = row.team_id.ok_or_else(|| StandingsError::MissingTeam {
            match_id: row.match_id.clone(),
            side: "lineup",
        })?;
        Ok(Self {
            match_id: row.match_id,
            team_id,
            goalkeeper_id: row.goalkeeper_player_id,
            goalkeeper_name: row.gk.and_then(|p| p.full_name),
        })
    }
}

/// Convert match rows, dropping (and logging) rows that cannot be used.
pub fn parse_matches(rows: Vec<MatchRow>) -> Vec<Match> {
    let total = rows.len();
    let matches: Vec<Match> = rows
        .into_iter()
        .filter_map(|row| match Match::try_from(row) {
            Ok(m) => Some(m),
            Err(err) => {
                warn!(%err, "skipping match row");
                None
            }
        })
        .collect();
    debug!(total, kept = matches.len(), "parsed match rows");
    matches
}

pub fn parse_goal_events(rows: Vec<GoalEventRow>) -> Vec<GoalEvent> {
    rows.into_iter().map(GoalEvent::from).collect()
}

/// Convert lineup rows, dropping (and logging) rows without a team.
pub fn parse_lineups(rows: Vec<LineupRow>) -> Vec<LineupEntry> {
    let total = rows.len();
    let lineups: Vec<LineupEntry> = rows
        .into_iter()
        .filter_map(|row| match LineupEntry::try_from(row) {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(%err, "skipping lineup row");
                None
            }
        })
        .collect();
    debug!(total, kept = lineups.len(), "parsed lineup rows");
    lineups
}
