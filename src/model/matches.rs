use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

use super::standing::FormResult;

/// A team as referenced by a match: identifier plus display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamRef {
    pub id: String,
    pub name: String,
}

impl TeamRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Lifecycle status of a match, stored upper-case by the data layer.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    strum_macros::Display,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Live,
    Finished,
}

/// A single fixture of a season.
///
/// Scores are only meaningful once the match is [`MatchStatus::Live`] or
/// [`MatchStatus::Finished`]; the table only ever reads finished matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    pub home: TeamRef,
    pub away: TeamRef,
    #[serde(default)]
    pub home_score: u32,
    #[serde(default)]
    pub away_score: u32,
    #[serde(default)]
    pub status: MatchStatus,
    #[serde(default)]
    pub kickoff_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub matchday: Option<u32>,
    #[serde(default)]
    pub venue: Option<String>,
}

impl Match {
    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::Finished
    }

    /// Whether the score should be shown (live or finished).
    pub fn has_score(&self) -> bool {
        matches!(self.status, MatchStatus::Live | MatchStatus::Finished)
    }

    pub fn involves(&self, team_id: &str) -> bool {
        self.home.id == team_id || self.away.id == team_id
    }

    /// Result letter from `team_id`'s point of view, or `None` if the team
    /// did not play in this match.
    pub fn outcome_for(&self, team_id: &str) -> Option<FormResult> {
        if self.home.id == team_id {
            Some(FormResult::from_scores(self.home_score, self.away_score))
        } else if self.away.id == team_id {
            Some(FormResult::from_scores(self.away_score, self.home_score))
        } else {
            None
        }
    }

    /// `"2:1"` once a score exists, `"vs"` before kickoff.
    pub fn score_text(&self) -> String {
        if self.has_score() {
            format!("{}:{}", self.home_score, self.away_score)
        } else {
            "vs".to_string()
        }
    }

    /// Kickoff in epoch milliseconds; a missing kickoff counts as epoch 0.
    pub(crate) fn kickoff_millis(&self) -> i64 {
        self.kickoff_at
            .map(|kickoff| kickoff.timestamp_millis())
            .unwrap_or(0)
    }

    /// Chronological order, oldest first. Equal kickoffs fall back to the
    /// match id so the order never depends on input order.
    pub(crate) fn chronological_cmp(&self, other: &Self) -> Ordering {
        self.kickoff_millis()
            .cmp(&other.kickoff_millis())
            .then_with(|| self.id.cmp(&other.id))
    }
}
