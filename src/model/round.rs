use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::matches::MatchStatus;

/// All fixtures of one matchday, as shown on a round poster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub matchday: u32,
    pub results: Vec<RoundResult>,
}

/// A fixture line within a [`RoundSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub match_id: String,
    pub home: String,
    pub away: String,
    pub status: MatchStatus,
    /// `"2:1"` for live or finished matches, `"vs"` otherwise.
    pub score_text: String,
    pub kickoff_at: Option<DateTime<Utc>>,
    pub venue: Option<String>,
}
