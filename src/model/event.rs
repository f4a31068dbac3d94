use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A goal recorded against a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalEvent {
    pub match_id: String,
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub scorer_id: Option<String>,
    #[serde(default)]
    pub scorer_name: Option<String>,
    #[serde(default)]
    pub assist_id: Option<String>,
    #[serde(default)]
    pub assist_name: Option<String>,
    #[serde(default)]
    pub minute: Option<u32>,
    /// Stoppage-time minutes on top of `minute`.
    #[serde(default)]
    pub extra_minute: Option<u32>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// The goalkeeper a team fielded in a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupEntry {
    pub match_id: String,
    pub team_id: String,
    #[serde(default)]
    pub goalkeeper_id: Option<String>,
    #[serde(default)]
    pub goalkeeper_name: Option<String>,
}
