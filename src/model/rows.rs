use serde::{Deserialize, Serialize};

/// A `matches` row with its joined home/away teams, as the data store
/// returns it. Converted into [`Match`](super::Match) with `TryFrom`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchRow {
    pub id: String,
    #[serde(default)]
    pub season_id: Option<String>,
    #[serde(default)]
    pub matchday: Option<u32>,
    #[serde(default)]
    pub kickoff_at: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    pub status: String,
    #[serde(default)]
    pub home_score: Option<u32>,
    #[serde(default)]
    pub away_score: Option<u32>,
    #[serde(default)]
    pub home_team_id: Option<String>,
    #[serde(default)]
    pub away_team_id: Option<String>,
    #[serde(default)]
    pub home: Option<TeamRow>,
    #[serde(default)]
    pub away: Option<TeamRow>,
}

/// A joined `teams` record. Either field may be null.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamRow {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// A joined `players` record carrying only the display name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerNameRow {
    #[serde(default)]
    pub full_name: Option<String>,
}

/// A `match_events` row already filtered to goals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalEventRow {
    #[serde(default)]
    pub id: Option<String>,
    pub match_id: String,
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub player_id: Option<String>,
    #[serde(default)]
    pub assist_player_id: Option<String>,
    #[serde(default)]
    pub minute: Option<u32>,
    #[serde(default)]
    pub extra_minute: Option<u32>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub scorer: Option<PlayerNameRow>,
    #[serde(default)]
    pub assist: Option<PlayerNameRow>,
}

/// A `match_lineups` row with the joined goalkeeper name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineupRow {
    pub match_id: String,
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub goalkeeper_player_id: Option<String>,
    #[serde(default)]
    pub gk: Option<PlayerNameRow>,
}
