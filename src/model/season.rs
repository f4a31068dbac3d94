use serde::{Deserialize, Serialize};

use super::leaderboard::{AssistEntry, CleanSheetEntry, ScorerEntry};
use super::standing::StandingRow;

/// Everything the season statistics page renders, computed in one call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonStats {
    pub matches: usize,
    pub finished: usize,
    pub standings: Vec<StandingRow>,
    pub top_scorers: Vec<ScorerEntry>,
    pub top_assists: Vec<AssistEntry>,
    pub clean_sheets: Vec<CleanSheetEntry>,
}
