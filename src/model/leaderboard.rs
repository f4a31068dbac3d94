use serde::{Deserialize, Serialize};

/// A top-scorer board entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorerEntry {
    pub player_id: String,
    pub name: String,
    pub goals: u32,
}

/// A top-assist board entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistEntry {
    pub player_id: String,
    pub name: String,
    pub assists: u32,
}

/// Number of clean sheets credited to a goalkeeper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanSheetEntry {
    pub goalkeeper_id: String,
    pub name: String,
    pub count: u32,
}
