use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

/// Outcome of a finished match from one team's point of view.
#[derive(
    Debug,
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
pub enum FormResult {
    #[strum(serialize = "W")]
    #[serde(rename = "W")]
    Win,
    #[strum(serialize = "D")]
    #[serde(rename = "D")]
    Draw,
    #[strum(serialize = "L")]
    #[serde(rename = "L")]
    Loss,
}

impl FormResult {
    pub fn from_scores(goals_for: u32, goals_against: u32) -> Self {
        match goals_for.cmp(&goals_against) {
            Ordering::Greater => Self::Win,
            Ordering::Equal => Self::Draw,
            Ordering::Less => Self::Loss,
        }
    }
}

/// One row of a league table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRow {
    pub team_id: String,
    pub team_name: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
    /// Most recent result last.
    pub form: Vec<FormResult>,
}

impl StandingRow {
    pub(crate) fn new(team_id: &str, team_name: &str) -> Self {
        Self {
            team_id: team_id.to_string(),
            team_name: team_name.to_string(),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
            form: Vec::new(),
        }
    }

    /// Form guide as a compact string, e.g. `"WWDLW"`.
    pub fn form_string(&self) -> String {
        self.form.iter().map(|result| result.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_result_letters() {
        assert_eq!(FormResult::Win.to_string(), "W");
        assert_eq!("L".parse::<FormResult>().unwrap(), FormResult::Loss);
        assert_eq!(serde_json::to_string(&FormResult::Draw).unwrap(), "\"D\"");
    }

    #[test]
    fn test_standing_row_json_fields() {
        let mut row = StandingRow::new("a", "Alpha");
        row.played = 1;
        row.won = 1;
        row.goals_for = 2;
        row.goal_difference = 2;
        row.points = 3;
        row.form = vec![FormResult::Win];

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["team_name"], "Alpha");
        assert_eq!(json["goals_for"], 2);
        assert_eq!(json["goal_difference"], 2);
        assert_eq!(json["points"], 3);
        assert_eq!(json["form"], serde_json::json!(["W"]));

        let back: StandingRow = serde_json::from_value(json).unwrap();
        assert_eq!(back, row);
    }

    #[test]
    fn test_form_string() {
        let mut row = StandingRow::new("a", "Alpha");
        row.form = vec![FormResult::Win, FormResult::Draw, FormResult::Loss];
        assert_eq!(row.form_string(), "WDL");
    }
}
