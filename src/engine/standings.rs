use std::collections::HashMap;

use itertools::Itertools;
use tracing::debug;

use crate::config::DEFAULT_FORM_LENGTH;
use crate::model::{FormResult, Match, StandingRow, TeamRef};

/// Compute the league table for one season.
///
/// Every team seen as home or away in any match gets a row, so teams that
/// have not finished a match yet appear with zeros. Only finished matches
/// count. Rows are ordered by points, goal difference, goals scored and
/// finally team name.
///
/// ```
/// use league_standings::{compute_standings, Match, MatchStatus, TeamRef};
///
/// let matches = vec![Match {
///     id: "m1".into(),
///     home: TeamRef::new("a", "Alpha"),
///     away: TeamRef::new("b", "Bravo"),
///     home_score: 2,
///     away_score: 1,
///     status: MatchStatus::Finished,
///     kickoff_at: None,
///     matchday: Some(1),
///     venue: None,
/// }];
///
/// let table = compute_standings(&matches);
/// assert_eq!(table[0].team_name, "Alpha");
/// assert_eq!(table[0].points, 3);
/// assert_eq!(table[1].lost, 1);
/// ```
pub fn compute_standings(matches: &[Match]) -> Vec<StandingRow> {
    compute_table(matches, DEFAULT_FORM_LENGTH)
}

/// 1-based table position of `team_id`.
pub fn team_position(standings: &[StandingRow], team_id: &str) -> Option<usize> {
    standings
        .iter()
        .position(|row| row.team_id == team_id)
        .map(|index| index + 1)
}

pub(crate) fn compute_table(matches: &[Match], form_length: usize) -> Vec<StandingRow> {
    let mut table = Table::default();

    for m in matches {
        table.register(&m.home);
        table.register(&m.away);
    }

    // Oldest first so each team's form ends with its latest result.
    let finished = matches
        .iter()
        .filter(|m| m.is_finished())
        .sorted_by(|a, b| a.chronological_cmp(b));

    for m in finished {
        table.record(&m.home.id, m.home_score, m.away_score);
        table.record(&m.away.id, m.away_score, m.home_score);
    }

    let mut rows = table.rows;
    for row in rows.iter_mut() {
        row.goal_difference = i64::from(row.goals_for) - i64::from(row.goals_against);
        let overflow = row.form.len().saturating_sub(form_length);
        row.form.drain(..overflow);
    }
    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.goal_difference.cmp(&a.goal_difference))
            .then_with(|| b.goals_for.cmp(&a.goals_for))
            .then_with(|| a.team_name.cmp(&b.team_name))
            .then_with(|| a.team_id.cmp(&b.team_id))
    });

    debug!(
        teams = rows.len(),
        matches = matches.len(),
        "computed standings"
    );
    rows
}

#[derive(Default)]
struct Table {
    rows: Vec<StandingRow>,
    index: HashMap<String, usize>,
}

impl Table {
    /// The first name seen for a team id is kept.
    fn register(&mut self, team: &TeamRef) {
        match self.index.get(&team.id) {
            Some(&i) => {
                if self.rows[i].team_name != team.name {
                    debug!(
                        team_id = %team.id,
                        kept = %self.rows[i].team_name,
                        ignored = %team.name,
                        "conflicting team name"
                    );
                }
            }
            None => {
                self.index.insert(team.id.clone(), self.rows.len());
                self.rows.push(StandingRow::new(&team.id, &team.name));
            }
        }
    }

    fn record(&mut self, team_id: &str, goals_for: u32, goals_against: u32) {
        let Some(&i) = self.index.get(team_id) else {
            return;
        };
        let row = &mut self.rows[i];
        let result = FormResult::from_scores(goals_for, goals_against);

        row.played += 1;
        row.goals_for = row.goals_for.saturating_add(goals_for);
        row.goals_against = row.goals_against.saturating_add(goals_against);
        match result {
            FormResult::Win => {
                row.won += 1;
                row.points += 3;
            }
            FormResult::Draw => {
                row.drawn += 1;
                row.points += 1;
            }
            FormResult::Loss => row.lost += 1,
        }
        row.form.push(result);
    }
}
