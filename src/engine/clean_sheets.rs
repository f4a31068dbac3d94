use std::collections::HashMap;

use tracing::debug;

use crate::engine::Tally;
use crate::model::{CleanSheetEntry, LineupEntry, Match};

/// Clean sheets per goalkeeper over the finished matches, most first.
///
/// A team that kept its opponent to zero credits the goalkeeper from its
/// lineup for that match. Teams without a lineup entry, or whose entry
/// lacks the goalkeeper id or name, credit nobody. When a match and team
/// have several lineup entries the last one counts.
pub fn compute_clean_sheets(matches: &[Match], lineups: &[LineupEntry]) -> Vec<CleanSheetEntry> {
    clean_sheets_with_limit(matches, lineups, None)
}

pub(crate) fn clean_sheets_with_limit(
    matches: &[Match],
    lineups: &[LineupEntry],
    limit: Option<usize>,
) -> Vec<CleanSheetEntry> {
    let mut index: HashMap<(&str, &str), &LineupEntry> = HashMap::new();
    for entry in lineups {
        index.insert((entry.match_id.as_str(), entry.team_id.as_str()), entry);
    }

    let mut tally = Tally::default();
    for m in matches.iter().filter(|m| m.is_finished()) {
        let sides = [
            (m.home.id.as_str(), m.away_score),
            (m.away.id.as_str(), m.home_score),
        ];
        for (team_id, conceded) in sides {
            if conceded != 0 {
                continue;
            }
            let Some(entry) = index.get(&(m.id.as_str(), team_id)) else {
                continue;
            };
            let keeper_id = entry.goalkeeper_id.as_deref().filter(|id| !id.is_empty());
            let keeper_name = entry
                .goalkeeper_name
                .as_deref()
                .filter(|name| !name.trim().is_empty());
            if let (Some(keeper_id), Some(keeper_name)) = (keeper_id, keeper_name) {
                tally.add(keeper_id, Some(keeper_name));
            }
        }
    }

    let sheets: Vec<CleanSheetEntry> = tally
        .ranked(limit)
        .into_iter()
        .map(|entry| CleanSheetEntry {
            goalkeeper_id: entry.id,
            name: entry.name,
            count: entry.count,
        })
        .collect();
    debug!(count = sheets.len(), "computed clean sheets");
    sheets
}
