use tracing::debug;

use crate::engine::Tally;
use crate::model::{AssistEntry, GoalEvent, ScorerEntry};

/// Goals per scorer, most first, at most `limit` entries.
///
/// Events without a scorer are skipped. Players on equal goals keep the
/// order in which they first scored.
pub fn compute_top_scorers(goal_events: &[GoalEvent], limit: usize) -> Vec<ScorerEntry> {
    let mut tally = Tally::default();
    for event in goal_events {
        if let Some(scorer_id) = event.scorer_id.as_deref() {
            tally.add(scorer_id, event.scorer_name.as_deref());
        }
    }

    let scorers: Vec<ScorerEntry> = tally
        .ranked(Some(limit))
        .into_iter()
        .map(|entry| ScorerEntry {
            player_id: entry.id,
            name: entry.name,
            goals: entry.count,
        })
        .collect();
    debug!(count = scorers.len(), limit, "computed top scorers");
    scorers
}

/// Assists per provider, most first, at most `limit` entries.
pub fn compute_top_assists(goal_events: &[GoalEvent], limit: usize) -> Vec<AssistEntry> {
    let mut tally = Tally::default();
    for event in goal_events {
        if let Some(assist_id) = event.assist_id.as_deref() {
            tally.add(assist_id, event.assist_name.as_deref());
        }
    }

    let assists: Vec<AssistEntry> = tally
        .ranked(Some(limit))
        .into_iter()
        .map(|entry| AssistEntry {
            player_id: entry.id,
            name: entry.name,
            assists: entry.count,
        })
        .collect();
    debug!(count = assists.len(), limit, "computed top assists");
    assists
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::fixtures::goal;

    #[test]
    fn test_top_scorers_scenario() {
        let events = vec![
            goal(Some("p1"), None),
            goal(Some("p1"), None),
            goal(Some("p2"), None),
        ];
        let scorers = compute_top_scorers(&events, 20);
        assert_eq!(
            scorers,
            vec![
                ScorerEntry {
                    player_id: "p1".to_string(),
                    name: "Player p1".to_string(),
                    goals: 2,
                },
                ScorerEntry {
                    player_id: "p2".to_string(),
                    name: "Player p2".to_string(),
                    goals: 1,
                },
            ]
        );
    }

    #[test]
    fn test_events_without_scorer_are_skipped() {
        let events = vec![goal(None, Some("p9")), goal(Some("p1"), None)];
        let scorers = compute_top_scorers(&events, 20);
        assert_eq!(scorers.len(), 1);
        assert_eq!(scorers[0].player_id, "p1");
    }

    #[test]
    fn test_limit_and_tie_order() {
        let events = vec![
            goal(Some("p3"), None),
            goal(Some("p1"), None),
            goal(Some("p2"), None),
            goal(Some("p2"), None),
        ];
        let scorers = compute_top_scorers(&events, 2);
        let ids: Vec<&str> = scorers.iter().map(|s| s.player_id.as_str()).collect();
        assert_eq!(ids, ["p2", "p3"]);
    }

    #[test]
    fn test_missing_name_falls_back() {
        let mut event = goal(Some("p1"), None);
        event.scorer_name = None;
        let scorers = compute_top_scorers(&[event], 20);
        assert_eq!(scorers[0].name, "Unknown");
    }

    #[test]
    fn test_top_assists() {
        let events = vec![
            goal(Some("p1"), Some("p4")),
            goal(Some("p2"), None),
            goal(Some("p1"), Some("p5")),
            goal(Some("p3"), Some("p5")),
        ];
        let assists = compute_top_assists(&events, 20);
        assert_eq!(assists.len(), 2);
        assert_eq!(assists[0].player_id, "p5");
        assert_eq!(assists[0].assists, 2);
        assert_eq!(assists[1].player_id, "p4");
        assert_eq!(assists[1].assists, 1);
    }

    #[test]
    fn test_empty_events() {
        assert!(compute_top_scorers(&[], 20).is_empty());
        assert!(compute_top_assists(&[], 20).is_empty());
    }
}
