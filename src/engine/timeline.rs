use std::cmp::Ordering;

use itertools::Itertools;

use crate::model::GoalEvent;

/// Goals of one match in the order they happened.
///
/// Sorted by minute, then creation time, with missing values first in
/// both keys, matching how the match page lists them. Stoppage minutes
/// are not part of the order.
pub fn goal_timeline<'a>(goal_events: &'a [GoalEvent], match_id: &str) -> Vec<&'a GoalEvent> {
    goal_events
        .iter()
        .filter(|event| event.match_id == match_id)
        .sorted_by(|a, b| timeline_cmp(a, b))
        .collect()
}

fn timeline_cmp(a: &GoalEvent, b: &GoalEvent) -> Ordering {
    a.minute
        .cmp(&b.minute)
        .then_with(|| a.created_at.cmp(&b.created_at))
}
