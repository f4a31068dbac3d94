use itertools::Itertools;
use tracing::debug;

use crate::config::DEFAULT_FORM_LENGTH;
use crate::model::{FormResult, Match};

/// The last five finished results of `team_id`, oldest first.
///
/// Teams with fewer finished matches get a shorter sequence.
pub fn compute_form(matches: &[Match], team_id: &str) -> Vec<FormResult> {
    form_with_length(matches, team_id, DEFAULT_FORM_LENGTH)
}

pub(crate) fn form_with_length(
    matches: &[Match],
    team_id: &str,
    form_length: usize,
) -> Vec<FormResult> {
    let mut form = matches
        .iter()
        .filter(|m| m.is_finished() && m.involves(team_id))
        .sorted_by(|a, b| a.chronological_cmp(b))
        .filter_map(|m| m.outcome_for(team_id))
        .collect_vec();

    let overflow = form.len().saturating_sub(form_length);
    form.drain(..overflow);

    debug!(team_id, count = form.len(), "computed form");
    form
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::fixtures::{finished, finished_on, scheduled};
    use crate::model::FormResult::{Draw, Loss, Win};

    #[test]
    fn test_keeps_last_five_in_order() {
        let matches = vec![
            finished_on(7, "m7", "b", "a", (0, 1)),
            finished_on(1, "m1", "a", "b", (0, 1)),
            finished_on(2, "m2", "a", "c", (1, 0)),
            finished_on(3, "m3", "c", "a", (1, 1)),
            finished_on(4, "m4", "a", "b", (3, 1)),
            finished_on(5, "m5", "b", "a", (2, 0)),
            finished_on(6, "m6", "a", "c", (2, 2)),
        ];
        assert_eq!(
            compute_form(&matches, "a"),
            vec![Draw, Win, Loss, Draw, Win]
        );
    }

    #[test]
    fn test_short_history_is_not_padded() {
        let matches = vec![finished("m1", "a", "b", (1, 2)), scheduled("m2", "a", "b")];
        assert_eq!(compute_form(&matches, "a"), vec![Loss]);
        assert_eq!(compute_form(&matches, "b"), vec![Win]);
    }

    #[test]
    fn test_ignores_unfinished_and_unrelated_matches() {
        let matches = vec![scheduled("m1", "a", "b"), finished("m2", "c", "d", (1, 0))];
        assert!(compute_form(&matches, "a").is_empty());
        assert!(compute_form(&[], "a").is_empty());
    }

    #[test]
    fn test_missing_kickoff_counts_as_earliest() {
        let matches = vec![
            finished_on(2, "m2", "a", "b", (2, 0)),
            finished("m1", "a", "b", (0, 2)),
        ];
        assert_eq!(compute_form(&matches, "a"), vec![Loss, Win]);
    }

    #[test]
    fn test_equal_kickoffs_ordered_by_match_id() {
        let matches = vec![
            finished_on(4, "m9", "a", "b", (0, 1)),
            finished_on(4, "m3", "a", "b", (1, 0)),
        ];
        let mut reversed = matches.clone();
        reversed.reverse();

        assert_eq!(compute_form(&matches, "a"), vec![Win, Loss]);
        assert_eq!(compute_form(&reversed, "a"), vec![Win, Loss]);
    }

    #[test]
    fn test_custom_length() {
        let matches = vec![
            finished_on(1, "m1", "a", "b", (1, 0)),
            finished_on(2, "m2", "a", "b", (0, 0)),
            finished_on(3, "m3", "a", "b", (0, 1)),
        ];
        assert_eq!(form_with_length(&matches, "a", 2), vec![Draw, Loss]);
    }
}
