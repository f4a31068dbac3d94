use itertools::Itertools;
use tracing::debug;

use crate::error::{Result, StandingsError};
use crate::model::{Match, RoundResult, RoundSummary};

/// Distinct matchday numbers, ascending. Matches without one are skipped.
pub fn matchdays(matches: &[Match]) -> Vec<u32> {
    matches
        .iter()
        .filter_map(|m| m.matchday)
        .sorted_unstable()
        .dedup()
        .collect()
}

/// Matches of one matchday in kickoff order.
pub fn matches_for_matchday(matches: &[Match], matchday: u32) -> Vec<&Match> {
    matches
        .iter()
        .filter(|m| m.matchday == Some(matchday))
        .sorted_by(|a, b| a.chronological_cmp(b))
        .collect()
}

/// Fixture lines for a round poster.
///
/// Fails with [`StandingsError::NoMatches`] when the season has no matches
/// yet, and with [`StandingsError::EmptyMatchday`] when the requested
/// matchday has none.
pub fn round_summary(matches: &[Match], matchday: u32) -> Result<RoundSummary> {
    if matches.is_empty() {
        return Err(StandingsError::NoMatches);
    }

    let results = matches_for_matchday(matches, matchday)
        .into_iter()
        .map(|m| RoundResult {
            match_id: m.id.clone(),
            home: m.home.name.clone(),
            away: m.away.name.clone(),
            status: m.status,
            score_text: m.score_text(),
            kickoff_at: m.kickoff_at,
            venue: m.venue.clone(),
        })
        .collect_vec();
    if results.is_empty() {
        return Err(StandingsError::EmptyMatchday(matchday));
    }

    debug!(matchday, count = results.len(), "built round summary");
    Ok(RoundSummary { matchday, results })
}
