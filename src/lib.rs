//! League tables, form guides and player leaderboards for amateur football
//! seasons.
//!
//! All computation is pure: the functions take the match, goal and lineup
//! records of one season (already fetched by the caller) and return fresh
//! ranked structures. Nothing is cached between calls.
//!
//! ```
//! use league_standings::{compute_form, compute_standings, Match, MatchStatus, TeamRef};
//!
//! let fixture = |id: &str, home: (&str, u32), away: (&str, u32)| Match {
//!     id: id.into(),
//!     home: TeamRef::new(home.0, home.0.to_uppercase()),
//!     away: TeamRef::new(away.0, away.0.to_uppercase()),
//!     home_score: home.1,
//!     away_score: away.1,
//!     status: MatchStatus::Finished,
//!     kickoff_at: None,
//!     matchday: None,
//!     venue: None,
//! };
//! let matches = vec![fixture("m1", ("a", 2), ("b", 1)), fixture("m2", ("b", 0), ("a", 0))];
//!
//! let table = compute_standings(&matches);
//! assert_eq!(table[0].team_id, "a");
//! assert_eq!(table[0].points, 4);
//! assert_eq!(table[1].goal_difference, -1);
//! assert_eq!(compute_form(&matches, "b").len(), 2);
//! ```

pub use config::StatsConfig;
pub use engine::clean_sheets::compute_clean_sheets;
pub use engine::form::compute_form;
pub use engine::leaderboard::{compute_top_assists, compute_top_scorers};
pub use engine::rounds::{matchdays, matches_for_matchday, round_summary};
pub use engine::rows::{parse_goal_events, parse_lineups, parse_matches};
pub use engine::standings::{compute_standings, team_position};
pub use engine::timeline::goal_timeline;
pub use error::{Result, StandingsError};
pub use league::LeagueStats;
pub use model::*;

pub mod config;
mod engine;
pub mod error;
mod league;
pub mod model;
