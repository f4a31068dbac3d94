/// All errors that can occur while preparing or summarising league data.
///
/// The aggregators themselves never fail; errors only surface at the edges
/// where raw rows are converted or a specific round is requested.
#[derive(thiserror::Error, Debug)]
pub enum StandingsError {
    /// A match row carried a status string outside SCHEDULED/LIVE/FINISHED.
    #[error("unknown status {status:?} for match {match_id}")]
    UnknownStatus { match_id: String, status: String },

    /// A match row is missing its joined home or away team.
    #[error("match {match_id} has no {side} team")]
    MissingTeam {
        match_id: String,
        side: &'static str,
    },

    /// Failed to parse a kickoff or event timestamp.
    #[error("failed to parse date: {0}")]
    DateParse(#[from] chrono::ParseError),

    /// The season has no matches at all.
    #[error("season has no matches")]
    NoMatches,

    /// No match is scheduled for the requested matchday.
    #[error("no matches on matchday {0}")]
    EmptyMatchday(u32),

    /// A configuration value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = std::result::Result<T, StandingsError>;
