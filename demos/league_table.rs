//! Print the table and leaderboards of a season dump.
//!
//! ```text
//! cargo run --example league_table -- season.json
//! ```
//!
//! The file holds the raw `matches`, `goals` and `lineups` rows as the data
//! store returns them.

use serde::Deserialize;

use league_standings::{
    parse_goal_events, parse_lineups, parse_matches, GoalEventRow, LeagueStats, LineupRow,
    MatchRow,
};

#[derive(Deserialize)]
struct SeasonDump {
    matches: Vec<MatchRow>,
    #[serde(default)]
    goals: Vec<GoalEventRow>,
    #[serde(default)]
    lineups: Vec<LineupRow>,
}

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "season.json".to_string());
    let dump: SeasonDump =
        serde_json::from_reader(std::fs::File::open(&path).unwrap()).unwrap();

    let matches = parse_matches(dump.matches);
    let goals = parse_goal_events(dump.goals);
    let lineups = parse_lineups(dump.lineups);

    let stats = LeagueStats::new();
    let season = stats.season_stats(&matches, &goals, &lineups);

    println!(
        "{} matches, {} finished",
        season.matches, season.finished
    );
    println!(
        "{:>3} {:<24} {:>2} {:>2} {:>2} {:>2} {:>5} {:>4} {:>4}  Form",
        "#", "Team", "P", "W", "D", "L", "GF:GA", "GD", "PTS"
    );
    for (i, row) in season.standings.iter().enumerate() {
        println!(
            "{:>3} {:<24} {:>2} {:>2} {:>2} {:>2} {:>5} {:>4} {:>4}  {}",
            i + 1,
            row.team_name,
            row.played,
            row.won,
            row.drawn,
            row.lost,
            format!("{}:{}", row.goals_for, row.goals_against),
            row.goal_difference,
            row.points,
            row.form_string()
        );
    }

    println!("\nTop scorers");
    for (i, s) in season.top_scorers.iter().enumerate() {
        println!("{:>3}. {:<24} {}", i + 1, s.name, s.goals);
    }
    println!("\nTop assists");
    for (i, a) in season.top_assists.iter().enumerate() {
        println!("{:>3}. {:<24} {}", i + 1, a.name, a.assists);
    }
    println!("\nClean sheets");
    for (i, c) in season.clean_sheets.iter().enumerate() {
        println!("{:>3}. {:<24} {}", i + 1, c.name, c.count);
    }

    println!("\n{}", serde_json::to_string_pretty(&season).unwrap());
}
