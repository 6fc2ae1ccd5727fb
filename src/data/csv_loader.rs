//! CSV data loading for batter, bowler and matchup tables

use polars::prelude::*;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::info;

/// Batters CSV file name
pub const BATTERS_CSV: &str = "BBL_batters.csv";
/// Bowlers CSV file name
pub const BOWLERS_CSV: &str = "BBL_bowlers.csv";
/// Matchups CSV file name
pub const MATCHUPS_CSV: &str = "Matchupsdata.csv";

// Batters CSV column names (as published)
const COL_BATTER_NAME: &str = "BatsmanName";
const COL_BATTER_TEAM: &str = "Team";
const COL_BATTER_INNINGS: &str = "Total.Innings";
const COL_BATTER_RUNS: &str = "Total.Runs";
const COL_RUNS_10_PCT: &str = "Percentage.of.No.of.times.BatsmanName.scored.more.than.10.runs";
const COL_RUNS_10_COUNT: &str = "No.of.times.BatsmanName.scored.more.than.10.runs";
const COL_RUNS_20_PCT: &str = "Percentage.of.No.of.times.BatsmanName.scored.more.than.20.runs";
const COL_RUNS_20_COUNT: &str = "No.of.times.BatsmanName.scored.more.than.20.runs";
const COL_SIX_PCT: &str = "Percentage.of.No.of.Times.BatsmanName.Hit.Atleast.One.Six";
const COL_SIX_COUNT: &str = "No.of.Times.BatsmanName.Hit.Atleast.One.Six";
const COL_TOP_SCORER_PCT: &str = "Percentage.of.Top.Team.Runs.Scorer";
const COL_TOP_SCORER_COUNT: &str = "Top.Team.Runs.Scorer";

// Bowlers CSV column names
const COL_BOWLER_NAME: &str = "BowlerName";
const COL_BOWLER_TEAM: &str = "bowling_team";
const COL_BOWLER_INNINGS: &str = "Innings.by.Bowler";
const COL_BOWLER_WICKETS: &str = "Total.Wickets";
const COL_WICKET_1_PCT: &str = "Percentage.of.No.of.times.BowlerName.Took.Atleast.1.Wicket";
const COL_WICKET_1_COUNT: &str = "No.of.times.BowlerName.Took.Atleast.1.Wicket";
const COL_WICKET_2_PCT: &str = "Percentage.of.No.of.times.BowlerName.Took.Atleast.2.Wicket";
const COL_WICKET_2_COUNT: &str = "No.of.times.BowlerName.Took.Atleast.2.Wicket";
const COL_TOP_WICKETS_PCT: &str = "Percentage.of.Top.Wicket.Taker.for.Team";
const COL_TOP_WICKETS_COUNT: &str = "Top.Wicket.Taker.for.Team";

// Matchups CSV column names
const COL_MATCHUP_PLAYER: &str = "PlayerName";
const COL_MATCHUP_TEAM: &str = "Team";
const COL_MATCHUP_LABEL: &str = "Matchup";

/// Batter season aggregates loaded from the batters CSV
///
/// Percentage fields are normalized to f64 at load time; 0.0 is the
/// "no qualifying data" sentinel carried over from the source data.
#[derive(Debug, Clone)]
pub struct BatterRecord {
    pub name: String,
    pub team: String,
    pub total_innings: i64,
    pub total_runs: i64,
    pub runs_10_pct: f64,
    pub runs_10_count: i64,
    pub runs_20_pct: f64,
    pub runs_20_count: i64,
    pub six_pct: f64,
    pub six_count: i64,
    pub top_scorer_pct: f64,
    pub top_scorer_count: i64,
}

/// Bowler season aggregates loaded from the bowlers CSV
#[derive(Debug, Clone)]
pub struct BowlerRecord {
    pub name: String,
    pub team: String,
    pub total_innings: i64,
    pub total_wickets: i64,
    pub wicket_1_pct: f64,
    pub wicket_1_count: i64,
    pub wicket_2_pct: f64,
    pub wicket_2_count: i64,
    pub top_wickets_pct: f64,
    pub top_wickets_count: i64,
}

/// One player-to-matchup assignment row
#[derive(Debug, Clone)]
pub struct MatchupRecord {
    pub player: String,
    pub team: String,
    pub matchup: String,
}

/// Normalize a percentage cell to its numeric value
///
/// Accepts `"35.5%"`, `"35.5"` or plain numeric text; the `%` suffix is
/// cosmetic in the source files.
pub fn parse_percent(raw: &str) -> Option<f64> {
    raw.trim().trim_end_matches('%').trim().parse::<f64>().ok()
}

/// Read a percentage column as normalized f64 values
///
/// The source files mix string cells (`"35.5%"`) with numeric columns, so
/// the dtype decides the extraction path. Missing or unparseable cells
/// become the 0.0 sentinel.
fn percent_values(df: &DataFrame, name: &str) -> Result<Vec<f64>, PolarsError> {
    let col = df.column(name)?;
    match col.dtype() {
        DataType::String => {
            let vals = col.str()?;
            Ok((0..df.height())
                .map(|i| vals.get(i).and_then(parse_percent).unwrap_or(0.0))
                .collect())
        }
        _ => {
            let casted = col.cast(&DataType::Float64)?;
            let vals = casted.f64()?;
            Ok((0..df.height()).map(|i| vals.get(i).unwrap_or(0.0)).collect())
        }
    }
}

/// Read an integer column, tolerating whatever width polars inferred
fn int_values(df: &DataFrame, name: &str) -> Result<Vec<i64>, PolarsError> {
    let casted = df.column(name)?.cast(&DataType::Int64)?;
    let vals = casted.i64()?;
    Ok((0..df.height()).map(|i| vals.get(i).unwrap_or(0)).collect())
}

/// Read a string column
fn str_values(df: &DataFrame, name: &str) -> Result<Vec<String>, PolarsError> {
    let vals = df.column(name)?.str()?;
    Ok((0..df.height())
        .map(|i| vals.get(i).unwrap_or("").to_string())
        .collect())
}

fn read_csv<P: AsRef<Path>>(path: P) -> Result<DataFrame, PolarsError> {
    CsvReadOptions::default()
        .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))?
        .finish()
}

fn load_batters<P: AsRef<Path>>(path: P) -> Result<Vec<BatterRecord>, PolarsError> {
    let df = read_csv(path)?;

    let names = str_values(&df, COL_BATTER_NAME)?;
    let teams = str_values(&df, COL_BATTER_TEAM)?;
    let innings = int_values(&df, COL_BATTER_INNINGS)?;
    let runs = int_values(&df, COL_BATTER_RUNS)?;
    let runs_10_pct = percent_values(&df, COL_RUNS_10_PCT)?;
    let runs_10_count = int_values(&df, COL_RUNS_10_COUNT)?;
    let runs_20_pct = percent_values(&df, COL_RUNS_20_PCT)?;
    let runs_20_count = int_values(&df, COL_RUNS_20_COUNT)?;
    let six_pct = percent_values(&df, COL_SIX_PCT)?;
    let six_count = int_values(&df, COL_SIX_COUNT)?;
    let top_scorer_pct = percent_values(&df, COL_TOP_SCORER_PCT)?;
    let top_scorer_count = int_values(&df, COL_TOP_SCORER_COUNT)?;

    let mut records = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        records.push(BatterRecord {
            name: names[i].clone(),
            team: teams[i].clone(),
            total_innings: innings[i],
            total_runs: runs[i],
            runs_10_pct: runs_10_pct[i],
            runs_10_count: runs_10_count[i],
            runs_20_pct: runs_20_pct[i],
            runs_20_count: runs_20_count[i],
            six_pct: six_pct[i],
            six_count: six_count[i],
            top_scorer_pct: top_scorer_pct[i],
            top_scorer_count: top_scorer_count[i],
        });
    }

    Ok(records)
}

fn load_bowlers<P: AsRef<Path>>(path: P) -> Result<Vec<BowlerRecord>, PolarsError> {
    let df = read_csv(path)?;

    let names = str_values(&df, COL_BOWLER_NAME)?;
    let teams = str_values(&df, COL_BOWLER_TEAM)?;
    let innings = int_values(&df, COL_BOWLER_INNINGS)?;
    let wickets = int_values(&df, COL_BOWLER_WICKETS)?;
    let wicket_1_pct = percent_values(&df, COL_WICKET_1_PCT)?;
    let wicket_1_count = int_values(&df, COL_WICKET_1_COUNT)?;
    let wicket_2_pct = percent_values(&df, COL_WICKET_2_PCT)?;
    let wicket_2_count = int_values(&df, COL_WICKET_2_COUNT)?;
    let top_wickets_pct = percent_values(&df, COL_TOP_WICKETS_PCT)?;
    let top_wickets_count = int_values(&df, COL_TOP_WICKETS_COUNT)?;

    let mut records = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        records.push(BowlerRecord {
            name: names[i].clone(),
            team: teams[i].clone(),
            total_innings: innings[i],
            total_wickets: wickets[i],
            wicket_1_pct: wicket_1_pct[i],
            wicket_1_count: wicket_1_count[i],
            wicket_2_pct: wicket_2_pct[i],
            wicket_2_count: wicket_2_count[i],
            top_wickets_pct: top_wickets_pct[i],
            top_wickets_count: top_wickets_count[i],
        });
    }

    Ok(records)
}

fn load_matchups<P: AsRef<Path>>(path: P) -> Result<Vec<MatchupRecord>, PolarsError> {
    let df = read_csv(path)?;

    let players = str_values(&df, COL_MATCHUP_PLAYER)?;
    let teams = str_values(&df, COL_MATCHUP_TEAM)?;
    let labels = str_values(&df, COL_MATCHUP_LABEL)?;

    let mut records = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        records.push(MatchupRecord {
            player: players[i].clone(),
            team: teams[i].clone(),
            matchup: labels[i].clone(),
        });
    }

    Ok(records)
}

/// Immutable player dataset with per-team indexes
///
/// Loaded once at startup and shared read-only across requests. Index maps
/// preserve CSV row order within each team, which downstream ranking relies
/// on for tie ordering.
pub struct CricketDataset {
    batters: Vec<BatterRecord>,
    bowlers: Vec<BowlerRecord>,
    matchups: Vec<MatchupRecord>,
    batters_by_team: HashMap<String, Vec<usize>>,
    bowlers_by_team: HashMap<String, Vec<usize>>,
}

impl CricketDataset {
    /// Load the three CSV tables from a data directory
    pub fn load<P: AsRef<Path>>(data_dir: P) -> Result<Self, PolarsError> {
        let dir = data_dir.as_ref();

        let batters = load_batters(dir.join(BATTERS_CSV))?;
        let bowlers = load_bowlers(dir.join(BOWLERS_CSV))?;
        let matchups = load_matchups(dir.join(MATCHUPS_CSV))?;

        info!(
            "Loaded {} batters, {} bowlers, {} matchup rows",
            batters.len(),
            bowlers.len(),
            matchups.len()
        );

        Ok(Self::from_records(batters, bowlers, matchups))
    }

    /// Build a dataset from already-parsed records
    pub fn from_records(
        batters: Vec<BatterRecord>,
        bowlers: Vec<BowlerRecord>,
        matchups: Vec<MatchupRecord>,
    ) -> Self {
        let mut batters_by_team: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, b) in batters.iter().enumerate() {
            batters_by_team.entry(b.team.clone()).or_default().push(i);
        }

        let mut bowlers_by_team: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, b) in bowlers.iter().enumerate() {
            bowlers_by_team.entry(b.team.clone()).or_default().push(i);
        }

        Self {
            batters,
            bowlers,
            matchups,
            batters_by_team,
            bowlers_by_team,
        }
    }

    /// Batters for a team in CSV row order
    pub fn batters_for_team(&self, team: &str) -> Vec<&BatterRecord> {
        self.batters_by_team
            .get(team)
            .map(|idx| idx.iter().map(|&i| &self.batters[i]).collect())
            .unwrap_or_default()
    }

    /// Bowlers for a team in CSV row order
    pub fn bowlers_for_team(&self, team: &str) -> Vec<&BowlerRecord> {
        self.bowlers_by_team
            .get(team)
            .map(|idx| idx.iter().map(|&i| &self.bowlers[i]).collect())
            .unwrap_or_default()
    }

    /// Find a batter by exact name
    pub fn find_batter(&self, name: &str) -> Option<&BatterRecord> {
        self.batters.iter().find(|b| b.name == name)
    }

    /// Find a bowler by exact name
    pub fn find_bowler(&self, name: &str) -> Option<&BowlerRecord> {
        self.bowlers.iter().find(|b| b.name == name)
    }

    /// All matchup assignment rows
    pub fn matchups(&self) -> &[MatchupRecord] {
        &self.matchups
    }

    /// Distinct matchup labels in first-seen order
    pub fn matchup_labels(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut labels = Vec::new();
        for m in &self.matchups {
            if seen.insert(m.matchup.as_str()) {
                labels.push(m.matchup.clone());
            }
        }
        labels
    }

    /// Assignment rows for one matchup label
    pub fn players_for_matchup(&self, label: &str) -> Vec<&MatchupRecord> {
        self.matchups.iter().filter(|m| m.matchup == label).collect()
    }

    /// Total batter rows
    pub fn batter_count(&self) -> usize {
        self.batters.len()
    }

    /// Total bowler rows
    pub fn bowler_count(&self) -> usize {
        self.bowlers.len()
    }

    /// True when no player rows are loaded at all
    pub fn is_empty(&self) -> bool {
        self.batters.is_empty() && self.bowlers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batter(name: &str, team: &str) -> BatterRecord {
        BatterRecord {
            name: name.to_string(),
            team: team.to_string(),
            total_innings: 10,
            total_runs: 250,
            runs_10_pct: 60.0,
            runs_10_count: 6,
            runs_20_pct: 40.0,
            runs_20_count: 4,
            six_pct: 50.0,
            six_count: 5,
            top_scorer_pct: 20.0,
            top_scorer_count: 2,
        }
    }

    fn bowler(name: &str, team: &str) -> BowlerRecord {
        BowlerRecord {
            name: name.to_string(),
            team: team.to_string(),
            total_innings: 10,
            total_wickets: 12,
            wicket_1_pct: 70.0,
            wicket_1_count: 7,
            wicket_2_pct: 30.0,
            wicket_2_count: 3,
            top_wickets_pct: 10.0,
            top_wickets_count: 1,
        }
    }

    fn matchup(player: &str, team: &str, label: &str) -> MatchupRecord {
        MatchupRecord {
            player: player.to_string(),
            team: team.to_string(),
            matchup: label.to_string(),
        }
    }

    #[test]
    fn test_parse_percent_strips_suffix() {
        assert_eq!(parse_percent("35.5%"), Some(35.5));
        assert_eq!(parse_percent("35.5"), Some(35.5));
        assert_eq!(parse_percent(" 80.0% "), Some(80.0));
        assert_eq!(parse_percent("0.0%"), Some(0.0));
    }

    #[test]
    fn test_parse_percent_rejects_garbage() {
        assert_eq!(parse_percent("n/a"), None);
        assert_eq!(parse_percent(""), None);
        assert_eq!(parse_percent("%"), None);
    }

    #[test]
    fn test_from_records_indexes_by_team() {
        let ds = CricketDataset::from_records(
            vec![
                batter("A", "Sydney Sixers"),
                batter("B", "Brisbane Heat"),
                batter("C", "Sydney Sixers"),
            ],
            vec![bowler("D", "Brisbane Heat")],
            vec![],
        );

        let sixers = ds.batters_for_team("Sydney Sixers");
        assert_eq!(sixers.len(), 2);
        // CSV row order preserved within the team
        assert_eq!(sixers[0].name, "A");
        assert_eq!(sixers[1].name, "C");

        assert_eq!(ds.bowlers_for_team("Brisbane Heat").len(), 1);
        assert!(ds.batters_for_team("Perth Scorchers").is_empty());
    }

    #[test]
    fn test_find_player_by_name() {
        let ds = CricketDataset::from_records(
            vec![batter("A", "Sydney Sixers")],
            vec![bowler("B", "Brisbane Heat")],
            vec![],
        );

        assert!(ds.find_batter("A").is_some());
        assert!(ds.find_batter("B").is_none());
        assert!(ds.find_bowler("B").is_some());
        assert!(ds.find_bowler("Nobody").is_none());
    }

    #[test]
    fn test_matchup_labels_dedup_in_order() {
        let ds = CricketDataset::from_records(
            vec![],
            vec![],
            vec![
                matchup("A", "Sydney Sixers", "Sixers v Heat"),
                matchup("B", "Brisbane Heat", "Sixers v Heat"),
                matchup("C", "Perth Scorchers", "Scorchers v Stars"),
            ],
        );

        assert_eq!(
            ds.matchup_labels(),
            vec!["Sixers v Heat".to_string(), "Scorchers v Stars".to_string()]
        );
        assert_eq!(ds.players_for_matchup("Sixers v Heat").len(), 2);
        assert!(ds.players_for_matchup("Unknown").is_empty());
    }

    #[test]
    fn test_is_empty() {
        let empty = CricketDataset::from_records(vec![], vec![], vec![]);
        assert!(empty.is_empty());

        let ds = CricketDataset::from_records(vec![batter("A", "Sydney Sixers")], vec![], vec![]);
        assert!(!ds.is_empty());
    }
}
