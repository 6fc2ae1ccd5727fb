//! Percentage-market recommendation ranking
//!
//! Scans every player on the selected teams, emits one entry per market
//! with qualifying evidence, and returns the top entries ranked by
//! hit-percentage.

use serde::{Deserialize, Serialize};

use crate::catalog::{MarketRole, BATTING_MARKETS, BOWLING_MARKETS};
use crate::data::CricketDataset;

/// Maximum entries returned to the caller
pub const MAX_RECOMMENDATIONS: usize = 7;

/// One ranked (player, market) proposition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationEntry {
    pub player_name: String,
    pub team: String,
    pub market_id: String,
    pub market: String,
    pub percentage: String,
    pub percentage_value: f64,
    #[serde(rename = "type")]
    pub role: MarketRole,
}

/// Ranked recommendations plus the pre-truncation total
#[derive(Debug, Clone)]
pub struct Recommendations {
    pub entries: Vec<RecommendationEntry>,
    pub total_available: usize,
}

/// Render a percentage the way the source data prints it
fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Rank all qualifying (player, market) pairs for the given teams
///
/// A percentage of 0.0 means "no qualifying data" in the source files and
/// is skipped rather than ranked. Ties keep encounter order: team input
/// order, batters before bowlers, catalog market order.
pub fn recommend(dataset: &CricketDataset, teams: &[String]) -> Recommendations {
    let mut entries = Vec::new();

    for team in teams {
        for batter in dataset.batters_for_team(team) {
            for market in &BATTING_MARKETS {
                let value = (market.extract)(batter);
                if value <= 0.0 {
                    continue;
                }
                entries.push(RecommendationEntry {
                    player_name: batter.name.clone(),
                    team: batter.team.clone(),
                    market_id: market.id.to_string(),
                    market: market.name.to_string(),
                    percentage: format_percent(value),
                    percentage_value: value,
                    role: market.role,
                });
            }
        }

        for bowler in dataset.bowlers_for_team(team) {
            for market in &BOWLING_MARKETS {
                let value = (market.extract)(bowler);
                if value <= 0.0 {
                    continue;
                }
                entries.push(RecommendationEntry {
                    player_name: bowler.name.clone(),
                    team: bowler.team.clone(),
                    market_id: market.id.to_string(),
                    market: market.name.to_string(),
                    percentage: format_percent(value),
                    percentage_value: value,
                    role: market.role,
                });
            }
        }
    }

    // sort_by is stable, so equal percentages keep their encounter order
    entries.sort_by(|a, b| b.percentage_value.partial_cmp(&a.percentage_value).unwrap());

    let total_available = entries.len();
    entries.truncate(MAX_RECOMMENDATIONS);

    Recommendations {
        entries,
        total_available,
    }
}

/// Derive the participating teams from a `<home>_vs_<away>` match id
///
/// Malformed or absent ids degrade to the winner team alone rather than
/// erroring.
pub fn resolve_match_teams(winner_team: &str, match_id: Option<&str>) -> Vec<String> {
    if let Some(id) = match_id {
        let parts: Vec<&str> = id.split("_vs_").collect();
        if parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty() {
            return vec![parts[0].to_string(), parts[1].to_string()];
        }
    }
    vec![winner_team.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{BatterRecord, BowlerRecord};

    fn batter(name: &str, team: &str, pcts: [f64; 4]) -> BatterRecord {
        BatterRecord {
            name: name.to_string(),
            team: team.to_string(),
            total_innings: 10,
            total_runs: 200,
            runs_10_pct: pcts[0],
            runs_10_count: 0,
            runs_20_pct: pcts[1],
            runs_20_count: 0,
            six_pct: pcts[2],
            six_count: 0,
            top_scorer_pct: pcts[3],
            top_scorer_count: 0,
        }
    }

    fn bowler(name: &str, team: &str, pcts: [f64; 3]) -> BowlerRecord {
        BowlerRecord {
            name: name.to_string(),
            team: team.to_string(),
            total_innings: 10,
            total_wickets: 8,
            wicket_1_pct: pcts[0],
            wicket_1_count: 0,
            wicket_2_pct: pcts[1],
            wicket_2_count: 0,
            top_wickets_pct: pcts[2],
            top_wickets_count: 0,
        }
    }

    fn dataset(batters: Vec<BatterRecord>, bowlers: Vec<BowlerRecord>) -> CricketDataset {
        CricketDataset::from_records(batters, bowlers, vec![])
    }

    fn teams(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_only_selected_teams_contribute() {
        let ds = dataset(
            vec![
                batter("A", "Sydney Sixers", [60.0, 40.0, 50.0, 20.0]),
                batter("B", "Perth Scorchers", [90.0, 80.0, 70.0, 60.0]),
            ],
            vec![],
        );

        let result = recommend(&ds, &teams(&["Sydney Sixers"]));

        assert_eq!(result.total_available, 4);
        for entry in &result.entries {
            assert_eq!(entry.team, "Sydney Sixers");
        }
    }

    #[test]
    fn test_zero_percent_excluded() {
        let ds = dataset(
            vec![batter("A", "Sydney Sixers", [60.0, 0.0, 0.0, 20.0])],
            vec![bowler("B", "Sydney Sixers", [0.0, 0.0, 0.0])],
        );

        let result = recommend(&ds, &teams(&["Sydney Sixers"]));

        assert_eq!(result.total_available, 2);
        for entry in &result.entries {
            assert!(entry.percentage_value > 0.0);
            assert!(entry.percentage_value <= 100.0);
        }
    }

    #[test]
    fn test_sorted_descending() {
        let ds = dataset(
            vec![batter("A", "Sydney Sixers", [30.0, 70.0, 10.0, 50.0])],
            vec![bowler("B", "Sydney Sixers", [90.0, 20.0, 5.0])],
        );

        let result = recommend(&ds, &teams(&["Sydney Sixers"]));

        for pair in result.entries.windows(2) {
            assert!(pair[0].percentage_value >= pair[1].percentage_value);
        }
        assert_eq!(result.entries[0].percentage_value, 90.0);
        assert_eq!(result.entries[0].market_id, "wicket_1_plus");
    }

    #[test]
    fn test_ties_keep_encounter_order() {
        // Two batters with the same percentage on the same market: the one
        // appearing first in the dataset stays first.
        let ds = dataset(
            vec![
                batter("First", "Sydney Sixers", [55.0, 0.0, 0.0, 0.0]),
                batter("Second", "Sydney Sixers", [55.0, 0.0, 0.0, 0.0]),
            ],
            vec![bowler("Third", "Sydney Sixers", [55.0, 0.0, 0.0])],
        );

        let result = recommend(&ds, &teams(&["Sydney Sixers"]));

        assert_eq!(result.total_available, 3);
        assert_eq!(result.entries[0].player_name, "First");
        assert_eq!(result.entries[1].player_name, "Second");
        // batters come before bowlers at equal value
        assert_eq!(result.entries[2].player_name, "Third");
    }

    #[test]
    fn test_truncated_to_seven_with_full_total() {
        let ds = dataset(
            vec![
                batter("A", "Sydney Sixers", [61.0, 62.0, 63.0, 64.0]),
                batter("B", "Sydney Sixers", [65.0, 66.0, 67.0, 68.0]),
                batter("C", "Sydney Sixers", [69.0, 70.0, 71.0, 72.0]),
            ],
            vec![],
        );

        let result = recommend(&ds, &teams(&["Sydney Sixers"]));

        assert_eq!(result.entries.len(), MAX_RECOMMENDATIONS);
        assert_eq!(result.total_available, 12);
        // the cut keeps the highest values
        assert_eq!(result.entries[0].percentage_value, 72.0);
        assert_eq!(result.entries[6].percentage_value, 66.0);
    }

    #[test]
    fn test_all_rounder_contributes_both_roles() {
        let ds = dataset(
            vec![batter("AllRounder", "Sydney Sixers", [60.0, 0.0, 0.0, 0.0])],
            vec![bowler("AllRounder", "Sydney Sixers", [70.0, 0.0, 0.0])],
        );

        let result = recommend(&ds, &teams(&["Sydney Sixers"]));

        assert_eq!(result.total_available, 2);
        assert_eq!(result.entries[0].role, MarketRole::Bowling);
        assert_eq!(result.entries[1].role, MarketRole::Batting);
    }

    #[test]
    fn test_empty_team_set() {
        let ds = dataset(
            vec![batter("A", "Sydney Sixers", [60.0, 40.0, 50.0, 20.0])],
            vec![],
        );

        let result = recommend(&ds, &[]);

        assert!(result.entries.is_empty());
        assert_eq!(result.total_available, 0);
    }

    #[test]
    fn test_unknown_team_contributes_nothing() {
        let ds = dataset(
            vec![batter("A", "Sydney Sixers", [60.0, 40.0, 50.0, 20.0])],
            vec![],
        );

        let result = recommend(&ds, &teams(&["Auckland Aces"]));

        assert!(result.entries.is_empty());
        assert_eq!(result.total_available, 0);
    }

    #[test]
    fn test_both_match_teams_scanned() {
        let ds = dataset(
            vec![
                batter("A", "Sydney Sixers", [60.0, 0.0, 0.0, 0.0]),
                batter("B", "Brisbane Heat", [80.0, 0.0, 0.0, 0.0]),
            ],
            vec![],
        );

        let result = recommend(&ds, &teams(&["Sydney Sixers", "Brisbane Heat"]));

        assert_eq!(result.total_available, 2);
        assert_eq!(result.entries[0].player_name, "B");
    }

    #[test]
    fn test_entry_formatting() {
        let ds = dataset(
            vec![batter("A", "Sydney Sixers", [35.5, 0.0, 0.0, 0.0])],
            vec![],
        );

        let result = recommend(&ds, &teams(&["Sydney Sixers"]));

        let entry = &result.entries[0];
        assert_eq!(entry.percentage, "35.5%");
        assert_eq!(entry.percentage_value, 35.5);
        assert_eq!(entry.market, "10+ Runs");
    }

    #[test]
    fn test_resolve_match_teams_well_formed() {
        assert_eq!(
            resolve_match_teams("Sydney Sixers", Some("Sydney Sixers_vs_Brisbane Heat")),
            vec!["Sydney Sixers".to_string(), "Brisbane Heat".to_string()]
        );
    }

    #[test]
    fn test_resolve_match_teams_fallback() {
        assert_eq!(
            resolve_match_teams("Sydney Sixers", None),
            vec!["Sydney Sixers".to_string()]
        );
        assert_eq!(
            resolve_match_teams("Sydney Sixers", Some("not a match id")),
            vec!["Sydney Sixers".to_string()]
        );
        assert_eq!(
            resolve_match_teams("Sydney Sixers", Some("A_vs_B_vs_C")),
            vec!["Sydney Sixers".to_string()]
        );
        assert_eq!(
            resolve_match_teams("Sydney Sixers", Some("_vs_Brisbane Heat")),
            vec!["Sydney Sixers".to_string()]
        );
    }
}
