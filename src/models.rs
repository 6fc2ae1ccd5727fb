use serde::{Deserialize, Serialize};

use crate::catalog::MarketRole;
use crate::core::{MultiBet, MultiBetLeg, RecommendationEntry};
use crate::data::{BatterRecord, BowlerRecord};

/// Root endpoint response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiInfo {
    pub message: String,
    pub version: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub data_loaded: bool,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Team list response
#[derive(Debug, Serialize, Deserialize)]
pub struct TeamsResponse {
    pub teams: Vec<String>,
}

/// One fixture pairing offered for match selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchInfo {
    pub id: String,
    pub home_team: String,
    pub away_team: String,
    pub display_name: String,
}

/// Available matches response
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchesResponse {
    pub matches: Vec<MatchInfo>,
}

/// Batter summary for the team players listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatterSummary {
    pub name: String,
    #[serde(rename = "type")]
    pub player_type: String,
    pub team: String,
    pub total_innings: i64,
    pub total_runs: i64,
}

impl From<&BatterRecord> for BatterSummary {
    fn from(record: &BatterRecord) -> Self {
        Self {
            name: record.name.clone(),
            player_type: "batter".to_string(),
            team: record.team.clone(),
            total_innings: record.total_innings,
            total_runs: record.total_runs,
        }
    }
}

/// Bowler summary for the team players listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BowlerSummary {
    pub name: String,
    #[serde(rename = "type")]
    pub player_type: String,
    pub team: String,
    pub total_innings: i64,
    pub total_wickets: i64,
}

impl From<&BowlerRecord> for BowlerSummary {
    fn from(record: &BowlerRecord) -> Self {
        Self {
            name: record.name.clone(),
            player_type: "bowler".to_string(),
            team: record.team.clone(),
            total_innings: record.total_innings,
            total_wickets: record.total_wickets,
        }
    }
}

/// Players for one team
#[derive(Debug, Serialize, Deserialize)]
pub struct TeamPlayersResponse {
    pub team: String,
    pub batters: Vec<BatterSummary>,
    pub bowlers: Vec<BowlerSummary>,
    pub total_players: usize,
}

/// Recommendation request body
#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub winner_team: Option<String>,
    #[serde(default)]
    pub match_id: Option<String>,
}

/// Ranked recommendations response
#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub winner_team: String,
    pub match_teams: Vec<String>,
    pub recommendations: Vec<RecommendationEntry>,
    pub total_available: usize,
}

/// Multi-bet build request body
#[derive(Debug, Serialize, Deserialize)]
pub struct MultiBetRequest {
    pub winner_team: Option<String>,
    #[serde(default)]
    pub selected_bets: Vec<MultiBetLeg>,
}

/// Multi-bet build response
#[derive(Debug, Serialize, Deserialize)]
pub struct MultiBetResponse {
    pub multi_bet: MultiBet,
}

/// Per-market detail for the player stats endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketStat {
    pub market_id: String,
    pub market: String,
    pub percentage: String,
    pub percentage_value: f64,
    pub occurrences: i64,
    pub role: MarketRole,
}

/// Batting detail for one player
#[derive(Debug, Serialize, Deserialize)]
pub struct BattingStats {
    pub team: String,
    pub total_innings: i64,
    pub total_runs: i64,
    pub markets: Vec<MarketStat>,
}

/// Bowling detail for one player
#[derive(Debug, Serialize, Deserialize)]
pub struct BowlingStats {
    pub team: String,
    pub total_innings: i64,
    pub total_wickets: i64,
    pub markets: Vec<MarketStat>,
}

/// Full stats for one player; an all-rounder carries both sections
#[derive(Debug, Serialize, Deserialize)]
pub struct PlayerStatsResponse {
    pub player_name: String,
    pub batting: Option<BattingStats>,
    pub bowling: Option<BowlingStats>,
}

/// Aggregate stats for one team
#[derive(Debug, Serialize, Deserialize)]
pub struct TeamStatsResponse {
    pub team: String,
    pub batter_count: usize,
    pub bowler_count: usize,
    pub total_runs: i64,
    pub total_wickets: i64,
}

/// Matchup label listing
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchupsResponse {
    pub matchups: Vec<String>,
}

/// One player-to-matchup assignment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchupPlayer {
    pub player_name: String,
    pub team: String,
    pub matchup: String,
}

/// Matchup assignment listing, optionally filtered by label
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchupPlayersResponse {
    pub total: usize,
    pub players: Vec<MatchupPlayer>,
}
