use actix_web::{web, HttpResponse};
use serde::Deserialize;
use std::sync::Arc;

use crate::AppState;
use bbl_multi::catalog::{BATTING_MARKETS, BOWLING_MARKETS};
use bbl_multi::data::{BatterRecord, BowlerRecord};
use bbl_multi::error::{ensure_data_loaded, require_known_team, AppError};
use bbl_multi::models::{
    BattingStats, BowlingStats, MarketStat, MatchupPlayer, MatchupPlayersResponse,
    MatchupsResponse, PlayerStatsResponse, TeamStatsResponse,
};

fn batting_stats(record: &BatterRecord) -> BattingStats {
    let markets = BATTING_MARKETS
        .iter()
        .map(|m| {
            let value = (m.extract)(record);
            MarketStat {
                market_id: m.id.to_string(),
                market: m.name.to_string(),
                percentage: format!("{:.1}%", value),
                percentage_value: value,
                occurrences: (m.occurrences)(record),
                role: m.role,
            }
        })
        .collect();

    BattingStats {
        team: record.team.clone(),
        total_innings: record.total_innings,
        total_runs: record.total_runs,
        markets,
    }
}

fn bowling_stats(record: &BowlerRecord) -> BowlingStats {
    let markets = BOWLING_MARKETS
        .iter()
        .map(|m| {
            let value = (m.extract)(record);
            MarketStat {
                market_id: m.id.to_string(),
                market: m.name.to_string(),
                percentage: format!("{:.1}%", value),
                percentage_value: value,
                occurrences: (m.occurrences)(record),
                role: m.role,
            }
        })
        .collect();

    BowlingStats {
        team: record.team.clone(),
        total_innings: record.total_innings,
        total_wickets: record.total_wickets,
        markets,
    }
}

/// Full per-market detail for one player
pub async fn get_player_stats(
    state: web::Data<Arc<AppState>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let player_name = path.into_inner();
    ensure_data_loaded(&state.dataset)?;

    let batting = state.dataset.find_batter(&player_name).map(batting_stats);
    let bowling = state.dataset.find_bowler(&player_name).map(bowling_stats);

    if batting.is_none() && bowling.is_none() {
        return Err(AppError::NotFoundError(format!(
            "Player not found: {}",
            player_name
        )));
    }

    Ok(HttpResponse::Ok().json(PlayerStatsResponse {
        player_name,
        batting,
        bowling,
    }))
}

/// Aggregate counts and totals for one team
pub async fn get_team_stats(
    state: web::Data<Arc<AppState>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let team = path.into_inner();
    require_known_team(&team)?;
    ensure_data_loaded(&state.dataset)?;

    let batters = state.dataset.batters_for_team(&team);
    let bowlers = state.dataset.bowlers_for_team(&team);

    let total_runs = batters.iter().map(|b| b.total_runs).sum();
    let total_wickets = bowlers.iter().map(|b| b.total_wickets).sum();

    Ok(HttpResponse::Ok().json(TeamStatsResponse {
        team,
        batter_count: batters.len(),
        bowler_count: bowlers.len(),
        total_runs,
        total_wickets,
    }))
}

/// List the distinct matchup labels
pub async fn get_matchups(state: web::Data<Arc<AppState>>) -> Result<HttpResponse, AppError> {
    ensure_data_loaded(&state.dataset)?;

    Ok(HttpResponse::Ok().json(MatchupsResponse {
        matchups: state.dataset.matchup_labels(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct MatchupQuery {
    pub matchup: Option<String>,
}

/// List matchup assignment rows, optionally filtered by label
pub async fn get_matchup_players(
    state: web::Data<Arc<AppState>>,
    query: web::Query<MatchupQuery>,
) -> Result<HttpResponse, AppError> {
    ensure_data_loaded(&state.dataset)?;

    let rows: Vec<MatchupPlayer> = match &query.matchup {
        Some(label) => {
            let rows = state.dataset.players_for_matchup(label);
            if rows.is_empty() {
                return Err(AppError::NotFoundError(format!(
                    "Matchup not found: {}",
                    label
                )));
            }
            rows.into_iter()
                .map(|m| MatchupPlayer {
                    player_name: m.player.clone(),
                    team: m.team.clone(),
                    matchup: m.matchup.clone(),
                })
                .collect()
        }
        None => state
            .dataset
            .matchups()
            .iter()
            .map(|m| MatchupPlayer {
                player_name: m.player.clone(),
                team: m.team.clone(),
                matchup: m.matchup.clone(),
            })
            .collect(),
    };

    Ok(HttpResponse::Ok().json(MatchupPlayersResponse {
        total: rows.len(),
        players: rows,
    }))
}
