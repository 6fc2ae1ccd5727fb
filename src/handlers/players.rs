use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::AppState;
use bbl_multi::error::{ensure_data_loaded, require_known_team, AppError};
use bbl_multi::models::{BatterSummary, BowlerSummary, TeamPlayersResponse};

/// List all players (batters and bowlers) for a team
pub async fn get_team_players(
    state: web::Data<Arc<AppState>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let team = path.into_inner();
    require_known_team(&team)?;
    ensure_data_loaded(&state.dataset)?;

    let batters: Vec<BatterSummary> = state
        .dataset
        .batters_for_team(&team)
        .into_iter()
        .map(BatterSummary::from)
        .collect();

    let bowlers: Vec<BowlerSummary> = state
        .dataset
        .bowlers_for_team(&team)
        .into_iter()
        .map(BowlerSummary::from)
        .collect();

    let total_players = batters.len() + bowlers.len();

    Ok(HttpResponse::Ok().json(TeamPlayersResponse {
        team,
        batters,
        bowlers,
        total_players,
    }))
}
