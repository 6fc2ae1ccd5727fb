use actix_web::{web, HttpResponse};
use std::sync::Arc;
use tracing::info;

use crate::AppState;
use bbl_multi::core::{recommend, resolve_match_teams};
use bbl_multi::error::{ensure_data_loaded, validate_winner_team, AppError};
use bbl_multi::models::{RecommendationRequest, RecommendationResponse};

/// Rank percentage markets for the selected match
pub async fn get_recommendations(
    state: web::Data<Arc<AppState>>,
    req: web::Json<RecommendationRequest>,
) -> Result<HttpResponse, AppError> {
    let winner_team = req.winner_team.as_deref().unwrap_or("");
    validate_winner_team(winner_team)?;
    ensure_data_loaded(&state.dataset)?;

    let match_teams = resolve_match_teams(winner_team, req.match_id.as_deref());
    let ranked = recommend(&state.dataset, &match_teams);

    info!(
        "Ranked {} markets for {:?}, returning {}",
        ranked.total_available,
        match_teams,
        ranked.entries.len()
    );

    Ok(HttpResponse::Ok().json(RecommendationResponse {
        winner_team: winner_team.to_string(),
        match_teams,
        recommendations: ranked.entries,
        total_available: ranked.total_available,
    }))
}
