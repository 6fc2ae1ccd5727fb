use actix_web::{HttpResponse, Responder};

use bbl_multi::catalog::{SAMPLE_MATCHES, TEAMS};
use bbl_multi::models::{MatchInfo, MatchesResponse, TeamsResponse};

/// List the fixed BBL teams
pub async fn get_teams() -> impl Responder {
    HttpResponse::Ok().json(TeamsResponse {
        teams: TEAMS.iter().map(|t| t.to_string()).collect(),
    })
}

/// List the fixture pairings offered for match selection
pub async fn get_matches() -> impl Responder {
    let matches = SAMPLE_MATCHES
        .iter()
        .map(|(home, away)| MatchInfo {
            id: format!("{}_vs_{}", home, away),
            home_team: home.to_string(),
            away_team: away.to_string(),
            display_name: format!("{} vs {}", home, away),
        })
        .collect();

    HttpResponse::Ok().json(MatchesResponse { matches })
}
