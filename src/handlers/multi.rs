use actix_web::{web, HttpResponse};

use bbl_multi::core::compose;
use bbl_multi::error::AppError;
use bbl_multi::models::{MultiBetRequest, MultiBetResponse};

/// Combine the selected legs into a multi-bet
pub async fn build_multi(req: web::Json<MultiBetRequest>) -> Result<HttpResponse, AppError> {
    let body = req.into_inner();
    let winner_team = body.winner_team.unwrap_or_default();

    let multi_bet = compose(&winner_team, body.selected_bets)?;

    Ok(HttpResponse::Ok().json(MultiBetResponse { multi_bet }))
}
