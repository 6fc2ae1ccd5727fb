use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

mod handlers;

use bbl_multi::data::CricketDataset;
use handlers::{health, multi, players, recommend, stats, teams};

/// Application state shared across handlers
pub struct AppState {
    pub dataset: CricketDataset,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let addr = format!("{}:{}", host, port);

    let data_dir = std::env::var("DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"));

    info!("Loading player data from {:?}", data_dir);

    // Requests must never see a partial dataset, so a failed or empty load
    // aborts startup instead of serving degraded responses.
    let dataset = match CricketDataset::load(&data_dir) {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("Error loading data: {}", e);
            std::process::exit(1);
        }
    };
    if dataset.is_empty() {
        error!("Player dataset is empty, refusing to start");
        std::process::exit(1);
    }

    let app_state = Arc::new(AppState { dataset });

    info!("Starting BBL Multi Builder API at http://{}", addr);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(middleware::Logger::default())
            .wrap(cors)
            .route("/", web::get().to(health::index))
            .route("/health", web::get().to(health::health_check))
            .route("/teams", web::get().to(teams::get_teams))
            .route("/matches", web::get().to(teams::get_matches))
            .route("/players/{team}", web::get().to(players::get_team_players))
            .route(
                "/recommendations",
                web::post().to(recommend::get_recommendations),
            )
            .route("/build-multi", web::post().to(multi::build_multi))
            .route(
                "/player-stats/{player_name}",
                web::get().to(stats::get_player_stats),
            )
            .route(
                "/team-stats/{team_name}",
                web::get().to(stats::get_team_stats),
            )
            .route("/matchups", web::get().to(stats::get_matchups))
            .route(
                "/matchup-players",
                web::get().to(stats::get_matchup_players),
            )
    })
    .bind(&addr)?
    .run()
    .await
}
