use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::AppState;
use bbl_multi::models::{ApiInfo, HealthResponse};

/// Root endpoint
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(ApiInfo {
        message: "BBL Multi Builder API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Health check endpoint
pub async fn health_check(state: web::Data<Arc<AppState>>) -> impl Responder {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data_loaded: !state.dataset.is_empty(),
    };

    HttpResponse::Ok().json(response)
}
