use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

use crate::catalog;
use crate::data::CricketDataset;
use crate::models::ErrorResponse;

/// Application error types
#[derive(Debug)]
pub enum AppError {
    /// Invalid request data
    ValidationError(String),
    /// Unknown team, player or matchup
    NotFoundError(String),
    /// Dataset missing or not yet loaded
    DataUnavailableError(String),
    /// Internal server error
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::NotFoundError(msg) => write!(f, "Not found: {}", msg),
            AppError::DataUnavailableError(msg) => write!(f, "Data unavailable: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFoundError(_) => StatusCode::NOT_FOUND,
            AppError::DataUnavailableError(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (error_code, message) = match self {
            AppError::ValidationError(msg) => ("validation_error", msg.clone()),
            AppError::NotFoundError(msg) => ("not_found", msg.clone()),
            AppError::DataUnavailableError(msg) => ("data_unavailable", msg.clone()),
            AppError::InternalError(msg) => ("internal_error", msg.clone()),
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: error_code.to_string(),
            message,
        })
    }
}

/// Validation functions
pub fn validate_winner_team(winner: &str) -> Result<(), AppError> {
    if winner.trim().is_empty() || !catalog::is_known_team(winner) {
        return Err(AppError::ValidationError(format!(
            "Invalid winner team: {:?}",
            winner
        )));
    }
    Ok(())
}

pub fn require_known_team(team: &str) -> Result<(), AppError> {
    if !catalog::is_known_team(team) {
        return Err(AppError::NotFoundError(format!("Team not found: {}", team)));
    }
    Ok(())
}

pub fn ensure_data_loaded(dataset: &CricketDataset) -> Result<(), AppError> {
    if dataset.is_empty() {
        return Err(AppError::DataUnavailableError(
            "Player dataset is not loaded".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_winner_team_valid() {
        assert!(validate_winner_team("Sydney Sixers").is_ok());
        assert!(validate_winner_team("Brisbane Heat").is_ok());
    }

    #[test]
    fn test_validate_winner_team_invalid() {
        assert!(validate_winner_team("").is_err());
        assert!(validate_winner_team("  ").is_err());
        assert!(validate_winner_team("Auckland Aces").is_err());
    }

    #[test]
    fn test_require_known_team() {
        assert!(require_known_team("Perth Scorchers").is_ok());
        assert!(require_known_team("Auckland Aces").is_err());
    }

    #[test]
    fn test_ensure_data_loaded() {
        let empty = CricketDataset::from_records(vec![], vec![], vec![]);
        assert!(ensure_data_loaded(&empty).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = AppError::ValidationError("test error".to_string());
        assert!(err.to_string().contains("Validation error"));

        let err = AppError::NotFoundError("missing".to_string());
        assert!(err.to_string().contains("Not found"));
    }

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::ValidationError("".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFoundError("".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::DataUnavailableError("".to_string()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::InternalError("".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
