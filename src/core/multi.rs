//! Multi-bet composition
//!
//! Combined probability is the product of independent leg probabilities:
//!
//! ```text
//! combined = Π (percentage / 100)    over legs with percentage > 0
//! ```
//!
//! Legs without percentage evidence multiply as 1 rather than voiding the
//! bet, and the winner selection counts as a leg without contributing a
//! factor. Decimal odds are the naive inverse, 100 / combined_percentage.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// One proposition leg supplied by the caller
///
/// Untrusted input: legs are taken at face value, not re-looked-up in the
/// dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiBetLeg {
    #[serde(default)]
    pub player_name: String,
    #[serde(default)]
    pub market_id: String,
    #[serde(default)]
    pub percentage_value: f64,
}

/// Composed multi-bet summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiBet {
    pub winner_team: String,
    pub selected_bets: Vec<MultiBetLeg>,
    pub total_legs: usize,
    pub combined_percentage: String,
    pub estimated_odds: String,
}

/// Combine the selected legs into a single multi-bet estimate
pub fn compose(winner_team: &str, legs: Vec<MultiBetLeg>) -> Result<MultiBet, AppError> {
    if winner_team.trim().is_empty() {
        return Err(AppError::ValidationError(
            "Winner team is required".to_string(),
        ));
    }

    if legs.is_empty() {
        return Err(AppError::ValidationError(
            "At least one bet must be selected".to_string(),
        ));
    }

    let mut combined = 1.0;
    for leg in &legs {
        if leg.percentage_value > 0.0 {
            combined *= leg.percentage_value / 100.0;
        }
    }
    let combined_percentage = combined * 100.0;

    let estimated_odds = if combined_percentage > 0.0 {
        format!("{:.2}", 100.0 / combined_percentage)
    } else {
        "N/A".to_string()
    };

    Ok(MultiBet {
        winner_team: winner_team.to_string(),
        // +1 for the winner selection
        total_legs: legs.len() + 1,
        combined_percentage: format!("{:.2}%", combined_percentage),
        estimated_odds,
        selected_bets: legs,
    })
}
