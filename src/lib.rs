//! BBL Multi Builder - cricket multi-bet recommendation service
//!
//! This library provides:
//! - Percentage-market recommendation ranking over a preloaded player dataset
//! - Multi-bet composition with combined probability and decimal odds estimates
//! - CSV data loading and team/market catalog utilities
//!
//! # Example
//!
//! ```no_run
//! use bbl_multi::core::multi::{compose, MultiBetLeg};
//!
//! let legs = vec![MultiBetLeg {
//!     player_name: "Josh Philippe".to_string(),
//!     market_id: "runs_10_plus".to_string(),
//!     percentage_value: 62.5,
//! }];
//! let bet = compose("Sydney Sixers", legs).unwrap();
//! println!("Combined: {}", bet.combined_percentage);
//! ```

pub mod catalog;
pub mod core;
pub mod data;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use catalog::{MarketDef, MarketRole, BATTING_MARKETS, BOWLING_MARKETS, SAMPLE_MATCHES, TEAMS};
pub use core::{
    compose, recommend, resolve_match_teams, MultiBet, MultiBetLeg, RecommendationEntry,
    Recommendations, MAX_RECOMMENDATIONS,
};
pub use data::{BatterRecord, BowlerRecord, CricketDataset, MatchupRecord};
pub use error::AppError;
