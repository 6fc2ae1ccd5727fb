//! Dataset loading modules

pub mod csv_loader;

// Re-export commonly used types
pub use csv_loader::{
    parse_percent, BatterRecord, BowlerRecord, CricketDataset, MatchupRecord, BATTERS_CSV,
    BOWLERS_CSV, MATCHUPS_CSV,
};
