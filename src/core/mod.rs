//! Core business logic modules

pub mod multi;
pub mod recommend;

// Re-export commonly used types
pub use multi::{compose, MultiBet, MultiBetLeg};
pub use recommend::{
    recommend, resolve_match_teams, RecommendationEntry, Recommendations, MAX_RECOMMENDATIONS,
};
