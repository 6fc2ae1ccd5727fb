//! Static team and market catalog
//!
//! The team list and the seven proposition markets are fixed configuration;
//! the dataset never introduces teams or markets outside these tables.

use serde::{Deserialize, Serialize};

use crate::data::{BatterRecord, BowlerRecord};

/// The eight BBL franchises
pub const TEAMS: [&str; 8] = [
    "Adelaide Strikers",
    "Brisbane Heat",
    "Hobart Hurricanes",
    "Melbourne Renegades",
    "Melbourne Stars",
    "Perth Scorchers",
    "Sydney Sixers",
    "Sydney Thunder",
];

/// Sample fixture pairings offered for match selection (home, away)
pub const SAMPLE_MATCHES: [(&str, &str); 4] = [
    ("Melbourne Stars", "Brisbane Heat"),
    ("Adelaide Strikers", "Sydney Sixers"),
    ("Perth Scorchers", "Hobart Hurricanes"),
    ("Sydney Thunder", "Melbourne Renegades"),
];

/// Role a market applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketRole {
    Batting,
    Bowling,
}

/// A proposition market backed by one percentage field on a player record
///
/// `extract` reads the normalized hit-percentage, `occurrences` the raw
/// count behind it. Resolving fields through the catalog keeps market
/// handling to a single loop instead of one branch per market.
pub struct MarketDef<R> {
    pub id: &'static str,
    pub name: &'static str,
    pub role: MarketRole,
    pub extract: fn(&R) -> f64,
    pub occurrences: fn(&R) -> i64,
}

/// Batting markets in catalog order
pub const BATTING_MARKETS: [MarketDef<BatterRecord>; 4] = [
    MarketDef {
        id: "runs_10_plus",
        name: "10+ Runs",
        role: MarketRole::Batting,
        extract: |b| b.runs_10_pct,
        occurrences: |b| b.runs_10_count,
    },
    MarketDef {
        id: "runs_20_plus",
        name: "20+ Runs",
        role: MarketRole::Batting,
        extract: |b| b.runs_20_pct,
        occurrences: |b| b.runs_20_count,
    },
    MarketDef {
        id: "hit_six",
        name: "To Hit a Six",
        role: MarketRole::Batting,
        extract: |b| b.six_pct,
        occurrences: |b| b.six_count,
    },
    MarketDef {
        id: "top_team_scorer",
        name: "Top Team Run Scorer (TTRS)",
        role: MarketRole::Batting,
        extract: |b| b.top_scorer_pct,
        occurrences: |b| b.top_scorer_count,
    },
];

/// Bowling markets in catalog order
pub const BOWLING_MARKETS: [MarketDef<BowlerRecord>; 3] = [
    MarketDef {
        id: "wicket_1_plus",
        name: "1+ Wickets",
        role: MarketRole::Bowling,
        extract: |b| b.wicket_1_pct,
        occurrences: |b| b.wicket_1_count,
    },
    MarketDef {
        id: "wicket_2_plus",
        name: "2+ Wickets",
        role: MarketRole::Bowling,
        extract: |b| b.wicket_2_pct,
        occurrences: |b| b.wicket_2_count,
    },
    MarketDef {
        id: "top_team_wickets",
        name: "Top Team Wicket Taker",
        role: MarketRole::Bowling,
        extract: |b| b.top_wickets_pct,
        occurrences: |b| b.top_wickets_count,
    },
];

/// Check whether a team name is one of the fixed franchises
pub fn is_known_team(name: &str) -> bool {
    TEAMS.contains(&name)
}

/// Look up a market's display name by id across both catalogs
pub fn market_display_name(id: &str) -> Option<&'static str> {
    BATTING_MARKETS
        .iter()
        .find(|m| m.id == id)
        .map(|m| m.name)
        .or_else(|| BOWLING_MARKETS.iter().find(|m| m.id == id).map(|m| m.name))
}
