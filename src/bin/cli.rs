//! BBL Multi CLI - inspect the player dataset and build multis from the terminal

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use bbl_multi::catalog::{self, TEAMS};
use bbl_multi::core::{compose, recommend, resolve_match_teams, MultiBetLeg};
use bbl_multi::data::CricketDataset;

/// Default data directory (relative to project root)
const DEFAULT_DATA_DIR: &str = "data";

#[derive(Parser)]
#[command(name = "bbl-multi")]
#[command(author, version, about = "BBL multi-bet builder CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the CSV data directory
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// List the BBL teams
    Teams,

    /// List players for a team
    Players {
        /// Team name (quoted)
        team: String,
    },

    /// Rank percentage markets for a match
    Recommend {
        /// Predicted winner team
        #[arg(short, long)]
        winner: String,

        /// Match id in <home>_vs_<away> form
        #[arg(short, long)]
        match_id: Option<String>,

        /// Print the full ranked list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Combine leg hit-percentages into a multi
    Multi {
        /// Predicted winner team
        #[arg(short, long)]
        winner: String,

        /// Leg hit percentage, repeatable (e.g. --leg 62.5 --leg 48.0)
        #[arg(short, long = "leg")]
        legs: Vec<f64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Teams => cmd_teams(),
        Commands::Players { team } => cmd_players(&cli.data_dir, &team),
        Commands::Recommend {
            winner,
            match_id,
            json,
        } => cmd_recommend(&cli.data_dir, &winner, match_id.as_deref(), json),
        Commands::Multi { winner, legs } => cmd_multi(&winner, &legs),
    }
}

fn load_dataset(data_dir: &PathBuf) -> Result<CricketDataset> {
    let dataset = CricketDataset::load(data_dir)
        .with_context(|| format!("Failed to load player data from {:?}", data_dir))?;
    if dataset.is_empty() {
        bail!("Player dataset at {:?} is empty", data_dir);
    }
    Ok(dataset)
}

fn cmd_teams() -> Result<()> {
    println!("{}", "BBL Teams".bold());
    for team in TEAMS {
        println!("  {}", team);
    }
    Ok(())
}

fn cmd_players(data_dir: &PathBuf, team: &str) -> Result<()> {
    if !catalog::is_known_team(team) {
        bail!("Unknown team: {}", team);
    }

    let dataset = load_dataset(data_dir)?;
    let batters = dataset.batters_for_team(team);
    let bowlers = dataset.bowlers_for_team(team);

    println!("{}", team.bold());

    println!("\n{}", "Batters".green().bold());
    for b in &batters {
        println!(
            "  {:<25} {:>3} innings {:>5} runs",
            b.name, b.total_innings, b.total_runs
        );
    }

    println!("\n{}", "Bowlers".cyan().bold());
    for b in &bowlers {
        println!(
            "  {:<25} {:>3} innings {:>5} wickets",
            b.name, b.total_innings, b.total_wickets
        );
    }

    println!("\n{} players total", batters.len() + bowlers.len());
    Ok(())
}

fn cmd_recommend(
    data_dir: &PathBuf,
    winner: &str,
    match_id: Option<&str>,
    json: bool,
) -> Result<()> {
    if !catalog::is_known_team(winner) {
        bail!("Unknown team: {}", winner);
    }

    let dataset = load_dataset(data_dir)?;
    let match_teams = resolve_match_teams(winner, match_id);
    let ranked = recommend(&dataset, &match_teams);

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked.entries)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Top markets for".bold(),
        match_teams.join(" vs ").bold()
    );

    for (i, entry) in ranked.entries.iter().enumerate() {
        println!(
            "  {}. {:<25} {:<28} {}",
            i + 1,
            entry.player_name,
            entry.market,
            entry.percentage.green()
        );
    }

    println!(
        "\n{} of {} qualifying markets shown",
        ranked.entries.len(),
        ranked.total_available
    );
    Ok(())
}

fn cmd_multi(winner: &str, legs: &[f64]) -> Result<()> {
    let legs: Vec<MultiBetLeg> = legs
        .iter()
        .map(|&pct| MultiBetLeg {
            player_name: String::new(),
            market_id: String::new(),
            percentage_value: pct,
        })
        .collect();

    let bet = compose(winner, legs)?;

    println!("{}", "Multi bet".bold());
    println!("  Winner:   {}", bet.winner_team);
    println!("  Legs:     {}", bet.total_legs);
    println!("  Combined: {}", bet.combined_percentage.green().bold());
    println!("  Odds:     {}", bet.estimated_odds.yellow().bold());
    Ok(())
}
