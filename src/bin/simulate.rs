//! Dice baseball simulator CLI.
//!
//! Plays many nine-inning games and reports the distribution of runs.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                      # 1000 games
//!   cargo run --bin simulate -- -n 10000 --seed 42
//!   cargo run --bin simulate -- --show-steps -n 1 # narrate one game

use anyhow::{Context, Result};
use clap::Parser;
use dice_baseball::constants::{DEFAULT_NUM_GAMES, OUT_CAP};
use dice_baseball::simulator::{run_simulation, SimConfig};
use dice_baseball::{build_info, logging};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "simulate",
    version,
    about = "Estimate runs per game for baseball played with two dice"
)]
struct Cli {
    /// Number of games to simulate.
    #[arg(short = 'n', long = "games", default_value_t = DEFAULT_NUM_GAMES)]
    games: u32,

    /// Random seed for reproducible runs.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Outs that end a game.
    #[arg(long, default_value_t = OUT_CAP)]
    out_cap: u32,

    /// Print every play of every game.
    #[arg(long)]
    show_steps: bool,

    /// Save the JSON report. Without a path, writes `sim_report_<timestamp>.json`.
    #[arg(long, value_name = "PATH")]
    json: Option<Option<PathBuf>>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = SimConfig {
        num_games: cli.games,
        seed: cli.seed,
        out_cap: cli.out_cap,
        show_steps: cli.show_steps,
    };
    config.validate().context("invalid configuration")?;

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              DICE BASEBALL SIMULATOR                          ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Games:          {}", config.num_games);
    println!("  Out Cap:        {}", config.out_cap);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!("  Build:          {}", build_info::version_line());
    println!();

    let report = run_simulation(&config).context("simulation aborted")?;

    println!("{}", report.to_text());

    if let Some(path) = cli.json {
        let path = path.unwrap_or_else(|| {
            PathBuf::from(format!(
                "sim_report_{}.json",
                chrono::Utc::now().format("%Y%m%d_%H%M%S")
            ))
        });
        let json = report.to_json().context("serialize JSON report")?;
        std::fs::write(&path, json)
            .with_context(|| format!("write JSON report to {}", path.display()))?;
        println!("JSON report saved to: {}", path.display());
    }

    Ok(())
}
