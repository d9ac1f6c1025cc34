//! Monte Carlo batch simulation of dice baseball games.
//!
//! Plays thousands of independent nine-inning games to estimate:
//! - Average runs, outs and plays per game
//! - The distribution of runs scored
//! - How often each play comes up

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{mean, PlayFrequency, SimReport};
pub use runner::{game_rng, run_simulation, run_simulation_with_observer, simulate_single_game};
