//! Dice Baseball - a baseball game played with two six-sided dice.
//!
//! Every plate appearance is a roll of two dice. The sorted pair picks a play
//! from a fixed table, the play moves runners and records outs, and the game
//! ends after 54 outs. The `simulator` module runs many games and reports the
//! distribution of runs scored.

pub mod build_info;
pub mod constants;
pub mod dice;
pub mod error;
pub mod game;
pub mod logging;
pub mod simulator;

pub use dice::{roll_dice, DicePair};
pub use error::{SimError, SimResult};
pub use game::{Field, GameDriver, GamePhase, GameState, GameStats, Play, Runner, StepOutcome};
pub use simulator::{run_simulation, SimConfig, SimReport};
