//! The game state machine: plays, runners and the per-game driver.

pub mod driver;
pub mod plays;
pub mod types;

pub use driver::{GameDriver, GamePhase, GameStats, StepOutcome};
pub use plays::Play;
pub use types::{Field, GameState, Runner};
