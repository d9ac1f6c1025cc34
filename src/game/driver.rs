//! Runs one game from first pitch to the out cap.

use super::plays::Play;
use super::types::GameState;
use crate::constants::{MAX_PLAYS_PER_GAME, OUTS_PER_HALF_INNING, OUT_CAP};
use crate::dice::{roll_dice, DicePair};
use crate::error::{SimError, SimResult};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Where the driver is in its lifecycle.
///
/// The half-inning boundary is handled inside `step` and never outlives it;
/// `StepOutcome::half_inning_ended` reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    InProgress,
    Done,
}

/// What one step did, plus the state it left behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutcome {
    /// `None` when the game was already over and nothing was applied.
    pub dice: Option<DicePair>,
    pub play: Option<Play>,
    /// This play recorded the out that retired the side.
    pub half_inning_ended: bool,
    pub state: GameState,
    pub is_done: bool,
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (Some(dice), Some(play)) = (self.dice, self.play) else {
            return write!(f, "game over: {} runs", self.state.score);
        };
        let bases: String = self
            .state
            .runners
            .occupied_bases()
            .iter()
            .map(|&on| if on { '◆' } else { '◇' })
            .collect();
        write!(
            f,
            "#{:<4} {} {:<13} runs {:>2}  outs {:>2}  strikes {}  bases {}",
            self.state.plays,
            dice,
            play.name(),
            self.state.score,
            self.state.outs,
            self.state.strikes,
            bases
        )?;
        if self.half_inning_ended {
            write!(f, "  -- side retired")?;
        }
        Ok(())
    }
}

/// Summary of a finished game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub score: u32,
    pub outs: u32,
    pub plays: u32,
    /// Completed half-innings, counting outs up to the cap.
    pub half_innings: u32,
    /// How often each play came up.
    pub play_counts: BTreeMap<Play, u32>,
}

/// Owns one game's state and advances it a dice roll at a time.
#[derive(Debug, Clone)]
pub struct GameDriver {
    state: GameState,
    phase: GamePhase,
    out_cap: u32,
    play_counts: BTreeMap<Play, u32>,
}

impl Default for GameDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDriver {
    /// A nine-inning game.
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            phase: GamePhase::InProgress,
            out_cap: OUT_CAP,
            play_counts: BTreeMap::new(),
        }
    }

    /// A game that ends after `out_cap` outs instead of 54.
    pub fn with_out_cap(out_cap: u32) -> SimResult<Self> {
        if out_cap == 0 {
            return Err(SimError::InvalidOutCap(out_cap));
        }
        Ok(Self {
            out_cap,
            ..Self::new()
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn out_cap(&self) -> u32 {
        self.out_cap
    }

    pub fn is_done(&self) -> bool {
        self.phase == GamePhase::Done
    }

    /// Apply one dice roll.
    ///
    /// Outs can overshoot the cap within a play (a double play with one out
    /// left); the game only ends once the whole play has resolved. Stepping a
    /// finished game changes nothing. Once the play limit is hit every further
    /// step fails with `RunawayGame` and applies nothing.
    pub fn step(&mut self, dice: DicePair) -> SimResult<StepOutcome> {
        if self.is_done() {
            return Ok(self.outcome(None, None, false));
        }
        if self.state.plays >= MAX_PLAYS_PER_GAME {
            return Err(SimError::RunawayGame {
                plays: self.state.plays,
            });
        }

        let play = Play::resolve(dice)?;
        let outs_before = self.state.outs;
        play.apply(&mut self.state);
        self.state.plays += 1;
        *self.play_counts.entry(play).or_insert(0) += 1;

        // Cleared whenever outs sit on a multiple of three, even if this play
        // added none.
        let at_boundary = self.state.outs > 0 && self.state.outs % OUTS_PER_HALF_INNING == 0;
        if at_boundary {
            self.state.runners.clear();
        }
        let half_inning_ended = at_boundary && self.state.outs > outs_before;

        self.phase = if self.state.outs >= self.out_cap {
            GamePhase::Done
        } else {
            GamePhase::InProgress
        };

        if !self.is_done() && self.state.plays >= MAX_PLAYS_PER_GAME {
            return Err(SimError::RunawayGame {
                plays: self.state.plays,
            });
        }

        tracing::trace!(
            plays = self.state.plays,
            %dice,
            play = play.name(),
            score = self.state.score,
            outs = self.state.outs,
            "step"
        );

        Ok(self.outcome(Some(dice), Some(play), half_inning_ended))
    }

    /// Roll the dice and apply the result.
    pub fn roll_and_step(&mut self, rng: &mut impl Rng) -> SimResult<StepOutcome> {
        let dice = roll_dice(rng);
        self.step(dice)
    }

    /// Play until the out cap is reached.
    pub fn play_out(&mut self, rng: &mut impl Rng) -> SimResult<GameStats> {
        self.play_out_observed(rng, |_| {})
    }

    /// Play until the out cap is reached, handing every step to `observer`.
    pub fn play_out_observed<F>(
        &mut self,
        rng: &mut impl Rng,
        mut observer: F,
    ) -> SimResult<GameStats>
    where
        F: FnMut(&StepOutcome),
    {
        while !self.is_done() {
            let outcome = self.roll_and_step(rng)?;
            observer(&outcome);
        }
        Ok(self.stats())
    }

    pub fn stats(&self) -> GameStats {
        GameStats {
            score: self.state.score,
            outs: self.state.outs,
            plays: self.state.plays,
            half_innings: self.state.outs.min(self.out_cap) / OUTS_PER_HALF_INNING,
            play_counts: self.play_counts.clone(),
        }
    }

    fn outcome(
        &self,
        dice: Option<DicePair>,
        play: Option<Play>,
        half_inning_ended: bool,
    ) -> StepOutcome {
        StepOutcome {
            dice,
            play,
            half_inning_ended,
            state: self.state.clone(),
            is_done: self.is_done(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn pair(a: u8, b: u8) -> DicePair {
        DicePair::new(a, b).unwrap()
    }

    const SINGLE: (u8, u8) = (1, 2);
    const FLY_OUT: (u8, u8) = (4, 5);
    const DOUBLE_PLAY: (u8, u8) = (5, 5);

    fn step(driver: &mut GameDriver, roll: (u8, u8)) -> StepOutcome {
        driver.step(pair(roll.0, roll.1)).unwrap()
    }

    #[test]
    fn test_new_driver_in_progress() {
        let driver = GameDriver::new();
        assert_eq!(driver.phase(), GamePhase::InProgress);
        assert_eq!(driver.out_cap(), 54);
        assert_eq!(driver.state(), &GameState::new());
    }

    #[test]
    fn test_step_counts_plays() {
        let mut driver = GameDriver::new();
        let outcome = step(&mut driver, SINGLE);
        assert_eq!(outcome.state.plays, 1);
        assert_eq!(outcome.play, Some(Play::Single));
        assert!(!outcome.is_done);
    }

    #[test]
    fn test_third_out_clears_field() {
        let mut driver = GameDriver::new();
        step(&mut driver, SINGLE);
        step(&mut driver, SINGLE);
        step(&mut driver, FLY_OUT);
        step(&mut driver, FLY_OUT);
        assert_eq!(driver.state().runners.len(), 2);
        let outcome = step(&mut driver, FLY_OUT);
        assert!(outcome.half_inning_ended);
        assert!(outcome.state.runners.is_empty());
        assert_eq!(outcome.state.outs, 3);
        assert_eq!(driver.stats().half_innings, 1);
    }

    #[test]
    fn test_strikes_survive_half_inning_clear() {
        let mut driver = GameDriver::new();
        step(&mut driver, FLY_OUT);
        step(&mut driver, FLY_OUT);
        step(&mut driver, (2, 3)); // strike
        let outcome = step(&mut driver, FLY_OUT);
        assert!(outcome.half_inning_ended);
        assert_eq!(outcome.state.strikes, 1);
    }

    #[test]
    fn test_double_play_past_boundary_keeps_runners() {
        // 2 outs -> 4 outs never lands on a multiple of three
        let mut driver = GameDriver::new();
        step(&mut driver, FLY_OUT);
        step(&mut driver, FLY_OUT);
        step(&mut driver, SINGLE);
        step(&mut driver, SINGLE);
        let outcome = step(&mut driver, DOUBLE_PLAY);
        assert_eq!(outcome.state.outs, 4);
        assert!(!outcome.half_inning_ended);
        assert_eq!(outcome.state.runners.len(), 1);
    }

    #[test]
    fn test_done_exactly_at_out_cap() {
        let mut driver = GameDriver::new();
        for expected_outs in 1..54 {
            let outcome = step(&mut driver, FLY_OUT);
            assert_eq!(outcome.state.outs, expected_outs);
            assert!(!outcome.is_done);
        }
        let outcome = step(&mut driver, FLY_OUT);
        assert_eq!(outcome.state.outs, 54);
        assert!(outcome.is_done);
        assert_eq!(driver.phase(), GamePhase::Done);
        assert_eq!(driver.stats().half_innings, 18);
    }

    #[test]
    fn test_outs_may_overshoot_cap() {
        let mut driver = GameDriver::with_out_cap(3).unwrap();
        step(&mut driver, FLY_OUT);
        step(&mut driver, FLY_OUT);
        let outcome = step(&mut driver, DOUBLE_PLAY);
        assert_eq!(outcome.state.outs, 4);
        assert!(outcome.is_done);
    }

    #[test]
    fn test_done_is_absorbing() {
        let mut driver = GameDriver::with_out_cap(1).unwrap();
        step(&mut driver, FLY_OUT);
        let before = driver.state().clone();
        let outcome = step(&mut driver, (6, 6));
        assert!(outcome.is_done);
        assert_eq!(outcome.play, None);
        assert_eq!(outcome.state, before);
    }

    #[test]
    fn test_zero_out_cap_rejected() {
        assert_eq!(
            GameDriver::with_out_cap(0).unwrap_err(),
            SimError::InvalidOutCap(0)
        );
    }

    #[test]
    fn test_side_retired_only_on_the_out() {
        let mut driver = GameDriver::new();
        step(&mut driver, FLY_OUT);
        step(&mut driver, FLY_OUT);
        let outcome = step(&mut driver, FLY_OUT);
        assert!(outcome.half_inning_ended);
        assert!(outcome.to_string().contains("side retired"));

        // Still three outs: the field is cleared again but nobody was retired
        let outcome = step(&mut driver, SINGLE);
        assert_eq!(outcome.state.outs, 3);
        assert!(outcome.state.runners.is_empty());
        assert!(!outcome.half_inning_ended);
        assert!(!outcome.to_string().contains("side retired"));
        assert_eq!(driver.phase(), GamePhase::InProgress);
    }

    #[test]
    fn test_runaway_game_stops_at_play_limit() {
        let mut driver = GameDriver::with_out_cap(u32::MAX).unwrap();
        let err = loop {
            match driver.step(pair(1, 2)) {
                Ok(outcome) => assert!(!outcome.is_done),
                Err(err) => break err,
            }
        };
        assert_eq!(
            err,
            SimError::RunawayGame {
                plays: MAX_PLAYS_PER_GAME
            }
        );
        assert_eq!(driver.state().plays, 100_000);

        // Further rolls are refused and change nothing
        let before = driver.state().clone();
        assert_eq!(
            driver.step(pair(6, 6)),
            Err(SimError::RunawayGame { plays: 100_000 })
        );
        assert_eq!(driver.state(), &before);
    }

    #[test]
    fn test_play_out_reaches_cap() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut driver = GameDriver::new();
        let stats = driver.play_out(&mut rng).unwrap();
        assert!(stats.outs >= 54);
        assert!(stats.plays >= 18);
        assert_eq!(stats.play_counts.values().sum::<u32>(), stats.plays);
        assert_eq!(stats.half_innings, 18);
    }

    #[test]
    fn test_observer_sees_every_step() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut driver = GameDriver::new();
        let mut seen = 0u32;
        let mut last_outs = 0u32;
        let stats = driver
            .play_out_observed(&mut rng, |outcome| {
                seen += 1;
                assert!(outcome.state.outs >= last_outs);
                last_outs = outcome.state.outs;
            })
            .unwrap();
        assert_eq!(seen, stats.plays);
    }

    #[test]
    fn test_outcome_display() {
        let mut driver = GameDriver::new();
        let outcome = step(&mut driver, SINGLE);
        let line = outcome.to_string();
        assert!(line.contains("[1-2]"));
        assert!(line.contains("Single"));
        assert!(line.contains("◆◇◇"));
    }
}
