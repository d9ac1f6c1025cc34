//! Game data structures: runners, the field, and per-game state.

use crate::constants::HOME_PLATE_BASE;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A batter who reached base.
///
/// Base 0 is the batter's box; bases 1-3 are first through third. Anything
/// past 3 means the runner crossed home.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Runner {
    base: u8,
}

impl Runner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base(&self) -> u8 {
        self.base
    }

    /// Advance exactly one base.
    pub fn run_to_next_base(&mut self) {
        self.base += 1;
    }

    pub fn has_scored(&self) -> bool {
        self.base > HOME_PLATE_BASE
    }
}

/// Runners on base, newest at the front, most advanced at the back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    runners: VecDeque<Runner>,
}

impl Field {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.runners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runners.is_empty()
    }

    /// Put a fresh runner in the batter's box.
    pub fn add_batter(&mut self) {
        self.runners.push_front(Runner::new());
    }

    /// Move every runner up one base and remove those who scored.
    ///
    /// Returns how many runners crossed home. Runners are ordered by base,
    /// so scorers sit at the back and each is popped off individually; the
    /// field never holds a runner past third.
    pub fn advance_all(&mut self) -> u32 {
        for runner in self.runners.iter_mut() {
            runner.run_to_next_base();
        }
        let mut scored = 0;
        while self.runners.back().is_some_and(Runner::has_scored) {
            self.remove_oldest();
            scored += 1;
        }
        scored
    }

    /// Remove the most recently added runner. No-op on an empty field.
    pub fn remove_newest(&mut self) -> Option<Runner> {
        self.runners.pop_front()
    }

    /// Remove the most advanced runner. No-op on an empty field.
    pub fn remove_oldest(&mut self) -> Option<Runner> {
        self.runners.pop_back()
    }

    pub fn clear(&mut self) {
        self.runners.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Runner> {
        self.runners.iter()
    }

    /// Whether first, second and third base are occupied.
    pub fn occupied_bases(&self) -> [bool; 3] {
        let mut bases = [false; 3];
        for runner in &self.runners {
            if (1..=HOME_PLATE_BASE).contains(&runner.base) {
                bases[(runner.base - 1) as usize] = true;
            }
        }
        bases
    }
}

/// The authoritative record of one game in progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub runners: Field,
    pub score: u32,
    /// Strikes on the current batter, always 0-2 between plays.
    pub strikes: u8,
    pub outs: u32,
    /// Dice resolutions applied so far.
    pub plays: u32,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }
}
