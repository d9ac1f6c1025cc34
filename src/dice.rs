//! Two six-sided dice, reported smallest first.
//!
//! The order of the two dice never matters to the game, so every roll is
//! normalized to a sorted pair before it reaches the resolver. The 21 distinct
//! sorted pairs are what the play table is keyed on.

use crate::constants::{DIE_MAX, DIE_MIN};
use crate::error::{SimError, SimResult};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated dice roll with `first <= second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DicePair {
    first: u8,
    second: u8,
}

impl DicePair {
    /// Build a pair from values that must already be sorted.
    ///
    /// Unsorted or out-of-range input is a caller bug and is rejected rather
    /// than silently fixed up.
    pub fn new(first: u8, second: u8) -> SimResult<Self> {
        let in_range = |v: u8| (DIE_MIN..=DIE_MAX).contains(&v);
        if !in_range(first) || !in_range(second) || first > second {
            return Err(SimError::InvalidDice { first, second });
        }
        Ok(Self { first, second })
    }

    /// Build a pair from two dice in any order.
    pub fn from_unordered(a: u8, b: u8) -> SimResult<Self> {
        Self::new(a.min(b), a.max(b))
    }

    pub fn first(&self) -> u8 {
        self.first
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    pub fn as_tuple(&self) -> (u8, u8) {
        (self.first, self.second)
    }

    /// Every sorted pair, in table order.
    pub fn all() -> impl Iterator<Item = DicePair> {
        (DIE_MIN..=DIE_MAX).flat_map(|first| {
            (first..=DIE_MAX).map(move |second| DicePair { first, second })
        })
    }
}

impl fmt::Display for DicePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{}]", self.first, self.second)
    }
}

/// Roll two dice and return them sorted.
pub fn roll_dice(rng: &mut impl Rng) -> DicePair {
    let a = rng.gen_range(DIE_MIN..=DIE_MAX);
    let b = rng.gen_range(DIE_MIN..=DIE_MAX);
    DicePair {
        first: a.min(b),
        second: a.max(b),
    }
}
