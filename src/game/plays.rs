//! The play catalogue: dice-to-play lookup and each play's effect on the game.
//!
//! Sorting the two dice makes the 21 pairs unevenly likely (doubles come up
//! 1/36 of the time, mixed pairs 2/36), and the table leans on that: singles
//! and outs sit on common pairs, the home run on double sixes.

use super::types::GameState;
use crate::constants::{BASES_PER_HOME_RUN, STRIKES_PER_OUT};
use crate::dice::DicePair;
use crate::error::{SimError, SimResult};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Play {
    Single,
    Double,
    Triple,
    HomeRun,
    BaseOnError,
    BaseOnBalls,
    Strike,
    FoulOut,
    OutAtFirst,
    FlyOut,
    DoublePlay,
}

impl Play {
    pub const ALL: [Play; 11] = [
        Play::Single,
        Play::Double,
        Play::Triple,
        Play::HomeRun,
        Play::BaseOnError,
        Play::BaseOnBalls,
        Play::Strike,
        Play::FoulOut,
        Play::OutAtFirst,
        Play::FlyOut,
        Play::DoublePlay,
    ];

    /// Look up the play for a sorted dice pair.
    pub fn resolve(pair: DicePair) -> SimResult<Play> {
        let play = match pair.as_tuple() {
            (1, 1) => Play::Double,
            (1, 2) | (1, 3) | (1, 4) => Play::Single,
            (1, 5) => Play::BaseOnError,
            (1, 6) => Play::BaseOnBalls,
            (2, 2) | (2, 3) | (2, 4) | (2, 5) => Play::Strike,
            (2, 6) => Play::FoulOut,
            (3, 3) | (3, 4) | (3, 5) | (3, 6) => Play::OutAtFirst,
            (4, 4) | (4, 5) | (4, 6) => Play::FlyOut,
            (5, 5) => Play::DoublePlay,
            (5, 6) => Play::Triple,
            (6, 6) => Play::HomeRun,
            (first, second) => return Err(SimError::UnmappedRoll { first, second }),
        };
        Ok(play)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Play::Single => "Single",
            Play::Double => "Double",
            Play::Triple => "Triple",
            Play::HomeRun => "Home run",
            Play::BaseOnError => "Base on error",
            Play::BaseOnBalls => "Base on balls",
            Play::Strike => "Strike",
            Play::FoulOut => "Foul out",
            Play::OutAtFirst => "Out at first",
            Play::FlyOut => "Fly out",
            Play::DoublePlay => "Double play",
        }
    }

    /// Number of bases the batter and every runner move, or 0 for non-hits.
    pub fn bases_advanced(&self) -> u8 {
        match self {
            Play::Single | Play::BaseOnError | Play::BaseOnBalls => 1,
            Play::Double => 2,
            Play::Triple => 3,
            Play::HomeRun => BASES_PER_HOME_RUN,
            _ => 0,
        }
    }

    /// Apply this play to the game.
    pub fn apply(self, state: &mut GameState) {
        match self {
            Play::Single
            | Play::BaseOnError
            | Play::BaseOnBalls
            | Play::Double
            | Play::Triple
            | Play::HomeRun => batter_reaches_base(state, self.bases_advanced()),
            Play::Strike => strike(state),
            Play::FoulOut | Play::OutAtFirst | Play::FlyOut => state.outs += 1,
            Play::DoublePlay => {
                state.outs += 2;
                state.runners.remove_newest();
            }
        }
    }
}

impl fmt::Display for Play {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// New batter takes the field, then everyone moves up `bases` times.
///
/// A single is `bases == 1`. Scorers are removed and credited one advance at a
/// time, so a home run clears the bases and scores everyone including the
/// batter.
fn batter_reaches_base(state: &mut GameState, bases: u8) {
    state.strikes = 0;
    state.runners.add_batter();
    for _ in 0..bases {
        state.score += state.runners.advance_all();
    }
}

fn strike(state: &mut GameState) {
    state.strikes += 1;
    if state.strikes >= STRIKES_PER_OUT {
        state.strikes = 0;
        state.outs += 1;
    }
}
