// Dice
pub const DIE_MIN: u8 = 1;
pub const DIE_MAX: u8 = 6;

// Bases: a runner past third base has crossed home plate
pub const HOME_PLATE_BASE: u8 = 3;
pub const BASES_PER_HOME_RUN: u8 = 4;

// Count and outs
pub const STRIKES_PER_OUT: u8 = 3;
pub const OUTS_PER_HALF_INNING: u32 = 3;
pub const HALF_INNINGS_PER_INNING: u32 = 2;
pub const INNINGS_PER_GAME: u32 = 9;
pub const OUT_CAP: u32 = OUTS_PER_HALF_INNING * HALF_INNINGS_PER_INNING * INNINGS_PER_GAME; // 54

// Sanity bound on plays in one game; a correct game never gets close
pub const MAX_PLAYS_PER_GAME: u32 = 100_000;

// Batch defaults
pub const DEFAULT_NUM_GAMES: u32 = 1000;
