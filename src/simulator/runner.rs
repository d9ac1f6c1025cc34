//! Batch runner: plays many independent games and collects their stats.
//!
//! Each game gets its own RNG, so game `i` of a seeded batch is the same game
//! no matter how many games run before or after it.

use super::config::SimConfig;
use super::report::SimReport;
use crate::error::SimResult;
use crate::game::{GameDriver, GameStats, StepOutcome};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// RNG for one game of the batch.
pub fn game_rng(seed: Option<u64>, game_idx: u32) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(game_idx as u64)),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Run the full simulation and return a report.
///
/// With `show_steps` set, every play is printed to stdout as it happens.
pub fn run_simulation(config: &SimConfig) -> SimResult<SimReport> {
    let show_steps = config.show_steps;
    run_simulation_with_observer(config, |game_idx, outcome| {
        if !show_steps {
            return;
        }
        println!("game {:>4} {}", game_idx + 1, outcome);
    })
}

/// Run the simulation, handing every step of every game to `observer`.
pub fn run_simulation_with_observer<F>(
    config: &SimConfig,
    mut observer: F,
) -> SimResult<SimReport>
where
    F: FnMut(u32, &StepOutcome),
{
    config.validate()?;
    tracing::info!(
        games = config.num_games,
        seed = ?config.seed,
        out_cap = config.out_cap,
        "starting simulation"
    );

    let mut all_games = Vec::with_capacity(config.num_games as usize);
    for game_idx in 0..config.num_games {
        let mut rng = game_rng(config.seed, game_idx);
        let stats =
            simulate_single_game(config, &mut rng, |outcome| observer(game_idx, outcome))?;

        tracing::debug!(
            game = game_idx + 1,
            score = stats.score,
            outs = stats.outs,
            plays = stats.plays,
            "game finished"
        );
        all_games.push(stats);
    }

    let report = SimReport::from_games(all_games);
    tracing::info!(
        games = report.num_games,
        avg_score = report.avg_score,
        "simulation complete"
    );
    Ok(report)
}

/// Play one game to the out cap.
pub fn simulate_single_game<F>(
    config: &SimConfig,
    rng: &mut impl Rng,
    observer: F,
) -> SimResult<GameStats>
where
    F: FnMut(&StepOutcome),
{
    let mut driver = GameDriver::with_out_cap(config.out_cap)?;
    driver.play_out_observed(rng, observer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;

    #[test]
    fn test_seeded_runs_reproducible() {
        let config = SimConfig::seeded(20, 42);
        let a = run_simulation(&config).unwrap();
        let b = run_simulation(&config).unwrap();
        assert_eq!(a.games, b.games);
    }

    #[test]
    fn test_game_independent_of_batch_size() {
        let small = run_simulation(&SimConfig::seeded(3, 7)).unwrap();
        let large = run_simulation(&SimConfig::seeded(10, 7)).unwrap();
        assert_eq!(small.games[..], large.games[..3]);
    }

    #[test]
    fn test_zero_games_aborts() {
        let err = run_simulation(&SimConfig::seeded(0, 1)).unwrap_err();
        assert_eq!(err, SimError::InvalidGameCount(0));
    }

    #[test]
    fn test_observer_tagged_with_game_index() {
        let config = SimConfig::seeded(3, 11);
        let mut steps_per_game = [0u32; 3];
        let report = run_simulation_with_observer(&config, |game_idx, _| {
            steps_per_game[game_idx as usize] += 1;
        })
        .unwrap();
        for (steps, game) in steps_per_game.iter().zip(&report.games) {
            assert_eq!(*steps, game.plays);
        }
    }

    #[test]
    fn test_custom_out_cap() {
        let config = SimConfig {
            out_cap: 6,
            ..SimConfig::seeded(10, 5)
        };
        let report = run_simulation(&config).unwrap();
        assert!(report.games.iter().all(|g| g.outs >= 6 && g.outs <= 7));
    }

    #[test]
    fn test_single_game_accepts_any_rng() {
        let config = SimConfig::single_game(Some(3));
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        let mut steps = 0;
        let stats = simulate_single_game(&config, &mut rng, |_| steps += 1).unwrap();
        assert!(stats.outs >= config.out_cap);
        assert_eq!(steps, stats.plays);
    }
}
