//! Simulation report generation.

use crate::build_info;
use crate::game::{GameStats, Play};
use serde::Serialize;
use std::collections::BTreeMap;

/// Widest histogram bar, in characters.
const HISTOGRAM_WIDTH: usize = 50;

/// How often one play came up across the batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayFrequency {
    pub play: Play,
    pub count: u64,
    /// Fraction of all plays, 0.0-1.0
    pub share: f64,
}

/// Aggregated results from a batch of games.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_games: u32,

    pub avg_score: f64,
    pub avg_outs: f64,
    pub avg_plays: f64,

    pub min_score: u32,
    pub median_score: u32,
    pub max_score: u32,

    /// Games per final score, only for scores that occurred
    pub score_distribution: BTreeMap<u32, u32>,

    pub play_frequencies: Vec<PlayFrequency>,

    // Individual games for detailed analysis
    #[serde(skip)]
    pub games: Vec<GameStats>,
}

/// Arithmetic mean; 0.0 for no values.
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = u32>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), v| (sum + v as u64, count + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

impl SimReport {
    pub fn from_games(games: Vec<GameStats>) -> Self {
        let num_games = games.len() as u32;

        let avg_score = mean(games.iter().map(|g| g.score));
        let avg_outs = mean(games.iter().map(|g| g.outs));
        let avg_plays = mean(games.iter().map(|g| g.plays));

        let mut score_distribution = BTreeMap::new();
        for game in &games {
            *score_distribution.entry(game.score).or_insert(0) += 1;
        }

        let mut scores: Vec<u32> = games.iter().map(|g| g.score).collect();
        scores.sort_unstable();
        let min_score = scores.first().copied().unwrap_or(0);
        let max_score = scores.last().copied().unwrap_or(0);
        let median_score = scores.get(scores.len() / 2).copied().unwrap_or(0);

        let mut play_totals: BTreeMap<Play, u64> = BTreeMap::new();
        for game in &games {
            for (&play, &count) in &game.play_counts {
                *play_totals.entry(play).or_insert(0) += count as u64;
            }
        }
        let total_plays: u64 = play_totals.values().sum();
        let play_frequencies = Play::ALL
            .iter()
            .map(|&play| {
                let count = play_totals.get(&play).copied().unwrap_or(0);
                let share = if total_plays > 0 {
                    count as f64 / total_plays as f64
                } else {
                    0.0
                };
                PlayFrequency { play, count, share }
            })
            .collect();

        Self {
            num_games,
            avg_score,
            avg_outs,
            avg_plays,
            min_score,
            median_score,
            max_score,
            score_distribution,
            play_frequencies,
            games,
        }
    }

    /// Histogram of final scores, one row per observed score.
    pub fn histogram_text(&self) -> String {
        let mut text = String::from("RUNS per GAME\n");
        let tallest = self.score_distribution.values().copied().max().unwrap_or(0);
        for (&runs, &games) in &self.score_distribution {
            let bar_len = if tallest > 0 {
                (games as usize * HISTOGRAM_WIDTH).div_ceil(tallest as usize)
            } else {
                0
            };
            text.push_str(&format!(
                "  {:>3} | {:<width$} {}\n",
                runs,
                "█".repeat(bar_len),
                games,
                width = HISTOGRAM_WIDTH
            ));
        }
        text
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                  DICE BASEBALL SIMULATION\n");
        report.push_str(&format!("          {}\n", build_info::version_line()));
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!("Games: {}\n\n", self.num_games));

        report.push_str("── AVERAGES ─────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Runs per game:   {:.2}\n", self.avg_score));
        report.push_str(&format!("  Outs per game:   {:.2}\n", self.avg_outs));
        report.push_str(&format!("  Plays per game:  {:.1}\n\n", self.avg_plays));

        report.push_str("── SCORING ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Min Runs:    {}\n", self.min_score));
        report.push_str(&format!("  Median Runs: {}\n", self.median_score));
        report.push_str(&format!("  Max Runs:    {}\n\n", self.max_score));

        report.push_str("── PLAYS ────────────────────────────────────────────────────────\n");
        for freq in &self.play_frequencies {
            report.push_str(&format!(
                "  {:<14} {:>8}  {:>5.1}%\n",
                freq.play.name(),
                freq.count,
                freq.share * 100.0
            ));
        }
        report.push('\n');

        report.push_str("── DISTRIBUTION ─────────────────────────────────────────────────\n");
        report.push_str(&self.histogram_text());

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
