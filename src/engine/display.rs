use serde::Serialize;

use crate::stats::RawStats;

/// Headline numbers for the scoreboard view, straight from the raw box score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayMetrics {
    /// Kills per attempt, as a percentage (one decimal).
    pub kill_efficiency: f64,
    pub aces_per_set: f64,
    /// Solo blocks plus block assists, per set.
    pub blocks_per_set: f64,
    pub digs_per_set: f64,
    pub reception_error_rate: f64,
    pub attack_error_rate: f64,
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// `numerator / denominator`, or 0 when the denominator is 0.
fn ratio(numerator: u32, denominator: u32) -> f64 {
    if denominator > 0 {
        numerator as f64 / denominator as f64
    } else {
        0.0
    }
}

pub fn display_metrics(stats: &RawStats, sets: u32) -> DisplayMetrics {
    let per_set = |count: u32| round_to(ratio(count, sets), 2);
    DisplayMetrics {
        kill_efficiency: round_to(ratio(stats.total_kills, stats.kill_attempts) * 100.0, 1),
        aces_per_set: per_set(stats.service_aces),
        blocks_per_set: per_set(stats.solo_blocks.saturating_add(stats.block_assists)),
        digs_per_set: per_set(stats.digs),
        reception_error_rate: per_set(stats.reception_errors),
        attack_error_rate: per_set(stats.attack_errors),
    }
}
