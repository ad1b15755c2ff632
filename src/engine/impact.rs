//! Win-probability impact of each stat's deviation from the winning-team
//! benchmark.
//!
//! Model: `impact = (value - win_benchmark) * ln(OR) * 100 / ln(2)`
//!   - `value` is the normalized per-match count
//!   - `OR` is the per-unit odds ratio from the metric table
//!
//! This is a linear rescaling of a log-odds change into "percentage points"
//! for readability. It is an approximation, not a calibrated probability.

use serde::Serialize;

use crate::engine::metrics::{Metric, METRICS};
use crate::stats::NormalizedStats;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Impact {
    pub metric: Metric,
    pub value: f64,
    pub benchmark: f64,
    pub deviation: f64,
    pub impact: f64,
    pub odds_ratio: f64,
}

/// Signed percentage-point impact for a single deviation.
pub fn impact_points(deviation: f64, odds_ratio: f64) -> f64 {
    let log_odds_change = deviation * odds_ratio.ln();
    log_odds_change * 100.0 / std::f64::consts::LN_2
}

/// Impacts for every metric with an odds ratio, in table order.
///
/// Metrics without an odds ratio are skipped.
pub fn compute_impacts(normalized: &NormalizedStats) -> Vec<Impact> {
    METRICS
        .iter()
        .filter_map(|spec| {
            let Some(odds_ratio) = spec.odds_ratio else {
                tracing::trace!(metric = spec.key, "no odds ratio, excluded from impacts");
                return None;
            };
            let value = normalized.get(spec.metric);
            let deviation = value - spec.win_benchmark;
            Some(Impact {
                metric: spec.metric,
                value,
                benchmark: spec.win_benchmark,
                deviation,
                impact: impact_points(deviation, odds_ratio),
                odds_ratio,
            })
        })
        .collect()
}
