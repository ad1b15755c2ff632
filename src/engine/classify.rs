use serde::Serialize;

use crate::engine::metrics::{Direction, Metric, METRICS};
use crate::stats::RawStats;

/// Ordered best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceLevel {
    Excellent,
    Good,
    NeedsImprovement,
}

impl PerformanceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            PerformanceLevel::Excellent => "excellent",
            PerformanceLevel::Good => "good",
            PerformanceLevel::NeedsImprovement => "needs_improvement",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricLevel {
    pub metric: Metric,
    pub value: f64,
    pub level: PerformanceLevel,
}

/// Classify a raw (non-normalized) value against the win/loss bands.
///
/// Equal to the win benchmark is `Excellent`; equal to the loss benchmark
/// is `Good`.
pub fn performance_level(value: f64, metric: Metric) -> PerformanceLevel {
    let spec = metric.spec();
    let (beats_win, beats_loss) = match spec.direction {
        Direction::HigherIsBetter => (value >= spec.win_benchmark, value >= spec.loss_benchmark),
        Direction::LowerIsBetter => (value <= spec.win_benchmark, value <= spec.loss_benchmark),
    };
    if beats_win {
        PerformanceLevel::Excellent
    } else if beats_loss {
        PerformanceLevel::Good
    } else {
        PerformanceLevel::NeedsImprovement
    }
}

/// Level of every tracked metric for a box score, in table order.
pub fn classify_all(stats: &RawStats) -> Vec<MetricLevel> {
    METRICS
        .iter()
        .map(|spec| {
            let value = stats.get(spec.metric);
            MetricLevel {
                metric: spec.metric,
                value,
                level: performance_level(value, spec.metric),
            }
        })
        .collect()
}
