//! Research constants for the volleyball scoring model.
//!
//! Every tracked stat is one [`MetricSpec`] row in [`METRICS`]. The row order
//! is load-bearing: it breaks ties when impacts are ranked.
//!
//! Benchmarks are per-match averages for winning and losing teams in the
//! reference dataset, on a [`REFERENCE_SETS_PER_MATCH`] basis. Odds ratios are
//! the per-unit change in win odds from the same dataset's logistic regression.

use serde::Serialize;
use std::fmt::Write as _;

/// Average match length of the reference dataset, in sets.
pub const REFERENCE_SETS_PER_MATCH: f64 = 3.5;

/// Sets assumed when the caller does not report any.
pub const DEFAULT_SETS: u32 = 3;

/// Impacts inside (-1, +1) percentage points are not reported.
pub const SIGNIFICANCE_THRESHOLD: f64 = 1.0;

/// Total impact above which the summary is framed positively.
pub const POSITIVE_SUMMARY_THRESHOLD: f64 = 5.0;

/// Total impact below which the summary is framed negatively.
pub const NEGATIVE_SUMMARY_THRESHOLD: f64 = -5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    ServiceAces,
    ServiceErrors,
    ReceptionErrors,
    TotalKills,
    KillAttempts,
    AttackErrors,
    Digs,
    SoloBlocks,
    BlockAssists,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Attack,
    Serve,
    Reception,
    Defense,
    Block,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

/// Drill template selected by the top-ranked weakness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PracticeFocus {
    Reception,
    Serving,
    AttackVolume,
    AttackErrors,
    Defense,
    Blocking,
}

#[derive(Debug, Clone, Copy)]
pub struct MetricSpec {
    pub metric: Metric,
    pub key: &'static str,
    pub label: &'static str,
    pub category: Category,
    pub direction: Direction,
    pub win_benchmark: f64,
    pub loss_benchmark: f64,
    /// `None` keeps the metric out of impact scoring.
    pub odds_ratio: Option<f64>,
    pub focus: Option<PracticeFocus>,
}

pub static METRICS: [MetricSpec; 9] = [
    MetricSpec {
        metric: Metric::ServiceAces,
        key: "serviceAces",
        label: "Service Aces",
        category: Category::Serve,
        direction: Direction::HigherIsBetter,
        win_benchmark: 6.45,
        loss_benchmark: 4.90,
        odds_ratio: Some(1.25),
        focus: Some(PracticeFocus::Serving),
    },
    MetricSpec {
        metric: Metric::ServiceErrors,
        key: "serviceErrors",
        label: "Service Errors",
        category: Category::Serve,
        direction: Direction::LowerIsBetter,
        win_benchmark: 8.10,
        loss_benchmark: 8.60,
        odds_ratio: None,
        focus: None,
    },
    MetricSpec {
        metric: Metric::ReceptionErrors,
        key: "receptionErrors",
        label: "Reception Errors",
        category: Category::Reception,
        direction: Direction::LowerIsBetter,
        win_benchmark: 4.20,
        loss_benchmark: 6.10,
        odds_ratio: Some(0.82),
        focus: Some(PracticeFocus::Reception),
    },
    MetricSpec {
        metric: Metric::TotalKills,
        key: "totalKills",
        label: "Kills",
        category: Category::Attack,
        direction: Direction::HigherIsBetter,
        win_benchmark: 49.5,
        loss_benchmark: 40.2,
        odds_ratio: None,
        focus: None,
    },
    MetricSpec {
        metric: Metric::KillAttempts,
        key: "killAttempts",
        label: "Attack Attempts",
        category: Category::Attack,
        direction: Direction::LowerIsBetter,
        win_benchmark: 123.0,
        loss_benchmark: 128.5,
        odds_ratio: Some(0.99),
        focus: Some(PracticeFocus::AttackVolume),
    },
    MetricSpec {
        metric: Metric::AttackErrors,
        key: "attackErrors",
        label: "Attack Errors",
        category: Category::Attack,
        direction: Direction::LowerIsBetter,
        win_benchmark: 17.8,
        loss_benchmark: 22.4,
        odds_ratio: Some(0.92),
        focus: Some(PracticeFocus::AttackErrors),
    },
    MetricSpec {
        metric: Metric::Digs,
        key: "digs",
        label: "Digs",
        category: Category::Defense,
        direction: Direction::HigherIsBetter,
        win_benchmark: 57.0,
        loss_benchmark: 51.5,
        odds_ratio: Some(1.03),
        focus: Some(PracticeFocus::Defense),
    },
    MetricSpec {
        metric: Metric::SoloBlocks,
        key: "soloBlocks",
        label: "Solo Blocks",
        category: Category::Block,
        direction: Direction::HigherIsBetter,
        win_benchmark: 2.10,
        loss_benchmark: 1.40,
        odds_ratio: Some(1.12),
        focus: Some(PracticeFocus::Blocking),
    },
    MetricSpec {
        metric: Metric::BlockAssists,
        key: "blockAssists",
        label: "Block Assists",
        category: Category::Block,
        direction: Direction::HigherIsBetter,
        win_benchmark: 14.2,
        loss_benchmark: 10.3,
        odds_ratio: Some(1.06),
        focus: Some(PracticeFocus::Blocking),
    },
];

impl Metric {
    pub fn spec(self) -> &'static MetricSpec {
        // Variants are declared in table order.
        &METRICS[self as usize]
    }

    pub fn key(self) -> &'static str {
        self.spec().key
    }

    pub fn label(self) -> &'static str {
        self.spec().label
    }

    pub fn from_key(key: &str) -> Option<Metric> {
        METRICS.iter().find(|s| s.key == key).map(|s| s.metric)
    }
}

/// Display label for a camelCase key; unknown keys are returned as-is.
pub fn display_name(key: &str) -> &str {
    match Metric::from_key(key) {
        Some(m) => m.label(),
        None => key,
    }
}

/// The benchmark and odds-ratio table as plain text, for prose-generation
/// paths that need the same constants the scorer uses.
pub fn research_reference() -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Benchmarks per match ({REFERENCE_SETS_PER_MATCH} sets), winning vs losing teams:"
    );
    for spec in &METRICS {
        let better = match spec.direction {
            Direction::HigherIsBetter => "higher is better",
            Direction::LowerIsBetter => "lower is better",
        };
        let _ = write!(
            out,
            "- {}: win {:.2}, loss {:.2} ({})",
            spec.label, spec.win_benchmark, spec.loss_benchmark, better
        );
        match spec.odds_ratio {
            Some(or) => {
                let _ = writeln!(out, ", odds ratio {or:.2}");
            }
            None => out.push('\n'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_match_table_order() {
        for (i, spec) in METRICS.iter().enumerate() {
            assert_eq!(spec.metric as usize, i, "{}", spec.key);
            assert_eq!(spec.metric.key(), spec.key);
        }
    }

    #[test]
    fn test_benchmark_bands_point_the_right_way() {
        for spec in &METRICS {
            match spec.direction {
                Direction::HigherIsBetter => {
                    assert!(spec.win_benchmark > spec.loss_benchmark, "{}", spec.key)
                }
                Direction::LowerIsBetter => {
                    assert!(spec.win_benchmark < spec.loss_benchmark, "{}", spec.key)
                }
            }
        }
    }

    #[test]
    fn test_odds_ratios_agree_with_direction() {
        // OR > 1 means more of the stat helps, so it must be higher-is-better.
        for spec in &METRICS {
            if let Some(or) = spec.odds_ratio {
                assert!(or > 0.0);
                let helps = or > 1.0;
                assert_eq!(helps, spec.direction == Direction::HigherIsBetter, "{}", spec.key);
            }
        }
    }

    #[test]
    fn test_block_metrics_share_focus() {
        for spec in METRICS.iter().filter(|s| s.category == Category::Block) {
            assert_eq!(spec.focus, Some(PracticeFocus::Blocking));
        }
    }

    #[test]
    fn test_key_lookup() {
        assert_eq!(Metric::from_key("receptionErrors"), Some(Metric::ReceptionErrors));
        assert_eq!(Metric::from_key("aces"), None);
        assert_eq!(display_name("blockAssists"), "Block Assists");
        assert_eq!(display_name("pancakes"), "pancakes");
    }

    #[test]
    fn test_research_reference_lists_every_metric() {
        let text = research_reference();
        for spec in &METRICS {
            assert!(text.contains(spec.label), "missing {}", spec.label);
        }
        assert!(text.contains("Service Aces: win 6.45, loss 4.90 (higher is better), odds ratio 1.25"));
        assert!(text.contains("Kills: win 49.50, loss 40.20 (higher is better)\n"));
    }
}
