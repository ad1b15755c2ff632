use serde::Serialize;

use crate::engine::classify::{classify_all, MetricLevel};
use crate::engine::display::{display_metrics, DisplayMetrics};
use crate::engine::impact::{compute_impacts, Impact};
use crate::engine::narrative;
use crate::engine::normalize::normalize;
use crate::engine::ranker::{rank, Recommendations};
use crate::stats::{NormalizedStats, RawStats};

/// Everything one analysis produces. Built per request and not retained.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub sets_played: u32,
    pub normalized: NormalizedStats,
    pub impacts: Vec<Impact>,
    pub recommendations: Recommendations,
    pub levels: Vec<MetricLevel>,
    pub narrative: String,
    pub display_metrics: DisplayMetrics,
}

impl AnalysisResult {
    pub fn total_impact(&self) -> f64 {
        self.impacts.iter().map(|i| i.impact).sum()
    }
}

/// Score a box score and build the coaching report.
///
/// Pure: the same stats always produce the same result.
pub fn analyze_game(stats: &RawStats) -> AnalysisResult {
    let sets = stats.sets_played();
    let normalized = normalize(stats, sets as f64);
    let impacts = compute_impacts(&normalized);
    let recommendations = rank(&impacts);
    let narrative = narrative::render(&recommendations);

    tracing::debug!(
        sets,
        weaknesses = recommendations.weaknesses.len(),
        strengths = recommendations.strengths.len(),
        "game analyzed"
    );

    AnalysisResult {
        sets_played: sets,
        normalized,
        impacts,
        levels: classify_all(stats),
        recommendations,
        narrative,
        display_metrics: display_metrics(stats, sets),
    }
}
