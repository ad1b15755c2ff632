use serde::Serialize;

use crate::engine::impact::Impact;
use crate::engine::metrics::SIGNIFICANCE_THRESHOLD;

pub const MAX_WEAKNESSES: usize = 3;
pub const MAX_STRENGTHS: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub weaknesses: Vec<Impact>,
    pub strengths: Vec<Impact>,
    pub all_impacts_sorted: Vec<Impact>,
}

/// Rank impacts by magnitude and pick the top weaknesses and strengths.
///
/// Sorting is stable, so equal magnitudes keep the metric-table order of
/// `impacts`.
pub fn rank(impacts: &[Impact]) -> Recommendations {
    let mut sorted = impacts.to_vec();
    sorted.sort_by(|a, b| b.impact.abs().total_cmp(&a.impact.abs()));

    let weaknesses: Vec<Impact> = sorted
        .iter()
        .filter(|i| i.impact < -SIGNIFICANCE_THRESHOLD)
        .take(MAX_WEAKNESSES)
        .copied()
        .collect();
    let strengths: Vec<Impact> = sorted
        .iter()
        .filter(|i| i.impact > SIGNIFICANCE_THRESHOLD)
        .take(MAX_STRENGTHS)
        .copied()
        .collect();

    Recommendations {
        weaknesses,
        strengths,
        all_impacts_sorted: sorted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::metrics::Metric;

    fn imp(metric: Metric, impact: f64) -> Impact {
        Impact {
            metric,
            value: 0.0,
            benchmark: 0.0,
            deviation: 0.0,
            impact,
            odds_ratio: 1.0,
        }
    }

    #[test]
    fn test_sorted_by_magnitude() {
        let r = rank(&[
            imp(Metric::ServiceAces, 5.0),
            imp(Metric::ReceptionErrors, -40.0),
            imp(Metric::Digs, 12.0),
        ]);
        let order: Vec<Metric> = r.all_impacts_sorted.iter().map(|i| i.metric).collect();
        assert_eq!(order, vec![Metric::ReceptionErrors, Metric::Digs, Metric::ServiceAces]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let r = rank(&[
            imp(Metric::SoloBlocks, 10.0),
            imp(Metric::Digs, -10.0),
            imp(Metric::BlockAssists, 10.0),
        ]);
        let order: Vec<Metric> = r.all_impacts_sorted.iter().map(|i| i.metric).collect();
        assert_eq!(order, vec![Metric::SoloBlocks, Metric::Digs, Metric::BlockAssists]);
    }

    #[test]
    fn test_caps_list_lengths() {
        let r = rank(&[
            imp(Metric::ServiceAces, -50.0),
            imp(Metric::ReceptionErrors, -40.0),
            imp(Metric::KillAttempts, -30.0),
            imp(Metric::AttackErrors, -20.0),
            imp(Metric::Digs, 30.0),
            imp(Metric::SoloBlocks, 20.0),
            imp(Metric::BlockAssists, 10.0),
        ]);
        assert_eq!(r.weaknesses.len(), MAX_WEAKNESSES);
        assert_eq!(r.strengths.len(), MAX_STRENGTHS);
        assert_eq!(r.weaknesses[0].metric, Metric::ServiceAces);
        assert_eq!(r.weaknesses[2].metric, Metric::KillAttempts);
        assert_eq!(r.strengths[0].metric, Metric::Digs);
        assert_eq!(r.strengths[1].metric, Metric::SoloBlocks);
        assert_eq!(r.all_impacts_sorted.len(), 7);
    }

    #[test]
    fn test_threshold_is_strict() {
        // Exactly +/-1 is not significant.
        let r = rank(&[
            imp(Metric::Digs, 1.0),
            imp(Metric::ServiceAces, -1.0),
            imp(Metric::SoloBlocks, 0.4),
        ]);
        assert!(r.weaknesses.is_empty());
        assert!(r.strengths.is_empty());
        assert_eq!(r.all_impacts_sorted.len(), 3);
    }

    #[test]
    fn test_no_entry_in_both_lists() {
        let r = rank(&[
            imp(Metric::Digs, 3.0),
            imp(Metric::ServiceAces, -3.0),
            imp(Metric::ReceptionErrors, 7.5),
        ]);
        for w in &r.weaknesses {
            assert!(r.strengths.iter().all(|s| s.metric != w.metric));
        }
    }

    #[test]
    fn test_deterministic() {
        let input = [
            imp(Metric::Digs, 3.0),
            imp(Metric::ServiceAces, -3.0),
            imp(Metric::ReceptionErrors, 3.0),
        ];
        assert_eq!(rank(&input), rank(&input));
    }
}
