use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::engine::metrics::{Metric, DEFAULT_SETS};

/// One team's box score for one match, as supplied by the caller.
///
/// Field names are the camelCase keys the HTTP layer sends; a missing
/// count deserializes as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawStats {
    pub total_kills: u32,
    pub kill_attempts: u32,
    pub attack_errors: u32,
    pub service_aces: u32,
    pub service_errors: u32,
    pub reception_errors: u32,
    pub digs: u32,
    pub solo_blocks: u32,
    pub block_assists: u32,
    pub total_sets: Option<u32>,
}

impl RawStats {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("Failed to parse game stats JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read stats file: {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Invalid stats in {}", path.display()))
    }

    /// Sets played, falling back to [`DEFAULT_SETS`] when absent or zero.
    pub fn sets_played(&self) -> u32 {
        match self.total_sets {
            Some(sets) if sets > 0 => sets,
            _ => DEFAULT_SETS,
        }
    }

    /// Raw count for a metric.
    pub fn get(&self, metric: Metric) -> f64 {
        let count = match metric {
            Metric::ServiceAces => self.service_aces,
            Metric::ServiceErrors => self.service_errors,
            Metric::ReceptionErrors => self.reception_errors,
            Metric::TotalKills => self.total_kills,
            Metric::KillAttempts => self.kill_attempts,
            Metric::AttackErrors => self.attack_errors,
            Metric::Digs => self.digs,
            Metric::SoloBlocks => self.solo_blocks,
            Metric::BlockAssists => self.block_assists,
        };
        count as f64
    }

    /// Contract checks the analysis itself never performs. Callers that want
    /// to reject inconsistent box scores run this before `analyze_game`.
    pub fn validate(&self) -> Result<()> {
        if self.total_kills > self.kill_attempts {
            anyhow::bail!(
                "totalKills ({}) exceeds killAttempts ({})",
                self.total_kills,
                self.kill_attempts
            );
        }
        if self.attack_errors > self.kill_attempts {
            anyhow::bail!(
                "attackErrors ({}) exceeds killAttempts ({})",
                self.attack_errors,
                self.kill_attempts
            );
        }
        let finished = self.total_kills as u64 + self.attack_errors as u64;
        if finished > self.kill_attempts as u64 {
            anyhow::bail!(
                "totalKills + attackErrors ({}) exceeds killAttempts ({})",
                finished,
                self.kill_attempts
            );
        }
        Ok(())
    }
}

/// Box score rescaled to the reference match length. Same shape as
/// [`RawStats`] with fractional counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedStats {
    pub total_kills: f64,
    pub kill_attempts: f64,
    pub attack_errors: f64,
    pub service_aces: f64,
    pub service_errors: f64,
    pub reception_errors: f64,
    pub digs: f64,
    pub solo_blocks: f64,
    pub block_assists: f64,
}

impl NormalizedStats {
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::ServiceAces => self.service_aces,
            Metric::ServiceErrors => self.service_errors,
            Metric::ReceptionErrors => self.reception_errors,
            Metric::TotalKills => self.total_kills,
            Metric::KillAttempts => self.kill_attempts,
            Metric::AttackErrors => self.attack_errors,
            Metric::Digs => self.digs,
            Metric::SoloBlocks => self.solo_blocks,
            Metric::BlockAssists => self.block_assists,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_camel_case_fields() {
        let raw = r#"{
            "totalKills": 50, "killAttempts": 100, "attackErrors": 10,
            "serviceAces": 8, "serviceErrors": 12, "receptionErrors": 2,
            "digs": 35, "soloBlocks": 3, "blockAssists": 15, "totalSets": 3
        }"#;
        let stats = RawStats::from_json(raw).unwrap();
        assert_eq!(stats.total_kills, 50);
        assert_eq!(stats.block_assists, 15);
        assert_eq!(stats.total_sets, Some(3));
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let stats = RawStats::from_json(r#"{"digs": 40}"#).unwrap();
        assert_eq!(stats.digs, 40);
        assert_eq!(stats.total_kills, 0);
        assert_eq!(stats.total_sets, None);
    }

    #[test]
    fn test_wrong_field_type_is_rejected() {
        assert!(RawStats::from_json(r#"{"digs": "lots"}"#).is_err());
        assert!(RawStats::from_json(r#"{"digs": -4}"#).is_err());
    }

    #[test]
    fn test_sets_played_defaults() {
        let mut stats = RawStats::default();
        assert_eq!(stats.sets_played(), 3);
        stats.total_sets = Some(0);
        assert_eq!(stats.sets_played(), 3);
        stats.total_sets = Some(5);
        assert_eq!(stats.sets_played(), 5);
    }

    #[test]
    fn test_validate_rejects_kills_over_attempts() {
        let stats = RawStats {
            total_kills: 30,
            kill_attempts: 20,
            ..Default::default()
        };
        let err = stats.validate().unwrap_err();
        assert!(err.to_string().contains("totalKills"), "got {err}");
    }

    #[test]
    fn test_validate_accepts_consistent_box_score() {
        let stats = RawStats {
            total_kills: 50,
            kill_attempts: 100,
            attack_errors: 10,
            ..Default::default()
        };
        assert!(stats.validate().is_ok());
    }
}
