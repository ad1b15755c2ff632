use crate::engine::metrics::REFERENCE_SETS_PER_MATCH;
use crate::stats::{NormalizedStats, RawStats};

/// Multiplier that puts a `sets`-set match on the reference basis.
pub fn scale_factor(sets: f64) -> f64 {
    REFERENCE_SETS_PER_MATCH / sets
}

/// Rescale every count by `REFERENCE_SETS_PER_MATCH / sets`. No clamping.
///
/// `sets` must be positive; callers substitute the default for a missing or
/// zero set count first (see [`RawStats::sets_played`]).
pub fn normalize(stats: &RawStats, sets: f64) -> NormalizedStats {
    debug_assert!(sets > 0.0, "set count must be substituted before normalizing");
    let f = scale_factor(sets);
    NormalizedStats {
        total_kills: stats.total_kills as f64 * f,
        kill_attempts: stats.kill_attempts as f64 * f,
        attack_errors: stats.attack_errors as f64 * f,
        service_aces: stats.service_aces as f64 * f,
        service_errors: stats.service_errors as f64 * f,
        reception_errors: stats.reception_errors as f64 * f,
        digs: stats.digs as f64 * f,
        solo_blocks: stats.solo_blocks as f64 * f,
        block_assists: stats.block_assists as f64 * f,
    }
}
