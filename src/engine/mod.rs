pub mod analysis;
pub mod classify;
pub mod display;
pub mod impact;
pub mod metrics;
pub mod narrative;
pub mod normalize;
pub mod ranker;

pub use analysis::{analyze_game, AnalysisResult};
pub use classify::{performance_level, PerformanceLevel};
pub use metrics::{Metric, MetricSpec, METRICS};
