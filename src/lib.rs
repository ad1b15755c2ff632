pub mod config;
pub mod engine;
pub mod stats;

pub use engine::{analyze_game, AnalysisResult};
pub use stats::RawStats;
