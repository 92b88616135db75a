// Result models for price-level analysis
// These modules contain pure data independent of display/export concerns

pub mod indicators;
pub mod levels;
pub mod report;

// Re-export key types for convenience
pub use indicators::{MovingAverageSeries, OscillatorSeries};
pub use levels::{LevelKind, LevelSet};
pub use report::AnalysisReport;
