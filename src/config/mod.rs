//! Configuration module for the level-scope engine.

pub mod analysis;

pub mod debug;

pub mod persistence;

// Re-export commonly used items
pub use analysis::{ANALYSIS, AnalysisParams};
pub use persistence::{HISTORY, history_filename};
