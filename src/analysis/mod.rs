// Price-level and indicator analysis
pub mod engine;
pub mod extrema;
pub mod level_synthesis;
pub mod moving_average;
pub mod oscillator;

// Re-export commonly used items
pub use engine::{analyze, analyze_closes, analyze_many};
pub use extrema::{Extrema, Extremum, find_extrema};
pub use level_synthesis::{resistance_levels, support_levels, synthesize_levels};
pub use moving_average::{moving_averages, simple_moving_average};
pub use oscillator::relative_strength;
