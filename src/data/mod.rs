// Price history loading (collaborators around the analysis engine)
pub mod history_source;
pub mod json_file;

// Re-export commonly used types
pub use history_source::{
    InstrumentHistory, PriceHistorySource, fetch_history_with_fallback, normalize_symbol,
};
pub use json_file::{HistoryFile, JsonFileSource};
