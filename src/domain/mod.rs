// Domain types and value objects
pub mod error;
pub mod instrument;
pub mod price_series;

// Re-export commonly used types
pub use error::AnalysisError;
pub use instrument::{HistoryPeriod, InstrumentInfo};
pub use price_series::{PricePoint, PriceSeries};
