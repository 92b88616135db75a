#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod summary;
pub mod utils;

// Re-export commonly used types
pub use analysis::{analyze, analyze_closes, analyze_many};
pub use config::AnalysisParams;
pub use data::{JsonFileSource, PriceHistorySource};
pub use domain::{AnalysisError, HistoryPeriod, InstrumentInfo, PricePoint, PriceSeries};
pub use models::{AnalysisReport, LevelKind, LevelSet, MovingAverageSeries, OscillatorSeries};

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Ticker symbol, e.g. AAPL or MSFT
    pub symbol: String,

    /// How much history to analyse
    #[arg(long, value_enum, default_value_t = HistoryPeriod::ThreeMonths)]
    pub period: HistoryPeriod,

    /// Directory holding <SYMBOL>.json history files
    #[arg(long, default_value = config::HISTORY.directory)]
    pub data_dir: PathBuf,

    /// Oscillator smoothing window
    #[arg(long, default_value_t = config::ANALYSIS.oscillator.window)]
    pub rsi_window: usize,

    /// Print the full report as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl Cli {
    pub fn analysis_params(&self) -> AnalysisParams {
        AnalysisParams {
            rsi_window: self.rsi_window,
            ..Default::default()
        }
    }
}
