use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::config::{HISTORY, history_filename};
use crate::data::history_source::{InstrumentHistory, PriceHistorySource};
use crate::domain::{HistoryPeriod, InstrumentInfo, PriceSeries};

/// On-disk layout of one instrument's history.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct HistoryFile {
    #[serde(default)]
    pub info: InstrumentInfo,
    /// Validated on load: strictly increasing timestamps, positive finite closes
    pub points: PriceSeries,
}

impl HistoryFile {
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).context(format!("Failed to open history file: {:?}", path))?;
        let reader = BufReader::new(file);
        let history = serde_json::from_reader(reader)
            .context(format!("Failed to parse history file: {:?}", path))?;
        Ok(history)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create directory: {}", parent.display()))?;
        }
        let file =
            File::create(path).context(format!("Failed to create file: {}", path.display()))?;
        serde_json::to_writer_pretty(file, self)
            .context(format!("Failed to serialize history to: {}", path.display()))
    }
}

/// Reads `<directory>/<SYMBOL>.json` files written by an external downloader.
pub struct JsonFileSource {
    pub directory: PathBuf,
}

impl Default for JsonFileSource {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(HISTORY.directory),
        }
    }
}

impl JsonFileSource {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn path_for(&self, symbol: &str) -> PathBuf {
        self.directory.join(history_filename(symbol))
    }
}

impl PriceHistorySource for JsonFileSource {
    fn fetch_history(&self, symbol: &str, period: HistoryPeriod) -> Result<InstrumentHistory> {
        let path = self.path_for(symbol);
        let file = HistoryFile::load_from_path(&path)?;

        // Keep only the requested period, measured back from the newest point
        let series = match file.points.last_timestamp_ms() {
            Some(last_ms) => file.points.since(last_ms.saturating_sub(period.duration_ms())),
            None => file.points,
        };
        if series.is_empty() {
            bail!("No price history for {} in period {}", symbol, period);
        }
        if !file.info.has_market_price() {
            log::warn!("{} has no current market price; it may be delisted", symbol);
        }

        Ok(InstrumentHistory {
            symbol: symbol.to_string(),
            info: file.info,
            series,
        })
    }

    fn signature(&self) -> &'static str {
        "Local JSON history files"
    }
}
