//! Locations of locally stored price histories

pub struct HistoryStorage {
    /// Directory searched for `<SYMBOL>.json` history files
    pub directory: &'static str,
    pub extension: &'static str,
}

pub const HISTORY: HistoryStorage = HistoryStorage {
    directory: "data",
    extension: "json",
};

pub fn history_filename(symbol: &str) -> String {
    format!("{}.{}", symbol, HISTORY.extension)
}
