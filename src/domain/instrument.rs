use serde::{Deserialize, Serialize};

use crate::utils::TimeUtils;

/// Descriptive metadata supplied alongside a price history.
///
/// Every field is independently optional; providers routinely omit some of
/// them. The analysis engine never reads this record.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct InstrumentInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pe_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dividend_yield: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regular_market_price: Option<f64>,
}

impl InstrumentInfo {
    /// Name to show for `symbol`, falling back to the symbol itself.
    pub fn display_name<'a>(&'a self, symbol: &'a str) -> &'a str {
        self.long_name.as_deref().unwrap_or(symbol)
    }

    /// A listing without a current market price is treated as inactive.
    pub fn has_market_price(&self) -> bool {
        self.regular_market_price.is_some()
    }
}

/// How much history to request from a source.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
pub enum HistoryPeriod {
    #[default]
    #[value(name = "3mo")]
    #[serde(rename = "3mo")]
    #[strum(serialize = "3mo")]
    ThreeMonths,
    #[value(name = "6mo")]
    #[serde(rename = "6mo")]
    #[strum(serialize = "6mo")]
    SixMonths,
    #[value(name = "1y")]
    #[serde(rename = "1y")]
    #[strum(serialize = "1y")]
    OneYear,
    #[value(name = "5y")]
    #[serde(rename = "5y")]
    #[strum(serialize = "5y")]
    FiveYears,
}

impl HistoryPeriod {
    pub fn days(&self) -> i64 {
        match self {
            HistoryPeriod::ThreeMonths => 91,
            HistoryPeriod::SixMonths => 182,
            HistoryPeriod::OneYear => 365,
            HistoryPeriod::FiveYears => 5 * 365 + 1,
        }
    }

    pub fn duration_ms(&self) -> i64 {
        self.days() * TimeUtils::MS_IN_D
    }
}
