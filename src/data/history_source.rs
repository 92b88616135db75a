use anyhow::{Result, anyhow, bail};

#[allow(unused_imports)]
use crate::config::debug::PRINT_HISTORY_SOURCE;
use crate::domain::{HistoryPeriod, InstrumentInfo, PriceSeries};

/// Price history plus whatever metadata the provider had for the symbol.
#[derive(Debug, Clone, Default)]
pub struct InstrumentHistory {
    pub symbol: String,
    pub info: InstrumentInfo,
    pub series: PriceSeries,
}

pub trait PriceHistorySource {
    // Either load the history OR return an anyhow::Error
    fn fetch_history(&self, symbol: &str, period: HistoryPeriod) -> Result<InstrumentHistory>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

/// Try each source in order and return the first history that loads.
pub fn fetch_history_with_fallback<'a>(
    sources: &'a [Box<dyn PriceHistorySource>],
    symbol: &str,
    period: HistoryPeriod,
) -> Result<(InstrumentHistory, &'a str)> {
    let mut errors = Vec::new();
    for source in sources {
        match source.fetch_history(symbol, period) {
            Ok(history) => {
                #[cfg(debug_assertions)]
                if PRINT_HISTORY_SOURCE {
                    log::info!(
                        "{} history for {} served by {} ({} points)",
                        period,
                        symbol,
                        source.signature(),
                        history.series.len()
                    );
                }
                return Ok((history, source.signature()));
            }
            Err(e) => {
                log::info!("History source {} failed for {}: {:#}", source.signature(), symbol, e);
                errors.push(format!("{}: {}", source.signature(), e));
            }
        }
    }
    Err(anyhow!(
        "All history sources failed for {}: {}",
        symbol,
        errors.join(", ")
    ))
}

/// Trim, upper-case and check a ticker before it reaches any source.
pub fn normalize_symbol(raw: &str) -> Result<String> {
    let symbol = raw.trim().to_uppercase();
    if symbol.is_empty() {
        bail!("Symbol is empty");
    }
    if !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
        bail!(
            "Invalid symbol {:?}: only letters and digits are allowed",
            raw.trim()
        );
    }
    Ok(symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSource;

    impl PriceHistorySource for FailingSource {
        fn fetch_history(&self, symbol: &str, _period: HistoryPeriod) -> Result<InstrumentHistory> {
            Err(anyhow!("no data for {}", symbol))
        }

        fn signature(&self) -> &'static str {
            "failing"
        }
    }

    struct FixedSource;

    impl PriceHistorySource for FixedSource {
        fn fetch_history(&self, symbol: &str, _period: HistoryPeriod) -> Result<InstrumentHistory> {
            Ok(InstrumentHistory {
                symbol: symbol.to_string(),
                info: InstrumentInfo::default(),
                series: PriceSeries::from_closes(&[1.0, 2.0, 3.0])?,
            })
        }

        fn signature(&self) -> &'static str {
            "fixed"
        }
    }

    #[test]
    fn fallback_uses_first_working_source() {
        let sources: Vec<Box<dyn PriceHistorySource>> =
            vec![Box::new(FailingSource), Box::new(FixedSource)];
        let (history, signature) =
            fetch_history_with_fallback(&sources, "MSFT", HistoryPeriod::OneYear).unwrap();
        assert_eq!(signature, "fixed");
        assert_eq!(history.symbol, "MSFT");
        assert_eq!(history.series.len(), 3);
    }

    #[test]
    fn fallback_reports_every_failure() {
        let sources: Vec<Box<dyn PriceHistorySource>> =
            vec![Box::new(FailingSource), Box::new(FailingSource)];
        let err = fetch_history_with_fallback(&sources, "MSFT", HistoryPeriod::OneYear).unwrap_err();
        assert!(err.to_string().contains("failing: no data for MSFT"));

        let none: Vec<Box<dyn PriceHistorySource>> = Vec::new();
        assert!(fetch_history_with_fallback(&none, "MSFT", HistoryPeriod::OneYear).is_err());
    }

    #[test]
    fn symbols_are_normalized() {
        assert_eq!(normalize_symbol("  aapl ").unwrap(), "AAPL");
        assert_eq!(normalize_symbol("brk1").unwrap(), "BRK1");
        assert!(normalize_symbol("   ").is_err());
        assert!(normalize_symbol("BRK.B").is_err());
        assert!(normalize_symbol("AA PL").is_err());
    }
}
