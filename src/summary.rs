//! Plain-text summary of one analysis, as printed by the CLI.

use std::fmt;

use strum::IntoEnumIterator;

use crate::data::InstrumentHistory;
use crate::models::{AnalysisReport, LevelKind};
use crate::utils::time_utils::epoch_ms_to_utc;

const CURRENCY: &str = "USD";

/// Borrowing view that renders a history and its report as a terminal table.
pub struct Summary<'a> {
    pub history: &'a InstrumentHistory,
    pub report: &'a AnalysisReport,
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let history = self.history;
        let report = self.report;
        let symbol = history.symbol.as_str();

        writeln!(f, "{} ({})", history.info.display_name(symbol), symbol)?;
        if let Some(sector) = &history.info.sector {
            writeln!(f, "Sector: {}", sector)?;
        }

        for kind in LevelKind::iter() {
            writeln!(f, "\n{} levels (low to high)", kind)?;
            let levels = report.levels(kind).levels();
            if levels.is_empty() {
                writeln!(f, "  (none)")?;
            }
            for (i, level) in levels.iter().enumerate() {
                let label = kind.labels().get(i).copied().unwrap_or("Level");
                writeln!(f, "  {:<20} {:>10.2} {}", format!("{}:", label), level, CURRENCY)?;
            }
        }

        writeln!(f)?;
        if let Some(last) = report.last_close {
            write!(f, "Last close: {:.2} {}", last, CURRENCY)?;
            if let Some(ts) = history.series.last_timestamp_ms() {
                write!(f, " on {}", epoch_ms_to_utc(ts))?;
            }
            writeln!(f)?;

            if let Some(below) = report.support.nearest_below(last) {
                writeln!(f, "Nearest support below: {:.2} ({:+.1}%)", below, pct_from(last, below))?;
            }
            if let Some(above) = report.resistance.nearest_above(last) {
                writeln!(f, "Nearest resistance above: {:.2} ({:+.1}%)", above, pct_from(last, above))?;
            }
        }
        if let Some(rsi) = report.oscillator.latest() {
            writeln!(f, "RSI({}): {:.1}", report.oscillator.window, rsi)?;
        }
        for ma in &report.moving_averages {
            match ma.latest() {
                Some(value) => writeln!(f, "SMA({}): {:.2} {}", ma.window, value, CURRENCY)?,
                None => writeln!(f, "SMA({}): not enough data", ma.window)?,
            }
        }

        write!(f, "Showing {} days of history", report.point_count)?;
        if let (Some(first), Some(last)) =
            (history.series.first_timestamp_ms(), history.series.last_timestamp_ms())
        {
            write!(f, " ({} to {})", epoch_ms_to_utc(first), epoch_ms_to_utc(last))?;
        }
        writeln!(f)
    }
}

fn pct_from(reference: f64, level: f64) -> f64 {
    (level - reference) / reference * 100.0
}

pub fn render_summary(history: &InstrumentHistory, report: &AnalysisReport) -> String {
    Summary { history, report }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::config::AnalysisParams;
    use crate::domain::{InstrumentInfo, PriceSeries};

    fn history_for(closes: &[f64]) -> InstrumentHistory {
        InstrumentHistory {
            symbol: "ZIGZ".to_string(),
            info: InstrumentInfo {
                long_name: Some("Zigzag Holdings".to_string()),
                ..Default::default()
            },
            series: PriceSeries::from_closes(closes).unwrap(),
        }
    }

    #[test]
    fn summary_lists_levels_and_indicators() {
        let history = history_for(&[10.0, 9.0, 11.0, 8.0, 12.0]);
        let report = analyze(&history.series, &AnalysisParams::default()).unwrap();

        let text = render_summary(&history, &report);
        assert!(text.starts_with("Zigzag Holdings (ZIGZ)"));
        assert!(text.contains("Lowest support:"));
        assert!(text.contains("7.60 USD"));
        assert!(text.contains("Highest resistance:"));
        assert!(text.contains("12.60 USD"));
        assert!(text.contains("Last close: 12.00 USD on 1970-01-05"));
        assert!(text.contains("SMA(50): not enough data"));
        assert!(text.contains("Showing 5 days of history (1970-01-01 to 1970-01-05)"));
    }

    #[test]
    fn summary_points_at_levels_around_last_close() {
        let history = history_for(&[10.0, 9.0, 11.0, 8.0, 12.0]);
        let report = analyze(&history.series, &AnalysisParams::default()).unwrap();

        let text = render_summary(&history, &report);
        // Supports [7.6, 8, 9] and resistances [11, 12, 12.6] around 12
        assert!(text.contains("Nearest support below: 9.00 (-25.0%)"));
        assert!(text.contains("Nearest resistance above: 12.60 (+5.0%)"));
    }

    #[test]
    fn empty_history_renders_without_levels() {
        let history = InstrumentHistory {
            symbol: "NULL".to_string(),
            ..Default::default()
        };
        let report = analyze(&history.series, &AnalysisParams::default()).unwrap();

        let text = render_summary(&history, &report);
        assert!(text.contains("(none)"));
        assert!(!text.contains("Last close"));
        assert!(text.contains("Showing 0 days of history\n"));
    }
}
