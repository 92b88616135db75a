use rayon::prelude::*;

use crate::analysis::extrema::find_extrema;
use crate::analysis::level_synthesis::{resistance_levels, support_levels};
use crate::analysis::moving_average::moving_averages;
use crate::analysis::oscillator::relative_strength;
use crate::config::AnalysisParams;
#[allow(unused_imports)]
use crate::config::debug::PRINT_BATCH_TIMINGS;
use crate::domain::{AnalysisError, PriceSeries};
use crate::models::AnalysisReport;

/// Run the full pipeline over one validated series.
///
/// Pure: no state survives the call, so the same engine can serve any number
/// of instruments concurrently.
pub fn analyze(series: &PriceSeries, params: &AnalysisParams) -> Result<AnalysisReport, AnalysisError> {
    params.validate()?;

    let closes = series.closes();
    let extrema = find_extrema(closes);

    let report = AnalysisReport {
        point_count: series.len(),
        last_close: closes.last().copied(),
        support: support_levels(closes, &extrema.minima, params),
        resistance: resistance_levels(closes, &extrema.maxima, params),
        oscillator: relative_strength(closes, params.rsi_window),
        moving_averages: moving_averages(closes, params),
    };

    log::debug!(
        "Analysed {} closes: support {:?}, resistance {:?}",
        report.point_count,
        report.support.levels(),
        report.resistance.levels()
    );

    Ok(report)
}

/// Convenience over bare closes; fails on NaN or non-positive prices.
pub fn analyze_closes(closes: &[f64], params: &AnalysisParams) -> Result<AnalysisReport, AnalysisError> {
    let series = PriceSeries::from_closes(closes)?;
    analyze(&series, params)
}

/// Analyse many instruments in parallel. Results keep the input order and
/// failures stay attached to their symbol.
pub fn analyze_many<S>(
    requests: &[(S, PriceSeries)],
    params: &AnalysisParams,
) -> Vec<(S, Result<AnalysisReport, AnalysisError>)>
where
    S: Clone + Send + Sync + std::fmt::Display,
{
    requests
        .par_iter()
        .map(|(symbol, series)| {
            #[cfg(debug_assertions)]
            let start = std::time::Instant::now();

            let result = analyze(series, params);

            #[cfg(debug_assertions)]
            if PRINT_BATCH_TIMINGS {
                log::info!("Analysis for {} took: {:?}", symbol, start.elapsed());
            }
            if let Err(e) = &result {
                log::warn!("Analysis for {} failed: {}", symbol, e);
            }

            (symbol.clone(), result)
        })
        .collect()
}
