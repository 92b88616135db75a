use statrs::statistics::Statistics;

use crate::config::AnalysisParams;
use crate::models::MovingAverageSeries;

/// Simple rolling mean over `window` closes, aligned with the input.
/// The first `window - 1` entries are `None`; a series shorter than the window
/// is all `None`.
pub fn simple_moving_average(closes: &[f64], window: usize) -> MovingAverageSeries {
    let window = window.max(1);
    let warmup = (window - 1).min(closes.len());

    let values = std::iter::repeat_n(None, warmup)
        .chain(closes.windows(window).map(|w| Some(w.iter().mean())))
        .collect();

    MovingAverageSeries { window, values }
}

/// The short-window average always; the long-window one only when the series
/// holds at least `ma_long_window` points.
pub fn moving_averages(closes: &[f64], params: &AnalysisParams) -> Vec<MovingAverageSeries> {
    let mut averages = vec![simple_moving_average(closes, params.ma_short_window)];
    if closes.len() >= params.ma_long_window && params.ma_long_window != params.ma_short_window {
        averages.push(simple_moving_average(closes, params.ma_long_window));
    }
    averages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn warmup_entries_are_absent() {
        let ma = simple_moving_average(&[1.0, 2.0, 3.0, 4.0, 5.0], 3);
        assert_eq!(ma.len(), 5);
        assert_eq!(ma.values[0], None);
        assert_eq!(ma.values[1], None);
        assert!(approx_eq(ma.values[2].unwrap(), 2.0));
        assert!(approx_eq(ma.values[3].unwrap(), 3.0));
        assert!(approx_eq(ma.values[4].unwrap(), 4.0));
        assert_eq!(ma.first_defined_index(), Some(2));
    }

    #[test]
    fn short_series_is_all_absent() {
        let ma = simple_moving_average(&[1.0, 2.0], 50);
        assert_eq!(ma.values, vec![None, None]);
        assert_eq!(ma.latest(), None);

        let ma = simple_moving_average(&[], 50);
        assert!(ma.is_empty());
    }

    #[test]
    fn window_of_one_is_identity() {
        let closes = [3.5, 4.5, 2.0];
        let ma = simple_moving_average(&closes, 1);
        let defined: Vec<f64> = ma.values.iter().flatten().copied().collect();
        assert_eq!(defined, closes.to_vec());
    }

    #[test]
    fn long_window_needs_enough_points() {
        let params = AnalysisParams::default();
        let closes: Vec<f64> = (0..199).map(|i| 100.0 + i as f64).collect();
        let averages = moving_averages(&closes, &params);
        assert_eq!(averages.len(), 1);
        assert_eq!(averages[0].window, 50);

        let closes: Vec<f64> = (0..300).map(|i| 100.0 + i as f64).collect();
        let averages = moving_averages(&closes, &params);
        assert_eq!(averages.len(), 2);
        let long = &averages[1];
        assert_eq!(long.window, 200);
        assert!(long.values[..199].iter().all(Option::is_none));
        assert!(long.values[199..].iter().all(Option::is_some));
        // mean of 100..=299
        assert!(approx_eq(long.values[299].unwrap(), 199.5));
    }
}
