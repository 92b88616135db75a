use serde::{Deserialize, Serialize};

use crate::domain::error::AnalysisError;
use crate::utils::TimeUtils;
use crate::utils::maths_utils::{get_max, get_min};

/// One daily observation. Volume travels with the fetched data but the engine ignores it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub timestamp_ms: i64,
    pub close: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

impl PricePoint {
    pub fn new(timestamp_ms: i64, close: f64) -> Self {
        Self {
            timestamp_ms,
            close,
            volume: None,
        }
    }
}

/// Time-ordered closing prices for one instrument.
///
/// Construction validates shape (strictly increasing timestamps, positive finite
/// closes), so everything downstream can treat the closes as clean numbers.
/// Deserializing goes through the same validation.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(try_from = "Vec<PricePoint>", into = "Vec<PricePoint>")]
pub struct PriceSeries {
    points: Vec<PricePoint>,
    closes: Vec<f64>,
}

impl PriceSeries {
    pub fn new(points: Vec<PricePoint>) -> Result<Self, AnalysisError> {
        for (index, point) in points.iter().enumerate() {
            if !point.close.is_finite() {
                return Err(AnalysisError::invalid_series(
                    index,
                    format!("close price {} is not finite", point.close),
                ));
            }
            if point.close <= 0.0 {
                return Err(AnalysisError::invalid_series(
                    index,
                    format!("close price {} is not positive", point.close),
                ));
            }
        }

        if let Some(index) = points
            .windows(2)
            .position(|pair| pair[1].timestamp_ms <= pair[0].timestamp_ms)
        {
            return Err(AnalysisError::invalid_series(
                index + 1,
                format!(
                    "timestamp {} does not follow {}",
                    points[index + 1].timestamp_ms,
                    points[index].timestamp_ms
                ),
            ));
        }

        let closes = points.iter().map(|p| p.close).collect();
        Ok(Self { points, closes })
    }

    /// Build a daily series from bare closes, stamping them one day apart from epoch 0.
    pub fn from_closes(closes: &[f64]) -> Result<Self, AnalysisError> {
        let points = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PricePoint::new(i as i64 * TimeUtils::MS_IN_D, close))
            .collect();
        Self::new(points)
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn min_close(&self) -> Option<f64> {
        get_min(&self.closes)
    }

    pub fn max_close(&self) -> Option<f64> {
        get_max(&self.closes)
    }

    /// Last close, or `placeholder` when there is nothing to report.
    pub fn last_close_or(&self, placeholder: f64) -> f64 {
        self.closes.last().copied().unwrap_or(placeholder)
    }

    pub fn first_timestamp_ms(&self) -> Option<i64> {
        self.points.first().map(|p| p.timestamp_ms)
    }

    pub fn last_timestamp_ms(&self) -> Option<i64> {
        self.points.last().map(|p| p.timestamp_ms)
    }

    /// The trailing part of the series that starts at or after `start_ms`.
    pub fn since(&self, start_ms: i64) -> PriceSeries {
        let start_idx = self.points.partition_point(|p| p.timestamp_ms < start_ms);
        PriceSeries {
            points: self.points[start_idx..].to_vec(),
            closes: self.closes[start_idx..].to_vec(),
        }
    }
}

impl TryFrom<Vec<PricePoint>> for PriceSeries {
    type Error = AnalysisError;

    fn try_from(points: Vec<PricePoint>) -> Result<Self, Self::Error> {
        PriceSeries::new(points)
    }
}

impl From<PriceSeries> for Vec<PricePoint> {
    fn from(series: PriceSeries) -> Self {
        series.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_on_empty_series_are_sentinels() {
        let series = PriceSeries::default();
        assert!(series.is_empty());
        assert_eq!(series.min_close(), None);
        assert_eq!(series.max_close(), None);
        assert_eq!(series.last_close_or(100.0), 100.0);
    }

    #[test]
    fn scalars_on_populated_series() {
        let series = PriceSeries::from_closes(&[10.0, 9.0, 11.0, 8.0, 12.0]).unwrap();
        assert_eq!(series.len(), 5);
        assert_eq!(series.min_close(), Some(8.0));
        assert_eq!(series.max_close(), Some(12.0));
        assert_eq!(series.last_close_or(100.0), 12.0);
        assert_eq!(series.closes(), &[10.0, 9.0, 11.0, 8.0, 12.0]);
    }

    #[test]
    fn nan_price_is_rejected_with_its_index() {
        let err = PriceSeries::from_closes(&[10.0, f64::NAN, 11.0]).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidSeries { index: 1, .. }));
    }

    #[test]
    fn non_positive_price_is_rejected() {
        let err = PriceSeries::from_closes(&[10.0, 11.0, 0.0]).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidSeries { index: 2, .. }));
    }

    #[test]
    fn duplicate_or_backwards_timestamps_are_rejected() {
        let dup = vec![PricePoint::new(1_000, 10.0), PricePoint::new(1_000, 11.0)];
        assert!(matches!(
            PriceSeries::new(dup),
            Err(AnalysisError::InvalidSeries { index: 1, .. })
        ));

        let backwards = vec![
            PricePoint::new(1_000, 10.0),
            PricePoint::new(2_000, 11.0),
            PricePoint::new(1_500, 12.0),
        ];
        assert!(matches!(
            PriceSeries::new(backwards),
            Err(AnalysisError::InvalidSeries { index: 2, .. })
        ));
    }

    #[test]
    fn since_keeps_the_trailing_points() {
        let series = PriceSeries::from_closes(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        let tail = series.since(2 * TimeUtils::MS_IN_D);
        assert_eq!(tail.closes(), &[3.0, 4.0]);
        assert!(series.since(10 * TimeUtils::MS_IN_D).is_empty());
    }

    #[test]
    fn deserializing_validates_points() {
        let ok: PriceSeries = serde_json::from_str(
            r#"[{"timestamp_ms": 0, "close": 1.5}, {"timestamp_ms": 86400000, "close": 1.6, "volume": 1200.0}]"#,
        )
        .unwrap();
        assert_eq!(ok.closes(), &[1.5, 1.6]);
        assert_eq!(ok.points()[1].volume, Some(1200.0));

        let bad = serde_json::from_str::<PriceSeries>(
            r#"[{"timestamp_ms": 5, "close": 1.5}, {"timestamp_ms": 1, "close": 1.6}]"#,
        );
        assert!(bad.is_err());
    }
}
