use serde::{Deserialize, Serialize};

use crate::models::indicators::{MovingAverageSeries, OscillatorSeries};
use crate::models::levels::{LevelKind, LevelSet};

/// Everything one analysis call produces for a presentation layer.
/// Independent of how it is displayed, charted or exported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub point_count: usize,
    pub last_close: Option<f64>,
    pub support: LevelSet,
    pub resistance: LevelSet,
    pub oscillator: OscillatorSeries,
    /// Short window first; the long window only appears when enough data exists
    pub moving_averages: Vec<MovingAverageSeries>,
}

impl AnalysisReport {
    pub fn levels(&self, kind: LevelKind) -> &LevelSet {
        match kind {
            LevelKind::Support => &self.support,
            LevelKind::Resistance => &self.resistance,
        }
    }

    pub fn moving_average(&self, window: usize) -> Option<&MovingAverageSeries> {
        self.moving_averages.iter().find(|ma| ma.window == window)
    }
}
