use serde::{Deserialize, Serialize};

/// RSI-style oscillator aligned 1:1 with the price series, every value in [0, 100]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OscillatorSeries {
    pub window: usize,
    pub values: Vec<f64>,
}

impl OscillatorSeries {
    pub fn latest(&self) -> Option<f64> {
        self.values.last().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Rolling mean aligned 1:1 with the price series.
/// Entries before the window fills are `None` (never 0, never a partial mean).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingAverageSeries {
    pub window: usize,
    pub values: Vec<Option<f64>>,
}

impl MovingAverageSeries {
    pub fn latest(&self) -> Option<f64> {
        self.values.last().copied().flatten()
    }

    pub fn first_defined_index(&self) -> Option<usize> {
        self.values.iter().position(Option::is_some)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
