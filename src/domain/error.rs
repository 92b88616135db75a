use std::error::Error;
use std::fmt;

/// Failures surfaced at the engine boundary.
///
/// Well-formed but uneventful input (empty, short, flat) never produces an
/// error; only input the engine cannot reason about does.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// The price series is malformed at `index` (NaN price, timestamps out of order, ...)
    InvalidSeries { index: usize, reason: String },
    /// A parameter is outside the range the engine supports
    InvalidParameter { name: &'static str, detail: String },
}

impl AnalysisError {
    pub fn invalid_series(index: usize, reason: impl Into<String>) -> Self {
        AnalysisError::InvalidSeries {
            index,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AnalysisError::InvalidSeries { index, reason } => {
                write!(f, "Invalid input series at point {}: {}", index, reason)
            }
            AnalysisError::InvalidParameter { name, detail } => {
                write!(f, "Invalid parameter `{}`: {}", name, detail)
            }
        }
    }
}

impl Error for AnalysisError {}
