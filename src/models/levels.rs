use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Which side of the market a level set describes
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Serialize,
    Deserialize,
    strum_macros::EnumIter,
    strum_macros::Display,
)]
pub enum LevelKind {
    Support,    // Inferred from local minima, ladder grows downward
    Resistance, // Inferred from local maxima, ladder grows upward
}

impl LevelKind {
    /// Ordering that puts the most extreme genuine candidates first
    /// (lowest minima for support, highest maxima for resistance).
    pub fn rank(&self, a: &f64, b: &f64) -> Ordering {
        match self {
            LevelKind::Support => a.total_cmp(b),
            LevelKind::Resistance => b.total_cmp(a),
        }
    }

    /// Labels used when presenting a full set, lowest level first.
    pub fn labels(&self) -> [&'static str; 3] {
        match self {
            LevelKind::Support => ["Lowest support", "Middle support", "Highest support"],
            LevelKind::Resistance => {
                ["Lowest resistance", "Middle resistance", "Highest resistance"]
            }
        }
    }
}

/// Ascending, de-duplicated price levels of one kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelSet {
    pub kind: LevelKind,
    levels: Vec<f64>,
}

impl LevelSet {
    pub fn empty(kind: LevelKind) -> Self {
        Self {
            kind,
            levels: Vec::new(),
        }
    }

    /// Caller guarantees `levels` is ascending with no duplicates.
    pub(crate) fn from_sorted(kind: LevelKind, levels: Vec<f64>) -> Self {
        debug_assert!(levels.windows(2).all(|w| w[0] < w[1]));
        Self { kind, levels }
    }

    pub fn levels(&self) -> &[f64] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Closest level strictly below `price`
    pub fn nearest_below(&self, price: f64) -> Option<f64> {
        self.levels.iter().rev().find(|&&l| l < price).copied()
    }

    /// Closest level strictly above `price`
    pub fn nearest_above(&self, price: f64) -> Option<f64> {
        self.levels.iter().find(|&&l| l > price).copied()
    }
}
