//! Analysis and computation configuration

use serde::{Deserialize, Serialize};

use crate::domain::AnalysisError;

/// Settings for support/resistance level synthesis
pub struct LevelSettings {
    // How many levels of each kind are presented
    pub level_count: usize,
    // Decimal places levels are rounded to before de-duplication
    pub price_precision: u32,
    // Absolute distance under which two levels count as "already present"
    pub proximity_threshold: f64,
    // Fractional ladder step (0.05 = each synthetic support is 5% below the lowest level)
    pub support_step_pct: f64,
    pub resistance_step_pct: f64,
    // Synthetic supports never drop below series_min * floor_ratio
    pub support_floor_ratio: f64,
    // Synthetic resistances never exceed series_max * ceiling_ratio
    pub resistance_ceiling_ratio: f64,
    // Degenerate seed: last * (1 -/+ (offset + i * spacing)) => 0.98, 0.95, 0.92 / 1.02, 1.05, 1.08
    pub seed_offset_pct: f64,
    pub seed_spacing_pct: f64,
}

/// Settings for the RSI-style oscillator
pub struct OscillatorSettings {
    pub window: usize,
    // Substituted for a zero average loss
    pub epsilon: f64,
}

/// Settings for the simple moving averages
pub struct MovingAverageSettings {
    pub short_window: usize,
    // Only computed when the series holds at least this many points
    pub long_window: usize,
}

/// The Master Analysis Configuration
pub struct AnalysisConfig {
    pub levels: LevelSettings,
    pub oscillator: OscillatorSettings,
    pub moving_averages: MovingAverageSettings,
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    levels: LevelSettings {
        level_count: 3,
        price_precision: 2,
        proximity_threshold: 0.01,
        support_step_pct: 0.05,
        resistance_step_pct: 0.05,
        support_floor_ratio: 0.90,
        resistance_ceiling_ratio: 1.10,
        seed_offset_pct: 0.02,
        seed_spacing_pct: 0.03,
    },

    oscillator: OscillatorSettings {
        window: 14,
        epsilon: 1e-10,
    },

    moving_averages: MovingAverageSettings {
        short_window: 50,
        long_window: 200,
    },
};

/// Per-call parameters for one analysis run.
///
/// Defaults come from [`ANALYSIS`]; callers override individual fields
/// (tests typically shrink `level_count` or the windows).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisParams {
    pub rsi_window: usize,
    pub ma_short_window: usize,
    pub ma_long_window: usize,
    pub level_count: usize,
    pub price_precision: u32,
    pub proximity_threshold: f64,
    pub support_step_pct: f64,
    pub resistance_step_pct: f64,
    pub support_floor_ratio: f64,
    pub resistance_ceiling_ratio: f64,
    pub seed_offset_pct: f64,
    pub seed_spacing_pct: f64,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            rsi_window: ANALYSIS.oscillator.window,
            ma_short_window: ANALYSIS.moving_averages.short_window,
            ma_long_window: ANALYSIS.moving_averages.long_window,
            level_count: ANALYSIS.levels.level_count,
            price_precision: ANALYSIS.levels.price_precision,
            proximity_threshold: ANALYSIS.levels.proximity_threshold,
            support_step_pct: ANALYSIS.levels.support_step_pct,
            resistance_step_pct: ANALYSIS.levels.resistance_step_pct,
            support_floor_ratio: ANALYSIS.levels.support_floor_ratio,
            resistance_ceiling_ratio: ANALYSIS.levels.resistance_ceiling_ratio,
            seed_offset_pct: ANALYSIS.levels.seed_offset_pct,
            seed_spacing_pct: ANALYSIS.levels.seed_spacing_pct,
        }
    }
}

impl AnalysisParams {
    /// Reject parameter combinations the engine cannot work with.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        let invalid = |name: &'static str, detail: String| {
            Err(AnalysisError::InvalidParameter { name, detail })
        };

        if self.rsi_window == 0 {
            return invalid("rsi_window", "must be at least 1".to_string());
        }
        if self.ma_short_window == 0 || self.ma_long_window == 0 {
            return invalid("ma_window", "moving-average windows must be at least 1".to_string());
        }
        if self.level_count == 0 {
            return invalid("level_count", "must be at least 1".to_string());
        }
        // Beyond ~15 decimals f64 rounding is meaningless
        if self.price_precision > 15 {
            return invalid(
                "price_precision",
                format!("{} decimals exceeds f64 precision", self.price_precision),
            );
        }
        if !(self.proximity_threshold.is_finite() && self.proximity_threshold >= 0.0) {
            return invalid(
                "proximity_threshold",
                format!("{} is not a finite non-negative number", self.proximity_threshold),
            );
        }
        for (name, step) in [
            ("support_step_pct", self.support_step_pct),
            ("resistance_step_pct", self.resistance_step_pct),
        ] {
            if !(step > 0.0 && step < 1.0) {
                return invalid(name, format!("{step} is outside (0, 1)"));
            }
        }
        if !(self.support_floor_ratio > 0.0 && self.support_floor_ratio <= 1.0) {
            return invalid(
                "support_floor_ratio",
                format!("{} is outside (0, 1]", self.support_floor_ratio),
            );
        }
        if !(self.resistance_ceiling_ratio.is_finite() && self.resistance_ceiling_ratio >= 1.0) {
            return invalid(
                "resistance_ceiling_ratio",
                format!("{} is below 1", self.resistance_ceiling_ratio),
            );
        }
        // The deepest support seed must stay positive
        let deepest_seed =
            self.seed_offset_pct + (self.level_count - 1) as f64 * self.seed_spacing_pct;
        if !(self.seed_offset_pct >= 0.0 && self.seed_spacing_pct > 0.0 && deepest_seed < 1.0) {
            return invalid(
                "seed_spacing_pct",
                format!(
                    "offset {} and spacing {} give a non-positive seed for {} levels",
                    self.seed_offset_pct, self.seed_spacing_pct, self.level_count
                ),
            );
        }
        Ok(())
    }
}
