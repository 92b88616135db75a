//! Support and resistance level synthesis
//!
//! Turns the turning points found by [`find_extrema`](super::extrema::find_extrema)
//! into exactly `level_count` ascending levels per side. When the history has too
//! few genuine turning points (a quiet or trending market) the gaps are filled by a
//! deterministic percentage ladder, bounded to a band around the observed range:
//!
//! 1. Take the most extreme genuine extrema (lowest minima / highest maxima).
//! 2. If still short, anchor on the series minimum / maximum.
//! 3. Round, de-duplicate, sort.
//! 4. Step outward from the outermost level by a fixed percentage, never past the
//!    floor (support) or ceiling (resistance) guard. Stop as soon as a rung comes
//!    within the proximity threshold of a placed level; at most `level_count` rungs
//!    are attempted. Rungs stay unrounded until the final pass.
//!
//! With no genuine extrema at all (flat or monotone history, fewer than 3 points)
//! the levels are seeded straight from the last close instead. Seeds respect the
//! same floor and ceiling.

use itertools::Itertools;

use crate::analysis::extrema::Extremum;
use crate::config::AnalysisParams;
#[allow(unused_imports)]
use crate::config::debug::PRINT_LEVEL_SYNTHESIS;
use crate::models::{LevelKind, LevelSet};
use crate::utils::maths_utils::{ceil_to, floor_to, get_max, get_min, is_near_any, round_to};

/// Slack when comparing a rounded level against its guard.
const GUARD_TOLERANCE: f64 = 1e-9;

/// Support levels from the local minima of `closes`.
pub fn support_levels(closes: &[f64], minima: &[Extremum], params: &AnalysisParams) -> LevelSet {
    synthesize_levels(closes, minima, LevelKind::Support, params)
}

/// Resistance levels from the local maxima of `closes`.
pub fn resistance_levels(
    closes: &[f64],
    maxima: &[Extremum],
    params: &AnalysisParams,
) -> LevelSet {
    synthesize_levels(closes, maxima, LevelKind::Resistance, params)
}

pub fn synthesize_levels(
    closes: &[f64],
    extrema: &[Extremum],
    kind: LevelKind,
    params: &AnalysisParams,
) -> LevelSet {
    let (Some(series_min), Some(series_max), Some(&last)) =
        (get_min(closes), get_max(closes), closes.last())
    else {
        return LevelSet::empty(kind);
    };
    let target = params.level_count;
    let precision = params.price_precision;
    let bound = match kind {
        LevelKind::Support => series_min * params.support_floor_ratio,
        LevelKind::Resistance => series_max * params.resistance_ceiling_ratio,
    };

    // 1. Most extreme genuine turning points
    let mut candidates: Vec<f64> = extrema
        .iter()
        .map(|e| e.value)
        .sorted_by(|a, b| kind.rank(a, b))
        .take(target)
        .collect();

    if candidates.is_empty() {
        let seeds = (0..target).map(|i| last * seed_ratio(kind, i, params));
        let seeded = normalize_within(kind, seeds, bound, precision);

        #[cfg(debug_assertions)]
        if PRINT_LEVEL_SYNTHESIS {
            log::info!("{kind}: no genuine extrema, seeded from last close {last}: {seeded:?}");
        }

        return finalize(kind, seeded, target);
    }

    // 2. Anchor on the series extreme
    if candidates.len() < target {
        let anchor = match kind {
            LevelKind::Support => series_min,
            LevelKind::Resistance => series_max,
        };
        if !is_near_any(&candidates, anchor, params.proximity_threshold) {
            candidates.push(anchor);
        }
    }

    // 3.
    let mut levels = normalize(candidates, precision);

    // 4. Ladder, at most one rung per missing slot
    let outermost = match kind {
        LevelKind::Support => levels.first(),
        LevelKind::Resistance => levels.last(),
    };
    let Some(mut outermost) = outermost.copied() else {
        return finalize(kind, levels, target);
    };
    for _ in 0..target {
        if levels.len() >= target {
            break;
        }
        let Some(rung) = next_rung(kind, outermost, bound, params) else {
            log::debug!("{kind} ladder pinned at guard {bound:.4}, keeping {} levels", levels.len());
            break;
        };
        if is_near_any(&levels, rung, params.proximity_threshold) {
            log::debug!("{kind} ladder collapsed onto existing level at {rung}");
            break;
        }

        #[cfg(debug_assertions)]
        if PRINT_LEVEL_SYNTHESIS {
            log::info!("{kind}: synthetic rung {rung} added to {levels:?}");
        }

        levels.push(rung);
        outermost = rung;
    }

    finalize(kind, normalize_within(kind, levels, bound, precision), target)
}

/// Seed multiplier for slot `i`: 0.98, 0.95, 0.92 below / 1.02, 1.05, 1.08 above by default.
fn seed_ratio(kind: LevelKind, i: usize, params: &AnalysisParams) -> f64 {
    let offset = params.seed_offset_pct + i as f64 * params.seed_spacing_pct;
    match kind {
        LevelKind::Support => 1.0 - offset,
        LevelKind::Resistance => 1.0 + offset,
    }
}

/// Next unrounded ladder value outward from `outermost`, clamped to `bound`.
/// `None` when the clamp leaves no room beyond `outermost`.
fn next_rung(kind: LevelKind, outermost: f64, bound: f64, params: &AnalysisParams) -> Option<f64> {
    match kind {
        LevelKind::Support => {
            let rung = (outermost * (1.0 - params.support_step_pct)).max(bound);
            (rung < outermost).then_some(rung)
        }
        LevelKind::Resistance => {
            let rung = (outermost * (1.0 + params.resistance_step_pct)).min(bound);
            (rung > outermost).then_some(rung)
        }
    }
}

/// Round to `precision` decimals, sort ascending, drop exact duplicates.
fn normalize(values: impl IntoIterator<Item = f64>, precision: u32) -> Vec<f64> {
    values
        .into_iter()
        .map(|v| round_to(v, precision))
        .sorted_by(|a, b| a.total_cmp(b))
        .dedup()
        .collect()
}

/// As [`normalize`], but a value that rounds past the floor (support) or ceiling
/// (resistance) is pulled back to the nearest representable price inside it.
fn normalize_within(
    kind: LevelKind,
    values: impl IntoIterator<Item = f64>,
    bound: f64,
    precision: u32,
) -> Vec<f64> {
    let guarded = values.into_iter().map(|v| {
        let rounded = round_to(v, precision);
        match kind {
            LevelKind::Support if rounded < bound - GUARD_TOLERANCE => ceil_to(bound, precision),
            LevelKind::Resistance if rounded > bound + GUARD_TOLERANCE => {
                floor_to(bound, precision)
            }
            _ => rounded,
        }
    });
    normalize(guarded, precision)
}

/// Supports keep the lowest `target` levels, resistances the highest.
fn finalize(kind: LevelKind, mut levels: Vec<f64>, target: usize) -> LevelSet {
    if levels.len() > target {
        match kind {
            LevelKind::Support => levels.truncate(target),
            LevelKind::Resistance => {
                levels = levels.split_off(levels.len() - target);
            }
        }
    }
    LevelSet::from_sorted(kind, levels)
}
