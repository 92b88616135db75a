use serde::{Deserialize, Serialize};

#[allow(unused_imports)]
use crate::config::debug::PRINT_EXTREMA;

/// A turning point in the close series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extremum {
    pub index: usize,
    pub value: f64,
}

/// Strict local minima and maxima, each in original time order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Extrema {
    pub minima: Vec<Extremum>,
    pub maxima: Vec<Extremum>,
}

/// Classify every interior point with a 3-point neighbourhood test.
///
/// A point is a minimum when both neighbours are strictly higher, a maximum
/// when both are strictly lower. The first and last points have only one
/// neighbour and are never classified.
///
/// Known limitation: equal-valued runs (flat tops/bottoms) fail the strict test
/// on at least one side, so a plateau contributes no extremum at all.
pub fn find_extrema(closes: &[f64]) -> Extrema {
    let mut extrema = Extrema::default();

    for (offset, window) in closes.windows(3).enumerate() {
        let (prev, curr, next) = (window[0], window[1], window[2]);
        let point = Extremum {
            index: offset + 1,
            value: curr,
        };

        if prev > curr && next > curr {
            extrema.minima.push(point);
        } else if prev < curr && next < curr {
            extrema.maxima.push(point);
        }
    }

    #[cfg(debug_assertions)]
    if PRINT_EXTREMA {
        log::info!(
            "Extrema over {} closes: {} minima, {} maxima",
            closes.len(),
            extrema.minima.len(),
            extrema.maxima.len()
        );
    }

    extrema
}
