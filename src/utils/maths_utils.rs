use argminmax::ArgMinMax;

/// Smallest value in `vec`, or `None` when empty.
pub fn get_min(vec: &[f64]) -> Option<f64> {
    if vec.is_empty() {
        return None;
    }
    let min_index: usize = vec.argmin();
    Some(vec[min_index])
}

/// Largest value in `vec`, or `None` when empty.
pub fn get_max(vec: &[f64]) -> Option<f64> {
    if vec.is_empty() {
        return None;
    }
    let max_index: usize = vec.argmax();
    Some(vec[max_index])
}

#[inline]
fn scale(decimals: u32) -> f64 {
    10f64.powi(decimals as i32)
}

/// Round half away from zero to `decimals` places (2 => cents).
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = scale(decimals);
    (value * factor).round() / factor
}

/// Smallest value with `decimals` places that is >= `value`.
pub fn ceil_to(value: f64, decimals: u32) -> f64 {
    let factor = scale(decimals);
    (value * factor).ceil() / factor
}

/// Largest value with `decimals` places that is <= `value`.
pub fn floor_to(value: f64, decimals: u32) -> f64 {
    let factor = scale(decimals);
    (value * factor).floor() / factor
}

/// True when any of `values` lies strictly closer than `threshold` to `target`.
/// The threshold is absolute, not relative to price magnitude.
pub fn is_near_any(values: &[f64], target: f64, threshold: f64) -> bool {
    values.iter().any(|v| (v - target).abs() < threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn min_max_of_empty_is_none() {
        assert_eq!(get_min(&[]), None);
        assert_eq!(get_max(&[]), None);
    }

    #[test]
    fn min_max_of_values() {
        let v = [3.0, -1.5, 7.25, 0.0];
        assert_eq!(get_min(&v), Some(-1.5));
        assert_eq!(get_max(&v), Some(7.25));
    }

    #[test]
    fn rounding_helpers() {
        assert!(approx_eq(round_to(7.6, 2), 7.6));
        assert!(approx_eq(round_to(90.2549, 2), 90.25));
        assert!(approx_eq(round_to(12.345_67, 0), 12.0));
        assert!(approx_eq(ceil_to(7.501, 2), 7.51));
        assert!(approx_eq(floor_to(13.209, 2), 13.2));
    }

    #[test]
    fn proximity_is_absolute_and_strict() {
        assert!(is_near_any(&[8.0, 9.0], 8.005, 0.01));
        assert!(!is_near_any(&[8.0, 9.0], 8.02, 0.01));
        // Same relative gap on a high-priced instrument is not "near"
        assert!(!is_near_any(&[8000.0], 8005.0, 0.01));
        assert!(!is_near_any(&[], 1.0, 0.01));
    }
}
