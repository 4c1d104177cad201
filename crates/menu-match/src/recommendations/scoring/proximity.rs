/// Closeness of `actual` to `target` in `[0, 1]`.
///
/// Flat at 1 while the relative deviation stays within `tolerance`, then decays
/// linearly to 0 at a deviation of 100% of the target. A target that is not a
/// positive finite number only matches an actual value of exactly zero.
pub(crate) fn proximity(actual: f64, target: f64, tolerance: f64) -> f64 {
    if !(target.is_finite() && target > 0.0) {
        return if actual == 0.0 { 1.0 } else { 0.0 };
    }

    let difference = (actual - target).abs() / target;
    if difference <= tolerance {
        return 1.0;
    }

    (1.0 - (difference - tolerance) / (1.0 - tolerance)).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::proximity;

    #[test]
    fn within_tolerance_is_perfect() {
        assert_eq!(proximity(130.0, 100.0, 0.3), 1.0);
        assert_eq!(proximity(70.0, 100.0, 0.3), 1.0);
        assert_eq!(proximity(100.0, 100.0, 0.2), 1.0);
    }

    #[test]
    fn decays_linearly_outside_tolerance() {
        let score = proximity(160.0, 100.0, 0.2);
        assert!((score - 0.5).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn floors_at_zero_beyond_full_deviation() {
        assert_eq!(proximity(250.0, 100.0, 0.3), 0.0);
        assert_eq!(proximity(0.0, 100.0, 0.3), 0.0);
    }

    #[test]
    fn zero_target_only_matches_zero() {
        assert_eq!(proximity(0.0, 0.0, 0.3), 1.0);
        assert_eq!(proximity(12.0, 0.0, 0.3), 0.0);
        assert_eq!(proximity(12.0, f64::NAN, 0.3), 0.0);
    }
}
