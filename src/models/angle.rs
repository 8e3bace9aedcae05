//! Circular angle arithmetic on ecliptic longitudes.
//!
//! All longitudes in this crate are degrees in `[0, 360)`. The helpers here
//! are the only place wraparound is handled; everything else builds on them.

/// Normalize a degree value into `[0, 360)`. Handles negative input.
pub fn normalize_degrees(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    // rem_euclid can return 360.0 for inputs like -1e-15
    if d >= 360.0 {
        0.0
    } else {
        d
    }
}

/// Forward (counterclockwise) arc from `from` to `to`, in `[0, 360)`.
pub fn forward_arc(from: f64, to: f64) -> f64 {
    normalize_degrees(to - from)
}

/// Shortest angular separation between two longitudes, in `[0, 180]`.
pub fn angular_separation(a: f64, b: f64) -> f64 {
    let d = (a - b).abs().rem_euclid(360.0);
    if d > 180.0 {
        360.0 - d
    } else {
        d
    }
}

/// Whether `lon` lies on the half-open circular arc `[start, end)`.
///
/// When `end < start` the arc crosses 0° Aries and the test becomes
/// `lon >= start OR lon < end`.
pub fn in_arc(lon: f64, start: f64, end: f64) -> bool {
    if start <= end {
        lon >= start && lon < end
    } else {
        lon >= start || lon < end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_handles_negative_and_large() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        assert!((normalize_degrees(-30.0) - 330.0).abs() < 1e-12);
        assert!((normalize_degrees(-390.0) - 330.0).abs() < 1e-12);
    }

    #[test]
    fn separation_is_symmetric_and_bounded() {
        let samples = [0.0, 10.0, 95.5, 180.0, 270.25, 359.9];
        for &a in &samples {
            for &b in &samples {
                let d1 = angular_separation(a, b);
                let d2 = angular_separation(b, a);
                assert!((d1 - d2).abs() < 1e-12, "asymmetric at ({a},{b})");
                assert!((0.0..=180.0).contains(&d1), "out of range at ({a},{b})");
            }
            assert_eq!(angular_separation(a, a), 0.0);
        }
    }

    #[test]
    fn separation_wraps_across_aries() {
        assert!((angular_separation(350.0, 10.0) - 20.0).abs() < 1e-12);
        assert!((angular_separation(10.0, 350.0) - 20.0).abs() < 1e-12);
    }

    #[test]
    fn forward_arc_is_directional() {
        assert!((forward_arc(350.0, 10.0) - 20.0).abs() < 1e-12);
        assert!((forward_arc(10.0, 350.0) - 340.0).abs() < 1e-12);
        assert_eq!(forward_arc(42.0, 42.0), 0.0);
    }

    #[test]
    fn arc_membership_with_wraparound() {
        // Plain arc
        assert!(in_arc(95.0, 90.0, 120.0));
        assert!(!in_arc(120.0, 90.0, 120.0));
        assert!(in_arc(90.0, 90.0, 120.0));
        // Arc crossing 0 Aries
        assert!(in_arc(355.0, 340.0, 10.0));
        assert!(in_arc(5.0, 340.0, 10.0));
        assert!(!in_arc(10.0, 340.0, 10.0));
        assert!(!in_arc(200.0, 340.0, 10.0));
    }
}
