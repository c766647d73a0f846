//! Two-point linear interpolation.
//!
//! The single numeric primitive reused by every search path. Computed in
//! slope/intercept form (not normalized-t) so results stay bit-for-bit
//! compatible with the reference data this engine was validated against.

/// Interpolate `y` at `x` on the line through `(x1, y1)` and `(x2, y2)`.
///
/// When `x1 == x2` (exact equality, no epsilon) returns `y1`: collapsed
/// brackets from an exact tabulated match degenerate to the tabulated value
/// instead of dividing by zero.
pub fn lerp(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x1 == x2 {
        return y1;
    }
    let m = (y2 - y1) / (x2 - x1);
    let n = y2 - m * x2;
    m * x + n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_between_points() {
        // Midpoint of (20, 50) -> (25, 70) at 22: slope 4, intercept -30.
        assert_eq!(lerp(20.0, 50.0, 25.0, 70.0, 22.0), 58.0);
    }

    #[test]
    fn hits_endpoints_exactly() {
        assert_eq!(lerp(20.0, 50.0, 25.0, 70.0, 20.0), 50.0);
        assert_eq!(lerp(20.0, 50.0, 25.0, 70.0, 25.0), 70.0);
    }

    #[test]
    fn collapsed_bracket_returns_y1() {
        assert_eq!(lerp(5.0, 1.25, 5.0, 99.0, 5.0), 1.25);
        assert_eq!(lerp(5.0, 1.25, 5.0, 99.0, 7.0), 1.25);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn degenerate_bracket_always_yields_y1(
            x1 in -1e9_f64..1e9,
            y1 in -1e9_f64..1e9,
            y2 in -1e9_f64..1e9,
        ) {
            prop_assert_eq!(lerp(x1, y1, x1, y2, x1), y1);
        }

        #[test]
        fn result_stays_between_bracket_values(
            x1 in -1e3_f64..1e3,
            dx in 1e-1_f64..1e3,
            y1 in -1e3_f64..1e3,
            y2 in -1e3_f64..1e3,
            t in 0.0_f64..1.0,
        ) {
            let x2 = x1 + dx;
            let x = x1 + t * dx;
            let y = lerp(x1, y1, x2, y2, x);
            let (lo, hi) = (y1.min(y2), y1.max(y2));
            // Slope/intercept form loses a few ulps near the bounds.
            let slack = 1e-6 * (1.0 + lo.abs().max(hi.abs()));
            prop_assert!(y >= lo - slack && y <= hi + slack);
        }
    }
}
