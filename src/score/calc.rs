//! Box-Cox transforms between measurements and Z-scores
//!
//! Both directions use the limit form when L is numerically zero:
//!
//! ```text
//! z = ((x/M)^L - 1) / (L·S)        x = M·(1 + L·S·z)^(1/L)
//! z = ln(x/M) / S   (L → 0)        x = M·exp(S·z)    (L → 0)
//! ```

use crate::reference::Lms;

/// |L| below this uses the logarithmic limit form
pub const L_EPSILON: f64 = 1e-9;

#[inline]
fn usable(lms: &Lms) -> bool {
    lms.l.is_finite() && lms.m.is_finite() && lms.s.is_finite() && lms.m != 0.0 && lms.s != 0.0
}

#[inline]
fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Z-score of measurement `x` under the LMS distribution
///
/// Returns `None` when the score is undefined: M or S is zero, `x` is not
/// finite, or the transform has no real finite value (a fractional power of
/// a negative ratio, the log of a non-positive ratio).
#[inline]
pub fn z_score(x: f64, lms: &Lms) -> Option<f64> {
    if !usable(lms) || !x.is_finite() {
        return None;
    }
    let ratio = x / lms.m;
    if lms.l.abs() < L_EPSILON {
        finite(ratio.ln() / lms.s)
    } else {
        finite((ratio.powf(lms.l) - 1.0) / (lms.l * lms.s))
    }
}

/// Measurement value at Z-score `z` under the LMS distribution
///
/// Returns `None` when M or S is zero or the result is not a finite real.
#[inline]
pub fn value_at_z(lms: &Lms, z: f64) -> Option<f64> {
    if !usable(lms) || !z.is_finite() {
        return None;
    }
    if lms.l.abs() < L_EPSILON {
        finite(lms.m * (lms.s * z).exp())
    } else {
        finite(lms.m * (1.0 + lms.l * lms.s * z).powf(1.0 / lms.l))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_z_at_median_is_zero() {
        let lms = Lms::new(-0.35, 15.6, 0.08);
        assert_relative_eq!(z_score(15.6, &lms).unwrap(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(value_at_z(&lms, 0.0).unwrap(), 15.6, epsilon = 1e-12);
    }

    #[test]
    fn test_normal_case_l_one() {
        // L = 1 reduces to (x - M) / (M·S)
        let lms = Lms::new(1.0, 100.0, 0.04);
        assert_relative_eq!(z_score(108.0, &lms).unwrap(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(value_at_z(&lms, -2.0).unwrap(), 92.0, epsilon = 1e-12);
    }

    #[test]
    fn test_log_limit_when_l_is_zero() {
        let lms = Lms::new(0.0, 10.0, 0.1);
        let x = 10.0 * (0.1_f64 * 1.5).exp();
        assert_relative_eq!(z_score(x, &lms).unwrap(), 1.5, epsilon = 1e-12);
        assert_relative_eq!(value_at_z(&lms, 1.5).unwrap(), x, epsilon = 1e-12);
    }

    #[test]
    fn test_tiny_l_matches_limit() {
        let zero = Lms::new(0.0, 12.0, 0.11);
        let tiny = Lms::new(5e-10, 12.0, 0.11);
        let small = Lms::new(1e-6, 12.0, 0.11);
        for z in [-3.0, -1.0, 0.5, 2.5] {
            let expected = value_at_z(&zero, z).unwrap();
            assert_eq!(value_at_z(&tiny, z).unwrap(), expected);
            assert_relative_eq!(value_at_z(&small, z).unwrap(), expected, max_relative = 1e-5);
            assert_eq!(z_score(expected, &tiny), z_score(expected, &zero));
        }
    }

    #[test]
    fn test_undefined_scores() {
        assert_eq!(z_score(10.0, &Lms::new(1.0, 0.0, 0.1)), None);
        assert_eq!(z_score(10.0, &Lms::new(1.0, 10.0, 0.0)), None);
        assert_eq!(z_score(f64::NAN, &Lms::new(1.0, 10.0, 0.1)), None);
        // Fractional power of a negative ratio
        assert_eq!(z_score(-5.0, &Lms::new(0.5, 10.0, 0.1)), None);
        // Log of a non-positive ratio
        assert_eq!(z_score(0.0, &Lms::new(0.0, 10.0, 0.1)), None);
        assert_eq!(value_at_z(&Lms::new(1.0, 10.0, 0.0), 1.0), None);
        assert_eq!(value_at_z(&Lms::new(1.0, 10.0, 0.1), f64::INFINITY), None);
    }

    #[test]
    fn test_integer_power_of_negative_ratio() {
        // L = 1 is defined for any sign of x
        let lms = Lms::new(1.0, 10.0, 0.1);
        assert_relative_eq!(z_score(-10.0, &lms).unwrap(), -20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_inverse_out_of_support() {
        // 1 + L·S·z < 0 with fractional 1/L
        let lms = Lms::new(-2.5, 15.0, 0.12);
        assert_eq!(value_at_z(&lms, 4.0), None);
    }
}
