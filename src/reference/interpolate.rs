//! Piecewise-linear interpolation of LMS parameters between age knots

use crate::reference::{Knot, Lms, ReferenceError};

impl Lms {
    /// Linear blend towards `other`, each parameter independently
    #[inline]
    fn lerp(&self, other: &Lms, fraction: f64) -> Lms {
        Lms {
            l: self.l + (other.l - self.l) * fraction,
            m: self.m + (other.m - self.m) * fraction,
            s: self.s + (other.s - self.s) * fraction,
        }
    }
}

/// Interpolate the LMS parameters at `age` over age-ordered knots
///
/// Ages at or before the first knot return the first knot unchanged, ages at
/// or after the last knot return the last knot unchanged. Between knots each
/// of L, M and S is interpolated linearly on the bracketing pair. An age that
/// falls exactly on an interior knot returns that knot's values exactly.
///
/// # Errors
///
/// * [`ReferenceError::NoData`] if `knots` is empty
/// * [`ReferenceError::NoBracket`] if no adjacent pair brackets `age`, which
///   only happens for a NaN age or corrupt (NaN) keys
pub fn interpolate(age: f64, knots: &[Knot]) -> Result<Lms, ReferenceError> {
    let (first, last) = match (knots.first(), knots.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(ReferenceError::NoData),
    };

    if age <= first.age {
        return Ok(first.lms);
    }
    if age >= last.age {
        return Ok(last.lms);
    }

    knots
        .windows(2)
        .find(|pair| pair[0].age <= age && age < pair[1].age)
        .map(|pair| {
            let fraction = (age - pair[0].age) / (pair[1].age - pair[0].age);
            pair[0].lms.lerp(&pair[1].lms, fraction)
        })
        .ok_or(ReferenceError::NoBracket { age })
}
