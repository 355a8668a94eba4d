//! Reference percentile curves for chart rendering
//!
//! Curves are swept over ages `0, step, 2·step, …, max` in months. Each age is
//! computed as `i · step` so long sweeps do not accumulate rounding error. The
//! sweep is deterministic; ages where the reference cannot be evaluated are
//! left out of the series.

use serde::{Deserialize, Serialize};

use crate::data::{Measurement, Sex};
use crate::reference::ReferenceSet;
use crate::score::{calc::value_at_z, target::TargetRange};

/// Integer Z-scores drawn as reference lines
pub const Z_LINES: [i32; 7] = [-3, -2, -1, 0, 1, 2, 3];

/// A point on a chart: age in months, measurement value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

/// A named line on a growth chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSeries {
    pub label: String,
    pub z: f64,
    pub points: Vec<ChartPoint>,
}

/// Lines following the target height Z-scores across the height chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetBand {
    pub lower: CurveSeries,
    pub upper: CurveSeries,
}

/// Most points a single sweep may produce
pub const MAX_SWEEP_POINTS: usize = 100_000;

/// Ages in months covered by a sweep
///
/// Empty when `step` is not a positive finite number, `max_months` is
/// negative, or the sweep would exceed [`MAX_SWEEP_POINTS`].
pub fn sweep_ages(max_months: f64, step: f64) -> Vec<f64> {
    if !(step.is_finite() && step > 0.0 && max_months.is_finite() && max_months >= 0.0) {
        log::warn!("Invalid curve sweep: max {} months, step {}", max_months, step);
        return Vec::new();
    }
    let intervals = (max_months / step + 1e-9).floor();
    if intervals >= MAX_SWEEP_POINTS as f64 {
        log::warn!(
            "Curve sweep of {} months at step {} exceeds {} points",
            max_months,
            step,
            MAX_SWEEP_POINTS
        );
        return Vec::new();
    }
    let steps = intervals as usize;
    (0..=steps).map(|i| i as f64 * step).collect()
}

/// Evaluate several Z-scores over a sweep, interpolating once per age
fn sweep(
    reference: &ReferenceSet,
    sex: Sex,
    measurement: Measurement,
    zs: &[f64],
    max_months: f64,
    step: f64,
) -> Vec<Vec<ChartPoint>> {
    let mut lines = vec![Vec::new(); zs.len()];
    for age in sweep_ages(max_months, step) {
        let lms = match reference.lms_at_months(sex, measurement, age) {
            Ok(lms) => lms,
            Err(e) => {
                log::debug!("Skipping {} curve point at {} months: {}", measurement, age, e);
                continue;
            }
        };
        for (line, &z) in lines.iter_mut().zip(zs) {
            if let Some(y) = value_at_z(&lms, z) {
                line.push(ChartPoint { x: age, y });
            }
        }
    }
    lines
}

/// One curve at an arbitrary Z-score
pub fn curve_at_z(
    reference: &ReferenceSet,
    sex: Sex,
    measurement: Measurement,
    z: f64,
    max_months: f64,
    step: f64,
) -> Vec<ChartPoint> {
    sweep(reference, sex, measurement, &[z], max_months, step)
        .pop()
        .unwrap_or_default()
}

/// Reference lines for Z = -3 through 3
pub fn reference_curves(
    reference: &ReferenceSet,
    sex: Sex,
    measurement: Measurement,
    max_months: f64,
    step: f64,
) -> Vec<CurveSeries> {
    let zs: Vec<f64> = Z_LINES.iter().map(|&z| z as f64).collect();
    sweep(reference, sex, measurement, &zs, max_months, step)
        .into_iter()
        .zip(Z_LINES)
        .map(|(points, z)| CurveSeries {
            label: format!("Z={}", z),
            z: z as f64,
            points,
        })
        .collect()
}

/// Height lines following the target range Z-scores
///
/// Returns `None` when the target has no defined Z band.
pub fn target_band(
    reference: &ReferenceSet,
    sex: Sex,
    target: &TargetRange,
    max_months: f64,
    step: f64,
) -> Option<TargetBand> {
    let (z_lower, z_upper) = target.z_band()?;
    let mut lines = sweep(
        reference,
        sex,
        Measurement::Height,
        &[z_lower, z_upper],
        max_months,
        step,
    );
    let upper = lines.pop()?;
    let lower = lines.pop()?;
    Some(TargetBand {
        lower: CurveSeries {
            label: "Target lower".to_string(),
            z: z_lower,
            points: lower,
        },
        upper: CurveSeries {
            label: "Target upper".to_string(),
            z: z_upper,
            points: upper,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{AgeDomain, Knot, Lms, ReferenceTable};
    use approx::assert_relative_eq;

    fn reference() -> ReferenceSet {
        let mut infant = ReferenceTable::new(AgeDomain::Infant);
        infant
            .insert(
                Sex::Female,
                Measurement::Height,
                vec![
                    Knot::new(0.0, Lms::new(1.0, 50.0, 0.04)),
                    Knot::new(1826.25, Lms::new(1.0, 110.0, 0.04)),
                ],
            )
            .unwrap();
        let mut child = ReferenceTable::new(AgeDomain::Child);
        child
            .insert(
                Sex::Female,
                Measurement::Height,
                vec![
                    Knot::new(61.0, Lms::new(1.0, 110.0, 0.04)),
                    Knot::new(228.0, Lms::new(1.0, 163.0, 0.04)),
                ],
            )
            .unwrap();
        ReferenceSet::new(infant, child).unwrap()
    }

    #[test]
    fn test_sweep_ages() {
        assert_eq!(sweep_ages(3.0, 1.0), vec![0.0, 1.0, 2.0, 3.0]);
        let fine = sweep_ages(228.0, 0.25);
        assert_eq!(fine.len(), 913);
        assert_eq!(fine[fine.len() - 1], 228.0);
        assert_eq!(sweep_ages(0.0, 1.0), vec![0.0]);
        assert!(sweep_ages(10.0, 0.0).is_empty());
        assert!(sweep_ages(10.0, f64::NAN).is_empty());
    }

    #[test]
    fn test_sweep_point_cap() {
        assert!(sweep_ages(228.0, 1e-300).is_empty());
        assert!(sweep_ages(228.0, 1e-9).is_empty());
        assert!(sweep_ages(228.0, f64::MIN_POSITIVE).is_empty());
        // The largest sweep under the cap is still produced
        let ages = sweep_ages((MAX_SWEEP_POINTS - 1) as f64, 1.0);
        assert_eq!(ages.len(), MAX_SWEEP_POINTS);
        assert!(sweep_ages(MAX_SWEEP_POINTS as f64, 1.0).is_empty());
    }

    #[test]
    fn test_tiny_step_gives_empty_curves() {
        let curves = reference_curves(&reference(), Sex::Female, Measurement::Height, 228.0, 1e-300);
        assert_eq!(curves.len(), 7);
        assert!(curves.iter().all(|c| c.points.is_empty()));
    }

    #[test]
    fn test_reference_curves_shape() {
        let curves = reference_curves(&reference(), Sex::Female, Measurement::Height, 228.0, 1.0);
        assert_eq!(curves.len(), 7);
        assert_eq!(curves[0].label, "Z=-3");
        assert_eq!(curves[3].label, "Z=0");
        assert_eq!(curves[6].label, "Z=3");
        for curve in &curves {
            assert_eq!(curve.points.len(), 229);
        }
        // Median line follows M
        assert_relative_eq!(curves[3].points[0].y, 50.0);
        assert_relative_eq!(curves[3].points[228].y, 163.0);
        // Lines are ordered at every age
        for i in 0..229 {
            for pair in curves.windows(2) {
                assert!(pair[0].points[i].y < pair[1].points[i].y);
            }
        }
    }

    #[test]
    fn test_curves_are_reproducible() {
        let reference = reference();
        let a = reference_curves(&reference, Sex::Female, Measurement::Height, 120.0, 0.25);
        let b = reference_curves(&reference, Sex::Female, Measurement::Height, 120.0, 0.25);
        assert_eq!(a, b);
    }

    #[test]
    fn test_missing_reference_gives_empty_lines() {
        let curves = reference_curves(&reference(), Sex::Male, Measurement::Weight, 120.0, 1.0);
        assert_eq!(curves.len(), 7);
        assert!(curves.iter().all(|c| c.points.is_empty()));
    }

    #[test]
    fn test_target_band() {
        let reference = reference();
        let adult = reference.adult_height(Sex::Female).unwrap();
        let target = TargetRange::from_parents(Sex::Female, 178.0, 161.0)
            .unwrap()
            .with_reference(&adult);
        let band = target_band(&reference, Sex::Female, &target, 228.0, 1.0).unwrap();
        assert_eq!(band.lower.points.len(), 229);
        assert_relative_eq!(band.lower.points[228].y, target.min, epsilon = 1e-9);
        assert_relative_eq!(band.upper.points[228].y, target.max, epsilon = 1e-9);
        assert!(band.lower.points[12].y < band.upper.points[12].y);
    }

    #[test]
    fn test_target_band_needs_z() {
        let target = TargetRange::from_parents(Sex::Female, 178.0, 161.0).unwrap();
        assert!(target_band(&reference(), Sex::Female, &target, 228.0, 1.0).is_none());
    }

    #[test]
    fn test_single_curve() {
        let points = curve_at_z(&reference(), Sex::Female, Measurement::Height, 2.0, 24.0, 1.0);
        assert_eq!(points.len(), 25);
        assert_relative_eq!(points[0].y, 50.0 * 1.08, epsilon = 1e-9);
    }
}
