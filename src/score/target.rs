//! Mid-parental target height

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::data::Sex;
use crate::reference::Lms;
use crate::score::calc::z_score;

/// Offset applied to the sum of parental heights, in cm
pub const SEX_OFFSET_CM: f64 = 13.0;

/// Half width of the target range around the mid-parental height, in cm
pub const TARGET_HALF_WIDTH_CM: f64 = 6.5;

/// Expected adult height range from parental heights
///
/// The Z-scores are taken against the adult (228-month) height reference and
/// stay `None` when that reference is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetRange {
    pub min: f64,
    pub median: f64,
    pub max: f64,
    pub z_min: Option<f64>,
    pub z_median: Option<f64>,
    pub z_max: Option<f64>,
}

impl TargetRange {
    /// Target range in cm from the father's and mother's heights
    ///
    /// Returns `None` if either height is not finite.
    pub fn from_parents(sex: Sex, father_cm: f64, mother_cm: f64) -> Option<Self> {
        if !father_cm.is_finite() || !mother_cm.is_finite() {
            return None;
        }
        let median = match sex {
            Sex::Male => (father_cm + mother_cm + SEX_OFFSET_CM) / 2.0,
            Sex::Female => (father_cm + mother_cm - SEX_OFFSET_CM) / 2.0,
        };
        Some(TargetRange {
            min: median - TARGET_HALF_WIDTH_CM,
            median,
            max: median + TARGET_HALF_WIDTH_CM,
            z_min: None,
            z_median: None,
            z_max: None,
        })
    }

    /// Attach Z-scores against the adult height reference
    pub fn with_reference(mut self, adult: &Lms) -> Self {
        self.z_min = z_score(self.min, adult);
        self.z_median = z_score(self.median, adult);
        self.z_max = z_score(self.max, adult);
        self
    }

    /// Z-scores of the band edges, if both are defined
    pub fn z_band(&self) -> Option<(f64, f64)> {
        Some((self.z_min?, self.z_max?))
    }
}

fn fmt_z(z: Option<f64>) -> String {
    z.map_or_else(|| "-".to_string(), |z| format!("{:.2}", z))
}

impl fmt::Display for TargetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1} cm ({:.1}–{:.1} cm) → Z = {} [{} to {}]",
            self.median,
            self.min,
            self.max,
            fmt_z(self.z_median),
            fmt_z(self.z_min),
            fmt_z(self.z_max)
        )
    }
}
