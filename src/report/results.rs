//! Growth evaluation results

use serde::Serialize;
use std::fmt;

use crate::classify::Category;
use crate::data::{Age, Measurement, Sex};
use crate::reference::AgeDomain;
use crate::score::{ChartPoint, CurveSeries, TargetBand, TargetRange};

/// Score and category of one measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeasurementScore {
    pub measurement: Measurement,
    /// Measured value in the measurement's unit
    pub value: f64,
    /// Z-score, `None` when the reference could not score the value
    pub z: Option<f64>,
    pub category: Category,
}

impl MeasurementScore {
    pub fn is_scored(&self) -> bool {
        self.z.is_some()
    }
}

/// Axis extent and title for a chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartAxis {
    pub title: String,
    pub min: f64,
    pub max: f64,
}

impl ChartAxis {
    fn new(title: &str, min: f64, max: f64) -> Self {
        ChartAxis {
            title: title.to_string(),
            min,
            max,
        }
    }

    pub(crate) fn age(max_months: f64) -> Self {
        Self::new("Age (months)", 0.0, max_months)
    }

    pub(crate) fn value(measurement: Measurement) -> Self {
        match measurement {
            Measurement::Height => Self::new("Height (cm)", 40.0, 200.0),
            Measurement::Weight => Self::new("Weight (kg)", 2.0, 70.0),
            Measurement::Bmi => Self::new("BMI (kg/m²)", 10.0, 40.0),
        }
    }
}

/// Everything a renderer needs to draw one growth chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthChart {
    pub measurement: Measurement,
    pub x_axis: ChartAxis,
    pub y_axis: ChartAxis,
    /// Reference lines for Z = -3 through 3
    pub reference: Vec<CurveSeries>,
    /// Target height band, height chart only
    pub target_band: Option<TargetBand>,
    /// The subject's own measurement
    pub subject: ChartPoint,
}

/// Complete result of a growth evaluation
#[derive(Debug, Clone, Serialize)]
pub struct GrowthReport {
    pub sex: Sex,
    pub age: Age,
    /// Reference table the scores were read from
    pub domain: AgeDomain,
    pub height: MeasurementScore,
    pub weight: MeasurementScore,
    pub bmi: MeasurementScore,
    pub target: Option<TargetRange>,
    pub charts: Vec<GrowthChart>,
    #[serde(skip)]
    pub(crate) bmi_z_display_limit: f64,
}

impl GrowthReport {
    pub fn score(&self, measurement: Measurement) -> &MeasurementScore {
        match measurement {
            Measurement::Height => &self.height,
            Measurement::Weight => &self.weight,
            Measurement::Bmi => &self.bmi,
        }
    }

    pub fn chart(&self, measurement: Measurement) -> Option<&GrowthChart> {
        self.charts.iter().find(|c| c.measurement == measurement)
    }

    pub fn is_adult(&self) -> bool {
        self.age.years() >= crate::classify::ADULT_BMI_YEARS
    }

    /// Whether the text report prints the BMI Z-score
    pub fn shows_bmi_z(&self) -> bool {
        !self.is_adult()
            && self
                .bmi
                .z
                .is_some_and(|z| z.abs() <= self.bmi_z_display_limit)
    }

    /// Serialize the report, charts included, as JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn fmt_z(z: Option<f64>) -> String {
    z.map_or_else(|| "-".to_string(), |z| format!("{:.2}", z))
}

impl fmt::Display for GrowthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Age: {}", self.age)?;
        writeln!(
            f,
            "Height: {:.1} cm → Z = {} ({})",
            self.height.value,
            fmt_z(self.height.z),
            self.height.category
        )?;
        writeln!(
            f,
            "Weight: {:.1} kg → Z = {} ({})",
            self.weight.value,
            fmt_z(self.weight.z),
            self.weight.category
        )?;
        if self.shows_bmi_z() {
            write!(
                f,
                "BMI: {:.2} → Z = {} ({})",
                self.bmi.value,
                fmt_z(self.bmi.z),
                self.bmi.category
            )?;
        } else {
            write!(f, "BMI: {:.2} → {}", self.bmi.value, self.bmi.category)?;
        }
        if let Some(ref target) = self.target {
            write!(f, "\nTarget height: {}", target)?;
        }
        Ok(())
    }
}
