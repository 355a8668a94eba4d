use serde::{Deserialize, Serialize};

use crate::data::Measurement;
use crate::reference::ADULT_REFERENCE_MONTHS;

/// Growth evaluation configuration
///
/// Controls how finely reference curves are sampled, how far each chart
/// extends, and how the BMI line of the text report is rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthOptions {
    /// Age step between curve points, in months (default: 1.0)
    pub curve_step_months: f64,

    /// Upper age of the height chart, in months (default: 228)
    pub height_chart_months: f64,

    /// Upper age of the weight chart, in months (default: 120)
    ///
    /// Weight-for-age references stop at 10 years.
    pub weight_chart_months: f64,

    /// Upper age of the BMI chart, in months (default: 228)
    pub bmi_chart_months: f64,

    /// Largest |Z| printed on the BMI line of the text report (default: 3.0)
    ///
    /// Beyond this the report shows only the category. Adults never get a
    /// BMI Z-score in the text report.
    pub bmi_z_display_limit: f64,

    /// Whether to compute chart series (default: true)
    pub include_charts: bool,
}

impl Default for GrowthOptions {
    fn default() -> Self {
        Self {
            curve_step_months: 1.0,
            height_chart_months: ADULT_REFERENCE_MONTHS,
            weight_chart_months: 120.0,
            bmi_chart_months: ADULT_REFERENCE_MONTHS,
            bmi_z_display_limit: 3.0,
            include_charts: true,
        }
    }
}

impl GrowthOptions {
    /// Quarter-month curve resolution for large or printed charts
    pub fn high_resolution() -> Self {
        Self {
            curve_step_months: 0.25,
            ..Default::default()
        }
    }

    /// Scores and categories only, no chart series
    pub fn scores_only() -> Self {
        Self {
            include_charts: false,
            ..Default::default()
        }
    }

    /// Set the curve sampling step in months
    pub fn with_curve_step(mut self, months: f64) -> Self {
        self.curve_step_months = months;
        self
    }

    /// Set the upper age of one chart
    pub fn with_chart_months(mut self, measurement: Measurement, months: f64) -> Self {
        match measurement {
            Measurement::Height => self.height_chart_months = months,
            Measurement::Weight => self.weight_chart_months = months,
            Measurement::Bmi => self.bmi_chart_months = months,
        }
        self
    }

    /// Set the largest BMI |Z| shown in the text report
    pub fn with_bmi_z_display_limit(mut self, limit: f64) -> Self {
        self.bmi_z_display_limit = limit;
        self
    }

    pub fn with_charts(mut self, include: bool) -> Self {
        self.include_charts = include;
        self
    }

    /// Upper age of the chart for a measurement
    pub fn chart_months(&self, measurement: Measurement) -> f64 {
        match measurement {
            Measurement::Height => self.height_chart_months,
            Measurement::Weight => self.weight_chart_months,
            Measurement::Bmi => self.bmi_chart_months,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = GrowthOptions::default();
        assert_eq!(options.curve_step_months, 1.0);
        assert_eq!(options.chart_months(Measurement::Height), 228.0);
        assert_eq!(options.chart_months(Measurement::Weight), 120.0);
        assert_eq!(options.chart_months(Measurement::Bmi), 228.0);
        assert!(options.include_charts);
    }

    #[test]
    fn test_builders() {
        let options = GrowthOptions::high_resolution()
            .with_chart_months(Measurement::Weight, 60.0)
            .with_bmi_z_display_limit(5.0);
        assert_eq!(options.curve_step_months, 0.25);
        assert_eq!(options.weight_chart_months, 60.0);
        assert_eq!(options.bmi_z_display_limit, 5.0);
        assert!(!GrowthOptions::scores_only().include_charts);
    }

    #[test]
    fn test_partial_config() {
        let options: GrowthOptions =
            serde_json::from_str(r#"{ "curve_step_months": 0.5, "include_charts": false }"#).unwrap();
        assert_eq!(options.curve_step_months, 0.5);
        assert!(!options.include_charts);
        assert_eq!(options.weight_chart_months, 120.0);
    }
}
