use crate::classify::classify;
use crate::data::{Age, Measurement, Measures, Sex, Subject};
use crate::error::GrowthError;
use crate::reference::{AgeDomain, ReferenceSet};
use crate::report::{ChartAxis, GrowthChart, GrowthOptions, GrowthReport, MeasurementScore};
use crate::score::{reference_curves, target_band, z_score, ChartPoint, TargetRange};

/// Evaluates subjects against a loaded reference set
#[derive(Debug, Clone)]
pub struct GrowthCalculator<'a> {
    reference: &'a ReferenceSet,
    options: GrowthOptions,
}

impl<'a> GrowthCalculator<'a> {
    pub fn new(reference: &'a ReferenceSet, options: GrowthOptions) -> Self {
        GrowthCalculator { reference, options }
    }

    pub fn options(&self) -> &GrowthOptions {
        &self.options
    }

    /// Score, classify and chart a subject
    ///
    /// The request is rejected before anything is computed if the birth date
    /// is missing, the evaluation precedes the birth, or weight or height is
    /// missing or not a positive number. Past that point nothing fails: a
    /// measurement the reference cannot score gets `z: None` and
    /// [`Category::Undetermined`](crate::Category::Undetermined), independently
    /// of the others.
    pub fn evaluate(&self, subject: &Subject) -> Result<GrowthReport, GrowthError> {
        let age = subject.age()?;
        let measures = subject.measures()?;
        let sex = subject.sex();
        let domain = AgeDomain::for_months(age.months());
        log::debug!(
            "Evaluating {} subject aged {:.0} days ({:.2} months) against the {} table",
            sex,
            age.days(),
            age.months(),
            domain
        );

        let target = subject
            .parental_heights()
            .and_then(|(father, mother)| self.target(sex, father, mother));

        let charts = if self.options.include_charts {
            self.charts(sex, &age, &measures, target.as_ref())
        } else {
            Vec::new()
        };

        Ok(GrowthReport {
            sex,
            age,
            domain,
            height: self.score(sex, &age, Measurement::Height, measures.height_cm),
            weight: self.score(sex, &age, Measurement::Weight, measures.weight_kg),
            bmi: self.score(sex, &age, Measurement::Bmi, measures.bmi),
            target,
            charts,
            bmi_z_display_limit: self.options.bmi_z_display_limit,
        })
    }

    /// Score and classify a single measurement
    pub fn score(&self, sex: Sex, age: &Age, measurement: Measurement, value: f64) -> MeasurementScore {
        let z = match self.reference.lms(sex, measurement, age) {
            Ok(lms) => z_score(value, &lms),
            Err(e) => {
                log::warn!("No {} score at {:.2} months: {}", measurement, age.months(), e);
                None
            }
        };
        if z.is_none() {
            log::debug!("{} of {} has no defined Z-score", measurement, value);
        }
        let absolute = (measurement == Measurement::Bmi).then_some(value);
        MeasurementScore {
            measurement,
            value,
            z,
            category: classify(z, measurement, age.months(), absolute),
        }
    }

    /// Mid-parental target range with Z-scores at the adult reference
    pub fn target(&self, sex: Sex, father_cm: f64, mother_cm: f64) -> Option<TargetRange> {
        let target = TargetRange::from_parents(sex, father_cm, mother_cm)?;
        match self.reference.adult_height(sex) {
            Ok(adult) => Some(target.with_reference(&adult)),
            Err(e) => {
                log::warn!("Target height has no Z-scores: {}", e);
                Some(target)
            }
        }
    }

    /// Chart series for one measurement
    pub fn chart(
        &self,
        sex: Sex,
        measurement: Measurement,
        subject: ChartPoint,
        target: Option<&TargetRange>,
    ) -> GrowthChart {
        let max_months = self.options.chart_months(measurement);
        let step = self.options.curve_step_months;
        let target_band = match (measurement, target) {
            (Measurement::Height, Some(target)) => {
                target_band(self.reference, sex, target, max_months, step)
            }
            _ => None,
        };
        GrowthChart {
            measurement,
            x_axis: ChartAxis::age(max_months),
            y_axis: ChartAxis::value(measurement),
            reference: reference_curves(self.reference, sex, measurement, max_months, step),
            target_band,
            subject,
        }
    }

    fn charts(
        &self,
        sex: Sex,
        age: &Age,
        measures: &Measures,
        target: Option<&TargetRange>,
    ) -> Vec<GrowthChart> {
        [
            (Measurement::Height, measures.height_cm),
            (Measurement::Weight, measures.weight_kg),
            (Measurement::Bmi, measures.bmi),
        ]
        .into_iter()
        .map(|(measurement, value)| {
            let point = ChartPoint {
                x: age.months(),
                y: value,
            };
            self.chart(sex, measurement, point, target)
        })
        .collect()
    }
}
