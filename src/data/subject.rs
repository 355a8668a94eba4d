use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::data::{Age, Sex};
use crate::error::GrowthError;

/// The person being evaluated
///
/// A [Subject] is a transient calculation request. It holds the raw inputs as
/// supplied by the caller; nothing is validated until [Subject::measures] or
/// [Subject::age] is called. Use [Subject::builder] to construct one.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Subject {
    pub(crate) sex: Sex,
    pub(crate) birth_date: Option<NaiveDate>,
    pub(crate) evaluation_date: Option<NaiveDate>,
    pub(crate) weight_kg: Option<f64>,
    pub(crate) height_cm: Option<f64>,
    pub(crate) father_height_cm: Option<f64>,
    pub(crate) mother_height_cm: Option<f64>,
}

/// Weight and height that passed validation, with the derived BMI
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measures {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub bmi: f64,
}

impl Subject {
    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    /// Evaluation date, falling back to today's local date
    pub fn evaluation_date(&self) -> NaiveDate {
        self.evaluation_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn weight_kg(&self) -> Option<f64> {
        self.weight_kg
    }

    pub fn height_cm(&self) -> Option<f64> {
        self.height_cm
    }

    /// Both parental heights, if both are present and finite
    pub fn parental_heights(&self) -> Option<(f64, f64)> {
        match (self.father_height_cm, self.mother_height_cm) {
            (Some(father), Some(mother)) if father.is_finite() && mother.is_finite() => {
                Some((father, mother))
            }
            _ => None,
        }
    }

    /// Age at the evaluation date
    pub fn age(&self) -> Result<Age, GrowthError> {
        let birth = self
            .birth_date
            .ok_or_else(|| GrowthError::invalid_input("birth_date", "birth date is required"))?;
        Age::between(birth, self.evaluation_date())
    }

    /// Validated weight and height together with the BMI
    pub fn measures(&self) -> Result<Measures, GrowthError> {
        let weight_kg = required_positive("weight_kg", self.weight_kg)?;
        let height_cm = required_positive("height_cm", self.height_cm)?;
        Ok(Measures {
            weight_kg,
            height_cm,
            bmi: bmi(weight_kg, height_cm),
        })
    }
}

/// Body-mass index from weight in kg and height in cm
#[inline]
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

fn required_positive(field: &str, value: Option<f64>) -> Result<f64, GrowthError> {
    match value {
        None => Err(GrowthError::invalid_input(field, "value is required")),
        Some(v) if !v.is_finite() => Err(GrowthError::invalid_input(field, "value is not a number")),
        Some(v) if v <= 0.0 => Err(GrowthError::invalid_input(
            field,
            format!("value must be positive, got {}", v),
        )),
        Some(v) => Ok(v),
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let opt = |v: Option<f64>| v.map_or("-".to_string(), |v| format!("{:.1}", v));
        writeln!(f, "Subject ({})", self.sex)?;
        match self.birth_date {
            Some(date) => writeln!(f, "  Born: {}", date)?,
            None => writeln!(f, "  Born: -")?,
        }
        writeln!(f, "  Evaluated: {}", self.evaluation_date())?;
        writeln!(f, "  Weight: {} kg", opt(self.weight_kg))?;
        writeln!(f, "  Height: {} cm", opt(self.height_cm))?;
        write!(
            f,
            "  Parents: {} / {} cm",
            opt(self.father_height_cm),
            opt(self.mother_height_cm)
        )
    }
}
