use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::GrowthError;

/// Biological sex used to select a reference distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            other => Err(GrowthError::invalid_input(
                "sex",
                format!("expected 'male' or 'female', got '{}'", other),
            )),
        }
    }
}

/// Anthropometric measurement with its own reference distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Measurement {
    /// Length or stature in cm
    Height,
    /// Body weight in kg
    Weight,
    /// Body-mass index in kg/m²
    Bmi,
}

impl Measurement {
    pub const ALL: [Measurement; 3] = [Measurement::Height, Measurement::Weight, Measurement::Bmi];

    pub fn as_str(&self) -> &'static str {
        match self {
            Measurement::Height => "height",
            Measurement::Weight => "weight",
            Measurement::Bmi => "bmi",
        }
    }

    /// Unit the measurement is expressed in
    pub fn unit(&self) -> &'static str {
        match self {
            Measurement::Height => "cm",
            Measurement::Weight => "kg",
            Measurement::Bmi => "kg/m²",
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Measurement {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "height" | "length" => Ok(Measurement::Height),
            "weight" => Ok(Measurement::Weight),
            "bmi" => Ok(Measurement::Bmi),
            other => Err(GrowthError::invalid_input(
                "measurement",
                format!("expected 'height', 'weight' or 'bmi', got '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sex() {
        assert_eq!("male".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!(" Female ".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!("F".parse::<Sex>().unwrap(), Sex::Female);
        assert!("other".parse::<Sex>().unwrap_err().is_input_error());
    }

    #[test]
    fn test_parse_measurement() {
        assert_eq!("BMI".parse::<Measurement>().unwrap(), Measurement::Bmi);
        assert_eq!("length".parse::<Measurement>().unwrap(), Measurement::Height);
        let err = "waist".parse::<Measurement>().unwrap_err();
        assert!(matches!(err, GrowthError::InvalidInput { ref field, .. } if field == "measurement"));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Sex::Male).unwrap(), "\"male\"");
        let m: Measurement = serde_json::from_str("\"weight\"").unwrap();
        assert_eq!(m, Measurement::Weight);
    }
}
