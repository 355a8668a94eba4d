//! Clinical classification of Z-scores
//!
//! Each measurement has an ordered band table. The first band whose upper
//! bound admits the value wins; the last band of every table is unbounded, so
//! the tables cover the whole real line without gaps or overlaps.
//!
//! | Measurement | Age | Classified on |
//! |-------------|-----|---------------|
//! | height | any | Z-score |
//! | weight | any | Z-score |
//! | BMI | ≥ 19 years, absolute BMI given | absolute BMI (adult cut-offs) |
//! | BMI | ≤ 60 months | Z-score (pediatric bands) |
//! | BMI | otherwise | Z-score (adolescent bands) |

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::data::Measurement;
use crate::reference::INFANT_MAX_MONTHS;

/// Age from which BMI is classified on adult cut-offs, in years
pub const ADULT_BMI_YEARS: f64 = 19.0;

/// Clinical category of a measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// No score was available
    Undetermined,
    VeryShortStature,
    ShortStature,
    AdequateStature,
    VeryLowWeight,
    LowWeight,
    AdequateWeight,
    ElevatedWeight,
    SevereWasting,
    Wasting,
    Underweight,
    Normal,
    OverweightRisk,
    Overweight,
    Obesity,
    ObesityGrade1,
    ObesityGrade2,
    ObesityGrade3,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Undetermined => "-",
            Category::VeryShortStature => "very short stature",
            Category::ShortStature => "short stature",
            Category::AdequateStature => "adequate stature",
            Category::VeryLowWeight => "very low weight",
            Category::LowWeight => "low weight",
            Category::AdequateWeight => "adequate weight",
            Category::ElevatedWeight => "elevated weight",
            Category::SevereWasting => "severe wasting",
            Category::Wasting => "wasting",
            Category::Underweight => "underweight",
            Category::Normal => "normal",
            Category::OverweightRisk => "overweight risk",
            Category::Overweight => "overweight",
            Category::Obesity => "obesity",
            Category::ObesityGrade1 => "obesity grade I",
            Category::ObesityGrade2 => "obesity grade II",
            Category::ObesityGrade3 => "obesity grade III",
        }
    }

    pub fn is_determined(&self) -> bool {
        *self != Category::Undetermined
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy)]
enum Upper {
    Below(f64),
    AtMost(f64),
    Unbounded,
}

#[derive(Debug, Clone, Copy)]
struct Band {
    upper: Upper,
    category: Category,
}

impl Band {
    const fn below(bound: f64, category: Category) -> Self {
        Band {
            upper: Upper::Below(bound),
            category,
        }
    }

    const fn at_most(bound: f64, category: Category) -> Self {
        Band {
            upper: Upper::AtMost(bound),
            category,
        }
    }

    const fn rest(category: Category) -> Self {
        Band {
            upper: Upper::Unbounded,
            category,
        }
    }

    #[inline]
    fn admits(&self, value: f64) -> bool {
        match self.upper {
            Upper::Below(bound) => value < bound,
            Upper::AtMost(bound) => value <= bound,
            Upper::Unbounded => true,
        }
    }
}

const HEIGHT_BANDS: &[Band] = &[
    Band::below(-3.0, Category::VeryShortStature),
    Band::below(-2.0, Category::ShortStature),
    Band::rest(Category::AdequateStature),
];

const WEIGHT_BANDS: &[Band] = &[
    Band::below(-3.0, Category::VeryLowWeight),
    Band::below(-2.0, Category::LowWeight),
    Band::at_most(2.0, Category::AdequateWeight),
    Band::rest(Category::ElevatedWeight),
];

const ADULT_BMI_BANDS: &[Band] = &[
    Band::below(18.5, Category::Underweight),
    Band::below(25.0, Category::Normal),
    Band::below(30.0, Category::Overweight),
    Band::below(35.0, Category::ObesityGrade1),
    Band::below(40.0, Category::ObesityGrade2),
    Band::rest(Category::ObesityGrade3),
];

const PEDIATRIC_BMI_BANDS: &[Band] = &[
    Band::below(-3.0, Category::SevereWasting),
    Band::below(-2.0, Category::Wasting),
    Band::at_most(1.0, Category::Normal),
    Band::at_most(2.0, Category::OverweightRisk),
    Band::rest(Category::Obesity),
];

const ADOLESCENT_BMI_BANDS: &[Band] = &[
    Band::below(-3.0, Category::SevereWasting),
    Band::below(-2.0, Category::Wasting),
    Band::at_most(1.0, Category::Normal),
    Band::at_most(2.0, Category::Overweight),
    Band::at_most(3.0, Category::ObesityGrade1),
    Band::at_most(4.0, Category::ObesityGrade2),
    Band::rest(Category::ObesityGrade3),
];

/// Which band table classifies a BMI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiBands {
    /// Absolute BMI cut-offs from 19 years
    Adult,
    /// Z-score bands up to 60 months
    Pediatric,
    /// Z-score bands above 60 months
    Adolescent,
}

impl BmiBands {
    pub fn select(age_months: f64, has_absolute: bool) -> Self {
        if age_months / 12.0 >= ADULT_BMI_YEARS && has_absolute {
            BmiBands::Adult
        } else if age_months <= INFANT_MAX_MONTHS {
            BmiBands::Pediatric
        } else {
            BmiBands::Adolescent
        }
    }

    fn table(&self) -> &'static [Band] {
        match self {
            BmiBands::Adult => ADULT_BMI_BANDS,
            BmiBands::Pediatric => PEDIATRIC_BMI_BANDS,
            BmiBands::Adolescent => ADOLESCENT_BMI_BANDS,
        }
    }
}

#[inline]
fn lookup(value: Option<f64>, bands: &[Band]) -> Category {
    value
        .filter(|v| !v.is_nan())
        .and_then(|v| bands.iter().find(|band| band.admits(v)))
        .map_or(Category::Undetermined, |band| band.category)
}

/// Classify a measurement
///
/// * `z` - Z-score of the measurement, `None` if undefined
/// * `age_months` - age of the subject in months
/// * `absolute` - raw measurement value, only used for adult BMI
///
/// An undefined Z-score yields [`Category::Undetermined`] in every Z-based
/// branch. The adult BMI branch ignores `z`.
pub fn classify(
    z: Option<f64>,
    measurement: Measurement,
    age_months: f64,
    absolute: Option<f64>,
) -> Category {
    match measurement {
        Measurement::Height => lookup(z, HEIGHT_BANDS),
        Measurement::Weight => lookup(z, WEIGHT_BANDS),
        Measurement::Bmi => match BmiBands::select(age_months, absolute.is_some()) {
            BmiBands::Adult => lookup(absolute, ADULT_BMI_BANDS),
            bands => lookup(z, bands.table()),
        },
    }
}
