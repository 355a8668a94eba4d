//! Growth reference statistics for children and adolescents
//!
//! `anthropometry` scores height, weight and BMI against age-indexed LMS
//! reference tables (the WHO 0–5 and 5–19 year standards use this form),
//! classifies the scores into clinical categories, derives a mid-parental
//! target height range, and produces reference curve series for growth charts.
//!
//! The crate is split the same way the computation flows:
//!
//! - [`reference`]: immutable LMS tables, loading, and interpolation by age
//! - [`score`]: Box-Cox Z-scores, the inverse transform, target range, curves
//! - [`classify`]: band tables from Z-score (or adult BMI) to category
//! - [`report`]: evaluation of a [`Subject`] into a [`GrowthReport`]

pub mod classify;
pub mod data;
pub mod error;
pub mod reference;
pub mod report;
pub mod score;

pub use crate::classify::{classify, BmiBands, Category};
pub use crate::data::*;
pub use crate::reference::{
    AgeDomain, Knot, KnotSeries, Lms, ReferenceError, ReferenceSet, ReferenceStore,
    ReferenceTable,
};
pub use crate::report::{
    Growth, GrowthCalculator, GrowthChart, GrowthOptions, GrowthReport, MeasurementScore,
};
pub use crate::score::{value_at_z, z_score, TargetRange};
pub use chrono::NaiveDate;
pub use error::GrowthError;

pub mod prelude {
    pub use crate::classify::{classify, Category};
    pub use crate::data::{Age, Measurement, Sex, Subject};
    pub use crate::error::GrowthError;
    pub use crate::reference::{Lms, ReferenceSet, ReferenceStore, ReferenceTable};
    pub use crate::report::{Growth, GrowthCalculator, GrowthOptions, GrowthReport};
    pub use crate::score::{value_at_z, z_score, TargetRange};
    pub use chrono::NaiveDate;
}
