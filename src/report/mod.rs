//! Growth evaluation of a subject
//!
//! This is the crate's main entry point. A [`GrowthCalculator`] (or the
//! [`Growth`] extension trait on [`Subject`](crate::Subject)) turns a subject
//! into a [`GrowthReport`] holding:
//!
//! - age in days, months and years
//! - height, weight and BMI with their Z-scores and categories
//! - the mid-parental target range, when both parental heights are known
//! - one [`GrowthChart`] per measurement with reference lines for Z = -3..3,
//!   the target band on the height chart, and the subject's own point
//!
//! The report's `Display` renders the plain-text summary; `to_json` exports
//! the whole structure for a chart renderer.
//!
//! ```rust,ignore
//! use anthropometry::prelude::*;
//!
//! let subject = Subject::builder(Sex::Male)
//!     .born(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
//!     .evaluated(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap())
//!     .weight_kg(14.0)
//!     .height_cm(95.0)
//!     .parents(170.0, 160.0)
//!     .build();
//!
//! let report = subject.growth(&reference, &GrowthOptions::default())?;
//! println!("{}", report);
//! ```

mod evaluate;
mod options;
mod results;
mod traits;


pub use evaluate::GrowthCalculator;
pub use options::GrowthOptions;
pub use results::{ChartAxis, GrowthChart, GrowthReport, MeasurementScore};
pub use traits::Growth;
