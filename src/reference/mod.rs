//! LMS growth reference tables
//!
//! A reference distribution is described at each age by three parameters:
//!
//! | Parameter | Meaning |
//! |-----------|---------|
//! | L | Box-Cox power |
//! | M | Median |
//! | S | Coefficient of variation |
//!
//! Two tables make up a complete [`ReferenceSet`]:
//!
//! - the **infant** table, keyed by age in days, covering birth to 60 months
//! - the **child** table, keyed by age in months, covering 60 to 228 months
//!
//! The switch between them at 60 months is hard: an age of exactly 60 months
//! is read from the infant table (in days), anything above from the child
//! table (in months). The two tables are never blended.
//!
//! Tables are validated when built and immutable afterwards. A process that
//! loads its reference data at startup can publish it through a
//! [`ReferenceStore`], which reports [`GrowthError::DataNotLoaded`] until the
//! data is installed.
//!
//! ```rust,ignore
//! use anthropometry::prelude::*;
//!
//! let reference = ReferenceSet::from_json_files("data/lms_0_5.json", "data/lms_5_19.json")?;
//! let lms = reference.lms_at_months(Sex::Female, Measurement::Height, 36.0)?;
//! println!("Median height at 3 years: {:.1} cm", lms.m);
//! ```

mod error;
pub mod interpolate;
mod parse;

use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fmt,
    sync::{Arc, OnceLock},
};

use crate::data::{Age, Measurement, Sex};
use crate::error::GrowthError;

pub use error::ReferenceError;
pub use interpolate::interpolate;

/// Upper age bound of the infant table, in months (inclusive)
pub const INFANT_MAX_MONTHS: f64 = 60.0;

/// Age of the adult reference used for target height, in months
pub const ADULT_REFERENCE_MONTHS: f64 = 228.0;

/// LMS parameters of the reference distribution at one age
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lms {
    #[serde(rename = "L", alias = "l")]
    pub l: f64,
    #[serde(rename = "M", alias = "m")]
    pub m: f64,
    #[serde(rename = "S", alias = "s")]
    pub s: f64,
}

impl Lms {
    pub fn new(l: f64, m: f64, s: f64) -> Self {
        Lms { l, m, s }
    }

    fn is_finite(&self) -> bool {
        self.l.is_finite() && self.m.is_finite() && self.s.is_finite()
    }
}

/// A single age-indexed entry of a reference series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Knot {
    /// Age key, in the unit of the owning table's [AgeDomain]
    pub age: f64,
    pub lms: Lms,
}

impl Knot {
    pub fn new(age: f64, lms: Lms) -> Self {
        Knot { age, lms }
    }
}

/// A validated, age-ordered sequence of knots
///
/// Keys are finite and strictly increasing, there are at least two knots, and
/// every L, M and S is finite.
#[derive(Debug, Clone, PartialEq)]
pub struct KnotSeries {
    knots: Vec<Knot>,
}

impl KnotSeries {
    /// Sort and validate knots
    ///
    /// Fails with [`ReferenceError::InvalidSeries`] naming the violated rule.
    pub fn new(mut knots: Vec<Knot>) -> Result<Self, ReferenceError> {
        if knots.len() < 2 {
            return Err(ReferenceError::invalid_series(format!(
                "at least 2 knots are required, got {}",
                knots.len()
            )));
        }
        if let Some(knot) = knots.iter().find(|k| !k.age.is_finite()) {
            return Err(ReferenceError::invalid_series(format!(
                "age key {} is not finite",
                knot.age
            )));
        }
        if let Some(knot) = knots.iter().find(|k| !k.lms.is_finite()) {
            return Err(ReferenceError::invalid_series(format!(
                "non-finite LMS at age {}",
                knot.age
            )));
        }
        knots.sort_by(|a, b| a.age.total_cmp(&b.age));
        if let Some(pair) = knots.windows(2).find(|pair| pair[0].age >= pair[1].age) {
            return Err(ReferenceError::invalid_series(format!(
                "duplicate age key {}",
                pair[1].age
            )));
        }
        Ok(KnotSeries { knots })
    }

    pub fn knots(&self) -> &[Knot] {
        &self.knots
    }

    /// Age range covered by the series
    pub fn span(&self) -> (f64, f64) {
        (self.knots[0].age, self.knots[self.knots.len() - 1].age)
    }

    #[inline]
    pub fn interpolate(&self, age: f64) -> Result<Lms, ReferenceError> {
        interpolate(age, &self.knots)
    }
}

/// Which of the two reference tables an age belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeDomain {
    /// Birth to 60 months, keyed in days
    Infant,
    /// Above 60 months, keyed in months
    Child,
}

impl AgeDomain {
    /// Domain for an age in months
    #[inline]
    pub fn for_months(months: f64) -> Self {
        if months <= INFANT_MAX_MONTHS {
            AgeDomain::Infant
        } else {
            AgeDomain::Child
        }
    }

    /// Table key for the given age
    #[inline]
    pub fn key(&self, age: &Age) -> f64 {
        match self {
            AgeDomain::Infant => age.days(),
            AgeDomain::Child => age.months(),
        }
    }

    pub fn key_unit(&self) -> &'static str {
        match self {
            AgeDomain::Infant => "days",
            AgeDomain::Child => "months",
        }
    }
}

impl fmt::Display for AgeDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgeDomain::Infant => write!(f, "infant (0-60 months)"),
            AgeDomain::Child => write!(f, "child (60-228 months)"),
        }
    }
}

/// Knot series for every sex and measurement in one age domain
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    domain: AgeDomain,
    series: BTreeMap<(Sex, Measurement), KnotSeries>,
}

impl ReferenceTable {
    pub fn new(domain: AgeDomain) -> Self {
        ReferenceTable {
            domain,
            series: BTreeMap::new(),
        }
    }

    /// Add the series for a sex and measurement, replacing any previous one
    pub fn insert(
        &mut self,
        sex: Sex,
        measurement: Measurement,
        knots: Vec<Knot>,
    ) -> Result<(), ReferenceError> {
        let series = KnotSeries::new(knots).map_err(|e| match e {
            ReferenceError::InvalidSeries { reason } => {
                ReferenceError::malformed(sex, measurement, reason)
            }
            other => other,
        })?;
        self.series.insert((sex, measurement), series);
        Ok(())
    }

    /// Knot series for a sex and measurement
    pub fn lookup(&self, sex: Sex, measurement: Measurement) -> Result<&KnotSeries, ReferenceError> {
        self.series
            .get(&(sex, measurement))
            .ok_or(ReferenceError::Unavailable {
                sex,
                measurement,
                domain: self.domain,
            })
    }

    pub fn domain(&self) -> AgeDomain {
        self.domain
    }

    /// Number of series in the table
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Total number of knots over all series
    pub fn knot_count(&self) -> usize {
        self.series.values().map(|s| s.knots().len()).sum()
    }
}

/// The infant and child reference tables together
#[derive(Debug, Clone)]
pub struct ReferenceSet {
    infant: ReferenceTable,
    child: ReferenceTable,
}

impl ReferenceSet {
    pub fn new(infant: ReferenceTable, child: ReferenceTable) -> Result<Self, ReferenceError> {
        for (table, expected) in [(&infant, AgeDomain::Infant), (&child, AgeDomain::Child)] {
            if table.domain != expected {
                return Err(ReferenceError::DomainMismatch {
                    expected,
                    found: table.domain,
                });
            }
        }
        Ok(ReferenceSet { infant, child })
    }

    pub fn table(&self, domain: AgeDomain) -> &ReferenceTable {
        match domain {
            AgeDomain::Infant => &self.infant,
            AgeDomain::Child => &self.child,
        }
    }

    /// LMS parameters at an exact age
    ///
    /// The table is chosen by [`AgeDomain::for_months`] and queried with the
    /// age in that table's unit.
    pub fn lms(&self, sex: Sex, measurement: Measurement, age: &Age) -> Result<Lms, ReferenceError> {
        let domain = AgeDomain::for_months(age.months());
        self.table(domain)
            .lookup(sex, measurement)?
            .interpolate(domain.key(age))
    }

    /// LMS parameters at an age in months, with days derived at 30.4375 per month
    pub fn lms_at_months(
        &self,
        sex: Sex,
        measurement: Measurement,
        months: f64,
    ) -> Result<Lms, ReferenceError> {
        self.lms(sex, measurement, &Age::from_months(months))
    }

    /// Adult height reference used for target height Z-scores
    pub fn adult_height(&self, sex: Sex) -> Result<Lms, ReferenceError> {
        self.lms_at_months(sex, Measurement::Height, ADULT_REFERENCE_MONTHS)
    }
}

/// Write-once holder for reference data loaded at startup
///
/// Reads fail with [`GrowthError::DataNotLoaded`] until [`ReferenceStore::install`]
/// has been called; after that the data never changes.
#[derive(Debug, Default)]
pub struct ReferenceStore {
    inner: OnceLock<Arc<ReferenceSet>>,
}

impl ReferenceStore {
    pub const fn new() -> Self {
        ReferenceStore {
            inner: OnceLock::new(),
        }
    }

    /// Publish the reference data
    pub fn install(&self, reference: ReferenceSet) -> Result<Arc<ReferenceSet>, GrowthError> {
        let reference = Arc::new(reference);
        self.inner
            .set(Arc::clone(&reference))
            .map_err(|_| GrowthError::AlreadyLoaded)?;
        log::info!("Reference data installed");
        Ok(reference)
    }

    pub fn get(&self) -> Result<Arc<ReferenceSet>, GrowthError> {
        self.inner.get().cloned().ok_or(GrowthError::DataNotLoaded)
    }

    pub fn is_loaded(&self) -> bool {
        self.inner.get().is_some()
    }
}
