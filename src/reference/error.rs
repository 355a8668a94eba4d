//! Reference data error types

use thiserror::Error;

use crate::data::{Measurement, Sex};
use crate::reference::AgeDomain;

/// Errors raised while loading or querying LMS reference tables
#[derive(Error, Debug)]
pub enum ReferenceError {
    /// The knot sequence is empty
    #[error("No reference knots available for interpolation")]
    NoData,

    /// No adjacent pair of knots brackets the requested age
    #[error("No bracketing knots for age {age}; reference keys are not monotonic")]
    NoBracket { age: f64 },

    /// The table has no series for this sex and measurement
    #[error("No {measurement} reference for {sex} in the {domain} table")]
    Unavailable {
        sex: Sex,
        measurement: Measurement,
        domain: AgeDomain,
    },

    /// Knots cannot form a series
    #[error("Invalid knot series: {reason}")]
    InvalidSeries { reason: String },

    /// A series violates the table invariants
    #[error("Malformed {measurement} reference for {sex}: {reason}")]
    Malformed {
        sex: Sex,
        measurement: Measurement,
        reason: String,
    },

    /// A table was supplied for the wrong age domain
    #[error("Expected a {expected} table, got a {found} table")]
    DomainMismatch {
        expected: AgeDomain,
        found: AgeDomain,
    },

    /// An age key could not be read as a number
    #[error("Invalid age key '{0}'")]
    InvalidAgeKey(String),

    /// An unknown sex or measurement name in the source data
    #[error("Unknown {kind} '{value}' in reference data")]
    UnknownLabel { kind: &'static str, value: String },

    /// Failed to read a reference file
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse JSON reference data
    #[error("Failed to parse reference JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to parse CSV reference data
    #[error("CSV error: {0}")]
    Csv(String),
}

impl ReferenceError {
    pub(crate) fn invalid_series(reason: impl Into<String>) -> Self {
        Self::InvalidSeries {
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed(sex: Sex, measurement: Measurement, reason: impl Into<String>) -> Self {
        Self::Malformed {
            sex,
            measurement,
            reason: reason.into(),
        }
    }
}
