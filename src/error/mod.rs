use thiserror::Error;

use crate::reference::ReferenceError;

/// Errors that abort a growth calculation as a whole
///
/// Per-measurement failures (a missing weight reference, an age outside a
/// table) never surface here. They degrade to an undefined score inside the
/// [`GrowthReport`](crate::GrowthReport) instead.
#[derive(Error, Debug)]
pub enum GrowthError {
    /// The reference data has not been installed yet
    #[error("Reference data is not loaded")]
    DataNotLoaded,

    /// Reference data was installed twice
    #[error("Reference data is already loaded")]
    AlreadyLoaded,

    /// A required input is missing or not a usable number
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    /// Reference data is corrupt or could not be read
    #[error(transparent)]
    Reference(#[from] ReferenceError),
}

impl GrowthError {
    /// Create an invalid input error
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns `true` if the error was caused by the caller's request
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}
