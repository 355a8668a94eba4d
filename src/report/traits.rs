//! Extension trait for growth evaluation on subjects
//!
//! ```rust,ignore
//! use anthropometry::prelude::*;
//!
//! let report = subject.growth(&reference, &GrowthOptions::default())?;
//! println!("{}", report);
//! ```

use crate::data::Subject;
use crate::error::GrowthError;
use crate::reference::{ReferenceSet, ReferenceStore};
use crate::report::{GrowthCalculator, GrowthOptions, GrowthReport};

/// Adds `.growth()` to [`Subject`]
pub trait Growth {
    /// Evaluate against an explicit reference set
    fn growth(
        &self,
        reference: &ReferenceSet,
        options: &GrowthOptions,
    ) -> Result<GrowthReport, GrowthError>;

    /// Evaluate against the data published in a store
    ///
    /// Fails with [`GrowthError::DataNotLoaded`] before the store is filled.
    fn growth_from_store(
        &self,
        store: &ReferenceStore,
        options: &GrowthOptions,
    ) -> Result<GrowthReport, GrowthError> {
        let reference = store.get()?;
        self.growth(&reference, options)
    }
}

impl Growth for Subject {
    fn growth(
        &self,
        reference: &ReferenceSet,
        options: &GrowthOptions,
    ) -> Result<GrowthReport, GrowthError> {
        GrowthCalculator::new(reference, options.clone()).evaluate(self)
    }
}
