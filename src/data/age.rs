use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::GrowthError;

/// Fixed number of days per month used for all age conversions
///
/// This is the mean Gregorian month length (365.25 / 12). It is not
/// calendar-aware, so ages near calendar month boundaries differ slightly from
/// a calendar-based count.
pub const DAYS_PER_MONTH: f64 = 30.4375;

/// Age of a subject at the evaluation date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Age {
    days: f64,
    months: f64,
    years: f64,
}

impl Age {
    /// Age in whole days between two dates
    ///
    /// Fails if the evaluation date precedes the birth date.
    pub fn between(birth: NaiveDate, evaluation: NaiveDate) -> Result<Self, GrowthError> {
        let days = (evaluation - birth).num_days();
        if days < 0 {
            return Err(GrowthError::invalid_input(
                "birth_date",
                format!("birth date {} is after evaluation date {}", birth, evaluation),
            ));
        }
        Ok(Self::from_days(days as f64))
    }

    pub fn from_days(days: f64) -> Self {
        let months = days / DAYS_PER_MONTH;
        Age {
            days,
            months,
            years: months / 12.0,
        }
    }

    pub fn from_months(months: f64) -> Self {
        Age {
            days: months * DAYS_PER_MONTH,
            months,
            years: months / 12.0,
        }
    }

    pub fn days(&self) -> f64 {
        self.days
    }

    pub fn months(&self) -> f64 {
        self.months
    }

    pub fn years(&self) -> f64 {
        self.years
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} days • {:.1} months • {:.1} years",
            self.days.round(),
            self.months,
            self.years
        )
    }
}
