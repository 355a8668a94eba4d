//! Z-scores, inverse transforms, target height and reference curves
//!
//! Every function here is pure. Undefined results are `None` rather than NaN,
//! so a computed zero and a missing score can never be confused.
//!
//! ```rust,ignore
//! use anthropometry::score::{value_at_z, z_score};
//! use anthropometry::reference::Lms;
//!
//! let lms = Lms::new(-0.1600954, 15.2641, 0.08090);
//! let z = z_score(17.5, &lms);
//! let p97 = value_at_z(&lms, 1.88);
//! ```

pub mod calc;
pub mod curves;
pub mod target;

pub use calc::{value_at_z, z_score, L_EPSILON};
pub use curves::{
    curve_at_z, reference_curves, sweep_ages, target_band, ChartPoint, CurveSeries, TargetBand,
    MAX_SWEEP_POINTS, Z_LINES,
};
pub use target::TargetRange;
