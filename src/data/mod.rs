pub mod age;
pub mod builder;
pub mod measurement;
pub mod subject;
pub use age::{Age, DAYS_PER_MONTH};
pub use builder::SubjectBuilder;
pub use measurement::{Measurement, Sex};
pub use subject::{bmi, Measures, Subject};
