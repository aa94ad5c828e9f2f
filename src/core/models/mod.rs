//! Data models for academic standing

pub mod catalog;
pub mod grade;
pub mod period;
pub mod record;

pub use catalog::{CatalogEntry, CourseType};
pub use grade::{grade_of, Grade};
pub use period::{compare_periods, is_valid_session, Period, Semester, SemesterFilter};
pub use record::ResultRecord;
