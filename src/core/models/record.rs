//! Result record model

use super::{Grade, Period, Semester};
use serde::{Deserialize, Serialize};

/// One student's outcome in one course in one academic period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Academic session (e.g., "2023/2024")
    pub session: String,

    /// Semester within the session
    pub semester: Semester,

    /// Course code (e.g., "COM211"), unique per student per period
    pub course_code: String,

    /// Course title, for display only
    pub course_title: String,

    /// Credit units
    pub units: u32,

    /// Raw score, nominally 0-100
    pub score: f64,

    /// Letter grade
    pub grade: Grade,
}

impl ResultRecord {
    /// Create a record with the grade derived from the score
    #[must_use]
    pub fn from_score(
        session: String,
        semester: Semester,
        course_code: String,
        course_title: String,
        units: u32,
        score: f64,
    ) -> Self {
        Self {
            session,
            semester,
            course_code,
            course_title,
            units,
            score,
            grade: Grade::from_score(score),
        }
    }

    /// The period this record belongs to
    #[must_use]
    pub fn period(&self) -> Period {
        Period::new(self.session.clone(), self.semester)
    }

    /// Grade points weighted by units, widened so any `u32` unit count fits
    #[must_use]
    pub fn weighted_points(&self) -> u64 {
        u64::from(self.grade.points()) * u64::from(self.units)
    }
}
