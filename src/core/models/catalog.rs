//! Course catalogue model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a catalogue course is mandatory for the department
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseType {
    /// Always registered
    Compulsory,
    /// Registered only when the student opts in
    Elective,
}

impl FromStr for CourseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compulsory" | "core" | "c" => Ok(Self::Compulsory),
            "elective" | "e" => Ok(Self::Elective),
            _ => Err(format!("Unknown course type: '{s}'")),
        }
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compulsory => write!(f, "Compulsory"),
            Self::Elective => write!(f, "Elective"),
        }
    }
}

/// A course offered to a department for a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Course code (e.g., "COM211")
    pub code: String,

    /// Course title
    pub title: String,

    /// Credit units
    pub units: u32,

    /// Compulsory or elective
    pub course_type: CourseType,
}

impl CatalogEntry {
    /// Create a new catalogue entry
    #[must_use]
    pub const fn new(code: String, title: String, units: u32, course_type: CourseType) -> Self {
        Self {
            code,
            title,
            units,
            course_type,
        }
    }

    /// Whether the course is compulsory
    #[must_use]
    pub fn is_compulsory(&self) -> bool {
        self.course_type == CourseType::Compulsory
    }
}
