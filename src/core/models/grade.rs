//! Letter grades and the score cutoff table

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Score cutoffs, highest first. A score earns the first grade whose
/// cutoff it meets; lower bounds are inclusive.
const CUTOFFS: [(f64, Grade); 5] = [
    (75.0, Grade::A),
    (65.0, Grade::B),
    (55.0, Grade::C),
    (45.0, Grade::D),
    (40.0, Grade::E),
];

/// Letter grade on the 5-point scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    /// 75 and above
    A,
    /// 65 to 74
    B,
    /// 55 to 64
    C,
    /// 45 to 54
    D,
    /// 40 to 44
    E,
    /// Below 40
    F,
}

impl Grade {
    /// Map a score onto the cutoff table.
    ///
    /// Never fails: anything below 40, including `NaN`, is an `F`.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        CUTOFFS
            .iter()
            .find(|(cutoff, _)| score >= *cutoff)
            .map_or(Self::F, |(_, grade)| *grade)
    }

    /// Grade points used for GPA weighting (A=5 down to F=0)
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::A => 5,
            Self::B => 4,
            Self::C => 3,
            Self::D => 2,
            Self::E => 1,
            Self::F => 0,
        }
    }

    /// Whether the grade clears the course
    #[must_use]
    pub const fn is_pass(self) -> bool {
        !matches!(self, Self::F)
    }

    /// Single-letter form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
        }
    }
}

/// Free-function form of [`Grade::from_score`] for grade-entry flows.
#[must_use]
pub fn grade_of(score: f64) -> Grade {
    Grade::from_score(score)
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            "E" => Ok(Self::E),
            "F" => Ok(Self::F),
            _ => Err(format!("Unknown grade: '{s}'")),
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
