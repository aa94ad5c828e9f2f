//! Academic periods: a session paired with a semester
//!
//! Periods are the unit of chronological ordering. Sessions are tokens of
//! the form `"YYYY/YYYY+1"`; zero-padded four-digit years make plain string
//! comparison chronological, and First Semester precedes Second Semester
//! within a session.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Semester within an academic session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Semester {
    /// First Semester (earlier)
    #[serde(rename = "First Semester")]
    First,
    /// Second Semester (later)
    #[serde(rename = "Second Semester")]
    Second,
}

impl Semester {
    /// Display label as it appears on result sheets
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::First => "First Semester",
            Self::Second => "Second Semester",
        }
    }
}

impl FromStr for Semester {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first semester" | "first" | "1" | "1st" => Ok(Self::First),
            "second semester" | "second" | "2" | "2nd" => Ok(Self::Second),
            _ => Err(format!("Unknown semester: '{s}'")),
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Semester selector for GPA queries: one semester, or every semester of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SemesterFilter {
    /// Every semester recorded for the session
    #[default]
    All,
    /// A single semester
    Only(Semester),
}

impl SemesterFilter {
    /// Whether a semester passes the filter
    #[must_use]
    pub fn matches(self, semester: Semester) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => only == semester,
        }
    }
}

impl FromStr for SemesterFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse::<Semester>().map(Self::Only)
        }
    }
}

impl fmt::Display for SemesterFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(semester) => write!(f, "{semester}"),
        }
    }
}

/// A single (session, semester) point in a student's history
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    /// Academic session, e.g. "2023/2024"
    pub session: String,
    /// Semester within the session
    pub semester: Semester,
}

impl Period {
    /// Create a new period
    #[must_use]
    pub const fn new(session: String, semester: Semester) -> Self {
        Self { session, semester }
    }
}

/// Chronological comparator for periods: session ascending, then semester.
///
/// Total over all periods; two periods compare equal only when both the
/// session token and the semester are identical.
#[must_use]
pub fn compare_periods(a: &Period, b: &Period) -> Ordering {
    a.session
        .cmp(&b.session)
        .then_with(|| a.semester.cmp(&b.semester))
}

impl Ord for Period {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_periods(self, other)
    }
}

impl PartialOrd for Period {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.session, self.semester)
    }
}

/// Check that a session token has the `YYYY/YYYY+1` shape.
#[must_use]
pub fn is_valid_session(session: &str) -> bool {
    let Some((start, end)) = session.split_once('/') else {
        return false;
    };
    if start.len() != 4 || end.len() != 4 {
        return false;
    }
    match (start.parse::<u32>(), end.parse::<u32>()) {
        (Ok(start), Ok(end)) => end == start + 1,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(session: &str, semester: Semester) -> Period {
        Period::new(session.to_string(), semester)
    }

    #[test]
    fn test_semester_order() {
        assert!(Semester::First < Semester::Second);
    }

    #[test]
    fn test_compare_periods_by_session_first() {
        let a = period("2022/2023", Semester::Second);
        let b = period("2023/2024", Semester::First);
        assert_eq!(compare_periods(&a, &b), Ordering::Less);
        assert_eq!(compare_periods(&b, &a), Ordering::Greater);
    }

    #[test]
    fn test_compare_periods_within_session() {
        let a = period("2023/2024", Semester::First);
        let b = period("2023/2024", Semester::Second);
        assert_eq!(compare_periods(&a, &b), Ordering::Less);
        assert_eq!(compare_periods(&a, &a.clone()), Ordering::Equal);
    }

    #[test]
    fn test_period_sort_matches_comparator() {
        let mut periods = vec![
            period("2023/2024", Semester::Second),
            period("2022/2023", Semester::First),
            period("2023/2024", Semester::First),
            period("2022/2023", Semester::Second),
        ];
        periods.sort();
        let labels: Vec<String> = periods.iter().map(ToString::to_string).collect();
        assert_eq!(
            labels,
            vec![
                "2022/2023 First Semester",
                "2022/2023 Second Semester",
                "2023/2024 First Semester",
                "2023/2024 Second Semester",
            ]
        );
    }

    #[test]
    fn test_parse_semester_aliases() {
        assert_eq!("First Semester".parse::<Semester>(), Ok(Semester::First));
        assert_eq!("second".parse::<Semester>(), Ok(Semester::Second));
        assert_eq!("2".parse::<Semester>(), Ok(Semester::Second));
        assert!("third".parse::<Semester>().is_err());
    }

    #[test]
    fn test_parse_semester_filter() {
        assert_eq!("all".parse::<SemesterFilter>(), Ok(SemesterFilter::All));
        assert_eq!("ALL".parse::<SemesterFilter>(), Ok(SemesterFilter::All));
        assert_eq!(
            "First Semester".parse::<SemesterFilter>(),
            Ok(SemesterFilter::Only(Semester::First))
        );
        assert!("summer".parse::<SemesterFilter>().is_err());
        assert!(SemesterFilter::All.matches(Semester::Second));
        assert!(!SemesterFilter::Only(Semester::First).matches(Semester::Second));
    }

    #[test]
    fn test_session_validation() {
        assert!(is_valid_session("2023/2024"));
        assert!(!is_valid_session("2023/2025"));
        assert!(!is_valid_session("23/24"));
        assert!(!is_valid_session("2023-2024"));
        assert!(!is_valid_session("abcd/abce"));
    }
}
