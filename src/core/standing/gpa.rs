//! Grade-point averages
//!
//! Both averages are total weighted points over total units. Points and
//! units are summed as saturating `u64`s; only the final quotient is a float, rounded
//! to two decimals with [`f64::round`] (half away from zero, i.e. half-up for
//! the non-negative range GPAs live in). An empty selection averages to 0.00.

use super::periods::{order_periods, resolve_duplicates};
use crate::core::models::{compare_periods, ResultRecord, SemesterFilter};
use std::cmp::Ordering;

/// Round to two decimal places, half away from zero
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Weighted average of the given records, 0.00 when they carry no units
#[allow(clippy::cast_precision_loss)]
fn weighted_average<'a>(records: impl IntoIterator<Item = &'a ResultRecord>) -> f64 {
    let (points, units) = records
        .into_iter()
        .fold((0u64, 0u64), |(points, units), record| {
            (
                points.saturating_add(record.weighted_points()),
                units.saturating_add(u64::from(record.units)),
            )
        });

    if units == 0 {
        0.0
    } else {
        round2(points as f64 / units as f64)
    }
}

/// GPA for one session, restricted to one semester or covering all of them.
#[must_use]
pub fn period_gpa(records: &[ResultRecord], session: &str, semester_filter: SemesterFilter) -> f64 {
    weighted_average(
        resolve_duplicates(records)
            .into_iter()
            .filter(|record| record.session == session && semester_filter.matches(record.semester)),
    )
}

/// Cumulative GPA over every period up to and including a reference point.
///
/// With [`SemesterFilter::All`] the reference point is the latest recorded
/// period of `upto_session`; otherwise it is the exact period. A reference
/// point absent from history yields 0.00. This is a historical average:
/// failed attempts keep counting after the course is passed.
#[must_use]
pub fn cumulative_gpa(
    records: &[ResultRecord],
    upto_session: &str,
    upto_semester_filter: SemesterFilter,
) -> f64 {
    let periods = order_periods(records);
    let target = match upto_semester_filter {
        SemesterFilter::All => periods.iter().rposition(|p| p.session == upto_session),
        SemesterFilter::Only(semester) => periods
            .iter()
            .position(|p| p.session == upto_session && p.semester == semester),
    };
    let Some(cutoff) = target.map(|idx| &periods[idx]) else {
        return 0.0;
    };

    weighted_average(
        resolve_duplicates(records)
            .into_iter()
            .filter(|record| compare_periods(&record.period(), cutoff) != Ordering::Greater),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Grade, Semester};

    fn record(
        session: &str,
        semester: Semester,
        code: &str,
        units: u32,
        grade: Grade,
    ) -> ResultRecord {
        ResultRecord {
            session: session.to_string(),
            semester,
            course_code: code.to_string(),
            course_title: String::new(),
            units,
            score: 0.0,
            grade,
        }
    }

    fn history() -> Vec<ResultRecord> {
        vec![
            record("2022/2023", Semester::First, "COM111", 3, Grade::A),
            record("2022/2023", Semester::First, "MTH111", 3, Grade::B),
            record("2022/2023", Semester::First, "GNS101", 2, Grade::F),
            record("2022/2023", Semester::Second, "COM121", 3, Grade::F),
            record("2022/2023", Semester::Second, "GNS101", 2, Grade::C),
            record("2023/2024", Semester::First, "COM211", 3, Grade::A),
            record("2023/2024", Semester::First, "COM212", 3, Grade::B),
        ]
    }

    #[test]
    fn test_round2() {
        assert!((round2(4.5) - 4.5).abs() < f64::EPSILON);
        assert!((round2(3.157_894) - 3.16).abs() < f64::EPSILON);
        assert!((round2(2.0 / 3.0) - 0.67).abs() < f64::EPSILON);
        assert!((round2(3.333) - 3.33).abs() < f64::EPSILON);
    }

    #[test]
    fn test_round2_ties_round_up() {
        // Exact binary ties: half-even would give 0.12 and 0.62, truncation 0.37
        assert!((round2(0.125) - 0.13).abs() < f64::EPSILON);
        assert!((round2(0.625) - 0.63).abs() < f64::EPSILON);
        assert!((round2(0.375) - 0.38).abs() < f64::EPSILON);
    }

    #[test]
    fn test_period_gpa_tie_rounds_up() {
        // 1 point over 8 units is exactly 0.125
        let records = vec![
            record("2023/2024", Semester::First, "COM211", 1, Grade::E),
            record("2023/2024", Semester::First, "COM212", 7, Grade::F),
        ];
        let gpa = period_gpa(&records, "2023/2024", SemesterFilter::All);
        assert!((gpa - 0.13).abs() < f64::EPSILON);
    }

    #[test]
    fn test_huge_unit_counts_do_not_overflow() {
        let records = vec![
            record("2023/2024", Semester::First, "PRJ299", 1_000_000_000, Grade::A),
            record("2023/2024", Semester::First, "PRJ298", u32::MAX, Grade::A),
        ];
        let gpa = period_gpa(&records, "2023/2024", SemesterFilter::All);
        assert!((gpa - 5.0).abs() < f64::EPSILON);
        let cgpa = cumulative_gpa(&records, "2023/2024", SemesterFilter::All);
        assert!((cgpa - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_period_gpa_single_semester() {
        let records = history();
        let gpa = period_gpa(&records, "2023/2024", SemesterFilter::Only(Semester::First));
        assert!((gpa - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_period_gpa_whole_session() {
        let records = history();
        // (15 + 12 + 0 + 0 + 6) / 13
        let gpa = period_gpa(&records, "2022/2023", SemesterFilter::All);
        assert!((gpa - 2.54).abs() < f64::EPSILON);
    }

    #[test]
    fn test_period_gpa_no_match_is_zero() {
        let records = history();
        assert!(period_gpa(&records, "2019/2020", SemesterFilter::All).abs() < f64::EPSILON);
        assert!(
            period_gpa(&records, "2023/2024", SemesterFilter::Only(Semester::Second)).abs()
                < f64::EPSILON
        );
        assert!(period_gpa(&[], "2023/2024", SemesterFilter::All).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cumulative_gpa_exact_period() {
        let records = history();
        // First two periods only: (15 + 12 + 0 + 0 + 6) / 13
        let cgpa = cumulative_gpa(&records, "2022/2023", SemesterFilter::Only(Semester::Second));
        assert!((cgpa - 2.54).abs() < f64::EPSILON);

        // First period only: 27 / 8
        let cgpa = cumulative_gpa(&records, "2022/2023", SemesterFilter::Only(Semester::First));
        assert!((cgpa - 3.38).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cumulative_gpa_all_uses_latest_semester_of_session() {
        let records = history();
        let all = cumulative_gpa(&records, "2022/2023", SemesterFilter::All);
        let second = cumulative_gpa(&records, "2022/2023", SemesterFilter::Only(Semester::Second));
        assert!((all - second).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cumulative_gpa_whole_history() {
        let records = history();
        // 60 points over 19 units
        let cgpa = cumulative_gpa(&records, "2023/2024", SemesterFilter::Only(Semester::First));
        assert!((cgpa - round2(60.0 / 19.0)).abs() < f64::EPSILON);
        assert!((cgpa - 3.16).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cumulative_gpa_missing_reference_is_zero() {
        let records = history();
        assert!(
            cumulative_gpa(&records, "2023/2024", SemesterFilter::Only(Semester::Second)).abs()
                < f64::EPSILON
        );
        assert!(cumulative_gpa(&records, "2030/2031", SemesterFilter::All).abs() < f64::EPSILON);
    }

    #[test]
    fn test_duplicates_are_not_double_counted() {
        let mut records = history();
        records.push(record("2023/2024", Semester::First, "COM212", 3, Grade::A));
        // COM212 resolved to the later A: (15 + 15) / 6
        let gpa = period_gpa(&records, "2023/2024", SemesterFilter::All);
        assert!((gpa - 5.0).abs() < f64::EPSILON);
    }
}
