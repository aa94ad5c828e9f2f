//! Chronological period ordering and duplicate resolution
//!
//! Every standing computation goes through [`resolve_duplicates`] and then
//! walks periods in the order produced by [`order_periods`], so all of them
//! agree on what the history looks like.

use crate::core::models::{Period, ResultRecord, Semester};
use crate::debug;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Drop duplicate `(session, semester, course_code)` records, keeping the
/// last one in input order. Survivors keep their relative input order.
#[must_use]
pub fn resolve_duplicates(records: &[ResultRecord]) -> Vec<&ResultRecord> {
    let mut last_index: HashMap<(&str, Semester, &str), usize> = HashMap::new();
    for (idx, record) in records.iter().enumerate() {
        last_index.insert(
            (
                record.session.as_str(),
                record.semester,
                record.course_code.as_str(),
            ),
            idx,
        );
    }

    if last_index.len() < records.len() {
        debug!(
            "Dropping {} duplicate result record(s); last record wins",
            records.len() - last_index.len()
        );
    }

    records
        .iter()
        .enumerate()
        .filter(|(idx, record)| {
            last_index.get(&(
                record.session.as_str(),
                record.semester,
                record.course_code.as_str(),
            )) == Some(idx)
        })
        .map(|(_, record)| record)
        .collect()
}

/// Distinct periods present in `records`, oldest first.
#[must_use]
pub fn order_periods(records: &[ResultRecord]) -> Vec<Period> {
    records
        .iter()
        .map(ResultRecord::period)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Deduplicated records grouped by period, iterated oldest first.
#[must_use]
pub fn group_by_period(records: &[ResultRecord]) -> BTreeMap<Period, Vec<&ResultRecord>> {
    let mut grouped: BTreeMap<Period, Vec<&ResultRecord>> = BTreeMap::new();
    for record in resolve_duplicates(records) {
        grouped.entry(record.period()).or_default().push(record);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Grade;

    fn record(session: &str, semester: Semester, code: &str, grade: Grade) -> ResultRecord {
        ResultRecord {
            session: session.to_string(),
            semester,
            course_code: code.to_string(),
            course_title: String::new(),
            units: 3,
            score: 0.0,
            grade,
        }
    }

    #[test]
    fn test_order_periods_sorted_and_distinct() {
        let records = vec![
            record("2023/2024", Semester::First, "COM211", Grade::A),
            record("2022/2023", Semester::Second, "COM121", Grade::F),
            record("2022/2023", Semester::First, "COM111", Grade::A),
            record("2022/2023", Semester::First, "MTH111", Grade::B),
            record("2022/2023", Semester::Second, "GNS101", Grade::C),
        ];

        let periods = order_periods(&records);
        assert_eq!(periods.len(), 3);
        assert_eq!(periods[0], Period::new("2022/2023".to_string(), Semester::First));
        assert_eq!(periods[1], Period::new("2022/2023".to_string(), Semester::Second));
        assert_eq!(periods[2], Period::new("2023/2024".to_string(), Semester::First));
    }

    #[test]
    fn test_order_periods_empty() {
        assert!(order_periods(&[]).is_empty());
    }

    #[test]
    fn test_resolve_duplicates_last_wins() {
        let records = vec![
            record("2022/2023", Semester::First, "COM111", Grade::F),
            record("2022/2023", Semester::First, "MTH111", Grade::B),
            record("2022/2023", Semester::First, "COM111", Grade::C),
        ];

        let resolved = resolve_duplicates(&records);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].course_code, "MTH111");
        assert_eq!(resolved[1].course_code, "COM111");
        assert_eq!(resolved[1].grade, Grade::C);
    }

    #[test]
    fn test_same_course_in_different_periods_is_not_duplicate() {
        let records = vec![
            record("2022/2023", Semester::First, "GNS101", Grade::F),
            record("2022/2023", Semester::Second, "GNS101", Grade::C),
        ];
        assert_eq!(resolve_duplicates(&records).len(), 2);
    }

    #[test]
    fn test_group_by_period() {
        let records = vec![
            record("2022/2023", Semester::Second, "COM121", Grade::F),
            record("2022/2023", Semester::First, "COM111", Grade::A),
            record("2022/2023", Semester::First, "MTH111", Grade::B),
        ];

        let grouped = group_by_period(&records);
        let sizes: Vec<usize> = grouped.values().map(Vec::len).collect();
        assert_eq!(sizes, vec![2, 1]);
        let first = grouped.keys().next().map(|p| p.semester);
        assert_eq!(first, Some(Semester::First));
    }
}
