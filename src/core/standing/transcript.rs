//! Transcript assembly
//!
//! Lays a student's history out period by period, with every row tagged by
//! its carry-over status at the time and every period carrying its own GPA
//! and the running CGPA.

use super::carry_over::{compute_carry_overs, tag_carry_overs_by_period, RecordKey};
use super::gpa::{cumulative_gpa, period_gpa};
use super::periods::group_by_period;
use crate::core::models::{Grade, Period, ResultRecord, SemesterFilter};
use std::collections::BTreeSet;

/// One course line on a transcript
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptRow {
    /// Course code
    pub course_code: String,
    /// Course title
    pub course_title: String,
    /// Credit units
    pub units: u32,
    /// Raw score
    pub score: f64,
    /// Letter grade
    pub grade: Grade,
    /// Course carried an unresolved earlier failure into this period
    pub carry_over: bool,
}

impl TranscriptRow {
    /// Score formatted for display
    #[must_use]
    pub fn score_display(&self) -> String {
        format!("{:.1}", self.score)
    }
}

/// One period block on a transcript
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptPeriod {
    /// The period
    pub period: Period,
    /// Rows ordered by course code
    pub rows: Vec<TranscriptRow>,
    /// GPA for this period alone
    pub gpa: f64,
    /// Cumulative GPA up to and including this period
    pub cgpa: f64,
    /// Units attempted in this period
    pub units_registered: u64,
    /// Units passed in this period
    pub units_passed: u64,
}

/// A student's full transcript
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transcript {
    /// Periods, oldest first
    pub periods: Vec<TranscriptPeriod>,
    /// Courses currently carried over
    pub carry_overs: BTreeSet<String>,
    /// Cumulative GPA across the whole history
    pub cgpa: f64,
}

/// Headline figures for a student
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandingSummary {
    /// Number of periods with results
    pub periods: usize,
    /// Units attempted across all periods (retakes counted again)
    pub units_attempted: u64,
    /// Units passed across all periods
    pub units_passed: u64,
    /// Courses currently carried over
    pub carry_over_count: usize,
    /// Latest cumulative GPA
    pub cgpa: f64,
}

impl Transcript {
    /// The most recent period, if any
    #[must_use]
    pub fn latest_period(&self) -> Option<&Period> {
        self.periods.last().map(|p| &p.period)
    }

    /// Summarise the transcript
    #[must_use]
    pub fn summary(&self) -> StandingSummary {
        StandingSummary {
            periods: self.periods.len(),
            units_attempted: self.periods.iter().map(|p| p.units_registered).sum(),
            units_passed: self.periods.iter().map(|p| p.units_passed).sum(),
            carry_over_count: self.carry_overs.len(),
            cgpa: self.cgpa,
        }
    }
}

/// Build a transcript from a student's result history.
#[must_use]
pub fn build_transcript(records: &[ResultRecord]) -> Transcript {
    let tags = tag_carry_overs_by_period(records);
    let mut periods = Vec::new();

    for (period, period_records) in group_by_period(records) {
        let mut rows: Vec<TranscriptRow> = period_records
            .iter()
            .map(|record| TranscriptRow {
                course_code: record.course_code.clone(),
                course_title: record.course_title.clone(),
                units: record.units,
                score: record.score,
                grade: record.grade,
                carry_over: tags.get(&RecordKey::of(record)).copied().unwrap_or(false),
            })
            .collect();
        rows.sort_by(|a, b| a.course_code.cmp(&b.course_code));

        let filter = SemesterFilter::Only(period.semester);
        let gpa = period_gpa(records, &period.session, filter);
        let cgpa = cumulative_gpa(records, &period.session, filter);
        let units_registered: u64 = rows.iter().map(|r| u64::from(r.units)).sum();
        let units_passed: u64 = rows
            .iter()
            .filter(|r| r.grade.is_pass())
            .map(|r| u64::from(r.units))
            .sum();

        periods.push(TranscriptPeriod {
            period,
            rows,
            gpa,
            cgpa,
            units_registered,
            units_passed,
        });
    }

    let cgpa = periods.last().map_or(0.0, |p| p.cgpa);

    Transcript {
        periods,
        carry_overs: compute_carry_overs(records),
        cgpa,
    }
}
