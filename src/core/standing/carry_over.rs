//! Carry-over detection
//!
//! A course is carried over when its most recent outcome, in period order,
//! is an `F`. The current set and the per-period transcript tags are both
//! folds of the same running ledger over the period-grouped history:
//! the current set is the ledger after the last period, and a period's tags
//! are read from the ledger before that period is absorbed.

use super::periods::group_by_period;
use crate::core::models::{Period, ResultRecord};
use std::collections::{BTreeMap, BTreeSet};

/// Key of a single transcript row: the period plus the course code
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordKey {
    /// Period the row belongs to
    pub period: Period,
    /// Course code
    pub course_code: String,
}

impl RecordKey {
    /// Build the key for a record
    #[must_use]
    pub fn of(record: &ResultRecord) -> Self {
        Self {
            period: record.period(),
            course_code: record.course_code.clone(),
        }
    }
}

/// Running set of courses whose latest known outcome is a failure
#[derive(Debug, Clone, Default)]
struct CarryOverLedger {
    failed: BTreeSet<String>,
}

impl CarryOverLedger {
    fn is_carried(&self, course_code: &str) -> bool {
        self.failed.contains(course_code)
    }

    /// Fold one period's outcomes into the ledger. Within a period each course
    /// appears once, so visiting order does not matter.
    fn absorb(&mut self, period_records: &[&ResultRecord]) {
        for record in period_records {
            if record.grade.is_pass() {
                self.failed.remove(&record.course_code);
            } else {
                self.failed.insert(record.course_code.clone());
            }
        }
    }
}

/// Courses whose most recent recorded outcome is a failing grade.
///
/// A later pass clears an earlier failure; a later failure re-trips an
/// earlier pass.
#[must_use]
pub fn compute_carry_overs(records: &[ResultRecord]) -> BTreeSet<String> {
    let mut ledger = CarryOverLedger::default();
    for period_records in group_by_period(records).values() {
        ledger.absorb(period_records);
    }
    ledger.failed
}

/// Tag every row of history with its carry-over status as of its own period.
///
/// A row is tagged `true` when the course was already failing, and not
/// since cleared, before the row's period. The row's own grade only affects
/// later periods.
#[must_use]
pub fn tag_carry_overs_by_period(records: &[ResultRecord]) -> BTreeMap<RecordKey, bool> {
    let mut ledger = CarryOverLedger::default();
    let mut tags = BTreeMap::new();

    for (period, period_records) in &group_by_period(records) {
        for record in period_records {
            tags.insert(
                RecordKey {
                    period: period.clone(),
                    course_code: record.course_code.clone(),
                },
                ledger.is_carried(&record.course_code),
            );
        }
        ledger.absorb(period_records);
    }

    tags
}
