//! Registration-load validation
//!
//! A registration is every compulsory course, every carry-over offered in
//! the catalogue, and the electives the student opted into. Only electives
//! are optional; the rest are locked in.

use crate::core::models::{CatalogEntry, CourseType};
use crate::debug;
use std::collections::{BTreeMap, BTreeSet};

/// Institutional cap on registered units per period (inclusive)
pub const MAX_REGISTRATION_UNITS: u32 = 24;

/// Why a course is in the registration. Ordering is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegistrationTier {
    /// Failed earlier and not yet cleared
    CarryOver,
    /// Compulsory for the department
    Compulsory,
    /// Chosen by the student
    Elective,
}

/// A catalogue course placed in a registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredCourse {
    /// The catalogue entry
    pub entry: CatalogEntry,
    /// Reason for inclusion
    pub tier: RegistrationTier,
}

impl RegisteredCourse {
    /// Whether the student can drop this course (electives only)
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.tier == RegistrationTier::Elective
    }
}

/// Outcome of validating a registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationLoad {
    /// Registered courses: carry-overs, then compulsory, then electives,
    /// each tier by course code
    pub courses: Vec<RegisteredCourse>,
    /// Units across every registered course
    pub total_units: u64,
    /// Units across the carry-over tier
    pub carry_over_units: u64,
    /// `total_units` is within [`MAX_REGISTRATION_UNITS`]
    pub is_valid: bool,
    /// Selected codes that are not electives in the catalogue
    pub ignored_selections: Vec<String>,
}

impl RegistrationLoad {
    /// Course codes in display order
    #[must_use]
    pub fn codes(&self) -> Vec<&str> {
        self.courses.iter().map(|c| c.entry.code.as_str()).collect()
    }

    /// Units by which the load exceeds the cap (0 when valid)
    #[must_use]
    pub fn excess_units(&self) -> u64 {
        self.total_units
            .saturating_sub(u64::from(MAX_REGISTRATION_UNITS))
    }
}

/// Assemble and validate a registration.
///
/// Carry-over codes and selections that are missing from the catalogue are
/// not registered. Selecting a compulsory course or a carry-over never adds
/// it twice. When the catalogue lists a code more than once the last entry
/// wins. An over-cap load is reported through `is_valid`; nothing is trimmed.
#[must_use]
pub fn validate_registration_load(
    catalog: &[CatalogEntry],
    carry_over_codes: &BTreeSet<String>,
    selected_elective_codes: &[String],
) -> RegistrationLoad {
    let mut by_code: BTreeMap<&str, &CatalogEntry> = BTreeMap::new();
    for entry in catalog {
        by_code.insert(entry.code.as_str(), entry);
    }

    let mut tiers: BTreeMap<&str, RegistrationTier> = BTreeMap::new();
    for (code, entry) in &by_code {
        if carry_over_codes.contains(*code) {
            tiers.insert(*code, RegistrationTier::CarryOver);
        } else if entry.is_compulsory() {
            tiers.insert(*code, RegistrationTier::Compulsory);
        }
    }

    let mut ignored_selections: Vec<String> = Vec::new();
    for code in selected_elective_codes {
        match by_code.get(code.as_str()) {
            Some(entry) if entry.course_type == CourseType::Elective => {
                tiers.entry(entry.code.as_str()).or_insert(RegistrationTier::Elective);
            }
            _ => {
                if !ignored_selections.contains(code) {
                    ignored_selections.push(code.clone());
                }
            }
        }
    }

    if !ignored_selections.is_empty() {
        debug!(
            "Ignoring selections that are not catalogue electives: {}",
            ignored_selections.join(", ")
        );
    }

    let mut courses: Vec<RegisteredCourse> = tiers
        .into_iter()
        .filter_map(|(code, tier)| {
            by_code.get(code).map(|entry| RegisteredCourse {
                entry: (*entry).clone(),
                tier,
            })
        })
        .collect();
    courses.sort_by(|a, b| a.tier.cmp(&b.tier).then_with(|| a.entry.code.cmp(&b.entry.code)));

    let total_units: u64 = courses.iter().map(|c| u64::from(c.entry.units)).sum();
    let carry_over_units: u64 = courses
        .iter()
        .filter(|c| c.tier == RegistrationTier::CarryOver)
        .map(|c| u64::from(c.entry.units))
        .sum();

    RegistrationLoad {
        courses,
        total_units,
        carry_over_units,
        is_valid: total_units <= u64::from(MAX_REGISTRATION_UNITS),
        ignored_selections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(code: &str, units: u32, course_type: CourseType) -> CatalogEntry {
        CatalogEntry::new(code.to_string(), format!("{code} title"), units, course_type)
    }

    fn catalog() -> Vec<CatalogEntry> {
        vec![
            entry("COM211", 3, CourseType::Compulsory),
            entry("COM212", 3, CourseType::Compulsory),
            entry("COM213", 2, CourseType::Compulsory),
            entry("COM121", 3, CourseType::Compulsory),
            entry("GNS201", 2, CourseType::Elective),
            entry("COM225", 3, CourseType::Elective),
            entry("MTH211", 3, CourseType::Elective),
        ]
    }

    fn codes(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_compulsory_always_included() {
        let load = validate_registration_load(&catalog(), &BTreeSet::new(), &[]);
        assert_eq!(load.codes(), vec!["COM121", "COM211", "COM212", "COM213"]);
        assert_eq!(load.total_units, 11);
        assert_eq!(load.carry_over_units, 0);
        assert!(load.is_valid);
    }

    #[test]
    fn test_display_order_by_tier_then_code() {
        let carry: BTreeSet<String> = ["COM225".to_string()].into_iter().collect();
        let load = validate_registration_load(&catalog(), &carry, &codes(&["MTH211", "GNS201"]));
        assert_eq!(
            load.codes(),
            vec!["COM225", "COM121", "COM211", "COM212", "COM213", "GNS201", "MTH211"]
        );
        assert_eq!(load.courses[0].tier, RegistrationTier::CarryOver);
        assert_eq!(load.carry_over_units, 3);
    }

    #[test]
    fn test_carry_over_compulsory_is_tiered_carry_over() {
        let carry: BTreeSet<String> = ["COM121".to_string()].into_iter().collect();
        let load = validate_registration_load(&catalog(), &carry, &[]);
        assert_eq!(load.codes()[0], "COM121");
        assert_eq!(load.courses[0].tier, RegistrationTier::CarryOver);
        assert_eq!(load.total_units, 11);
        assert_eq!(load.carry_over_units, 3);
    }

    #[test]
    fn test_selecting_locked_course_is_ignored() {
        let carry: BTreeSet<String> = ["COM225".to_string()].into_iter().collect();
        let load = validate_registration_load(
            &catalog(),
            &carry,
            &codes(&["COM211", "COM225", "XYZ999", "XYZ999"]),
        );
        assert_eq!(load.courses.len(), 5);
        assert_eq!(load.ignored_selections, codes(&["COM211", "XYZ999"]));
        assert_eq!(load.courses.iter().filter(|c| !c.is_optional()).count(), 5);
    }

    #[test]
    fn test_carry_over_missing_from_catalog_not_registered() {
        let carry: BTreeSet<String> = ["OLD101".to_string()].into_iter().collect();
        let load = validate_registration_load(&catalog(), &carry, &[]);
        assert!(!load.codes().contains(&"OLD101"));
        assert_eq!(load.carry_over_units, 0);
    }

    #[test]
    fn test_cap_is_inclusive() {
        let catalog = vec![
            entry("A1", 12, CourseType::Compulsory),
            entry("A2", 12, CourseType::Compulsory),
        ];
        let load = validate_registration_load(&catalog, &BTreeSet::new(), &[]);
        assert_eq!(load.total_units, 24);
        assert!(load.is_valid);
        assert_eq!(load.excess_units(), 0);
    }

    #[test]
    fn test_unit_limit_catalog_entry_is_over_cap() {
        let catalog = vec![
            entry("A", u32::MAX, CourseType::Compulsory),
            entry("B", 1, CourseType::Compulsory),
        ];
        let load = validate_registration_load(&catalog, &BTreeSet::new(), &[]);
        assert_eq!(load.total_units, u64::from(u32::MAX) + 1);
        assert!(!load.is_valid);
        assert_eq!(
            load.excess_units(),
            u64::from(u32::MAX) + 1 - u64::from(MAX_REGISTRATION_UNITS)
        );
    }

    #[test]
    fn test_duplicate_catalog_code_last_wins() {
        let catalog = vec![
            entry("COM211", 3, CourseType::Compulsory),
            entry("COM211", 4, CourseType::Compulsory),
        ];
        let load = validate_registration_load(&catalog, &BTreeSet::new(), &[]);
        assert_eq!(load.courses.len(), 1);
        assert_eq!(load.total_units, 4);
    }

    #[test]
    fn test_empty_catalog() {
        let load = validate_registration_load(&[], &BTreeSet::new(), &codes(&["COM225"]));
        assert!(load.courses.is_empty());
        assert_eq!(load.total_units, 0);
        assert!(load.is_valid);
        assert_eq!(load.ignored_selections, codes(&["COM225"]));
    }
}
