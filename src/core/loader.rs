//! CSV ingestion for result histories and course catalogues
//!
//! Results files carry the columns
//! `session, semester, course_code, course_title, units, score, grade`;
//! `course_title` and `grade` may be omitted or left empty, and a missing
//! grade is derived from the score. Catalogue files carry
//! `code, title, units, type`.

use crate::core::error::{Result, StandingError};
use crate::core::models::{is_valid_session, CatalogEntry, CourseType, Grade, ResultRecord, Semester};
use crate::info;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawResultRow {
    session: String,
    semester: String,
    course_code: String,
    #[serde(default)]
    course_title: String,
    units: i64,
    score: f64,
    #[serde(default)]
    grade: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawCatalogRow {
    code: String,
    #[serde(default)]
    title: String,
    units: i64,
    #[serde(rename = "type")]
    course_type: String,
}

/// Largest credit-unit weight accepted for a single course
pub const MAX_COURSE_UNITS: u32 = 30;

fn positive_units(units: i64, row: usize) -> Result<u32> {
    u32::try_from(units)
        .ok()
        .filter(|u| (1..=MAX_COURSE_UNITS).contains(u))
        .ok_or_else(|| {
            StandingError::invalid_row(
                row,
                format!("units must be between 1 and {MAX_COURSE_UNITS}, got {units}"),
            )
        })
}

fn non_empty(value: String, column: &str, row: usize) -> Result<String> {
    if value.is_empty() {
        Err(StandingError::invalid_row(row, format!("missing {column}")))
    } else {
        Ok(value)
    }
}

impl RawResultRow {
    fn into_record(self, row: usize) -> Result<ResultRecord> {
        if !is_valid_session(&self.session) {
            return Err(StandingError::invalid_row(
                row,
                format!("session '{}' is not of the form YYYY/YYYY+1", self.session),
            ));
        }
        let semester = self
            .semester
            .parse::<Semester>()
            .map_err(|e| StandingError::invalid_row(row, e))?;
        let course_code = non_empty(self.course_code, "course_code", row)?;
        let units = positive_units(self.units, row)?;
        if !self.score.is_finite() {
            return Err(StandingError::invalid_row(row, "score must be a finite number"));
        }

        let grade = match self.grade.as_deref().map(str::trim) {
            Some(grade) if !grade.is_empty() => grade
                .parse::<Grade>()
                .map_err(|e| StandingError::invalid_row(row, e))?,
            _ => Grade::from_score(self.score),
        };

        Ok(ResultRecord {
            session: self.session,
            semester,
            course_code,
            course_title: self.course_title,
            units,
            score: self.score,
            grade,
        })
    }
}

impl RawCatalogRow {
    fn into_entry(self, row: usize) -> Result<CatalogEntry> {
        let code = non_empty(self.code, "code", row)?;
        let units = positive_units(self.units, row)?;
        let course_type = self
            .course_type
            .parse::<CourseType>()
            .map_err(|e| StandingError::invalid_row(row, e))?;
        Ok(CatalogEntry::new(code, self.title, units, course_type))
    }
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| StandingError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse result records from CSV text
///
/// # Errors
/// Returns an error on malformed CSV or on the first row that fails validation
pub fn parse_results<R: Read>(reader: R) -> Result<Vec<ResultRecord>> {
    let mut records = Vec::new();
    for (idx, row) in csv_reader(reader).deserialize::<RawResultRow>().enumerate() {
        records.push(row?.into_record(idx + 1)?);
    }
    Ok(records)
}

/// Load result records from a CSV file
///
/// # Errors
/// Returns an error if the file cannot be opened or its contents fail to parse
pub fn load_results<P: AsRef<Path>>(path: P) -> Result<Vec<ResultRecord>> {
    let path = path.as_ref();
    let records = parse_results(open(path)?)?;
    info!("Loaded {} result record(s) from {}", records.len(), path.display());
    Ok(records)
}

/// Parse a course catalogue from CSV text
///
/// # Errors
/// Returns an error on malformed CSV or on the first row that fails validation
pub fn parse_catalog<R: Read>(reader: R) -> Result<Vec<CatalogEntry>> {
    let mut entries = Vec::new();
    for (idx, row) in csv_reader(reader).deserialize::<RawCatalogRow>().enumerate() {
        entries.push(row?.into_entry(idx + 1)?);
    }
    Ok(entries)
}

/// Load a course catalogue from a CSV file
///
/// # Errors
/// Returns an error if the file cannot be opened or its contents fail to parse
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<CatalogEntry>> {
    let path = path.as_ref();
    let entries = parse_catalog(open(path)?)?;
    info!("Loaded {} catalogue course(s) from {}", entries.len(), path.display());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_results_with_and_without_grade() {
        let csv = "\
session,semester,course_code,course_title,units,score,grade
2022/2023,First Semester,COM111,Introduction to Computing,3,78,A
2022/2023, First Semester ,GNS101,Use of English I,2,31,
";
        let records = parse_results(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].grade, Grade::A);
        assert_eq!(records[1].semester, Semester::First);
        assert_eq!(records[1].grade, Grade::F);
    }

    #[test]
    fn test_parse_results_grade_column_optional() {
        let csv = "\
session,semester,course_code,units,score
2023/2024,second,COM221,3,65
";
        let records = parse_results(csv.as_bytes()).unwrap();
        assert_eq!(records[0].grade, Grade::B);
        assert_eq!(records[0].semester, Semester::Second);
        assert!(records[0].course_title.is_empty());
    }

    #[test]
    fn test_explicit_grade_is_kept() {
        // Upstream grade wins over the score when both are present
        let csv = "\
session,semester,course_code,course_title,units,score,grade
2023/2024,First Semester,COM211,OOP,3,50,C
";
        let records = parse_results(csv.as_bytes()).unwrap();
        assert_eq!(records[0].grade, Grade::C);
    }

    #[test]
    fn test_invalid_rows_report_row_number() {
        let csv = "\
session,semester,course_code,course_title,units,score,grade
2022/2023,First Semester,COM111,Intro,3,78,A
2022-2023,First Semester,COM112,Intro II,3,78,A
";
        let err = parse_results(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, StandingError::InvalidRow { row: 2, .. }), "{err}");
    }

    #[test]
    fn test_rejects_bad_fields() {
        let cases = [
            "2022/2023,Third Semester,COM111,Intro,3,78,A",
            "2022/2023,First Semester,,Intro,3,78,A",
            "2022/2023,First Semester,COM111,Intro,0,78,A",
            "2022/2023,First Semester,COM111,Intro,-2,78,A",
            "2022/2023,First Semester,COM111,Intro,3,78,Z",
            "2022/2023,First Semester,COM111,Intro,3,NaN,A",
        ];
        for line in cases {
            let csv = format!("session,semester,course_code,course_title,units,score,grade\n{line}\n");
            let result = parse_results(csv.as_bytes());
            assert!(
                matches!(result, Err(StandingError::InvalidRow { row: 1, .. })),
                "expected row error for {line}: {result:?}"
            );
        }
    }

    #[test]
    fn test_units_above_course_limit_rejected() {
        let csv = "\
session,semester,course_code,course_title,units,score,grade
2023/2024,First Semester,PRJ299,Project,30,80,A
2023/2024,First Semester,PRJ300,Project,1000000000,80,A
";
        let err = parse_results(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, StandingError::InvalidRow { row: 2, .. }), "{err}");

        let catalog = format!("code,title,units,type\nPRJ299,Project,{},Compulsory\n", u32::MAX);
        assert!(matches!(
            parse_catalog(catalog.as_bytes()),
            Err(StandingError::InvalidRow { row: 1, .. })
        ));
    }

    #[test]
    fn test_non_numeric_units_is_csv_error() {
        let csv = "\
session,semester,course_code,course_title,units,score,grade
2022/2023,First Semester,COM111,Intro,three,78,A
";
        assert!(matches!(parse_results(csv.as_bytes()), Err(StandingError::Csv(_))));
    }

    #[test]
    fn test_parse_catalog() {
        let csv = "\
code,title,units,type
COM211,Object-Oriented Programming,3,Compulsory
COM225,Web Technologies,3,elective
";
        let entries = parse_catalog(csv.as_bytes()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].course_type, CourseType::Compulsory);
        assert_eq!(entries[1].course_type, CourseType::Elective);
        assert_eq!(entries[1].units, 3);
    }

    #[test]
    fn test_parse_catalog_bad_type() {
        let csv = "code,title,units,type\nCOM211,OOP,3,Optional\n";
        assert!(matches!(
            parse_catalog(csv.as_bytes()),
            Err(StandingError::InvalidRow { row: 1, .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = load_results("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, StandingError::Io { .. }));
    }
}
