//! Standing command handler
//!
//! Prints carry-overs and GPA figures for one results file.

use poly_standing::config::Config;
use poly_standing::core::loader::load_results;
use poly_standing::core::models::SemesterFilter;
use poly_standing::core::standing::{build_transcript, cumulative_gpa, period_gpa};
use poly_standing::{error, verbose};
use std::path::Path;

/// Run the standing command.
///
/// # Arguments
/// * `results_file` - Path to the results CSV
/// * `session` - Session for the GPA query; latest CGPA only when `None`
/// * `semester` - Semester filter, falling back to the configured default
/// * `config` - Configuration supplying the default semester filter
pub fn run(
    results_file: &Path,
    session: Option<&str>,
    semester: Option<SemesterFilter>,
    config: &Config,
) -> Result<(), String> {
    let records = load_results(results_file).map_err(|e| {
        error!("Failed to load results {}: {e}", results_file.display());
        format!("✗ Failed to load {}: {e}", results_file.display())
    })?;

    let transcript = build_transcript(&records);
    let summary = transcript.summary();

    println!("\n=== Academic Standing: {} ===", results_file.display());
    match transcript.latest_period() {
        Some(latest) => println!("Latest period: {latest}"),
        None => println!("No results recorded"),
    }
    println!(
        "Units: {} attempted, {} passed",
        summary.units_attempted, summary.units_passed
    );

    if let Some(session) = session {
        let filter = semester.unwrap_or_else(|| config.default_semester_filter());
        println!(
            "GPA ({session}, {filter}): {:.2}",
            period_gpa(&records, session, filter)
        );
        println!(
            "CGPA up to {session} ({filter}): {:.2}",
            cumulative_gpa(&records, session, filter)
        );
    } else {
        println!("CGPA: {:.2}", transcript.cgpa);
    }

    if transcript.carry_overs.is_empty() {
        println!("Carry-overs: none");
    } else {
        let codes: Vec<&str> = transcript.carry_overs.iter().map(String::as_str).collect();
        println!("Carry-overs ({}): {}", codes.len(), codes.join(", "));
    }

    for period in &transcript.periods {
        verbose!(
            "  {}: GPA {:.2}, CGPA {:.2}, {}/{} units passed",
            period.period,
            period.gpa,
            period.cgpa,
            period.units_passed,
            period.units_registered
        );
    }

    Ok(())
}
