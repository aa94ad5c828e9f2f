//! Register command handler

use poly_standing::core::loader::{load_catalog, load_results};
use poly_standing::core::standing::{
    compute_carry_overs, validate_registration_load, RegistrationTier, MAX_REGISTRATION_UNITS,
};
use poly_standing::{error, warn};
use std::path::Path;

/// Run the register command.
///
/// Returns an error message (exit status 1) when the load exceeds
/// [`MAX_REGISTRATION_UNITS`].
pub fn run(catalog_file: &Path, results_file: &Path, electives: &[String]) -> Result<(), String> {
    let catalog = load_catalog(catalog_file).map_err(|e| {
        error!("Failed to load catalogue {}: {e}", catalog_file.display());
        format!("✗ Failed to load {}: {e}", catalog_file.display())
    })?;
    let records = load_results(results_file).map_err(|e| {
        error!("Failed to load results {}: {e}", results_file.display());
        format!("✗ Failed to load {}: {e}", results_file.display())
    })?;

    let carry_overs = compute_carry_overs(&records);
    let load = validate_registration_load(&catalog, &carry_overs, electives);

    if !load.ignored_selections.is_empty() {
        warn!(
            "Not catalogue electives, ignored: {}",
            load.ignored_selections.join(", ")
        );
    }

    println!("\n=== Registration ===\n");
    for course in &load.courses {
        let tier = match course.tier {
            RegistrationTier::CarryOver => "carry-over",
            RegistrationTier::Compulsory => "compulsory",
            RegistrationTier::Elective => "elective",
        };
        println!(
            "  {:<8} {:>2}u  {:<10}  {}",
            course.entry.code, course.entry.units, tier, course.entry.title
        );
    }
    println!(
        "\nTotal: {} / {MAX_REGISTRATION_UNITS} units ({} carry-over)",
        load.total_units, load.carry_over_units
    );

    if load.is_valid {
        println!("✓ Registration is within the unit cap");
        Ok(())
    } else {
        Err(format!(
            "✗ Registration exceeds the {MAX_REGISTRATION_UNITS}-unit cap by {} unit(s); deselect electives",
            load.excess_units()
        ))
    }
}
