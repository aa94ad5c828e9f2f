//! Transcript command handler
//!
//! Generates transcript reports in Markdown or HTML.

use poly_standing::config::Config;
use poly_standing::core::loader::load_results;
use poly_standing::core::report::{reporter_for, ReportContext, ReportFormat};
use poly_standing::core::standing::build_transcript;
use poly_standing::{error, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Run the transcript command.
///
/// # Arguments
/// * `results_file` - Path to the results CSV
/// * `output_file` - Optional output path
/// * `format` - Report format
/// * `student` - Heading label, defaulting to the results file stem
/// * `config` - Configuration containing the default reports directory
pub fn run(
    results_file: &Path,
    output_file: Option<&Path>,
    format: ReportFormat,
    student: Option<&str>,
    config: &Config,
) -> Result<(), String> {
    let records = load_results(results_file).map_err(|e| {
        error!("Failed to load results {}: {e}", results_file.display());
        format!("✗ Failed to load {}: {e}", results_file.display())
    })?;

    let stem = results_file
        .file_stem()
        .map_or_else(|| "transcript".to_string(), |s| s.to_string_lossy().to_string());
    let output_path = output_path(output_file, &stem, format, config)?;

    let transcript = build_transcript(&records);
    let ctx = ReportContext::new(student.unwrap_or(&stem), &transcript);
    reporter_for(format)
        .generate(&ctx, &output_path)
        .map_err(|e| format!("✗ Failed to generate {format} report: {e}"))?;

    info!("Transcript written: {}", output_path.display());
    println!("✓ Transcript written to {}", output_path.display());
    println!(
        "  {} period(s), CGPA {:.2}, {} carry-over(s)",
        ctx.summary.periods, ctx.summary.cgpa, ctx.summary.carry_over_count
    );
    Ok(())
}

/// Resolve where the report goes, creating the reports directory if needed
fn output_path(
    output_file: Option<&Path>,
    stem: &str,
    format: ReportFormat,
    config: &Config,
) -> Result<PathBuf, String> {
    if let Some(path) = output_file {
        return Ok(path.to_path_buf());
    }

    let dir = if config.paths.reports_dir.is_empty() {
        PathBuf::from(".")
    } else {
        PathBuf::from(&config.paths.reports_dir)
    };
    fs::create_dir_all(&dir)
        .map_err(|e| format!("✗ Failed to create {}: {e}", dir.display()))?;
    Ok(dir.join(format!("{stem}_transcript.{}", format.extension())))
}
