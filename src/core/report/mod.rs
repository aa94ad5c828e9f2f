//! Transcript report generation
//!
//! Renders a [`Transcript`] as Markdown or HTML through askama templates
//! under `templates/`.

pub mod formats;

use crate::core::error::{Result, StandingError};
use crate::core::standing::{StandingSummary, Transcript};
use std::fs;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Data context for report generation
///
/// Aggregates everything a transcript template reads.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Label printed in the report heading (student name or matric number)
    pub student: &'a str,
    /// Transcript being reported
    pub transcript: &'a Transcript,
    /// Headline figures
    pub summary: StandingSummary,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub fn new(student: &'a str, transcript: &'a Transcript) -> Self {
        Self {
            student,
            transcript,
            summary: transcript.summary(),
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if template rendering fails
    fn render(&self, ctx: &ReportContext) -> Result<String>;

    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if rendering or writing the file fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<()> {
        let content = self.render(ctx)?;
        fs::write(output_path, content).map_err(|source| StandingError::Io {
            path: output_path.to_path_buf(),
            source,
        })
    }
}

/// Pick the generator for a format
#[must_use]
pub fn reporter_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
    }
}
