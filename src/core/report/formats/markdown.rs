//! Markdown transcript generator
//!
//! One table per period plus a summary table; renders in GitHub, GitLab,
//! and most editors.

use crate::core::error::Result;
use crate::core::report::{ReportContext, ReportGenerator};
use askama::Template;

#[derive(Template)]
#[template(path = "transcript.md")]
struct MarkdownTranscript<'a> {
    ctx: &'a ReportContext<'a>,
}

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String> {
        Ok(MarkdownTranscript { ctx }.render()?)
    }
}
