//! HTML transcript generator
//!
//! Produces a self-contained page with embedded CSS. Carry-over rows and
//! failing grades are highlighted.

use crate::core::error::Result;
use crate::core::report::{ReportContext, ReportGenerator};
use askama::Template;

#[derive(Template)]
#[template(path = "transcript.html")]
struct HtmlTranscript<'a> {
    ctx: &'a ReportContext<'a>,
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String> {
        Ok(HtmlTranscript { ctx }.render()?)
    }
}
