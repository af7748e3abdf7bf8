//! Report generation for assessment results.
//!
//! Three output formats are supported:
//! - Summary: colored terminal output for the student taking the quiz
//! - JSON: structured data for programmatic integration
//! - Markdown: shareable report for mentors

mod json;
mod markdown;
mod summary;
mod types;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::SummaryReporter;
pub use types::ReportFormat;

use crate::scoring::AssessmentResult;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render an assessment result
    fn generate(&self, result: &AssessmentResult) -> Result<String, ReportError>;

    /// Write the rendered report to a writer
    fn write_report(
        &self,
        result: &AssessmentResult,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate(result)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => {
            let reporter = SummaryReporter::new();
            if use_color {
                Box::new(reporter)
            } else {
                Box::new(reporter.no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_reporter_formats() {
        for format in [ReportFormat::Summary, ReportFormat::Json, ReportFormat::Markdown] {
            assert_eq!(create_reporter(format).format(), format);
        }
    }
}
