//! Markdown report generator.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::model::Category;
use crate::scoring::AssessmentResult;
use std::fmt::Write;

/// Markdown reporter
#[derive(Default)]
pub struct MarkdownReporter;

impl MarkdownReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, result: &AssessmentResult) -> Result<String, ReportError> {
        let mut md = String::new();

        writeln!(md, "# Scholarship Readiness Report")?;
        writeln!(md)?;
        writeln!(md, "| Metric | Value |")?;
        writeln!(md, "|--------|-------|")?;
        writeln!(md, "| Score | {}/{} |", result.total_score, result.max_score)?;
        writeln!(md, "| Percentage | {:.0}% |", result.percentage)?;
        writeln!(md, "| Level | **{}** |", result.level)?;
        writeln!(
            md,
            "| Answered | {} of {} |",
            result.answered, result.question_count
        )?;
        writeln!(md)?;

        writeln!(md, "## Categories")?;
        writeln!(md)?;
        writeln!(md, "| Category | Points |")?;
        writeln!(md, "|----------|--------|")?;
        for category in Category::ALL {
            match result.category_score(category) {
                Some(points) => writeln!(md, "| {category} | {points} |")?,
                None => writeln!(md, "| {category} | - |")?,
            }
        }
        writeln!(md)?;

        writeln!(md, "## Recommendations")?;
        writeln!(md)?;
        for recommendation in &result.recommendations {
            writeln!(md, "- {recommendation}")?;
        }

        writeln!(md)?;
        writeln!(
            md,
            "---\n*Generated by negari {} (scoring engine {})*",
            env!("CARGO_PKG_VERSION"),
            result.scoring_engine_version
        )?;

        Ok(md)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerSet, QuestionSet};
    use crate::scoring::score;

    #[test]
    fn test_markdown_lists_every_category() {
        let questions = QuestionSet::builtin();
        let answers = AnswerSet::new().with_answer("leadership", "multiple");
        let md = MarkdownReporter::new()
            .generate(&score(&questions, &answers))
            .unwrap();

        assert!(md.starts_with("# Scholarship Readiness Report"));
        assert!(md.contains("| Leadership | 5 |"));
        assert!(md.contains("| Academic | - |"));
        assert!(md.contains("| Answered | 1 of 5 |"));
        assert!(md.contains("- Focus on building a stronger foundation before applying"));
    }
}
