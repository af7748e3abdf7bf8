//! Summary report generator for shell output.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::model::Category;
use crate::scoring::{AssessmentResult, ReadinessLevel};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn level_color(level: ReadinessLevel) -> &'static str {
    match level {
        ReadinessLevel::Excellent | ReadinessLevel::Good => "green",
        ReadinessLevel::Fair => "yellow",
        ReadinessLevel::NeedsWork => "red",
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(&self, result: &AssessmentResult) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        lines.push(self.color("Scholarship Readiness", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        lines.push(format!(
            "{}  {}/{} ({:.0}%)",
            self.color("Score:", "cyan"),
            result.total_score,
            result.max_score,
            result.percentage
        ));
        lines.push(format!(
            "{}  {}",
            self.color("Level:", "cyan"),
            self.color(result.level.label(), level_color(result.level))
        ));
        if !result.is_complete() {
            lines.push(format!(
                "{}  {} of {} questions answered",
                self.color("Note:", "yellow"),
                result.answered,
                result.question_count
            ));
        }

        lines.push(String::new());
        lines.push(self.color("Categories:", "bold"));
        for category in Category::ALL {
            let subtotal = result
                .category_score(category)
                .map_or_else(|| self.color("-", "dim"), |points| points.to_string());
            lines.push(format!("  {:<12} {subtotal}", category.name()));
        }

        lines.push(String::new());
        lines.push(self.color("Recommendations:", "bold"));
        for recommendation in &result.recommendations {
            lines.push(format!("  • {recommendation}"));
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
