//! JSON report generator.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::scoring::AssessmentResult;
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, result: &AssessmentResult) -> Result<String, ReportError> {
        let report = JsonAssessmentReport {
            metadata: JsonReportMetadata {
                tool: ToolInfo {
                    name: "negari".to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                },
                generated_at: Utc::now().to_rfc3339(),
            },
            result,
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };
        json.map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[derive(Serialize)]
struct JsonAssessmentReport<'a> {
    metadata: JsonReportMetadata,
    result: &'a AssessmentResult,
}

#[derive(Serialize)]
struct JsonReportMetadata {
    tool: ToolInfo,
    generated_at: String,
}

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerSet, QuestionSet};
    use crate::scoring::score;

    #[test]
    fn test_json_report_structure() {
        let questions = QuestionSet::builtin();
        let answers = AnswerSet::new().with_answer("english_proficiency", "fluent");
        let result = score(&questions, &answers);

        let json = JsonReporter::new().pretty(false).generate(&result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["metadata"]["tool"]["name"], "negari");
        assert_eq!(value["result"]["scoring_engine_version"], "1.0");
        assert_eq!(value["result"]["max_score"], 25);
        assert_eq!(value["result"]["level"], "Needs Work");
        assert!(value["result"]["recommendations"].is_array());
    }
}
