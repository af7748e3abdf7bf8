//! Shared plumbing for CLI command handlers.
//!
//! Resolves the active question set, renders results and writes them to the
//! configured target.

mod output;

pub use output::{should_use_color, write_output, OutputTarget};

use crate::config::AppConfig;
use crate::model::QuestionSet;
use crate::reports::create_reporter_with_options;
use crate::scoring::AssessmentResult;
use anyhow::{Context, Result};

/// Exit codes for scripted use
pub mod exit_codes {
    /// Success (or no `--min-score` gate)
    pub const SUCCESS: i32 = 0;
    /// Percentage score fell below `--min-score`
    pub const BELOW_THRESHOLD: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

/// Load the configured question asset, or the built-in set.
pub fn load_questions(config: &AppConfig) -> Result<QuestionSet> {
    match &config.questions.file {
        Some(path) => QuestionSet::from_path(path)
            .with_context(|| format!("Failed to load questions from {}", path.display())),
        None => Ok(QuestionSet::builtin()),
    }
}

/// Render a result in the configured format and write it out.
pub fn output_report(result: &AssessmentResult, config: &AppConfig) -> Result<()> {
    let target = OutputTarget::from_option(config.output.file.clone());
    let use_color = should_use_color(config.output.no_color, &target);
    let reporter = create_reporter_with_options(config.output.format, use_color);
    let report = reporter
        .generate(result)
        .with_context(|| format!("Failed to render {} report", config.output.format))?;
    write_output(&report, &target, config.behavior.quiet)
}

/// Map a result to an exit code under an optional minimum percentage.
#[must_use]
pub fn exit_code_for(result: &AssessmentResult, min_score: Option<f64>) -> i32 {
    match min_score {
        Some(min) if result.percentage < min => {
            tracing::warn!(
                "Readiness score {:.1}% is below the minimum of {:.1}%",
                result.percentage,
                min
            );
            exit_codes::BELOW_THRESHOLD
        }
        _ => exit_codes::SUCCESS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnswerSet;
    use crate::scoring::score;

    #[test]
    fn test_exit_code_for_threshold() {
        let questions = QuestionSet::builtin();
        let result = score(&questions, &AnswerSet::new().with_answer("leadership", "multiple"));

        assert_eq!(exit_code_for(&result, None), exit_codes::SUCCESS);
        assert_eq!(exit_code_for(&result, Some(20.0)), exit_codes::SUCCESS);
        assert_eq!(exit_code_for(&result, Some(20.5)), exit_codes::BELOW_THRESHOLD);
    }

    #[test]
    fn test_load_questions_defaults_to_builtin() {
        let questions = load_questions(&AppConfig::default()).unwrap();
        assert_eq!(questions.version(), crate::model::BUILTIN_VERSION);
    }
}
