//! Score command handler.
//!
//! Implements the `score` subcommand: score a saved answers map without
//! taking the quiz interactively.

use crate::config::AppConfig;
use crate::model::{AnswerSet, QuestionSet};
use crate::pipeline::{exit_code_for, load_questions, output_report};
use crate::scoring::ReadinessScorer;
use anyhow::{Context, Result};
use std::path::Path;

/// Run the score command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_score(answers_path: &Path, config: &AppConfig) -> Result<i32> {
    let questions = load_questions(config)?;
    let answers = load_answers(answers_path)?;

    warn_unresolved(&questions, &answers);

    let result = ReadinessScorer::new(config.scoring).score(&questions, &answers);
    if !result.is_complete() {
        tracing::warn!(
            "Only {} of {} questions answered; unanswered questions score zero",
            result.answered,
            result.question_count
        );
    }

    output_report(&result, config)?;
    Ok(exit_code_for(&result, config.behavior.min_score))
}

/// Read a `question id -> option value` map from a YAML or JSON file.
pub fn load_answers(path: &Path) -> Result<AnswerSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers from {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON answers in {}", path.display()))
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid YAML answers in {}", path.display()))
    }
}

/// Log answers that will not contribute to the score.
fn warn_unresolved(questions: &QuestionSet, answers: &AnswerSet) {
    for (question_id, value) in answers.iter() {
        match questions.get(question_id) {
            None => tracing::warn!("Ignoring answer for unknown question '{question_id}'"),
            Some(question) if question.option(value).is_none() => tracing::warn!(
                "Answer '{value}' is not an option of '{question_id}'; it scores zero"
            ),
            Some(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::exit_codes;
    use tempfile::TempDir;

    #[test]
    fn test_load_answers_yaml_and_json() {
        let tmp = TempDir::new().unwrap();
        let yaml = tmp.path().join("answers.yaml");
        std::fs::write(&yaml, "leadership: multiple\nfinancial_planning: funded\n").unwrap();
        let json = tmp.path().join("answers.json");
        std::fs::write(&json, r#"{"leadership": "multiple"}"#).unwrap();

        let from_yaml = load_answers(&yaml).unwrap();
        assert_eq!(from_yaml.len(), 2);
        assert_eq!(from_yaml.get("financial_planning"), Some("funded"));
        assert_eq!(load_answers(&json).unwrap().get("leadership"), Some("multiple"));
    }

    #[test]
    fn test_load_answers_rejects_non_map() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("answers.yaml");
        std::fs::write(&path, "- leadership\n- multiple\n").unwrap();
        assert!(load_answers(&path).is_err());
    }

    #[test]
    fn test_run_score_min_score_gate() {
        let tmp = TempDir::new().unwrap();
        let answers = tmp.path().join("answers.yaml");
        std::fs::write(&answers, "leadership: multiple\n").unwrap();

        let config = AppConfig::builder()
            .output_file(Some(tmp.path().join("report.json")))
            .output_format(crate::reports::ReportFormat::Json)
            .quiet(true)
            .min_score(Some(50.0))
            .build();

        assert_eq!(
            run_score(&answers, &config).unwrap(),
            exit_codes::BELOW_THRESHOLD
        );
        assert!(tmp.path().join("report.json").exists());
    }
}
