//! Questions command handler.
//!
//! Lists the active question set with each option's point value.

use crate::config::AppConfig;
use crate::model::QuestionSet;
use crate::pipeline::{exit_codes, load_questions, write_output, OutputTarget};
use crate::reports::ReportFormat;
use anyhow::{Context, Result};
use std::fmt::Write;

/// Run the questions command, returning the desired exit code.
pub fn run_questions(config: &AppConfig) -> Result<i32> {
    let questions = load_questions(config)?;

    let text = match config.output.format {
        ReportFormat::Json => serde_json::to_string_pretty(&questions)
            .context("Failed to serialize question set")?,
        ReportFormat::Markdown => format_questions_markdown(&questions)?,
        ReportFormat::Summary => format_questions_text(&questions)?,
    };

    let target = OutputTarget::from_option(config.output.file.clone());
    write_output(&text, &target, config.behavior.quiet)?;
    Ok(exit_codes::SUCCESS)
}

fn format_questions_text(questions: &QuestionSet) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        "Question set {} ({} questions, max {} points)",
        questions.version(),
        questions.len(),
        questions.max_score()
    )?;
    for (index, question) in questions.iter().enumerate() {
        writeln!(out)?;
        writeln!(
            out,
            "{}. [{}] {} ({})",
            index + 1,
            question.category,
            question.prompt,
            question.id
        )?;
        for option in &question.options {
            writeln!(out, "   {} pts  {:<14} {}", option.points, option.value, option.label)?;
        }
    }
    Ok(out)
}

fn format_questions_markdown(questions: &QuestionSet) -> Result<String, std::fmt::Error> {
    let mut md = String::new();
    writeln!(md, "# Question set `{}`", questions.version())?;
    for question in questions.iter() {
        writeln!(md)?;
        writeln!(md, "## {} ({})", question.prompt, question.category)?;
        writeln!(md)?;
        writeln!(md, "| Value | Answer | Points |")?;
        writeln!(md, "|-------|--------|--------|")?;
        for option in &question.options {
            writeln!(
                md,
                "| `{}` | {} | {} |",
                option.value,
                option.label.replace('|', "\\|"),
                option.points
            )?;
        }
    }
    Ok(md)
}
