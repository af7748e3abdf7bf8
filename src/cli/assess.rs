//! Assess command handler.
//!
//! Implements the `assess` subcommand: an interactive terminal quiz driven by
//! the session reducer. Prompts go to stderr so the final report can be
//! redirected.

use crate::config::AppConfig;
use crate::model::{Question, QuestionSet};
use crate::pipeline::{exit_code_for, exit_codes, load_questions, output_report};
use crate::scoring::{AssessmentResult, ReadinessScorer};
use crate::session::{
    forward_events, JsonLinesSink, NoOpSink, SessionAction, SessionEvent, SessionState,
};
use anyhow::{Context, Result};
use chrono::Utc;
use std::io::{BufRead, Write};

/// A finished quiz: the final result and every event the session emitted.
#[derive(Debug, Clone)]
pub struct Completion {
    pub result: AssessmentResult,
    pub events: Vec<SessionEvent>,
}

/// Run the assess command, returning the desired exit code.
pub fn run_assess(config: &AppConfig) -> Result<i32> {
    let questions = load_questions(config)?;
    let scorer = ReadinessScorer::new(config.scoring);

    let stdin = std::io::stdin();
    let mut prompts = std::io::stderr();
    let Some(completion) = take_assessment(&questions, &scorer, stdin.lock(), &mut prompts)?
    else {
        tracing::info!("Assessment abandoned; nothing recorded");
        return Ok(exit_codes::SUCCESS);
    };

    record_completion(&completion.events, config);
    output_report(&completion.result, config)?;
    Ok(exit_code_for(&completion.result, config.behavior.min_score))
}

/// Walk the user through every question.
///
/// Returns `None` when the user quits or input ends before the last answer.
pub fn take_assessment<R: BufRead, W: Write>(
    questions: &QuestionSet,
    scorer: &ReadinessScorer,
    input: R,
    out: &mut W,
) -> Result<Option<Completion>> {
    let mut state = SessionState::new();
    let mut events = Vec::new();
    let mut lines = input.lines();

    while let Some(question) = state.current_question(questions) {
        let progress = state.progress(questions, scorer);
        writeln!(out)?;
        writeln!(
            out,
            "Question {} of {} [{:.0}%]  ({})",
            progress.position, progress.total, progress.percent_through, question.category
        )?;
        write_question(out, question, state.answers().get(&question.id))?;
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line.context("Failed to read answer")?;

        let action = match parse_input(line.trim(), question) {
            Input::Quit => return Ok(None),
            Input::Back if progress.position == 1 => {
                writeln!(out, "Already at the first question")?;
                continue;
            }
            Input::Back => SessionAction::Previous,
            Input::Restart => SessionAction::Reset,
            Input::Choice(value) => SessionAction::Answer(value),
            Input::Invalid => {
                writeln!(
                    out,
                    "Enter a number from 1 to {}, 'b' to go back or 'q' to quit",
                    question.options.len()
                )?;
                continue;
            }
        };

        let transition = state.apply(questions, scorer, action)?;
        events.extend(transition.events);
        state = transition.state;
    }

    Ok(state.result().cloned().map(|result| Completion { result, events }))
}

fn write_question<W: Write>(out: &mut W, question: &Question, current: Option<&str>) -> Result<()> {
    writeln!(out, "{}", question.prompt)?;
    for (number, option) in question.options.iter().enumerate() {
        let marker = if current == Some(option.value.as_str()) { "*" } else { " " };
        writeln!(out, " {marker}{}. {}", number + 1, option.label)?;
    }
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Choice(String),
    Back,
    Restart,
    Quit,
    Invalid,
}

/// Accepts an option number or an option value.
fn parse_input(line: &str, question: &Question) -> Input {
    match line.to_lowercase().as_str() {
        "q" | "quit" => return Input::Quit,
        "b" | "back" => return Input::Back,
        "r" | "restart" => return Input::Restart,
        _ => {}
    }

    if let Ok(number) = line.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|i| question.options.get(i))
            .map_or(Input::Invalid, |option| Input::Choice(option.value.clone()));
    }

    question
        .option(line)
        .map_or(Input::Invalid, |option| Input::Choice(option.value.clone()))
}

/// Persist completion events when a user and records file are configured.
fn record_completion(events: &[SessionEvent], config: &AppConfig) {
    let persistence = &config.persistence;
    let (Some(user_id), Some(records_file)) = (&persistence.user_id, &persistence.records_file)
    else {
        forward_events(events, &NoOpSink, "anonymous", Utc::now());
        return;
    };

    let sink = JsonLinesSink::new(records_file);
    let recorded = forward_events(events, &sink, user_id, Utc::now());
    if recorded > 0 && !config.behavior.quiet {
        tracing::info!(
            "Recorded assessment for {} in {}",
            user_id,
            sink.path().display()
        );
    }
}
