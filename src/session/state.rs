//! Assessment session state machine.
//!
//! A session is an immutable value. [`SessionState::apply`] borrows the
//! current state and returns the next one together with the events the
//! transition emitted; callers replace their state with the returned value.

use crate::error::{ReadinessError, Result, SessionErrorKind};
use crate::model::{AnswerSet, Question, QuestionSet};
use crate::scoring::{AssessmentResult, ReadinessScorer};
use serde::Serialize;

/// Where the user is in the assessment
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    /// Answering questions; `current_index` points into the question set
    InProgress {
        current_index: usize,
        answers: AnswerSet,
    },
    /// All questions answered and scored
    Completed {
        answers: AnswerSet,
        result: AssessmentResult,
    },
}

/// User input driving the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Answer the current question with an option value and move on
    Answer(String),
    /// Go back one question, keeping recorded answers
    Previous,
    /// Discard answers and result and start over
    Reset,
}

/// Emitted by transitions for collaborators outside the engine
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// The last question was answered and the set was scored
    Completed {
        answers: AnswerSet,
        result: AssessmentResult,
    },
    /// The session was reset
    Reset,
}

/// Result of applying an action
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct Transition {
    pub state: SessionState,
    pub events: Vec<SessionEvent>,
}

impl Transition {
    fn quiet(state: SessionState) -> Self {
        Self {
            state,
            events: Vec::new(),
        }
    }
}

/// Live progress through an in-progress or completed session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Progress {
    /// 1-based number of the question being shown
    pub position: usize,
    /// Questions in the set
    pub total: usize,
    /// Share of the set reached so far (0-100)
    pub percent_through: f64,
    /// Score of the answers recorded so far, missing answers counting zero
    pub partial: AssessmentResult,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// A fresh session at the first question
    #[must_use]
    pub fn new() -> Self {
        Self::InProgress {
            current_index: 0,
            answers: AnswerSet::new(),
        }
    }

    /// Apply an action, producing the next state.
    ///
    /// Answering or going back after completion is rejected, as is an answer
    /// that is not one of the current question's options.
    pub fn apply(
        &self,
        questions: &QuestionSet,
        scorer: &ReadinessScorer,
        action: SessionAction,
    ) -> Result<Transition> {
        match (self, action) {
            (_, SessionAction::Reset) => {
                tracing::debug!("Assessment session reset");
                Ok(Transition {
                    state: Self::new(),
                    events: vec![SessionEvent::Reset],
                })
            }
            (Self::Completed { .. }, SessionAction::Answer(_) | SessionAction::Previous) => {
                Err(ReadinessError::session(
                    "applying action",
                    SessionErrorKind::AlreadyCompleted,
                ))
            }
            (Self::InProgress { current_index, answers }, SessionAction::Previous) => {
                Ok(Transition::quiet(Self::InProgress {
                    current_index: current_index.saturating_sub(1),
                    answers: answers.clone(),
                }))
            }
            (Self::InProgress { current_index, answers }, SessionAction::Answer(value)) => {
                answer(questions, scorer, *current_index, answers, value)
            }
        }
    }

    /// Index of the question being shown, `None` once completed
    #[must_use]
    pub const fn current_index(&self) -> Option<usize> {
        match self {
            Self::InProgress { current_index, .. } => Some(*current_index),
            Self::Completed { .. } => None,
        }
    }

    /// The question being shown
    #[must_use]
    pub fn current_question<'q>(&self, questions: &'q QuestionSet) -> Option<&'q Question> {
        self.current_index().and_then(|i| questions.questions().get(i))
    }

    #[must_use]
    pub const fn answers(&self) -> &AnswerSet {
        match self {
            Self::InProgress { answers, .. } | Self::Completed { answers, .. } => answers,
        }
    }

    #[must_use]
    pub const fn result(&self) -> Option<&AssessmentResult> {
        match self {
            Self::Completed { result, .. } => Some(result),
            Self::InProgress { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    /// Live progress, scoring whatever has been answered so far
    pub fn progress(&self, questions: &QuestionSet, scorer: &ReadinessScorer) -> Progress {
        let total = questions.len();
        let position = match self {
            Self::InProgress { current_index, .. } => (current_index + 1).min(total),
            Self::Completed { .. } => total,
        };
        let percent_through = if total == 0 {
            0.0
        } else {
            position as f64 / total as f64 * 100.0
        };

        Progress {
            position,
            total,
            percent_through,
            partial: scorer.score(questions, self.answers()),
        }
    }
}

fn answer(
    questions: &QuestionSet,
    scorer: &ReadinessScorer,
    current_index: usize,
    answers: &AnswerSet,
    value: String,
) -> Result<Transition> {
    let question = questions.questions().get(current_index).ok_or_else(|| {
        ReadinessError::validation(format!(
            "question index {current_index} is outside a set of {} questions",
            questions.len()
        ))
    })?;

    if question.option(&value).is_none() {
        return Err(ReadinessError::session(
            "answering question",
            SessionErrorKind::UnknownOption {
                question: question.id.clone(),
                value,
            },
        ));
    }

    let mut answers = answers.clone();
    answers.insert(question.id.clone(), value);

    if current_index + 1 < questions.len() {
        return Ok(Transition::quiet(SessionState::InProgress {
            current_index: current_index + 1,
            answers,
        }));
    }

    let result = scorer.score(questions, &answers);
    tracing::debug!(
        "Assessment completed at {:.1}% ({})",
        result.percentage,
        result.level
    );
    Ok(Transition {
        state: SessionState::Completed {
            answers: answers.clone(),
            result: result.clone(),
        },
        events: vec![SessionEvent::Completed { answers, result }],
    })
}
