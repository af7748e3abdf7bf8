//! Question and answer data model.
//!
//! Questions are immutable records grouped into a versioned [`QuestionSet`];
//! answers are collected into an [`AnswerSet`] keyed by question id.

mod answers;
mod catalog;
mod question;

pub use answers::AnswerSet;
pub use catalog::{max_score_for, QuestionSet, BUILTIN_VERSION};
pub use question::{AnswerOption, Category, Question, MAX_OPTION_POINTS, MIN_OPTION_POINTS};
