//! **Scholarship readiness self-assessment for students.**
//!
//! `negari-readiness` scores a short multiple-choice self-assessment and turns
//! it into a normalized readiness percentage, a readiness level and a ranked
//! list of recommendations. It powers the `negari` command-line quiz and can
//! be embedded by any frontend that collects the answers itself.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: questions, answer options and the versioned [`QuestionSet`].
//!   The built-in set has five questions, one per [`Category`], each with five
//!   options worth 5 down to 1 points. Custom sets load from YAML or JSON and
//!   are validated on load.
//! - **[`scoring`]**: the pure [`ReadinessScorer`]. It never fails: unanswered
//!   questions score zero and the percentage is always taken against the full
//!   set.
//! - **[`session`]**: an immutable [`SessionState`] advanced by a reducer. A
//!   completed session emits an event that a [`ResultSink`] consumes for
//!   persistence.
//! - **[`reports`]**: summary, JSON and Markdown renderers.
//! - **[`config`]**: YAML configuration with discovery, presets and validation.
//!
//! ## Getting Started: Scoring Answers
//!
//! ```
//! use negari_readiness::{score, AnswerSet, QuestionSet, ReadinessLevel};
//!
//! let questions = QuestionSet::builtin();
//! let answers = AnswerSet::new()
//!     .with_answer("academic_performance", "excellent")
//!     .with_answer("english_proficiency", "fluent")
//!     .with_answer("extracurricular", "regular")
//!     .with_answer("leadership", "significant")
//!     .with_answer("financial_planning", "partial");
//!
//! let result = score(&questions, &answers);
//! assert_eq!(result.total_score, 22);
//! assert_eq!(result.percentage, 88.0);
//! assert_eq!(result.level, ReadinessLevel::Excellent);
//! ```
//!
//! ### Driving a Session
//!
//! ```
//! use negari_readiness::{QuestionSet, ReadinessScorer, SessionAction, SessionState};
//!
//! fn main() -> negari_readiness::Result<()> {
//!     let questions = QuestionSet::builtin();
//!     let scorer = ReadinessScorer::default();
//!
//!     let mut state = SessionState::new();
//!     for value in ["good", "advanced", "some", "informal", "researching"] {
//!         state = state.apply(&questions, &scorer, SessionAction::Answer(value.into()))?.state;
//!     }
//!
//!     let result = state.result().expect("session is complete");
//!     assert_eq!(result.total_score, 16);
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Point totals and question counts are small; usize/u32 to f64 casts are exact
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::struct_excessive_bools,
    clippy::module_name_repetitions
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod reports;
pub mod scoring;
pub mod session;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigPreset};
pub use config::{ConfigError, Validatable};
pub use error::{ErrorContext, OptionContext, ReadinessError, Result};
pub use model::{AnswerOption, AnswerSet, Category, Question, QuestionSet};
pub use reports::{ReportFormat, ReportGenerator};
pub use scoring::{score, AssessmentResult, ReadinessLevel, ReadinessScorer, ScoringOptions};
pub use session::{
    forward_events, AssessmentRecord, ResultSink, SessionAction, SessionEvent, SessionState,
};
