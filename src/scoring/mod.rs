//! Readiness scoring engine.
//!
//! Turns a user's self-assessment answers into a normalized readiness score,
//! a [`ReadinessLevel`] and an ordered list of recommendations.
//!
//! # Usage
//!
//! ```
//! use negari_readiness::model::{AnswerSet, QuestionSet};
//! use negari_readiness::scoring::{score, ReadinessLevel};
//!
//! let questions = QuestionSet::builtin();
//! let answers: AnswerSet = questions
//!     .iter()
//!     .filter_map(|q| q.best_option().map(|o| (q.id.clone(), o.value.clone())))
//!     .collect();
//!
//! let result = score(&questions, &answers);
//! assert_eq!(result.percentage, 100.0);
//! assert_eq!(result.level, ReadinessLevel::Excellent);
//! ```

mod engine;
mod level;
mod recommendations;

pub use engine::{
    score, AssessmentResult, ReadinessScorer, ScoringOptions, SCORING_ENGINE_VERSION,
};
pub use level::ReadinessLevel;
pub use recommendations::{
    advisory_message, advisory_threshold, tier_messages, ADVISORY_ORDER,
};
