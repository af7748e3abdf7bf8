//! Readiness scorer.
//!
//! Maps an answer set over a question set to an [`AssessmentResult`]. Scoring
//! is pure and total: unanswered questions (and answers naming an unknown
//! option) contribute zero points, and the percentage is always taken
//! against the full `questions.len() * 5`.

use super::level::ReadinessLevel;
use super::recommendations;
use crate::model::{max_score_for, AnswerSet, Category, Question};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Readiness scoring engine version
pub const SCORING_ENGINE_VERSION: &str = "1.0";

/// Options that change how recommendations are generated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoringOptions {
    /// Also emit an advisory when the Academic subtotal is low
    pub academic_advisory: bool,
}

/// Outcome of scoring an answer set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct AssessmentResult {
    /// Scoring engine version
    pub scoring_engine_version: String,
    /// Sum of the selected options' points
    pub total_score: u32,
    /// `question_count * 5`
    pub max_score: u32,
    /// `total_score / max_score * 100` (0-100)
    pub percentage: f64,
    /// Tier for `percentage`
    pub level: ReadinessLevel,
    /// Questions whose answer resolved to an option
    pub answered: usize,
    /// Questions in the set that was scored
    pub question_count: usize,
    /// Point subtotal per category, for answered categories only
    pub category_scores: BTreeMap<Category, u32>,
    /// Tier block followed by category advisories
    pub recommendations: Vec<String>,
}

impl AssessmentResult {
    /// Whether every question had a resolvable answer
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.answered == self.question_count
    }

    /// Subtotal for one category, `None` if nothing was answered there
    #[must_use]
    pub fn category_score(&self, category: Category) -> Option<u32> {
        self.category_scores.get(&category).copied()
    }
}

/// Readiness scorer
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadinessScorer {
    options: ScoringOptions,
}

impl ReadinessScorer {
    /// Create a scorer with the given options
    #[must_use]
    pub const fn new(options: ScoringOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> ScoringOptions {
        self.options
    }

    /// Score an answer set
    pub fn score(&self, questions: &[Question], answers: &AnswerSet) -> AssessmentResult {
        let mut total_score = 0_u32;
        let mut answered = 0_usize;
        let mut category_scores: BTreeMap<Category, u32> = BTreeMap::new();

        for question in questions {
            let Some(points) = answers
                .get(&question.id)
                .and_then(|value| question.points_for(value))
            else {
                continue;
            };
            let points = u32::from(points);
            total_score += points;
            answered += 1;
            *category_scores.entry(question.category).or_insert(0) += points;
        }

        let max_score = max_score_for(questions.len());
        let percentage = percentage_of(total_score, max_score);
        let level = ReadinessLevel::from_percentage(percentage);
        let recommendations =
            recommendations::build(level, &category_scores, self.options.academic_advisory);

        tracing::debug!(
            "Scored {}/{} answers: {}/{} ({:.1}%, {})",
            answered,
            questions.len(),
            total_score,
            max_score,
            percentage,
            level
        );

        AssessmentResult {
            scoring_engine_version: SCORING_ENGINE_VERSION.to_string(),
            total_score,
            max_score,
            percentage,
            level,
            answered,
            question_count: questions.len(),
            category_scores,
            recommendations,
        }
    }
}

/// Score with default options
pub fn score(questions: &[Question], answers: &AnswerSet) -> AssessmentResult {
    ReadinessScorer::default().score(questions, answers)
}

/// Multiplies before dividing so tier boundaries come out exact.
fn percentage_of(total: u32, max: u32) -> f64 {
    if max == 0 {
        return 0.0;
    }
    f64::from(total * 100) / f64::from(max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionSet;

    #[test]
    fn test_percentage_exact_at_boundaries() {
        assert_eq!(percentage_of(20, 25), 80.0);
        assert_eq!(percentage_of(15, 25), 60.0);
        assert_eq!(percentage_of(10, 25), 40.0);
        assert_eq!(percentage_of(0, 0), 0.0);
    }

    #[test]
    fn test_unknown_option_counts_as_unanswered() {
        let set = QuestionSet::builtin();
        let answers = AnswerSet::new()
            .with_answer("academic_performance", "excellent")
            .with_answer("english_proficiency", "klingon");

        let result = score(&set, &answers);

        assert_eq!(result.total_score, 5);
        assert_eq!(result.answered, 1);
        assert_eq!(result.category_score(Category::Language), None);
        assert!(!result.is_complete());
    }

    #[test]
    fn test_foreign_answer_ids_are_ignored() {
        let set = QuestionSet::builtin();
        let answers = AnswerSet::new().with_answer("favourite_colour", "blue");

        let result = score(&set, &answers);

        assert_eq!(result.total_score, 0);
        assert_eq!(result.answered, 0);
        assert_eq!(result.max_score, 25);
        assert_eq!(result.level, ReadinessLevel::NeedsWork);
    }

    #[test]
    fn test_empty_question_slice_is_total() {
        let result = score(&[], &AnswerSet::new());
        assert_eq!(result.max_score, 0);
        assert_eq!(result.percentage, 0.0);
        assert!(result.is_complete());
        assert!(!result.recommendations.is_empty());
    }

    #[test]
    fn test_scoring_engine_version() {
        assert_eq!(SCORING_ENGINE_VERSION, "1.0");
    }
}
