//! Golden scoring tests against the built-in question set.
//!
//! Recommendation strings are part of the scoring contract, so these tests
//! compare them verbatim.

use negari_readiness::model::{AnswerSet, Category, QuestionSet};
use negari_readiness::scoring::{
    score, tier_messages, ReadinessLevel, ReadinessScorer, ScoringOptions, ADVISORY_ORDER,
};

const LANGUAGE_ADVICE: &str = "Improve your English proficiency and prepare for IELTS or TOEFL";
const EXPERIENCE_ADVICE: &str = "Gain more extracurricular and volunteer experience";
const LEADERSHIP_ADVICE: &str = "Seek leadership roles in school clubs or community organizations";
const FINANCIAL_ADVICE: &str = "Research fully-funded scholarships and financial aid options";
const ACADEMIC_ADVICE: &str = "Strengthen your academic record and grades in core subjects";

fn answer_all(questions: &QuestionSet, pick_best: bool) -> AnswerSet {
    questions
        .iter()
        .filter_map(|q| {
            let option = if pick_best {
                q.best_option()
            } else {
                q.worst_option()
            };
            option.map(|o| (q.id.clone(), o.value.clone()))
        })
        .collect()
}

#[test]
fn all_best_answers_are_excellent_without_advisories() {
    let questions = QuestionSet::builtin();
    let result = score(&questions, &answer_all(&questions, true));

    assert_eq!(result.total_score, 25);
    assert_eq!(result.max_score, 25);
    assert_eq!(result.percentage, 100.0);
    assert_eq!(result.level, ReadinessLevel::Excellent);
    assert_eq!(
        result.recommendations,
        vec![
            "You are well-prepared for competitive scholarship applications",
            "Focus on top-tier universities and prestigious scholarship programs",
            "Start your application process immediately",
        ]
    );
}

#[test]
fn all_worst_answers_need_work_with_every_advisory() {
    let questions = QuestionSet::builtin();
    let result = score(&questions, &answer_all(&questions, false));

    assert_eq!(result.total_score, 5);
    assert_eq!(result.percentage, 20.0);
    assert_eq!(result.level, ReadinessLevel::NeedsWork);
    assert_eq!(
        result.recommendations,
        vec![
            "Focus on building a stronger foundation before applying",
            "Work with a mentor to create a personalized preparation plan",
            "Consider a gap year to strengthen your academic and personal profile",
            LANGUAGE_ADVICE,
            EXPERIENCE_ADVICE,
            LEADERSHIP_ADVICE,
            FINANCIAL_ADVICE,
        ]
    );
}

#[test]
fn partial_answers_score_against_full_set() {
    let questions = QuestionSet::builtin();
    let answers = AnswerSet::new()
        .with_answer("academic_performance", "excellent")
        .with_answer("english_proficiency", "advanced")
        .with_answer("extracurricular", "some");

    let result = score(&questions, &answers);

    assert_eq!(result.total_score, 12);
    assert_eq!(result.max_score, 25);
    assert_eq!(result.percentage, 48.0);
    assert_eq!(result.level, ReadinessLevel::Fair);
    assert_eq!(result.answered, 3);
    assert!(!result.is_complete());
    assert_eq!(result.category_score(Category::Leadership), None);
    assert_eq!(result.category_score(Category::Financial), None);
}

#[test]
fn unanswered_categories_emit_no_advisory() {
    let questions = QuestionSet::builtin();
    let answers = AnswerSet::new().with_answer("english_proficiency", "beginner");

    let result = score(&questions, &answers);

    assert_eq!(result.level, ReadinessLevel::NeedsWork);
    assert_eq!(&result.recommendations[3..], [LANGUAGE_ADVICE]);
}

#[test]
fn tier_boundaries_are_closed_below() {
    let questions = QuestionSet::builtin();
    // Totals of 20, 15 and 10 out of 25 land exactly on 80%, 60% and 40%
    let cases = [
        (["excellent", "fluent", "extensive", "multiple"], "unsure", 22, ReadinessLevel::Excellent),
        (["excellent", "fluent", "extensive", "significant"], "not_started", 20, ReadinessLevel::Excellent),
        (["excellent", "fluent", "extensive", "member"], "unsure", 19, ReadinessLevel::Good),
        (["good", "intermediate", "some", "informal"], "researching", 15, ReadinessLevel::Good),
        (["good", "intermediate", "some", "informal"], "not_started", 13, ReadinessLevel::Fair),
        (["average", "basic", "minimal", "member"], "unsure", 10, ReadinessLevel::Fair),
        (["average", "basic", "minimal", "member"], "not_started", 9, ReadinessLevel::NeedsWork),
    ];

    for (first_four, last, total, level) in cases {
        let mut answers: AnswerSet = questions
            .iter()
            .zip(first_four)
            .map(|(q, value)| (q.id.clone(), value.to_string()))
            .collect();
        answers.insert("financial_planning", last);

        let result = score(&questions, &answers);
        assert_eq!(result.total_score, total, "{first_four:?} + {last}");
        assert_eq!(result.level, level, "total {total}");
        assert_eq!(result.recommendations[..3], *tier_messages(level));
    }
}

#[test]
fn exact_tier_thresholds_select_upper_tier() {
    assert_eq!(ReadinessLevel::from_percentage(80.0), ReadinessLevel::Excellent);
    assert_eq!(ReadinessLevel::from_percentage(60.0), ReadinessLevel::Good);
    assert_eq!(ReadinessLevel::from_percentage(40.0), ReadinessLevel::Fair);
    assert_eq!(ReadinessLevel::from_percentage(39.999), ReadinessLevel::NeedsWork);
}

#[test]
fn advisory_thresholds_per_category() {
    let questions = QuestionSet::builtin();
    // Language 4 is at its threshold, the rest sit just below theirs
    let answers = AnswerSet::new()
        .with_answer("academic_performance", "below_average")
        .with_answer("english_proficiency", "advanced")
        .with_answer("extracurricular", "minimal")
        .with_answer("leadership", "member")
        .with_answer("financial_planning", "unsure");

    let result = score(&questions, &answers);

    assert_eq!(
        &result.recommendations[3..],
        [EXPERIENCE_ADVICE, LEADERSHIP_ADVICE, FINANCIAL_ADVICE]
    );
    assert_eq!(
        ADVISORY_ORDER,
        [
            Category::Language,
            Category::Experience,
            Category::Leadership,
            Category::Financial
        ]
    );
}

#[test]
fn academic_advisory_is_opt_in() {
    let questions = QuestionSet::builtin();
    let answers = answer_all(&questions, false);

    let parity = score(&questions, &answers);
    assert!(!parity.recommendations.iter().any(|r| r == ACADEMIC_ADVICE));

    let scorer = ReadinessScorer::new(ScoringOptions {
        academic_advisory: true,
    });
    let fixed = scorer.score(&questions, &answers);
    assert_eq!(fixed.recommendations.len(), parity.recommendations.len() + 1);
    assert_eq!(fixed.recommendations[3], ACADEMIC_ADVICE);
}

#[test]
fn unknown_values_and_foreign_ids_score_zero() {
    let questions = QuestionSet::builtin();
    let answers = AnswerSet::new()
        .with_answer("leadership", "president_of_everything")
        .with_answer("favourite_colour", "blue")
        .with_answer("financial_planning", "funded");

    let result = score(&questions, &answers);

    assert_eq!(result.total_score, 5);
    assert_eq!(result.answered, 1);
    assert_eq!(result.category_score(Category::Leadership), None);
}

#[test]
fn scoring_is_idempotent() {
    let questions = QuestionSet::builtin();
    let answers = AnswerSet::new()
        .with_answer("academic_performance", "very_good")
        .with_answer("leadership", "informal");

    assert_eq!(score(&questions, &answers), score(&questions, &answers));
}

#[test]
fn empty_question_slice_scores_zero() {
    let result = score(&[], &AnswerSet::new().with_answer("anything", "at all"));

    assert_eq!(result.max_score, 0);
    assert_eq!(result.percentage, 0.0);
    assert_eq!(result.level, ReadinessLevel::NeedsWork);
    assert_eq!(result.recommendations.len(), 3);
}
