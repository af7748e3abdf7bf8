//! Versioned question sets.
//!
//! A [`QuestionSet`] is the static configuration asset the assessment runs
//! over. Every constructor validates the option invariants, so a set that
//! exists is always safe to score against `len() * 5` points.

use super::question::{AnswerOption, Category, Question, MAX_OPTION_POINTS, MIN_OPTION_POINTS};
use crate::error::{CatalogErrorKind, ErrorContext, ReadinessError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Version tag of the built-in question set
pub const BUILTIN_VERSION: &str = "negari-readiness-1";

/// A validated, ordered set of questions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionSet {
    version: String,
    questions: Vec<Question>,
}

/// On-disk shape of a question asset before validation
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct QuestionSetFile {
    #[serde(default)]
    version: Option<String>,
    questions: Vec<Question>,
}

impl QuestionSet {
    /// Build a question set, checking every invariant.
    pub fn new(version: impl Into<String>, questions: Vec<Question>) -> Result<Self> {
        validate_questions(&questions)?;
        Ok(Self {
            version: version.into(),
            questions,
        })
    }

    /// The default Negari readiness assessment: one question per category.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            version: BUILTIN_VERSION.to_string(),
            questions: builtin_questions(),
        }
    }

    /// Load a question asset from disk.
    ///
    /// Files ending in `.json` are read as JSON, anything else as YAML.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ReadinessError::io(path, e))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let parsed = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        };
        let set = parsed.with_context(|| format!("loading {}", path.display()))?;

        tracing::debug!(
            "Loaded question set '{}' ({} questions) from {}",
            set.version,
            set.len(),
            path.display()
        );
        Ok(set)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let file: QuestionSetFile = serde_yaml::from_str(content)?;
        Self::from_file(file)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let file: QuestionSetFile = serde_json::from_str(content)?;
        Self::from_file(file)
    }

    fn from_file(file: QuestionSetFile) -> Result<Self> {
        let version = file.version.unwrap_or_else(|| "unversioned".to_string());
        Self::new(version, file.questions)
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Question by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Position of a question in the set
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.questions.iter().position(|q| q.id == id)
    }

    /// Highest reachable total score
    #[must_use]
    pub fn max_score(&self) -> u32 {
        max_score_for(self.questions.len())
    }

    /// Number of questions in a category
    #[must_use]
    pub fn count_in(&self, category: Category) -> usize {
        self.questions.iter().filter(|q| q.category == category).count()
    }
}

impl std::ops::Deref for QuestionSet {
    type Target = [Question];

    fn deref(&self) -> &Self::Target {
        &self.questions
    }
}

impl Default for QuestionSet {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Maximum total score for a number of questions.
#[must_use]
pub fn max_score_for(question_count: usize) -> u32 {
    question_count as u32 * u32::from(MAX_OPTION_POINTS)
}

fn validate_questions(questions: &[Question]) -> Result<()> {
    if questions.is_empty() {
        return Err(ReadinessError::catalog(
            "validating question set",
            CatalogErrorKind::EmptyQuestionSet,
        ));
    }

    let mut ids = HashSet::new();
    for question in questions {
        if !ids.insert(question.id.as_str()) {
            return Err(ReadinessError::catalog(
                "validating question set",
                CatalogErrorKind::DuplicateQuestionId(question.id.clone()),
            ));
        }
        validate_options(question).map_err(|kind| {
            ReadinessError::catalog(format!("validating question '{}'", question.id), kind)
        })?;
    }
    Ok(())
}

fn validate_options(question: &Question) -> std::result::Result<(), CatalogErrorKind> {
    let id = &question.id;
    let Some(best) = question.options.first() else {
        return Err(CatalogErrorKind::NoOptions(id.clone()));
    };

    let mut values = HashSet::new();
    let mut points = HashSet::new();
    for option in &question.options {
        if !(MIN_OPTION_POINTS..=MAX_OPTION_POINTS).contains(&option.points) {
            return Err(CatalogErrorKind::PointsOutOfRange {
                question: id.clone(),
                value: option.value.clone(),
                points: option.points,
            });
        }
        if !values.insert(option.value.as_str()) {
            return Err(CatalogErrorKind::DuplicateOptionValue {
                question: id.clone(),
                value: option.value.clone(),
            });
        }
        if !points.insert(option.points) {
            return Err(CatalogErrorKind::DuplicatePoints {
                question: id.clone(),
                points: option.points,
            });
        }
    }

    if question.options.windows(2).any(|w| w[0].points <= w[1].points) {
        return Err(CatalogErrorKind::NotDescending(id.clone()));
    }

    if best.points != MAX_OPTION_POINTS {
        return Err(CatalogErrorKind::BestOptionBelowMax {
            question: id.clone(),
            points: best.points,
        });
    }

    Ok(())
}

fn builtin_questions() -> Vec<Question> {
    vec![
        Question::new(
            "academic_performance",
            "What is your current academic performance (GPA or national exam result)?",
            Category::Academic,
            vec![
                AnswerOption::new("excellent", "3.7 - 4.0 GPA or top national exam result", 5),
                AnswerOption::new("very_good", "3.3 - 3.6 GPA", 4),
                AnswerOption::new("good", "3.0 - 3.2 GPA", 3),
                AnswerOption::new("average", "2.5 - 2.9 GPA", 2),
                AnswerOption::new("below_average", "Below 2.5 GPA", 1),
            ],
        ),
        Question::new(
            "english_proficiency",
            "How would you rate your English proficiency?",
            Category::Language,
            vec![
                AnswerOption::new("fluent", "Fluent (IELTS 7.0+ or TOEFL 100+)", 5),
                AnswerOption::new("advanced", "Advanced (IELTS 6.5 or TOEFL 90-99)", 4),
                AnswerOption::new("intermediate", "Intermediate, comfortable in class", 3),
                AnswerOption::new("basic", "Basic, still building confidence", 2),
                AnswerOption::new("beginner", "Beginner", 1),
            ],
        ),
        Question::new(
            "extracurricular",
            "How involved are you in extracurricular activities or volunteering?",
            Category::Experience,
            vec![
                AnswerOption::new("extensive", "Extensive involvement with notable achievements", 5),
                AnswerOption::new("regular", "Regular participation in several activities", 4),
                AnswerOption::new("some", "Some participation", 3),
                AnswerOption::new("minimal", "Minimal participation", 2),
                AnswerOption::new("none", "No extracurricular activities yet", 1),
            ],
        ),
        Question::new(
            "leadership",
            "Have you held leadership positions in school or your community?",
            Category::Leadership,
            vec![
                AnswerOption::new("multiple", "Multiple leadership roles with visible impact", 5),
                AnswerOption::new("significant", "One significant leadership role", 4),
                AnswerOption::new("informal", "Informal or minor leadership roles", 3),
                AnswerOption::new("member", "Active team member without a formal role", 2),
                AnswerOption::new("none", "No leadership experience yet", 1),
            ],
        ),
        Question::new(
            "financial_planning",
            "How prepared are you to cover application and study costs?",
            Category::Financial,
            vec![
                AnswerOption::new("funded", "Costs are covered or a funding plan is in place", 5),
                AnswerOption::new("partial", "Partially prepared, actively seeking funding", 4),
                AnswerOption::new("researching", "Started researching scholarships and aid", 3),
                AnswerOption::new("unsure", "Unsure how to finance my studies", 2),
                AnswerOption::new("not_started", "Have not considered financing yet", 1),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: &str, points: &[u8]) -> Question {
        Question::new(
            id,
            "prompt",
            Category::Academic,
            points
                .iter()
                .enumerate()
                .map(|(i, p)| AnswerOption::new(format!("opt{i}"), "label", *p))
                .collect(),
        )
    }

    fn kind_of(result: Result<QuestionSet>) -> CatalogErrorKind {
        match result {
            Err(ReadinessError::Catalog { source, .. }) => source,
            other => panic!("Expected catalog error, got {other:?}"),
        }
    }

    #[test]
    fn test_builtin_is_valid() {
        let set = QuestionSet::builtin();
        assert!(validate_questions(set.questions()).is_ok());
        assert_eq!(set.len(), 5);
        assert_eq!(set.max_score(), 25);
        for category in Category::ALL {
            assert_eq!(set.count_in(category), 1, "{category} should have one question");
        }
        for q in set.iter() {
            assert_eq!(q.worst_option().map(|o| o.points), Some(1));
        }
    }

    #[test]
    fn test_lookup_helpers() {
        let set = QuestionSet::builtin();
        assert_eq!(set.position("leadership"), Some(3));
        assert_eq!(
            set.get("english_proficiency").map(|q| q.category),
            Some(Category::Language)
        );
        assert!(set.get("missing").is_none());
    }

    #[test]
    fn test_rejects_empty_set() {
        assert_eq!(
            kind_of(QuestionSet::new("v", vec![])),
            CatalogErrorKind::EmptyQuestionSet
        );
    }

    #[test]
    fn test_rejects_no_options() {
        assert_eq!(
            kind_of(QuestionSet::new("v", vec![question("q1", &[])])),
            CatalogErrorKind::NoOptions("q1".to_string())
        );
    }

    #[test]
    fn test_rejects_out_of_range_points() {
        let kind = kind_of(QuestionSet::new("v", vec![question("q1", &[6, 3])]));
        assert!(matches!(kind, CatalogErrorKind::PointsOutOfRange { points: 6, .. }));

        let kind = kind_of(QuestionSet::new("v", vec![question("q1", &[5, 0])]));
        assert!(matches!(kind, CatalogErrorKind::PointsOutOfRange { points: 0, .. }));
    }

    #[test]
    fn test_rejects_duplicate_points() {
        let kind = kind_of(QuestionSet::new("v", vec![question("q1", &[5, 3, 3])]));
        assert_eq!(
            kind,
            CatalogErrorKind::DuplicatePoints {
                question: "q1".to_string(),
                points: 3
            }
        );
    }

    #[test]
    fn test_rejects_ascending_points() {
        let kind = kind_of(QuestionSet::new("v", vec![question("q1", &[5, 1, 3])]));
        assert_eq!(kind, CatalogErrorKind::NotDescending("q1".to_string()));
    }

    #[test]
    fn test_rejects_best_below_max() {
        let kind = kind_of(QuestionSet::new("v", vec![question("q1", &[4, 2, 1])]));
        assert_eq!(
            kind,
            CatalogErrorKind::BestOptionBelowMax {
                question: "q1".to_string(),
                points: 4
            }
        );
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let kind = kind_of(QuestionSet::new(
            "v",
            vec![question("q1", &[5, 1]), question("q1", &[5, 2])],
        ));
        assert_eq!(kind, CatalogErrorKind::DuplicateQuestionId("q1".to_string()));
    }

    #[test]
    fn test_rejects_duplicate_option_values() {
        let q = Question::new(
            "q1",
            "prompt",
            Category::Language,
            vec![AnswerOption::new("a", "A", 5), AnswerOption::new("a", "B", 1)],
        );
        let kind = kind_of(QuestionSet::new("v", vec![q]));
        assert!(matches!(kind, CatalogErrorKind::DuplicateOptionValue { .. }));
    }

    #[test]
    fn test_yaml_without_version() {
        let yaml = r"
questions:
  - id: gpa
    prompt: GPA?
    category: academic
    options:
      - { value: high, label: High, points: 5 }
      - { value: low, label: Low, points: 1 }
";
        let set = QuestionSet::from_yaml_str(yaml).expect("valid yaml");
        assert_eq!(set.version(), "unversioned");
        assert_eq!(set.get("gpa").and_then(|q| q.points_for("low")), Some(1));
    }

    #[test]
    fn test_invalid_json_maps_to_catalog_error() {
        let kind = kind_of(QuestionSet::from_json_str("{ not json"));
        assert!(matches!(kind, CatalogErrorKind::InvalidJson(_)));
    }
}
