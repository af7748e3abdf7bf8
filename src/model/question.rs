//! Question and option structures for the readiness self-assessment.

use serde::{Deserialize, Serialize};

/// Highest point value an option can carry.
pub const MAX_OPTION_POINTS: u8 = 5;

/// Lowest point value an option can carry.
pub const MIN_OPTION_POINTS: u8 = 1;

/// Preparedness dimension a question belongs to.
///
/// Variant order is the fixed category order used for subtotals and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Academic,
    Language,
    Experience,
    Leadership,
    Financial,
}

impl Category {
    /// All categories in their fixed order
    pub const ALL: [Self; 5] = [
        Self::Academic,
        Self::Language,
        Self::Experience,
        Self::Leadership,
        Self::Financial,
    ];

    /// Display name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Academic => "Academic",
            Self::Language => "Language",
            Self::Experience => "Experience",
            Self::Leadership => "Leadership",
            Self::Financial => "Financial",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One selectable answer of a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Stable value stored in the answer set
    pub value: String,
    /// Display label
    pub label: String,
    /// Points awarded when selected (1-5)
    pub points: u8,
}

impl AnswerOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>, points: u8) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            points,
        }
    }
}

/// A multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Stable key used in answer sets
    pub id: String,
    /// Display text
    pub prompt: String,
    /// Category the points count towards
    pub category: Category,
    /// Options ordered from best to worst
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn new(
        id: impl Into<String>,
        prompt: impl Into<String>,
        category: Category,
        options: Vec<AnswerOption>,
    ) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            category,
            options,
        }
    }

    /// Find an option by its value
    #[must_use]
    pub fn option(&self, value: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.value == value)
    }

    /// Points for the given option value, if it exists
    #[must_use]
    pub fn points_for(&self, value: &str) -> Option<u8> {
        self.option(value).map(|o| o.points)
    }

    /// The best (first) option
    #[must_use]
    pub fn best_option(&self) -> Option<&AnswerOption> {
        self.options.first()
    }

    /// The worst (last) option
    #[must_use]
    pub fn worst_option(&self) -> Option<&AnswerOption> {
        self.options.last()
    }
}
