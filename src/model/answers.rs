//! Answer set built up while a user works through the assessment.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Selected option value per question id.
///
/// At most one answer per question; recording a question again replaces the
/// previous answer in place. Insertion order is kept for display only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: IndexMap<String, String>,
}

impl AnswerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, returning the value it replaced.
    pub fn insert(
        &mut self,
        question_id: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.answers.insert(question_id.into(), value.into())
    }

    /// Builder-style variant of [`insert`](Self::insert).
    #[must_use]
    pub fn with_answer(mut self, question_id: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(question_id, value);
        self
    }

    /// Selected value for a question
    #[must_use]
    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, question_id: &str) -> bool {
        self.answers.contains_key(question_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Iterate `(question_id, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.answers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}
