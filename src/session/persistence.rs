//! Hand-off of completed assessments to a profile store.
//!
//! The engine's contract ends when a result is computed. Recording it is a
//! separate, fire-and-forget step: [`forward_events`] passes completion
//! events to a [`ResultSink`] and only logs failures.

use super::state::SessionEvent;
use crate::error::{PersistenceErrorKind, ReadinessError, Result};
use crate::model::AnswerSet;
use crate::scoring::{AssessmentResult, ReadinessLevel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Stored form of a completed assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    /// Opaque identifier from the auth provider
    pub user_id: String,
    /// Answers as submitted
    pub assessment_data: AnswerSet,
    /// Percentage score rounded to a whole number
    pub score: u32,
    /// Readiness level at completion
    pub level: ReadinessLevel,
    /// Recommendations in display order
    pub recommendations: Vec<String>,
    /// Completion timestamp
    pub completed_at: DateTime<Utc>,
}

impl AssessmentRecord {
    /// Build a record from a scored answer set
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        answers: &AnswerSet,
        result: &AssessmentResult,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            assessment_data: answers.clone(),
            score: result.percentage.round() as u32,
            level: result.level,
            recommendations: result.recommendations.clone(),
            completed_at,
        }
    }
}

/// Destination for completed assessment records.
///
/// Implement this for whatever profile store the application uses.
pub trait ResultSink: Send + Sync {
    /// Store one record
    fn record(&self, record: &AssessmentRecord) -> Result<()>;

    /// Name of this sink for log messages
    fn name(&self) -> &'static str;
}

/// A sink that drops every record.
///
/// Used when no user id or records file is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl ResultSink for NoOpSink {
    fn record(&self, _record: &AssessmentRecord) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "NoOp"
    }
}

/// Appends each record as one JSON line to a file
#[derive(Debug, Clone)]
pub struct JsonLinesSink {
    path: PathBuf,
}

impl JsonLinesSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read back every record in the file
    pub fn read_all(&self) -> Result<Vec<AssessmentRecord>> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| ReadinessError::io(&self.path, e))?;
        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line).map_err(|e| {
                    ReadinessError::persistence(
                        format!("reading {}", self.path.display()),
                        PersistenceErrorKind::Serialization(e.to_string()),
                    )
                })
            })
            .collect()
    }
}

impl ResultSink for JsonLinesSink {
    fn record(&self, record: &AssessmentRecord) -> Result<()> {
        let line = serde_json::to_string(record).map_err(|e| {
            ReadinessError::persistence(
                "encoding assessment record",
                PersistenceErrorKind::Serialization(e.to_string()),
            )
        })?;

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| ReadinessError::io(&self.path, e))?;
        writeln!(file, "{line}").map_err(|e| ReadinessError::io(&self.path, e))?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "JsonLines"
    }
}

/// Keeps records in memory, for embedding applications and tests
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<AssessmentRecord>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the records received so far
    #[must_use]
    pub fn records(&self) -> Vec<AssessmentRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }
}

impl ResultSink for MemorySink {
    fn record(&self, record: &AssessmentRecord) -> Result<()> {
        let mut records = self.records.lock().map_err(|_| {
            ReadinessError::persistence(
                "recording in memory",
                PersistenceErrorKind::Unavailable("lock poisoned".to_string()),
            )
        })?;
        records.push(record.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "Memory"
    }
}

/// Pass completion events to a sink, returning how many were recorded.
///
/// Failures are logged and swallowed; they never reach the caller.
pub fn forward_events(
    events: &[SessionEvent],
    sink: &dyn ResultSink,
    user_id: &str,
    completed_at: DateTime<Utc>,
) -> usize {
    let mut recorded = 0;
    for event in events {
        let SessionEvent::Completed { answers, result } = event else {
            continue;
        };
        let record = AssessmentRecord::new(user_id, answers, result, completed_at);
        match sink.record(&record) {
            Ok(()) => {
                recorded += 1;
                tracing::debug!("Recorded assessment for {} via {}", user_id, sink.name());
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to record assessment via {} sink: {}",
                    sink.name(),
                    e
                );
            }
        }
    }
    recorded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionSet;
    use crate::scoring::score;

    struct FailingSink;

    impl ResultSink for FailingSink {
        fn record(&self, _record: &AssessmentRecord) -> Result<()> {
            Err(ReadinessError::persistence(
                "test",
                PersistenceErrorKind::Unavailable("offline".to_string()),
            ))
        }

        fn name(&self) -> &'static str {
            "Failing"
        }
    }

    fn completed_event() -> SessionEvent {
        let questions = QuestionSet::builtin();
        let answers: AnswerSet = questions
            .iter()
            .filter_map(|q| q.worst_option().map(|o| (q.id.clone(), o.value.clone())))
            .collect();
        let result = score(&questions, &answers);
        SessionEvent::Completed { answers, result }
    }

    #[test]
    fn test_record_rounds_percentage() {
        let SessionEvent::Completed { answers, result } = completed_event() else {
            unreachable!()
        };
        let record = AssessmentRecord::new("user-1", &answers, &result, Utc::now());
        assert_eq!(record.score, 20);
        assert_eq!(record.level, ReadinessLevel::NeedsWork);
        assert_eq!(record.assessment_data.len(), 5);
    }

    #[test]
    fn test_failing_sink_is_swallowed() {
        let recorded = forward_events(&[completed_event()], &FailingSink, "user-1", Utc::now());
        assert_eq!(recorded, 0);
    }

    #[test]
    fn test_reset_events_are_not_recorded() {
        let sink = MemorySink::new();
        let recorded = forward_events(&[SessionEvent::Reset], &sink, "user-1", Utc::now());
        assert_eq!(recorded, 0);
        assert!(sink.records().is_empty());
    }

    #[test]
    fn test_noop_sink_accepts_everything() {
        assert_eq!(
            forward_events(&[completed_event()], &NoOpSink, "user-1", Utc::now()),
            1
        );
    }
}
