//! Configuration validation for negari-readiness.

use super::types::{
    AppConfig, BehaviorConfig, OutputConfig, PersistenceConfig, QuestionsConfig,
};
use std::path::Path;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.questions.validate());
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors.extend(self.persistence.validate());
        errors
    }
}

impl Validatable for QuestionsConfig {
    fn validate(&self) -> Vec<ConfigError> {
        match &self.file {
            Some(file) if !file.exists() => vec![ConfigError::new(
                "questions.file",
                format!("Question file does not exist: {}", file.display()),
            )],
            _ => Vec::new(),
        }
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        self.file
            .as_deref()
            .and_then(|file| missing_parent("output.file", file))
            .into_iter()
            .collect()
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(min_score) = self.min_score {
            if !(0.0..=100.0).contains(&min_score) {
                errors.push(ConfigError::new(
                    "behavior.min_score",
                    format!("Minimum score must be between 0 and 100, got {min_score}"),
                ));
            }
        }
        errors
    }
}

impl Validatable for PersistenceConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(user_id) = &self.user_id {
            if user_id.trim().is_empty() {
                errors.push(ConfigError::new(
                    "persistence.user_id",
                    "User id must not be empty",
                ));
            }
        }

        if let Some(file) = &self.records_file {
            if self.user_id.is_none() {
                errors.push(ConfigError::new(
                    "persistence.records_file",
                    "A records file needs a user_id to attribute results to",
                ));
            }
            errors.extend(missing_parent("persistence.records_file", file));
        }

        errors
    }
}

fn missing_parent(field: &str, file: &Path) -> Option<ConfigError> {
    let parent = file.parent()?;
    if parent.as_os_str().is_empty() || parent.exists() {
        return None;
    }
    Some(ConfigError::new(
        field,
        format!("Parent directory does not exist: {}", parent.display()),
    ))
}
