//! Configuration types for negari-readiness.

use crate::reports::ReportFormat;
use crate::scoring::ScoringOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are merged over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Question set selection
    pub questions: QuestionsConfig,
    /// Recommendation options
    pub scoring: ScoringOptions,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
    /// Where completed assessments are recorded
    pub persistence: PersistenceConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Use a question asset instead of the built-in set.
    pub fn questions_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.questions.file = file;
        self
    }

    /// Emit an advisory for a weak Academic subtotal.
    pub const fn academic_advisory(mut self, enabled: bool) -> Self {
        self.config.scoring.academic_advisory = enabled;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Fail when the percentage score is below this value.
    pub const fn min_score(mut self, min_score: Option<f64>) -> Self {
        self.config.behavior.min_score = min_score;
        self
    }

    /// Record completed assessments for this user.
    pub fn user_id(mut self, user_id: Option<String>) -> Self {
        self.config.persistence.user_id = user_id;
        self
    }

    /// Append completed assessments to this JSON-lines file.
    pub fn records_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.persistence.records_file = file;
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Component Configurations
// ============================================================================

/// Question set selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct QuestionsConfig {
    /// YAML or JSON question asset; the built-in set is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Output-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// Behavior configuration flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress non-essential output
    pub quiet: bool,
    /// Exit with code 1 when the percentage score is below this value (0-100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<f64>,
}

/// Profile store settings for completed assessments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PersistenceConfig {
    /// Opaque user identifier attached to recorded results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// JSON-lines file completed assessments are appended to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records_file: Option<PathBuf>,
}

impl PersistenceConfig {
    /// Recording happens only with both a user and a destination
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.user_id.is_some() && self.records_file.is_some()
    }
}
