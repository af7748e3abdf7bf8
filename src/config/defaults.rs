//! Configuration presets for negari-readiness.

use super::types::{AppConfig, BehaviorConfig, OutputConfig};
use crate::reports::ReportFormat;
use crate::scoring::ScoringOptions;

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Terminal summary, parity recommendations
    Default,
    /// Machine-readable output for scripted scoring
    Ci,
    /// Markdown reports with the Academic advisory enabled
    Mentor,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Ci => "ci",
            Self::Mentor => "mentor",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" | "student" => Some(Self::Default),
            "ci" | "ci-cd" | "pipeline" => Some(Self::Ci),
            "mentor" | "counselor" => Some(Self::Mentor),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Colored terminal summary for students taking the assessment",
            Self::Ci => "JSON output without colors for scripted scoring",
            Self::Mentor => "Markdown reports including an Academic advisory for mentors",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Ci, Self::Mentor]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Ci => Self {
                output: OutputConfig {
                    format: ReportFormat::Json,
                    file: None,
                    no_color: true,
                },
                behavior: BehaviorConfig {
                    quiet: true,
                    min_score: None,
                },
                ..Self::default()
            },
            ConfigPreset::Mentor => Self {
                scoring: ScoringOptions {
                    academic_advisory: true,
                },
                output: OutputConfig {
                    format: ReportFormat::Markdown,
                    ..OutputConfig::default()
                },
                ..Self::default()
            },
        }
    }
}
