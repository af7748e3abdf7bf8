//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".negari.yaml",
    ".negari.yml",
    "negari.yaml",
    "negari.yml",
];

/// Directories searched for a config file, in order.
///
/// 1. Current directory
/// 2. User config directory (~/.config/negari/)
/// 3. Home directory
#[must_use]
pub fn config_search_dirs() -> Vec<PathBuf> {
    let mut search = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        search.push(cwd);
    }
    if let Some(config_dir) = dirs::config_dir() {
        search.push(config_dir.join("negari"));
    }
    if let Some(home) = dirs::home_dir() {
        search.push(home);
    }
    search
}

/// Discover a config file, preferring an explicit path when it exists.
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
        tracing::warn!("Config file {} does not exist; searching defaults", path.display());
    }

    config_search_dirs()
        .iter()
        .find_map(|dir| find_config_in_dir(dir))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    /// File not found
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// IO error reading file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Only values that differ from the defaults override; this is how CLI
    /// flags are layered over file config.
    pub fn merge(&mut self, other: &Self) {
        if other.questions.file.is_some() {
            self.questions.file.clone_from(&other.questions.file);
        }

        if other.scoring.academic_advisory {
            self.scoring.academic_advisory = true;
        }

        if other.output.format != crate::reports::ReportFormat::default() {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }

        if other.behavior.quiet {
            self.behavior.quiet = true;
        }
        if other.behavior.min_score.is_some() {
            self.behavior.min_score = other.behavior.min_score;
        }

        if other.persistence.user_id.is_some() {
            self.persistence.user_id.clone_from(&other.persistence.user_id);
        }
        if other.persistence.records_file.is_some() {
            self.persistence
                .records_file
                .clone_from(&other.persistence.records_file);
        }
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_example_config() -> String {
    r"# Negari readiness configuration
# ===============================
#
# Place this file at:
#   - .negari.yaml in the current directory
#   - ~/.config/negari/negari.yaml for global config
#
# CLI arguments always override file settings.

# Question set
questions:
  # YAML or JSON question asset, e.g. ./questions.yaml (null: built-in set)
  file: null

# Recommendation options
scoring:
  # Also advise on a weak Academic subtotal
  academic_advisory: false

# Output configuration
output:
  # Format: summary, json, markdown
  format: summary
  # Output file path (omit for stdout)
  # file: report.md
  no_color: false

# Behavior flags
behavior:
  quiet: false
  # Exit with code 1 below this percentage (0-100)
  # min_score: 60

# Recording completed assessments
persistence:
  # Opaque user id, e.g. student-123
  user_id: null
  # JSON-lines file results are appended to, e.g. ./assessments.jsonl
  records_file: null
"
    .to_string()
}
