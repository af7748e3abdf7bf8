//! Configuration module for negari-readiness.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use negari_readiness::config::{AppConfig, ConfigPreset};
//!
//! let config = AppConfig::from_preset(ConfigPreset::Mentor);
//!
//! let config = AppConfig::builder()
//!     .academic_advisory(true)
//!     .min_score(Some(60.0))
//!     .build();
//!
//! use negari_readiness::config::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.negari.yaml` file in the current directory or `~/.config/negari/`:
//!
//! ```yaml
//! scoring:
//!   academic_advisory: true
//! persistence:
//!   user_id: student-123
//!   records_file: ./assessments.jsonl
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::ConfigPreset;
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, OutputConfig, PersistenceConfig,
    QuestionsConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    config_search_dirs, discover_config_file, generate_example_config, load_config_file,
    load_or_default, ConfigFileError, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.negari.yaml` files.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
