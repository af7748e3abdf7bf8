//! Unified error types for negari-readiness.
//!
//! Scoring itself is total and never fails. These errors cover the
//! surrounding plumbing: loading question assets, driving an assessment
//! session, recording results and reading configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for negari-readiness operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReadinessError {
    /// Errors while loading or validating a question set
    #[error("Invalid question set: {context}")]
    Catalog {
        context: String,
        #[source]
        source: CatalogErrorKind,
    },

    /// Rejected assessment session transitions
    #[error("Assessment session error: {context}")]
    Session {
        context: String,
        #[source]
        source: SessionErrorKind,
    },

    /// Errors while handing a result to a persistence sink
    #[error("Recording result failed: {context}")]
    Persistence {
        context: String,
        #[source]
        source: PersistenceErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific question set error kinds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogErrorKind {
    #[error("question set contains no questions")]
    EmptyQuestionSet,

    #[error("duplicate question id '{0}'")]
    DuplicateQuestionId(String),

    #[error("question '{0}' has no options")]
    NoOptions(String),

    #[error("option '{value}' of question '{question}' is worth {points} points (expected 1-5)")]
    PointsOutOfRange {
        question: String,
        value: String,
        points: u8,
    },

    #[error("question '{question}' has more than one option worth {points} points")]
    DuplicatePoints { question: String, points: u8 },

    #[error("options of question '{0}' are not ordered from most to fewest points")]
    NotDescending(String),

    #[error("best option of question '{question}' is worth {points} points (expected 5)")]
    BestOptionBelowMax { question: String, points: u8 },

    #[error("question '{question}' has more than one option with value '{value}'")]
    DuplicateOptionValue { question: String, value: String },

    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),
}

/// Specific session error kinds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionErrorKind {
    #[error("assessment is already completed; reset to retake it")]
    AlreadyCompleted,

    #[error("'{value}' is not an option of question '{question}'")]
    UnknownOption { question: String, value: String },
}

/// Specific persistence error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PersistenceErrorKind {
    #[error("JSON serialization failed: {0}")]
    Serialization(String),

    #[error("sink unavailable: {0}")]
    Unavailable(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for negari-readiness operations
pub type Result<T> = std::result::Result<T, ReadinessError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl ReadinessError {
    /// Create a catalog error with context
    pub fn catalog(context: impl Into<String>, source: CatalogErrorKind) -> Self {
        Self::Catalog {
            context: context.into(),
            source,
        }
    }

    /// Create a session error with context
    pub fn session(context: impl Into<String>, source: SessionErrorKind) -> Self {
        Self::Session {
            context: context.into(),
            source,
        }
    }

    /// Create a persistence error with context
    pub fn persistence(context: impl Into<String>, source: PersistenceErrorKind) -> Self {
        Self::Persistence {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// The catalog error kind, if this is a catalog error
    #[must_use]
    pub const fn catalog_kind(&self) -> Option<&CatalogErrorKind> {
        match self {
            Self::Catalog { source, .. } => Some(source),
            _ => None,
        }
    }

    /// The session error kind, if this is a session error
    #[must_use]
    pub const fn session_kind(&self) -> Option<&SessionErrorKind> {
        match self {
            Self::Session { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for ReadinessError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for ReadinessError {
    fn from(err: serde_json::Error) -> Self {
        Self::catalog(
            "JSON deserialization",
            CatalogErrorKind::InvalidJson(err.to_string()),
        )
    }
}

impl From<serde_yaml::Error> for ReadinessError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::catalog(
            "YAML deserialization",
            CatalogErrorKind::InvalidYaml(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to the error's existing context, so a
/// chain of calls reads outermost first:
///
/// ```ignore
/// use negari_readiness::error::ErrorContext;
///
/// let set = QuestionSet::from_path(path)
///     .with_context(|| format!("loading questions from {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<ReadinessError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: ReadinessError, new_ctx: &str) -> ReadinessError {
    match err {
        ReadinessError::Catalog {
            context: existing,
            source,
        } => ReadinessError::Catalog {
            context: chain_context(new_ctx, &existing),
            source,
        },
        ReadinessError::Session {
            context: existing,
            source,
        } => ReadinessError::Session {
            context: chain_context(new_ctx, &existing),
            source,
        },
        ReadinessError::Persistence {
            context: existing,
            source,
        } => ReadinessError::Persistence {
            context: chain_context(new_ctx, &existing),
            source,
        },
        ReadinessError::Io {
            path,
            message,
            source,
        } => ReadinessError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        ReadinessError::Config(msg) => ReadinessError::Config(chain_context(new_ctx, &msg)),
        ReadinessError::Validation(msg) => {
            ReadinessError::Validation(chain_context(new_ctx, &msg))
        }
    }
}

/// Returns "`new`: `existing`", or just `new` when nothing exists yet.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to an error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;

    /// Convert None to an error with context from a closure.
    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| ReadinessError::Validation(context.into()))
    }

    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.ok_or_else(|| ReadinessError::Validation(f().into()))
    }
}
