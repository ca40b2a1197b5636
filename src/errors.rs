//! Error types for scan operations.
//!
//! A scan can fail in exactly two ways: the input is rejected before any
//! analyzer runs, or aggregation hits a condition it cannot represent.
//! Analyzer degradation (a URL that does not parse, for instance) never
//! reaches this module; analyzers absorb it and contribute zero.
//!
//! Configuration problems are reported through [`ConfigError`], since they
//! happen once at startup and not per scan.
//!
//! # Error Codes
//!
//! - E001-E009: Input validation errors (HTTP 400)
//! - E020-E029: Configuration errors
//! - E030-E039: Internal errors (HTTP 500)
//!
//! # Example
//!
//! ```rust
//! use scamscan::errors::{ErrorCode, ScanError};
//!
//! let err = ScanError::too_long(12_000, 10_000);
//! assert_eq!(err.status(), 400);
//! assert_eq!(err.code(), ErrorCode::INPUT_TOO_LONG);
//! assert!(err.is_user_fixable());
//! ```

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Stable error code for documentation and programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorCode(&'static str);

impl ErrorCode {
    /// Input error - `text` field absent
    pub const INPUT_MISSING: ErrorCode = ErrorCode("E001");
    /// Input error - `text` field is not a string
    pub const INPUT_WRONG_TYPE: ErrorCode = ErrorCode("E002");
    /// Input error - text empty or whitespace only
    pub const INPUT_EMPTY: ErrorCode = ErrorCode("E003");
    /// Input error - text longer than the configured cap
    pub const INPUT_TOO_LONG: ErrorCode = ErrorCode("E004");
    /// Input error - request body is not a JSON object
    pub const INPUT_MALFORMED: ErrorCode = ErrorCode("E005");

    /// Config error - file could not be read
    pub const CONFIG_IO: ErrorCode = ErrorCode("E020");
    /// Config error - file is not valid TOML for the schema
    pub const CONFIG_PARSE: ErrorCode = ErrorCode("E021");
    /// Config error - one or more values failed validation
    pub const CONFIG_INVALID: ErrorCode = ErrorCode("E022");

    /// Internal error - aggregation failed
    pub const INTERNAL_AGGREGATION: ErrorCode = ErrorCode("E030");

    /// Get the error code string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why an input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationKind {
    Missing,
    WrongType,
    Empty,
    TooLong,
    Malformed,
}

impl ValidationKind {
    pub fn code(self) -> ErrorCode {
        match self {
            ValidationKind::Missing => ErrorCode::INPUT_MISSING,
            ValidationKind::WrongType => ErrorCode::INPUT_WRONG_TYPE,
            ValidationKind::Empty => ErrorCode::INPUT_EMPTY,
            ValidationKind::TooLong => ErrorCode::INPUT_TOO_LONG,
            ValidationKind::Malformed => ErrorCode::INPUT_MALFORMED,
        }
    }
}

/// Error returned by a scan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// Input rejected before any analyzer ran.
    #[error("Invalid input: {message}")]
    InvalidInput {
        kind: ValidationKind,
        message: String,
    },

    /// Unexpected failure while combining analyzer output.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ScanError {
    pub fn missing_text() -> Self {
        Self::InvalidInput {
            kind: ValidationKind::Missing,
            message: "Request must include a `text` field".to_string(),
        }
    }

    pub fn wrong_type(found: &str) -> Self {
        Self::InvalidInput {
            kind: ValidationKind::WrongType,
            message: format!("`text` must be a string, got {found}"),
        }
    }

    pub fn empty_text() -> Self {
        Self::InvalidInput {
            kind: ValidationKind::Empty,
            message: "Text to scan must not be empty".to_string(),
        }
    }

    pub fn too_long(chars: usize, max_chars: usize) -> Self {
        Self::InvalidInput {
            kind: ValidationKind::TooLong,
            message: format!(
                "Text is {chars} characters long; the maximum is {max_chars}"
            ),
        }
    }

    /// Request that is not shaped like `{ "text": ..., "options"?: ... }`.
    pub fn malformed_request(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            kind: ValidationKind::Malformed,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidInput { kind, .. } => kind.code(),
            Self::Internal(_) => ErrorCode::INTERNAL_AGGREGATION,
        }
    }

    /// HTTP-equivalent status for this error.
    pub fn status(&self) -> u16 {
        match self {
            Self::InvalidInput { .. } => 400,
            Self::Internal(_) => 500,
        }
    }

    /// Short machine-readable label used as the `error` field of replies.
    pub fn label(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "invalid_input",
            Self::Internal(_) => "internal_error",
        }
    }

    /// Message safe to show to a caller. Internal details are withheld.
    pub fn public_message(&self) -> String {
        match self {
            Self::InvalidInput { message, .. } => message.clone(),
            Self::Internal(_) => "The scan could not be completed".to_string(),
        }
    }

    pub fn is_user_fixable(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

/// A single configuration problem, tied to the field it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigProblem {
    pub field: String,
    pub message: String,
}

impl ConfigProblem {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Error raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("{} configuration problem(s):\n{}", .0.len(), format_problems(.0))]
    Invalid(Vec<ConfigProblem>),
}

impl ConfigError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Io { .. } => ErrorCode::CONFIG_IO,
            Self::Parse(_) => ErrorCode::CONFIG_PARSE,
            Self::Invalid(_) => ErrorCode::CONFIG_INVALID,
        }
    }
}

fn format_problems(problems: &[ConfigProblem]) -> String {
    problems
        .iter()
        .map(|p| format!("  - {p}"))
        .collect::<Vec<_>>()
        .join("\n")
}
