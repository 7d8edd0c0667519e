//! Error types for puzzle generation and the command-line front end

use std::fmt;
use std::path::PathBuf;

/// Main error type for all fallible quiz operations
///
/// Routine generation failures (bad patterns, degenerate samples) never appear
/// here; they are retried inside assembly.
#[derive(Debug)]
pub enum QuizError {
    /// Requested ruleset version does not exist
    UnknownRuleset {
        /// Version that was requested
        version: String,
        /// Versions that do exist
        known: Vec<&'static str>,
    },

    /// Every attempt failed, including those from the fallback seed
    ///
    /// Indicates the grammar or ruleset thresholds are miscalibrated.
    GenerationExhausted {
        /// Seed originally requested
        seed: u64,
        /// Ruleset in use
        version: &'static str,
        /// Total attempts spent across all seeds tried
        attempts: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownRuleset { version, known } => {
                write!(
                    f,
                    "Unknown ruleset '{version}' (known: {})",
                    known.join(", ")
                )
            }
            Self::GenerationExhausted {
                seed,
                version,
                attempts,
            } => {
                write!(
                    f,
                    "No puzzle found for seed {seed} under ruleset {version} after {attempts} attempts"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for quiz results
pub type Result<T> = std::result::Result<T, QuizError>;

impl From<std::io::Error> for QuizError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<output>"),
            operation: "write",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> QuizError {
    QuizError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Attach a path and operation to an I/O failure
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> QuizError {
    let path = path.into();
    move |source| QuizError::FileSystem {
        path,
        operation,
        source,
    }
}
