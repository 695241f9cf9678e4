//! Core error types (deterministic only)

use core::fmt;

/// Core classification errors (no I/O, no external failures)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The tagged sentence contains no tokens
    EmptySentence,
    /// A label that is not one of the five sentence types
    UnknownSentenceType(String),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::EmptySentence => write!(f, "cannot classify an empty sentence"),
            CoreError::UnknownSentenceType(label) => {
                write!(f, "unknown sentence type label: {label}")
            }
        }
    }
}

impl std::error::Error for CoreError {}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;
