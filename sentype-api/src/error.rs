//! API error types

use std::string::FromUtf8Error;

use sentype_core::CoreError;
use sentype_tagger::TagError;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Empty sentence, or one that tagged to no tokens
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Why the input was rejected
        reason: String,
    },

    /// Tagging collaborator failure, passed through unchanged
    #[error("tagging error: {0}")]
    Tagging(#[from] TagError),

    /// Core classification error
    #[error("classification error: {0}")]
    Core(#[from] CoreError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// UTF-8 conversion error
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl ApiError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        ApiError::InvalidInput {
            reason: reason.into(),
        }
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
