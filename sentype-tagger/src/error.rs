//! Tagger error types

use thiserror::Error;

/// Errors raised while loading a lexicon or tagging a sentence
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    /// Lexicon TOML could not be parsed or failed validation
    #[error("invalid lexicon: {0}")]
    Lexicon(String),

    /// No embedded lexicon for the requested language
    #[error("language '{code}' not supported")]
    UnsupportedLanguage {
        /// The language code that was requested
        code: String,
    },

    /// A tagger rejected its input
    #[error("tagging failed: {0}")]
    Failed(String),
}

/// Result type for tagger operations
pub type Result<T> = std::result::Result<T, TagError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            TagError::Lexicon("missing [metadata]".to_string()).to_string(),
            "invalid lexicon: missing [metadata]"
        );
        assert_eq!(
            TagError::UnsupportedLanguage {
                code: "ja".to_string()
            }
            .to_string(),
            "language 'ja' not supported"
        );
        assert_eq!(
            TagError::Failed("unsupported character".to_string()).to_string(),
            "tagging failed: unsupported character"
        );
    }
}
