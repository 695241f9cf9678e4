//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use sentype_core::{DecisionBasis, SentenceType, TaggedSentence};

/// Input source for classification
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Raw sentence
    Text(String),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Read the text content from the input
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(ApiError::Utf8),
        }
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::from_text(text)
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

/// Detailed classification result
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Classification {
    /// The sentence as handed to the tagger
    pub sentence: String,
    /// Tagger output the decision was made on
    pub tokens: TaggedSentence,
    /// The chosen type
    pub sentence_type: SentenceType,
    /// Which branch of the decision procedure chose it
    pub basis: DecisionBasis,
}

impl Classification {
    /// Lowercase label of the chosen type
    pub fn label(&self) -> &'static str {
        self.sentence_type.as_str()
    }

    /// Serialize to a JSON string
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(ApiError::Serde)
    }
}
