//! Public API for sentype sentence type classification
//!
//! This crate ties the tagger and the rule-based classifier together behind
//! a single call: raw sentence in, one of five sentence types out.
//!
//! # Example
//!
//! ```rust
//! use sentype_api::{SentenceClassifier, SentenceType};
//!
//! let classifier = SentenceClassifier::new().unwrap();
//! assert_eq!(classifier.classify("Come here!").unwrap(), SentenceType::Imperative);
//! assert_eq!(classifier.classify("I never eat popcorn.").unwrap(), SentenceType::Negative);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use std::sync::Arc;

use error::Result;
use sentype_core::{CoreError, TaggedSentence};
use sentype_tagger::{LexiconTagger, Tagger};

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{Classification, Input};
pub use error::ApiError;
pub use sentype_core::{DecisionBasis, EndMark, Predicate, SentenceType, TaggedToken};
pub use sentype_tagger::{FnTagger, TagError};

/// Main entry point for sentence type classification
///
/// Holds a shared tagger; cloning is cheap and every call is independent,
/// so one classifier can be used from many threads at once.
#[derive(Clone)]
pub struct SentenceClassifier {
    tagger: Arc<dyn Tagger>,
    config: Config,
}

impl SentenceClassifier {
    /// Create a classifier with default configuration (embedded English lexicon)
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a classifier over the embedded lexicon for `lang_code`
    pub fn with_language(lang_code: &str) -> Result<Self> {
        let config = Config::builder().language(lang_code).build()?;
        Self::with_config(config)
    }

    /// Create a classifier with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;

        let tagger = match config.lexicon_toml() {
            Some(toml) => LexiconTagger::from_toml_str(toml)?,
            None => LexiconTagger::for_language(config.language())?,
        };

        Ok(Self {
            tagger: Arc::new(tagger),
            config,
        })
    }

    /// Create a classifier around any tagger, with default configuration
    pub fn with_tagger(tagger: impl Tagger + 'static) -> Self {
        Self {
            tagger: Arc::new(tagger),
            config: Config::default(),
        }
    }

    /// Classify one raw sentence
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidInput`] for an empty sentence or one that tags to
    /// no tokens; [`ApiError::Tagging`] if the tagger fails.
    pub fn classify(&self, sentence: &str) -> Result<SentenceType> {
        self.explain(sentence)
            .map(|classification| classification.sentence_type)
    }

    /// Classify from an [`Input`] source
    pub fn classify_input(&self, input: Input) -> Result<SentenceType> {
        let text = input.read_text()?;
        self.classify(&text)
    }

    /// Classify one raw sentence and report the tokens and reasoning
    pub fn explain(&self, sentence: &str) -> Result<Classification> {
        let text = self.prepare(sentence)?;
        let tokens = self.tagger.tag(text)?;
        tracing::trace!(tokens = tokens.len(), "sentence tagged");

        let decision = sentype_core::explain(&tokens).map_err(map_core_error)?;
        tracing::debug!(
            sentence_type = %decision.sentence_type,
            basis = %decision.basis,
            "sentence classified"
        );

        Ok(Classification {
            sentence: text.to_string(),
            tokens,
            sentence_type: decision.sentence_type,
            basis: decision.basis,
        })
    }

    /// Classify a sentence that has already been tagged
    pub fn classify_tagged(&self, tokens: &TaggedSentence) -> Result<SentenceType> {
        sentype_core::classify(tokens).map_err(map_core_error)
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn prepare<'a>(&self, sentence: &'a str) -> Result<&'a str> {
        let text = if self.config.trim_input() {
            sentence.trim()
        } else {
            sentence
        };

        if text.is_empty() {
            return Err(ApiError::invalid_input("sentence is empty"));
        }
        Ok(text)
    }
}

impl Default for SentenceClassifier {
    fn default() -> Self {
        Self::new().expect("embedded English lexicon should always load")
    }
}

impl std::fmt::Debug for SentenceClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentenceClassifier")
            .field("tagger", &"<dyn Tagger>")
            .field("config", &self.config)
            .finish()
    }
}

fn map_core_error(error: CoreError) -> ApiError {
    match error {
        CoreError::EmptySentence => ApiError::invalid_input("sentence produced no tokens"),
        other => ApiError::Core(other),
    }
}

// Convenience functions

/// Classify a sentence with default configuration
pub fn classify(sentence: &str) -> Result<SentenceType> {
    SentenceClassifier::new()?.classify(sentence)
}

/// Classify a sentence with the embedded lexicon for `lang_code`
pub fn classify_with_language(sentence: &str, lang_code: &str) -> Result<SentenceType> {
    SentenceClassifier::with_language(lang_code)?.classify(sentence)
}
