//! Runtime word -> tag lexicon
//!
//! Built from a [`LexiconConfig`]. Keys are stored normalized (lowercase,
//! typographic apostrophe folded to ASCII) so lookups are a single hash probe.

use std::collections::HashMap;

use crate::config::LexiconConfig;
use crate::error::{Result, TagError};

/// Word -> POS tag table for one language
#[derive(Debug, Clone)]
pub struct Lexicon {
    code: String,
    name: String,
    default_tag: String,
    words: HashMap<String, String>,
}

impl Lexicon {
    /// Create from configuration
    pub fn from_config(config: &LexiconConfig) -> Result<Self> {
        config.validate().map_err(TagError::Lexicon)?;

        let mut words = HashMap::new();
        for (tag, entries) in &config.tags {
            for entry in entries {
                let key = normalize(entry);
                if let Some(previous) = words.insert(key, tag.clone()) {
                    return Err(TagError::Lexicon(format!(
                        "word '{entry}' is listed under both {previous} and {tag}"
                    )));
                }
            }
        }

        tracing::debug!(
            code = %config.metadata.code,
            entries = words.len(),
            "loaded lexicon"
        );

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            default_tag: config.metadata.default_tag.clone(),
            words,
        })
    }

    /// Parse and build from a TOML document
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config = LexiconConfig::from_toml_str(toml_str).map_err(TagError::Lexicon)?;
        Self::from_config(&config)
    }

    /// Tag listed for `word`, ignoring case and apostrophe style
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.words.get(&normalize(word)).map(String::as_str)
    }

    /// Tag for unknown words
    pub fn default_tag(&self) -> &str {
        &self.default_tag
    }

    /// Language code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Language name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of listed words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if no words are listed
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn normalize(word: &str) -> String {
    word.trim().to_lowercase().replace('\u{2019}', "'")
}
