//! Configuration structures and validation
//!
//! This module defines the TOML schema for tagger lexicons.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root lexicon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Language metadata and fallback tag
    pub metadata: Metadata,
    /// Tag name -> words carrying that tag
    pub tags: BTreeMap<String, Vec<String>>,
}

/// Lexicon metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Language code, e.g. `en`
    pub code: String,
    /// Human-readable language name
    pub name: String,
    /// Tag for words that are neither listed nor guessable
    #[serde(default = "default_tag")]
    pub default_tag: String,
}

fn default_tag() -> String {
    "NN".to_string()
}

impl LexiconConfig {
    /// Parse from a TOML document
    pub fn from_toml_str(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("failed to parse lexicon TOML: {e}"))
    }

    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("metadata.code must not be empty".to_string());
        }

        if self.metadata.default_tag.trim().is_empty() {
            return Err("metadata.default_tag must not be empty".to_string());
        }

        for (tag, words) in &self.tags {
            if tag.trim().is_empty() {
                return Err("tag names must not be empty".to_string());
            }
            if words.iter().any(|word| word.trim().is_empty()) {
                return Err(format!("tag {tag} lists an empty word"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[metadata]
code = "en"
name = "English"

[tags]
VB = ["come", "go"]
"PRP$" = ["my"]
"#;

    #[test]
    fn test_parse_minimal() {
        let config = LexiconConfig::from_toml_str(MINIMAL).unwrap();
        assert_eq!(config.metadata.code, "en");
        assert_eq!(config.metadata.default_tag, "NN");
        assert_eq!(config.tags["VB"], vec!["come", "go"]);
        assert_eq!(config.tags["PRP$"], vec!["my"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_error_is_reported() {
        let error = LexiconConfig::from_toml_str("[metadata]\ncode = ").unwrap_err();
        assert!(error.starts_with("failed to parse lexicon TOML"));

        // Missing [tags] table
        assert!(LexiconConfig::from_toml_str("[metadata]\ncode = \"en\"\nname = \"English\"").is_err());
    }

    #[test]
    fn test_validation_failures() {
        let mut config = LexiconConfig::from_toml_str(MINIMAL).unwrap();
        config.metadata.default_tag = " ".to_string();
        assert!(config.validate().unwrap_err().contains("default_tag"));

        let mut config = LexiconConfig::from_toml_str(MINIMAL).unwrap();
        config.tags.insert("NN".to_string(), vec!["".to_string()]);
        assert_eq!(config.validate().unwrap_err(), "tag NN lists an empty word");

        let mut config = LexiconConfig::from_toml_str(MINIMAL).unwrap();
        config.metadata.code = String::new();
        assert!(config.validate().is_err());
    }
}
