//! High-level configuration API

use crate::error::{ApiError, Result};

/// Default configuration constants
pub mod defaults {
    /// Language of the embedded lexicon used when none is configured
    pub const LANGUAGE: &str = "en";

    /// Whether surrounding whitespace is trimmed before the empty check
    pub const TRIM_INPUT: bool = true;
}

/// Classification configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) language: String,
    pub(crate) lexicon_toml: Option<String>,
    pub(crate) trim_input: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: defaults::LANGUAGE.to_string(),
            lexicon_toml: None,
            trim_input: defaults::TRIM_INPUT,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Language code of the embedded lexicon
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Caller-supplied lexicon, if any
    pub fn lexicon_toml(&self) -> Option<&str> {
        self.lexicon_toml.as_deref()
    }

    /// Whether input is trimmed before the empty check
    pub fn trim_input(&self) -> bool {
        self.trim_input
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.lexicon_toml.is_none() && !sentype_tagger::is_supported(&self.language) {
            return Err(ApiError::Config(format!(
                "no embedded lexicon for language '{}' (available: {})",
                self.language,
                sentype_tagger::AVAILABLE_LANGUAGES.join(", ")
            )));
        }

        if let Some(toml) = &self.lexicon_toml {
            if toml.trim().is_empty() {
                return Err(ApiError::Config("lexicon document is empty".into()));
            }
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    language: Option<String>,
    lexicon_toml: Option<String>,
    trim_input: Option<bool>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language by code
    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.language = Some(code.into());
        self
    }

    /// Use a lexicon TOML document instead of the embedded one
    pub fn lexicon_toml(mut self, toml: impl Into<String>) -> Self {
        self.lexicon_toml = Some(toml.into());
        self
    }

    /// Trim surrounding whitespace before classifying
    pub fn trim_input(mut self, trim: bool) -> Self {
        self.trim_input = Some(trim);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(code) = self.language {
            config.language = code;
        }

        if self.lexicon_toml.is_some() {
            config.lexicon_toml = self.lexicon_toml;
        }

        if let Some(trim) = self.trim_input {
            config.trim_input = trim;
        }

        config.validate()?;
        Ok(config)
    }
}
