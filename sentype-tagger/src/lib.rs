//! Tokenizing and POS tagging for sentype
//!
//! The classifier in `sentype-core` consumes tagged tokens and never looks
//! at raw text. This crate supplies the [`Tagger`] seam between the two and
//! a default implementation, [`LexiconTagger`], backed by an embedded
//! English lexicon.
//!
//! # Example
//!
//! ```rust
//! use sentype_tagger::{LexiconTagger, Tagger};
//!
//! let tagger = LexiconTagger::english().unwrap();
//! let tagged = tagger.tag("Come here!").unwrap();
//! assert_eq!(tagged.to_string(), "Come/VB here/RB !/!");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod lexicon;
pub mod loader;
pub mod tagger;
pub mod tokenizer;

pub use config::LexiconConfig;
pub use error::{Result, TagError};
pub use lexicon::Lexicon;
pub use loader::{get_lexicon, is_supported, AVAILABLE_LANGUAGES};
pub use tagger::{FnTagger, LexiconTagger, Tagger};
pub use tokenizer::tokenize;
