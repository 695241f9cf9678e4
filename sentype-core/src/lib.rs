//! Rule-based sentence type classification
//!
//! This crate decides whether a single POS-tagged sentence is assertive,
//! negative, interrogative, imperative or exclamatory. It does no tokenizing
//! or tagging of its own: callers hand it a [`TaggedSentence`] produced by
//! whatever tagger they use, with terminal punctuation as trailing tokens
//! tagged `.`, `?` or `!`.
//!
//! # Architecture
//!
//! - **Matcher**: prefix tag-pattern matching over [`Rule`] tables
//! - **Tables**: static rule tables and the negation lexicon
//! - **Predicates**: imperative / interrogative / exclamatory / negative tests
//! - **Engine**: end-mark short-circuit and predicate precedence
//!
//! # Example
//!
//! ```rust
//! use sentype_core::{classify, SentenceType, TaggedSentence};
//!
//! let sentence = TaggedSentence::from_pairs([
//!     ("I", "PRP"),
//!     ("never", "RB"),
//!     ("eat", "VB"),
//!     ("popcorn", "NN"),
//!     (".", "."),
//! ]);
//! assert_eq!(classify(&sentence).unwrap(), SentenceType::Negative);
//! ```

#![warn(missing_docs)]

pub mod engine;
pub mod error;
pub mod matcher;
pub mod predicates;
pub mod tables;
pub mod types;

pub use engine::{classify, explain, Decision, DecisionBasis};
pub use error::{CoreError, Result};
pub use matcher::{matches, matches_any, Rule, TagSet};
pub use predicates::{is_exclamatory, is_imperative, is_interrogative, is_negative, Predicate};
pub use types::{EndMark, SentenceType, TaggedSentence, TaggedToken};
