//! Classification engine
//!
//! Terminal punctuation picks one of three fixed precedence chains; a
//! sentence without an end mark goes through the grammar-only chain. The
//! first predicate in the chain that holds decides the type, otherwise the
//! chain's fallback does. Each predicate runs at most once.

use core::fmt;

use crate::error::{CoreError, Result};
use crate::predicates::Predicate;
use crate::types::{EndMark, SentenceType, TaggedSentence};

/// Ordered predicates to try, and the type when none holds
#[derive(Debug, Clone, Copy)]
struct Precedence {
    checks: &'static [Predicate],
    fallback: SentenceType,
}

impl Precedence {
    fn resolve(&self, sentence: &TaggedSentence) -> (SentenceType, Option<Predicate>) {
        self.checks
            .iter()
            .copied()
            .find(|predicate| predicate.evaluate(sentence))
            .map_or((self.fallback, None), |predicate| {
                (predicate.sentence_type(), Some(predicate))
            })
    }
}

const QUESTION_CHAIN: Precedence = Precedence {
    checks: &[],
    fallback: SentenceType::Interrogative,
};

const EXCLAMATION_CHAIN: Precedence = Precedence {
    checks: &[Predicate::Imperative],
    fallback: SentenceType::Exclamatory,
};

const PERIOD_CHAIN: Precedence = Precedence {
    checks: &[Predicate::Imperative, Predicate::Negative],
    fallback: SentenceType::Assertive,
};

const GRAMMAR_CHAIN: Precedence = Precedence {
    checks: &[
        Predicate::Interrogative,
        Predicate::Imperative,
        Predicate::Exclamatory,
        Predicate::Negative,
    ],
    fallback: SentenceType::Assertive,
};

impl EndMark {
    fn precedence(self) -> Precedence {
        match self {
            EndMark::Question => QUESTION_CHAIN,
            EndMark::Exclamation => EXCLAMATION_CHAIN,
            EndMark::Period => PERIOD_CHAIN,
        }
    }
}

/// What settled a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum DecisionBasis {
    /// Terminal punctuation chose the chain; `predicate` is the one that held, if any
    EndMark {
        /// The trailing punctuation
        mark: EndMark,
        /// Predicate that overrode the mark's fallback
        predicate: Option<Predicate>,
    },
    /// No end mark; a grammar predicate held
    Grammar {
        /// The predicate that held
        predicate: Predicate,
    },
    /// No end mark and no predicate held
    Default,
}

impl fmt::Display for DecisionBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecisionBasis::EndMark {
                mark,
                predicate: Some(predicate),
            } => write!(f, "end mark '{mark}' overridden by {predicate} rules"),
            DecisionBasis::EndMark {
                mark,
                predicate: None,
            } => write!(f, "end mark '{mark}'"),
            DecisionBasis::Grammar { predicate } => write!(f, "{predicate} rules"),
            DecisionBasis::Default => write!(f, "default"),
        }
    }
}

/// A classification together with the reason for it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decision {
    /// The chosen sentence type
    pub sentence_type: SentenceType,
    /// Why it was chosen
    pub basis: DecisionBasis,
}

/// Classify a tagged sentence and report which branch decided it
///
/// # Errors
///
/// [`CoreError::EmptySentence`] if the sentence has no tokens.
pub fn explain(sentence: &TaggedSentence) -> Result<Decision> {
    if sentence.is_empty() {
        return Err(CoreError::EmptySentence);
    }

    let decision = match sentence.end_mark() {
        Some(mark) => {
            let (sentence_type, predicate) = mark.precedence().resolve(sentence);
            Decision {
                sentence_type,
                basis: DecisionBasis::EndMark { mark, predicate },
            }
        }
        None => {
            let (sentence_type, predicate) = GRAMMAR_CHAIN.resolve(sentence);
            Decision {
                sentence_type,
                basis: match predicate {
                    Some(predicate) => DecisionBasis::Grammar { predicate },
                    None => DecisionBasis::Default,
                },
            }
        }
    };

    Ok(decision)
}

/// Classify a tagged sentence into one of the five sentence types
///
/// # Errors
///
/// [`CoreError::EmptySentence`] if the sentence has no tokens.
///
/// # Example
///
/// ```rust
/// use sentype_core::{classify, SentenceType, TaggedSentence};
///
/// let sentence = TaggedSentence::from_pairs([("Come", "VB"), ("here", "RB"), ("!", "!")]);
/// assert_eq!(classify(&sentence).unwrap(), SentenceType::Imperative);
/// ```
pub fn classify(sentence: &TaggedSentence) -> Result<SentenceType> {
    explain(sentence).map(|decision| decision.sentence_type)
}
