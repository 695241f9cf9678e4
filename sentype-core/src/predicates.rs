//! Grammar predicates over a tagged sentence
//!
//! Each predicate is a pure function of its input. The three grammar
//! predicates are thin wrappers over the rule tables; negation is lexical.

use core::fmt;

use crate::matcher::matches_any;
use crate::tables::{
    is_negative_word, is_split_contraction_stem, EXCLAMATORY_RULES, IMPERATIVE_RULES,
    INTERROGATIVE_RULES,
};
use crate::types::{SentenceType, TaggedSentence};

/// Second-position tags that turn a leading "have" into a question ("Have you ...")
const HAVE_VETO_TAGS: [&str; 2] = ["PRP", "NN"];

/// Surface form of the token a splitting tokenizer leaves between `don` and `t`
const APOSTROPHE: &str = "'";

/// One of the four sentence predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Predicate {
    /// See [`is_imperative`]
    Imperative,
    /// See [`is_interrogative`]
    Interrogative,
    /// See [`is_exclamatory`]
    Exclamatory,
    /// See [`is_negative`]
    Negative,
}

impl Predicate {
    /// Evaluate the predicate
    pub fn evaluate(self, sentence: &TaggedSentence) -> bool {
        match self {
            Predicate::Imperative => is_imperative(sentence),
            Predicate::Interrogative => is_interrogative(sentence),
            Predicate::Exclamatory => is_exclamatory(sentence),
            Predicate::Negative => is_negative(sentence),
        }
    }

    /// The sentence type a true result stands for
    pub fn sentence_type(self) -> SentenceType {
        match self {
            Predicate::Imperative => SentenceType::Imperative,
            Predicate::Interrogative => SentenceType::Interrogative,
            Predicate::Exclamatory => SentenceType::Exclamatory,
            Predicate::Negative => SentenceType::Negative,
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sentence_type().as_str())
    }
}

/// Command or request
///
/// A sentence opening with "have" followed by a pronoun or singular noun is
/// never imperative, so "Have you ever been ..." falls through to the
/// question rules.
pub fn is_imperative(sentence: &TaggedSentence) -> bool {
    if opens_have_question(sentence) {
        return false;
    }
    matches_any(&IMPERATIVE_RULES, sentence)
}

/// Inverted auxiliary or wh-word opening
pub fn is_interrogative(sentence: &TaggedSentence) -> bool {
    matches_any(&INTERROGATIVE_RULES, sentence)
}

/// Opens with an interjection
pub fn is_exclamatory(sentence: &TaggedSentence) -> bool {
    matches_any(&EXCLAMATORY_RULES, sentence)
}

/// Contains a negation word, or a do-contraction split around an apostrophe
pub fn is_negative(sentence: &TaggedSentence) -> bool {
    sentence.iter().enumerate().any(|(index, token)| {
        let word = token.surface().to_lowercase();
        is_negative_word(&word)
            || (is_split_contraction_stem(&word)
                && sentence.word_at(index + 1) == Some(APOSTROPHE))
    })
}

fn opens_have_question(sentence: &TaggedSentence) -> bool {
    let opens_with_have = sentence
        .word_at(0)
        .is_some_and(|word| word.to_lowercase() == "have");
    opens_with_have
        && sentence
            .tag_at(1)
            .is_some_and(|tag| HAVE_VETO_TAGS.contains(&tag))
}
