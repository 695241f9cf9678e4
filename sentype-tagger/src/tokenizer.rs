//! Word tokenizer
//!
//! Splits on Unicode word boundaries (UAX #29). Whitespace is dropped and
//! every punctuation mark becomes its own token, so terminal `.`, `?` and
//! `!` arrive as trailing tokens. Apostrophes inside a word do not split it:
//! "doesn't" stays a single token.

use unicode_segmentation::UnicodeSegmentation;

/// Split `sentence` into word and punctuation tokens, in order
pub fn tokenize(sentence: &str) -> Vec<&str> {
    sentence
        .split_word_bounds()
        .filter(|segment| !segment.trim().is_empty())
        .collect()
}
