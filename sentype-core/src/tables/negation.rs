//! Negation lexicon
//!
//! Entries are lowercase and compared against the lowercased surface form of
//! each token. Contractions are listed with both the ASCII apostrophe and the
//! typographic one (U+2019), since taggers that keep contractions joined
//! preserve whichever the writer used.

/// Lowercase negation words and contractions
pub static NEGATIVE_WORDS: &[&str] = &[
    "no",
    "not",
    "never",
    "none",
    "nobody",
    "nothing",
    "nowhere",
    "neither",
    "nor",
    "cannot",
    "n't",
    "n’t",
    "don't",
    "doesn't",
    "didn't",
    "isn't",
    "aren't",
    "wasn't",
    "weren't",
    "haven't",
    "hasn't",
    "hadn't",
    "won't",
    "wouldn't",
    "can't",
    "couldn't",
    "shouldn't",
    "mustn't",
    "mightn't",
    "needn't",
    "shan't",
    "don’t",
    "doesn’t",
    "didn’t",
    "isn’t",
    "aren’t",
    "wasn’t",
    "weren’t",
    "haven’t",
    "hasn’t",
    "hadn’t",
    "won’t",
    "wouldn’t",
    "can’t",
    "couldn’t",
    "shouldn’t",
    "mustn’t",
    "mightn’t",
    "needn’t",
    "shan’t",
];

/// Stems left behind when a tokenizer splits "don't" into `don` `'` `t`
static SPLIT_CONTRACTION_STEMS: &[&str] = &["don", "doesn", "didn"];

/// True if `lowercase_word` is in the negation lexicon
#[inline]
pub fn is_negative_word(lowercase_word: &str) -> bool {
    NEGATIVE_WORDS.contains(&lowercase_word)
}

/// True if `lowercase_word` is the stem of a split do-contraction
#[inline]
pub fn is_split_contraction_stem(lowercase_word: &str) -> bool {
    SPLIT_CONTRACTION_STEMS.contains(&lowercase_word)
}
