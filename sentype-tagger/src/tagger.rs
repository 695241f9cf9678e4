//! The tagging seam and its lexicon-backed implementation

use std::fmt;
use std::sync::Arc;

use sentype_core::{TaggedSentence, TaggedToken};

use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::loader::get_lexicon;
use crate::tokenizer::tokenize;

/// Turns a raw sentence into POS-tagged tokens
///
/// Implementations must preserve word order and emit terminal punctuation
/// as trailing tokens whose tag is the punctuation character itself
/// (`.`, `?`, `!`).
pub trait Tagger: Send + Sync {
    /// Tokenize and tag one sentence
    fn tag(&self, sentence: &str) -> Result<TaggedSentence>;
}

impl<T: Tagger + ?Sized> Tagger for &T {
    fn tag(&self, sentence: &str) -> Result<TaggedSentence> {
        (**self).tag(sentence)
    }
}

impl<T: Tagger + ?Sized> Tagger for Box<T> {
    fn tag(&self, sentence: &str) -> Result<TaggedSentence> {
        (**self).tag(sentence)
    }
}

impl<T: Tagger + ?Sized> Tagger for Arc<T> {
    fn tag(&self, sentence: &str) -> Result<TaggedSentence> {
        (**self).tag(sentence)
    }
}

/// Adapter turning a closure into a [`Tagger`]
#[derive(Clone)]
pub struct FnTagger<F>(F);

impl<F> FnTagger<F>
where
    F: Fn(&str) -> Result<TaggedSentence> + Send + Sync,
{
    /// Wrap a tagging closure
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> Tagger for FnTagger<F>
where
    F: Fn(&str) -> Result<TaggedSentence> + Send + Sync,
{
    fn tag(&self, sentence: &str) -> Result<TaggedSentence> {
        (self.0)(sentence)
    }
}

impl<F> fmt::Debug for FnTagger<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FnTagger").field(&"<closure>").finish()
    }
}

/// Lexicon lookup tagger with punctuation, number and suffix fallbacks
///
/// For each token, in order:
/// 1. punctuation gets its Penn-style punctuation tag (`.`, `?`, `!`, `,`
///    tag as themselves; an apostrophe tags as `POS`)
/// 2. a listed word gets its lexicon tag
/// 3. a number tags as `CD`
/// 4. unknown words are guessed from their suffix or capitalization,
///    falling back to the lexicon's default tag
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    lexicon: Arc<Lexicon>,
}

impl LexiconTagger {
    /// Create over a shared lexicon
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Tagger over the embedded English lexicon
    pub fn english() -> Result<Self> {
        Self::for_language("en")
    }

    /// Tagger over the embedded lexicon for `code`
    pub fn for_language(code: &str) -> Result<Self> {
        Ok(Self::new(get_lexicon(code)?))
    }

    /// Tagger over a caller-supplied lexicon document
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Ok(Self::new(Arc::new(Lexicon::from_toml_str(toml_str)?)))
    }

    /// The lexicon in use
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    fn tag_word(&self, word: &str, index: usize) -> String {
        if let Some(tag) = punctuation_tag(word) {
            return tag.to_string();
        }
        if let Some(tag) = self.lexicon.lookup(word) {
            return tag.to_string();
        }
        if is_number(word) {
            return "CD".to_string();
        }
        guess_unknown(word, index)
            .unwrap_or(self.lexicon.default_tag())
            .to_string()
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, sentence: &str) -> Result<TaggedSentence> {
        let tagged: TaggedSentence = tokenize(sentence)
            .into_iter()
            .enumerate()
            .map(|(index, word)| TaggedToken::new(word, self.tag_word(word, index)))
            .collect();

        tracing::trace!(tokens = tagged.len(), "tagged sentence");
        Ok(tagged)
    }
}

fn punctuation_tag(token: &str) -> Option<&'static str> {
    let mut chars = token.chars();
    let ch = chars.next()?;
    if chars.next().is_some() || ch.is_alphanumeric() {
        return None;
    }
    let tag = match ch {
        '.' => ".",
        '?' => "?",
        '!' => "!",
        ',' => ",",
        ':' | ';' | '\u{2014}' | '\u{2013}' => ":",
        '\'' | '\u{2019}' => "POS",
        '"' | '\u{201C}' | '\u{201D}' => "\"",
        '(' | '[' | '{' => "(",
        ')' | ']' | '}' => ")",
        '$' => "$",
        '#' => "#",
        _ => "SYM",
    };
    Some(tag)
}

fn is_number(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit())
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == ',')
}

fn guess_unknown(word: &str, index: usize) -> Option<&'static str> {
    let lower = word.to_lowercase();
    if lower.len() > 4 {
        if lower.ends_with("ly") {
            return Some("RB");
        }
        if lower.ends_with("ing") {
            return Some("VBG");
        }
        if lower.ends_with("ed") {
            return Some("VBD");
        }
    }
    // Capitalized mid-sentence: treat as a proper noun
    if index > 0 && word.chars().next().is_some_and(char::is_uppercase) {
        return Some("NNP");
    }
    None
}
