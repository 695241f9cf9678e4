//! Core types for sentence type classification

use core::fmt;
use core::str::FromStr;

use crate::error::CoreError;

/// Grammatical type of a sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SentenceType {
    /// Declarative statement ("I like popcorn.")
    #[default]
    Assertive,
    /// Declarative statement carrying a negation ("I never eat popcorn.")
    Negative,
    /// Question ("Is the popcorn delicious?")
    Interrogative,
    /// Command or request ("Feed the dog once per day.")
    Imperative,
    /// Exclamation ("Wow, he must really love popcorn!")
    Exclamatory,
}

impl SentenceType {
    /// Every sentence type, in label order
    pub const ALL: [SentenceType; 5] = [
        SentenceType::Assertive,
        SentenceType::Negative,
        SentenceType::Interrogative,
        SentenceType::Imperative,
        SentenceType::Exclamatory,
    ];

    /// Lowercase label for this type
    pub fn as_str(&self) -> &'static str {
        match self {
            SentenceType::Assertive => "assertive",
            SentenceType::Negative => "negative",
            SentenceType::Interrogative => "interrogative",
            SentenceType::Imperative => "imperative",
            SentenceType::Exclamatory => "exclamatory",
        }
    }
}

impl fmt::Display for SentenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentenceType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        SentenceType::ALL
            .into_iter()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| CoreError::UnknownSentenceType(s.to_string()))
    }
}

/// Terminal punctuation that short-circuits grammar analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EndMark {
    /// `.`
    Period,
    /// `?`
    Question,
    /// `!`
    Exclamation,
}

impl EndMark {
    /// Recognize an end mark from a token tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "." => Some(EndMark::Period),
            "?" => Some(EndMark::Question),
            "!" => Some(EndMark::Exclamation),
            _ => None,
        }
    }

    /// The punctuation character, which is also its tag
    pub fn as_char(&self) -> char {
        match self {
            EndMark::Period => '.',
            EndMark::Question => '?',
            EndMark::Exclamation => '!',
        }
    }
}

impl fmt::Display for EndMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A word (or punctuation mark) paired with its POS tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaggedToken {
    surface: String,
    tag: String,
}

impl TaggedToken {
    /// Create a new tagged token
    pub fn new(surface: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            tag: tag.into(),
        }
    }

    /// Surface form as it appeared in the sentence
    pub fn surface(&self) -> &str {
        &self.surface
    }

    /// POS tag, or the punctuation character itself for punctuation tokens
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl<S: Into<String>, T: Into<String>> From<(S, T)> for TaggedToken {
    fn from((surface, tag): (S, T)) -> Self {
        Self::new(surface, tag)
    }
}

/// Ordered sequence of tagged tokens making up one sentence
///
/// Token order is the original sentence order. Out-of-range lookups return
/// `None` rather than panicking, which the rule matcher relies on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TaggedSentence {
    tokens: Vec<TaggedToken>,
}

impl TaggedSentence {
    /// Create from already-tagged tokens
    pub fn new(tokens: Vec<TaggedToken>) -> Self {
        Self { tokens }
    }

    /// Build from `(surface, tag)` pairs
    pub fn from_pairs<S, T>(pairs: impl IntoIterator<Item = (S, T)>) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        pairs.into_iter().map(TaggedToken::from).collect()
    }

    /// All tokens in order
    pub fn tokens(&self) -> &[TaggedToken] {
        &self.tokens
    }

    /// Iterate over tokens in order
    pub fn iter(&self) -> core::slice::Iter<'_, TaggedToken> {
        self.tokens.iter()
    }

    /// Number of tokens, including punctuation
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True if there are no tokens at all
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tag at `index`, if present
    #[inline]
    pub fn tag_at(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(TaggedToken::tag)
    }

    /// Surface form at `index`, if present
    #[inline]
    pub fn word_at(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(TaggedToken::surface)
    }

    /// Terminal punctuation, if the last token is tagged `.`, `?` or `!`
    pub fn end_mark(&self) -> Option<EndMark> {
        self.tokens.last().and_then(|token| EndMark::from_tag(token.tag()))
    }

    /// Consume into the underlying tokens
    pub fn into_tokens(self) -> Vec<TaggedToken> {
        self.tokens
    }
}

impl From<Vec<TaggedToken>> for TaggedSentence {
    fn from(tokens: Vec<TaggedToken>) -> Self {
        Self::new(tokens)
    }
}

impl FromIterator<TaggedToken> for TaggedSentence {
    fn from_iter<I: IntoIterator<Item = TaggedToken>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TaggedSentence {
    type Item = &'a TaggedToken;
    type IntoIter = core::slice::Iter<'a, TaggedToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for TaggedSentence {
    /// Renders as `word/TAG` pairs separated by spaces
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}/{}", token.surface(), token.tag())?;
        }
        Ok(())
    }
}
