//! Prefix tag-pattern matching
//!
//! A [`Rule`] is an ordered list of [`TagSet`]s. Position `i` of the rule is
//! tested only against token `i` of the sentence, starting at the first
//! token, with no skipping and nothing constrained past the rule's length.
//!
//! A sentence that runs out of tokens before the rule does is treated as a
//! match. Empty and very short sentences therefore satisfy many rules; the
//! predicate tables rely on their first position being selective.

use core::fmt;

use crate::types::TaggedSentence;

/// Set of acceptable tags for one rule position
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TagSet(&'static [&'static str]);

impl TagSet {
    /// Create a tag set. Panics (at compile time in const context) when empty.
    pub const fn new(tags: &'static [&'static str]) -> Self {
        assert!(!tags.is_empty(), "tag set must not be empty");
        Self(tags)
    }

    /// True if `tag` is one of the alternatives
    #[inline]
    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|candidate| *candidate == tag)
    }

    /// The alternatives, in declaration order
    pub fn tags(&self) -> &'static [&'static str] {
        self.0
    }
}

impl fmt::Debug for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.iter()).finish()
    }
}

/// Ordered sequence of tag sets constraining a sentence prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    name: &'static str,
    positions: &'static [TagSet],
}

impl Rule {
    /// Create a named rule. Panics (at compile time in const context) when empty.
    pub const fn new(name: &'static str, positions: &'static [TagSet]) -> Self {
        assert!(!positions.is_empty(), "rule must constrain at least one token");
        Self { name, positions }
    }

    /// Short identifier used in logs and tests
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Tag sets in position order
    pub fn positions(&self) -> &'static [TagSet] {
        self.positions
    }

    /// Number of leading tokens this rule constrains
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false; rules are non-empty by construction
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Test this rule against the sentence prefix
    #[inline]
    pub fn matches(&self, sentence: &TaggedSentence) -> bool {
        matches(self, sentence)
    }
}

/// Test whether the prefix of `sentence` satisfies `rule`
pub fn matches(rule: &Rule, sentence: &TaggedSentence) -> bool {
    for (index, allowed) in rule.positions.iter().enumerate() {
        let Some(tag) = sentence.tag_at(index) else {
            // Ran out of tokens before the rule did
            return true;
        };
        if !allowed.contains(tag) {
            return false;
        }
    }
    true
}

/// True if any rule in the table matches
pub fn matches_any(rules: &[Rule], sentence: &TaggedSentence) -> bool {
    rules.iter().any(|rule| rule.matches(sentence))
}
