//! Property tests over generated tag sequences

use proptest::prelude::*;
use sentype_core::{classify, is_negative, tables, SentenceType, TaggedSentence, TaggedToken};

const TAGS: &[&str] = &[
    "VB", "VBP", "VBZ", "VBD", "VBG", "VBN", "MD", "NN", "NNS", "NNP", "PRP", "PRP$", "DT",
    "RB", "JJ", "IN", "TO", "UH", "WRB", "WP", "CC", "POS", ",", ".", "?", "!",
];

const WORDS: &[&str] = &[
    "have", "Have", "you", "dog", "never", "not", "don", "'", "t", "eat", "wow", "the", "come",
    "popcorn", "can't", "here", ",", ".", "?", "!",
];

fn token() -> impl Strategy<Value = TaggedToken> {
    (prop::sample::select(WORDS), prop::sample::select(TAGS))
        .prop_map(|(word, tag)| TaggedToken::new(word, tag))
}

fn sentence() -> impl Strategy<Value = TaggedSentence> {
    prop::collection::vec(token(), 1..12).prop_map(TaggedSentence::new)
}

proptest! {
    #[test]
    fn prop_non_empty_always_classifies(sentence in sentence()) {
        let ty = classify(&sentence).unwrap();
        prop_assert!(SentenceType::ALL.contains(&ty));
        prop_assert_eq!(ty.as_str().parse::<SentenceType>().unwrap(), ty);
    }

    #[test]
    fn prop_classification_is_deterministic(sentence in sentence()) {
        prop_assert_eq!(classify(&sentence), classify(&sentence.clone()));
    }

    #[test]
    fn prop_trailing_question_mark_is_interrogative(mut tokens in prop::collection::vec(token(), 0..10)) {
        tokens.push(TaggedToken::new("?", "?"));
        prop_assert_eq!(classify(&TaggedSentence::new(tokens)), Ok(SentenceType::Interrogative));
    }

    #[test]
    fn prop_trailing_exclamation_is_never_assertive_or_negative(mut tokens in prop::collection::vec(token(), 0..10)) {
        tokens.push(TaggedToken::new("!", "!"));
        let ty = classify(&TaggedSentence::new(tokens)).unwrap();
        prop_assert!(matches!(ty, SentenceType::Imperative | SentenceType::Exclamatory));
    }

    #[test]
    fn prop_trailing_period_never_interrogative_or_exclamatory(mut tokens in prop::collection::vec(token(), 0..10)) {
        tokens.push(TaggedToken::new(".", "."));
        let ty = classify(&TaggedSentence::new(tokens)).unwrap();
        prop_assert!(!matches!(ty, SentenceType::Interrogative | SentenceType::Exclamatory));
    }

    #[test]
    fn prop_appending_tokens_never_breaks_a_full_match(
        sentence in sentence(),
        extra in prop::collection::vec(token(), 0..5),
    ) {
        // Rules only look at the prefix they define
        for rule in tables::IMPERATIVE_RULES.iter().chain(&tables::INTERROGATIVE_RULES) {
            if sentence.len() >= rule.len() && rule.matches(&sentence) {
                let mut longer = sentence.tokens().to_vec();
                longer.extend(extra.iter().cloned());
                prop_assert!(rule.matches(&TaggedSentence::new(longer)));
            }
        }
    }

    #[test]
    fn prop_negation_word_anywhere_is_detected(
        mut tokens in prop::collection::vec(token(), 0..8),
        position in 0usize..8,
    ) {
        let at = position.min(tokens.len());
        tokens.insert(at, TaggedToken::new("Never", "RB"));
        prop_assert!(is_negative(&TaggedSentence::new(tokens)));
    }
}
