//! Tagging real sentences with the embedded English lexicon

use sentype_core::{EndMark, TaggedSentence, TaggedToken};
use sentype_tagger::{LexiconTagger, TagError, Tagger};

fn tag(sentence: &str) -> TaggedSentence {
    LexiconTagger::english().unwrap().tag(sentence).unwrap()
}

fn tags(sentence: &TaggedSentence) -> Vec<&str> {
    sentence.iter().map(TaggedToken::tag).collect()
}

#[test]
fn test_end_marks_are_self_tagged_trailing_tokens() {
    let cases = [
        ("The popcorn was hot.", EndMark::Period),
        ("Is the popcorn delicious?", EndMark::Question),
        ("Stop feeding the dog!", EndMark::Exclamation),
    ];

    for (text, mark) in cases {
        let tagged = tag(text);
        assert_eq!(tagged.end_mark(), Some(mark), "Failed for text: '{text}'");
        let last = tagged.tokens().last().unwrap();
        assert_eq!(last.surface(), last.tag());
    }
}

#[test]
fn test_word_order_is_preserved() {
    let tagged = tag("Where can I buy fresh popcorn?");
    let words: Vec<&str> = tagged.iter().map(TaggedToken::surface).collect();
    assert_eq!(words, vec!["Where", "can", "I", "buy", "fresh", "popcorn", "?"]);
    assert_eq!(tags(&tagged), vec!["WRB", "MD", "PRP", "VB", "JJ", "NN", "?"]);
}

#[test]
fn test_question_opening_with_have() {
    let tagged = tag("Have you ever been to a county fair?");
    assert_eq!(
        tags(&tagged),
        vec!["VBP", "PRP", "RB", "VBN", "TO", "DT", "NN", "NN", "?"]
    );
}

#[test]
fn test_contractions_keep_surface_form() {
    let ascii = tag("Dogs don't usually eat popcorn.");
    assert_eq!(ascii.word_at(1), Some("don't"));
    assert_eq!(ascii.tag_at(1), Some("VBP"));

    let typographic = tag("Dogs don’t usually eat popcorn.");
    assert_eq!(typographic.word_at(1), Some("don’t"));
    assert_eq!(typographic.tag_at(1), Some("VBP"));
}

#[test]
fn test_interjection_and_comma() {
    let tagged = tag("Wow, he must really love popcorn!");
    assert_eq!(
        tags(&tagged),
        vec!["UH", ",", "PRP", "MD", "RB", "VB", "NN", "!"]
    );
}

#[test]
fn test_unknown_proper_noun_mid_sentence() {
    let tagged = tag("My sister lives in Mexico.");
    assert_eq!(tags(&tagged), vec!["PRP$", "NN", "VBZ", "IN", "NNP", "."]);
}

#[test]
fn test_custom_lexicon_document() {
    let toml = r#"
[metadata]
code = "en-pets"
name = "Pet commands"
default_tag = "NN"

[tags]
VB = ["sit", "stay"]
"#;
    let tagger = LexiconTagger::from_toml_str(toml).unwrap();
    assert_eq!(tagger.lexicon().code(), "en-pets");
    assert_eq!(tags(&tagger.tag("Sit, Rex.").unwrap()), vec!["VB", ",", "NNP", "."]);
}

#[test]
fn test_unsupported_language() {
    assert!(matches!(
        LexiconTagger::for_language("fr"),
        Err(TagError::UnsupportedLanguage { .. })
    ));
}
