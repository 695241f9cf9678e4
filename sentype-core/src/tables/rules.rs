//! Prefix rule tables for the grammar predicates
//!
//! Each table is OR-ed: a sentence satisfies the predicate if any rule in
//! the table matches its prefix. Order within a table does not change the
//! result.

use crate::matcher::{Rule, TagSet};

/// Base-form or non-3rd-person present verb
const BASE_VERB: TagSet = TagSet::new(&["VB", "VBP"]);
/// Singular noun (a vocative such as "John, ...")
const NOUN: TagSet = TagSet::new(&["NN"]);
const COMMA: TagSet = TagSet::new(&[","]);
const ADVERB: TagSet = TagSet::new(&["RB"]);

/// Modal or finite auxiliary that can invert with the subject
const AUXILIARY: TagSet = TagSet::new(&["MD", "VBP", "VBZ", "VBD"]);
/// Anything that can stand as the subject after an inverted auxiliary
const SUBJECT: TagSet = TagSet::new(&["PRP", "NN", "NNP", "NNS", "VBG"]);
const WH_WORD: TagSet = TagSet::new(&["WRB", "WP"]);
const DETERMINER: TagSet = TagSet::new(&["DT"]);

const INTERJECTION: TagSet = TagSet::new(&["UH"]);

/// Command forms: "Feed the dog", "John, come here", "Never speak ..."
pub static IMPERATIVE_RULES: [Rule; 4] = [
    Rule::new("verb-first", &[BASE_VERB]),
    Rule::new("vocative-verb", &[NOUN, COMMA, BASE_VERB]),
    Rule::new("adverb-verb", &[ADVERB, BASE_VERB]),
    Rule::new("vocative-adverb-verb", &[NOUN, COMMA, ADVERB, BASE_VERB]),
];

/// Question forms: "Will you ...", "Where can ...", "Is the popcorn ..."
pub static INTERROGATIVE_RULES: [Rule; 3] = [
    Rule::new("auxiliary-subject", &[AUXILIARY, SUBJECT]),
    Rule::new("wh-auxiliary", &[WH_WORD, AUXILIARY]),
    Rule::new("auxiliary-determiner-subject", &[AUXILIARY, DETERMINER, SUBJECT]),
];

/// Exclamations opening with an interjection: "Wow, ..."
pub static EXCLAMATORY_RULES: [Rule; 1] = [Rule::new("interjection-first", &[INTERJECTION])];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::matches_any;
    use crate::types::TaggedSentence;

    fn tags(tags: &[&str]) -> TaggedSentence {
        TaggedSentence::from_pairs(tags.iter().map(|tag| ("w", *tag)))
    }

    fn rule_shape(rule: &Rule) -> Vec<Vec<&'static str>> {
        rule.positions().iter().map(|set| set.tags().to_vec()).collect()
    }

    #[test]
    fn test_imperative_table_shape() {
        let shapes: Vec<_> = IMPERATIVE_RULES.iter().map(rule_shape).collect();
        assert_eq!(
            shapes,
            vec![
                vec![vec!["VB", "VBP"]],
                vec![vec!["NN"], vec![","], vec!["VB", "VBP"]],
                vec![vec!["RB"], vec!["VB", "VBP"]],
                vec![vec!["NN"], vec![","], vec!["RB"], vec!["VB", "VBP"]],
            ]
        );
    }

    #[test]
    fn test_interrogative_table_shape() {
        let shapes: Vec<_> = INTERROGATIVE_RULES.iter().map(rule_shape).collect();
        assert_eq!(
            shapes,
            vec![
                vec![
                    vec!["MD", "VBP", "VBZ", "VBD"],
                    vec!["PRP", "NN", "NNP", "NNS", "VBG"]
                ],
                vec![vec!["WRB", "WP"], vec!["MD", "VBP", "VBZ", "VBD"]],
                vec![
                    vec!["MD", "VBP", "VBZ", "VBD"],
                    vec!["DT"],
                    vec!["PRP", "NN", "NNP", "NNS", "VBG"]
                ],
            ]
        );
    }

    #[test]
    fn test_exclamatory_table_shape() {
        assert_eq!(EXCLAMATORY_RULES.len(), 1);
        assert_eq!(rule_shape(&EXCLAMATORY_RULES[0]), vec![vec!["UH"]]);
    }

    #[test]
    fn test_rule_names_unique_per_table() {
        for table in [
            &IMPERATIVE_RULES[..],
            &INTERROGATIVE_RULES[..],
            &EXCLAMATORY_RULES[..],
        ] {
            let mut names: Vec<_> = table.iter().map(Rule::name).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), table.len());
        }
    }

    #[test]
    fn test_imperative_table_examples() {
        // Feed the dog once per day.
        assert!(matches_any(&IMPERATIVE_RULES, &tags(&["VB", "DT", "NN"])));
        // John, come here.
        assert!(matches_any(&IMPERATIVE_RULES, &tags(&["NN", ",", "VB", "RB"])));
        // Never speak to me like that again.
        assert!(matches_any(&IMPERATIVE_RULES, &tags(&["RB", "VB", "TO", "PRP"])));
        // John, always remember it.
        assert!(matches_any(&IMPERATIVE_RULES, &tags(&["NN", ",", "RB", "VBP", "PRP"])));
        // The popcorn was hot.
        assert!(!matches_any(&IMPERATIVE_RULES, &tags(&["DT", "NN", "VBD", "JJ"])));
    }

    #[test]
    fn test_interrogative_table_examples() {
        // Will you wait here
        assert!(matches_any(&INTERROGATIVE_RULES, &tags(&["MD", "PRP", "VB", "RB"])));
        // Where can I buy fresh popcorn
        assert!(matches_any(&INTERROGATIVE_RULES, &tags(&["WRB", "MD", "PRP", "VB"])));
        // Is the popcorn delicious
        assert!(matches_any(&INTERROGATIVE_RULES, &tags(&["VBZ", "DT", "NN", "JJ"])));
        // I like popcorn
        assert!(!matches_any(&INTERROGATIVE_RULES, &tags(&["PRP", "VBP", "NN"])));
    }
}
