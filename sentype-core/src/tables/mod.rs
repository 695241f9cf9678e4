//! Static rule tables and lexicons
//!
//! All tables are immutable process-wide data; nothing here allocates.

pub mod negation;
pub mod rules;

pub use negation::{is_negative_word, is_split_contraction_stem, NEGATIVE_WORDS};
pub use rules::{EXCLAMATORY_RULES, IMPERATIVE_RULES, INTERROGATIVE_RULES};
