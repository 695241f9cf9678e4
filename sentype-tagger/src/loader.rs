//! Embedded lexicon loader
//!
//! Embedded lexicons are parsed on first access and shared for the rest of
//! the process.

use std::sync::{Arc, OnceLock};

use crate::error::{Result, TagError};
use crate::lexicon::Lexicon;

/// Language codes with an embedded lexicon
pub const AVAILABLE_LANGUAGES: &[&str] = &["en"];

static ENGLISH: OnceLock<std::result::Result<Arc<Lexicon>, String>> = OnceLock::new();

/// Load the embedded lexicon for a language code (`en` or `english`)
pub fn get_lexicon(code: &str) -> Result<Arc<Lexicon>> {
    match code.trim().to_ascii_lowercase().as_str() {
        "en" | "english" => ENGLISH
            .get_or_init(|| {
                load_embedded_lexicon("en", include_str!("../configs/english.toml"))
            })
            .clone()
            .map_err(TagError::Lexicon),
        _ => Err(TagError::UnsupportedLanguage {
            code: code.to_string(),
        }),
    }
}

/// True if `code` names an embedded lexicon
pub fn is_supported(code: &str) -> bool {
    matches!(
        code.trim().to_ascii_lowercase().as_str(),
        "en" | "english"
    )
}

fn load_embedded_lexicon(code: &str, toml_str: &str) -> std::result::Result<Arc<Lexicon>, String> {
    let lexicon = Lexicon::from_toml_str(toml_str).map_err(|e| {
        tracing::warn!(code, error = %e, "failed to load embedded lexicon");
        format!("embedded {code} lexicon: {e}")
    })?;
    Ok(Arc::new(lexicon))
}
