//! Error types for markup transformation

use std::fmt;

use crate::formatting::KindTag;
use crate::language::MarkupLanguage;

/// Errors that can occur while parsing or applying markup rules
///
/// Only a subset of these ever reaches a caller: parse-time failures
/// degrade to literal text (see the parser's failure policy) and a
/// missing apply rule falls back to identity rendering. `KindMismatch`
/// signals corrupted instruction state and is escalated, not handled.
#[derive(Debug, Clone, PartialEq)]
pub enum BabelError {
    /// An extractor was invoked on text that is not in its language
    LanguageMismatch {
        language: MarkupLanguage,
        snippet: String,
    },
    /// The pattern matched but its payload could not be recovered
    MalformedPayload(String),
    /// An applier was handed an instruction of a kind it does not own
    KindMismatch { expected: KindTag, found: KindTag },
    /// No rule registered for the requested key
    UnregisteredEntry(String),
}

impl BabelError {
    /// Language-mismatch error with a bounded snippet of the offending text
    pub fn language_mismatch(language: MarkupLanguage, text: &str) -> Self {
        let snippet: String = text.chars().take(40).collect();
        BabelError::LanguageMismatch { language, snippet }
    }

    pub fn kind_mismatch(expected: KindTag, found: KindTag) -> Self {
        BabelError::KindMismatch { expected, found }
    }

    /// Missing registry entry for a (kind, language) pair
    pub fn unregistered(kind: KindTag, language: MarkupLanguage) -> Self {
        BabelError::UnregisteredEntry(format!("({kind}, {language})"))
    }

    /// Missing registry entry for a kind, any language
    pub fn unregistered_kind(kind: KindTag) -> Self {
        BabelError::UnregisteredEntry(format!("kind {kind}"))
    }

    /// Missing registry entry for a language, any kind
    pub fn unregistered_language(language: MarkupLanguage) -> Self {
        BabelError::UnregisteredEntry(format!("language {language}"))
    }
}

impl fmt::Display for BabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BabelError::LanguageMismatch { language, snippet } => {
                write!(f, "text is not valid {language}: {snippet:?}")
            }
            BabelError::MalformedPayload(msg) => write!(f, "malformed markup payload: {msg}"),
            BabelError::KindMismatch { expected, found } => {
                write!(f, "apply rule for {expected} received a {found} instruction")
            }
            BabelError::UnregisteredEntry(key) => write!(f, "no rule registered for {key}"),
        }
    }
}

impl std::error::Error for BabelError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_mismatch_bounds_snippet() {
        let long = "x".repeat(200);
        match BabelError::language_mismatch(MarkupLanguage::Html, &long) {
            BabelError::LanguageMismatch { snippet, .. } => assert_eq!(snippet.len(), 40),
            other => panic!("Unexpected error: {:?}", other),
        }
    }

    #[test]
    fn display_names_the_registry_key() {
        let err = BabelError::unregistered(KindTag::Bold, MarkupLanguage::Html);
        assert_eq!(err.to_string(), "no rule registered for (bold, html)");
    }
}
