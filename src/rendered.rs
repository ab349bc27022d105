//! Rendering output
//!
//! Rendering is best-effort: spans with no applicable rule pass through
//! as plain text instead of being dropped, so one output can mix the
//! target dialect with plain-text regions. [`RenderedText`] carries the
//! set of languages actually employed so a caller can tell a full
//! rendering from a partial one.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::language::MarkupLanguage;

/// Re-rendered text plus the languages actually used to produce it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedText {
    text: String,
    languages: BTreeSet<MarkupLanguage>,
}

impl RenderedText {
    pub fn new(text: impl Into<String>, languages: BTreeSet<MarkupLanguage>) -> Self {
        RenderedText {
            text: text.into(),
            languages,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The languages employed while rendering; `PlainText` marks spans
    /// that went through the identity fallback
    pub fn languages(&self) -> &BTreeSet<MarkupLanguage> {
        &self.languages
    }

    /// Whether everything employed here is valid in `language`
    pub fn satisfies(&self, language: MarkupLanguage) -> bool {
        self.languages
            .iter()
            .all(|employed| language.subsumes(*employed))
    }

    pub fn into_text(self) -> String {
        self.text
    }
}
