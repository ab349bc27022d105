//! Markup language identifiers
//!
//! Each supported dialect is a variant of [`MarkupLanguage`]. The engine
//! never inspects language-specific syntax here; a language is only a key
//! into the rule registry plus its position in the dialect lattice, which
//! [`MarkupLanguage::subsumes`] encodes. The lattice matters when deciding
//! whether output produced in a broader dialect still satisfies a request
//! for a narrower one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A markup dialect the engine can parse from or render into
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum MarkupLanguage {
    /// Text with no embedded markup; the identity dialect
    PlainText,
    Html,
    Markdown,
    /// Markdown plus the strikethrough/underline extensions
    ExtendedMarkdown,
}

impl MarkupLanguage {
    /// All known dialects, in rendering-preference order
    pub const ALL: [MarkupLanguage; 4] = [
        MarkupLanguage::PlainText,
        MarkupLanguage::Html,
        MarkupLanguage::Markdown,
        MarkupLanguage::ExtendedMarkdown,
    ];

    /// Whether text valid in `other` is also valid in `self`.
    ///
    /// Every dialect subsumes itself and `PlainText` (unmarked text is
    /// valid anywhere), and `ExtendedMarkdown` subsumes `Markdown`.
    pub fn subsumes(self, other: MarkupLanguage) -> bool {
        if self == other || other == MarkupLanguage::PlainText {
            return true;
        }
        matches!(
            (self, other),
            (MarkupLanguage::ExtendedMarkdown, MarkupLanguage::Markdown)
        )
    }

    /// The canonical lowercase name, as used by the CLI and error text
    pub fn name(self) -> &'static str {
        match self {
            MarkupLanguage::PlainText => "plaintext",
            MarkupLanguage::Html => "html",
            MarkupLanguage::Markdown => "markdown",
            MarkupLanguage::ExtendedMarkdown => "extended-markdown",
        }
    }
}

impl fmt::Display for MarkupLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MarkupLanguage {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "plaintext" | "plain" | "text" => Ok(MarkupLanguage::PlainText),
            "html" => Ok(MarkupLanguage::Html),
            "markdown" | "md" => Ok(MarkupLanguage::Markdown),
            "extended-markdown" | "extended" | "xmd" => Ok(MarkupLanguage::ExtendedMarkdown),
            other => Err(format!("unknown markup language '{other}'")),
        }
    }
}
