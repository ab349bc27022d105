//! Parse and apply rules
//!
//! A [`RulePair`] binds one (kind, language) combination to its two halves:
//! the [`ParseRule`] that recognizes the kind's spelling in that language
//! and strips it down to plain text, and the [`ApplyRule`] that re-adds the
//! spelling from a stored [`FormattingKind`]. The two halves are intended
//! to be mutual inverses; `Registry::verify_registered_pairs` checks that
//! intent against a canonical probe per kind.
//!
//! Rules are plain function pointers over owned data, so a pair is `Send +
//! Sync` by construction and the registry can hand out shared `Arc`s
//! without any locking on the read path.

use regex::Regex;

use crate::error::BabelError;
use crate::formatting::{FormattingKind, KindTag};
use crate::language::MarkupLanguage;

/// Extractor half of a parse rule: matched markup in, stripped text out
pub type ExtractFn = fn(&str) -> Result<Extraction, BabelError>;

/// Applier half of an apply rule: stripped text + kind in, markup out
pub type ApplyFn = fn(&str, &FormattingKind) -> Result<String, BabelError>;

/// What an extractor recovers from one match: the text with the markup
/// stripped, and the kind (payload included) the markup encoded
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub text: String,
    pub kind: FormattingKind,
}

impl Extraction {
    pub fn new(text: impl Into<String>, kind: FormattingKind) -> Self {
        Extraction {
            text: text.into(),
            kind,
        }
    }
}

/// Recognizes one formatting kind's spelling in one language
#[derive(Debug, Clone)]
pub struct ParseRule {
    /// Pattern describing the kind's spelling; matched left to right,
    /// non-overlapping, against the working text
    pub regex: Regex,
    pub extract: ExtractFn,
}

impl ParseRule {
    pub fn new(regex: Regex, extract: ExtractFn) -> Self {
        ParseRule { regex, extract }
    }
}

/// Re-renders one formatting kind into one language
#[derive(Debug, Clone)]
pub struct ApplyRule {
    /// Kind discriminator; the applier rejects instructions of any other
    /// kind with `KindMismatch`
    pub kind: KindTag,
    /// The language this rule renders into, unioned into the output's
    /// employed-language set
    pub language: MarkupLanguage,
    pub apply: ApplyFn,
}

impl ApplyRule {
    pub fn new(kind: KindTag, language: MarkupLanguage, apply: ApplyFn) -> Self {
        ApplyRule {
            kind,
            language,
            apply,
        }
    }
}

/// One (kind, language) combination's parse and apply halves
#[derive(Debug, Clone)]
pub struct RulePair {
    pub kind: KindTag,
    pub language: MarkupLanguage,
    pub parse: ParseRule,
    pub apply: ApplyRule,
}

impl RulePair {
    pub fn new(kind: KindTag, language: MarkupLanguage, parse: ParseRule, apply: ApplyRule) -> Self {
        debug_assert_eq!(kind, apply.kind);
        RulePair {
            kind,
            language,
            parse,
            apply,
        }
    }
}
