//! Underline rules
//!
//! Core Markdown has no underline at all; the extended dialect borrows
//! the `++inserted++` spelling. This is the kind most likely to exercise
//! the fallback path in deployments that render toward Markdown.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::ensure_kind;
use crate::error::BabelError;
use crate::formatting::{FormattingKind, KindTag};
use crate::language::MarkupLanguage;
use crate::registry::Registry;
use crate::rules::{ApplyRule, Extraction, ParseRule};

static EXTENDED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\+\+([^+]+?)\+\+").unwrap());
static HTML: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<u>(.*?)</u>").unwrap());

pub(crate) fn register(registry: &Registry) {
    registry.register(
        KindTag::Underline,
        MarkupLanguage::ExtendedMarkdown,
        ParseRule::new(EXTENDED.clone(), extract_extended),
        ApplyRule::new(
            KindTag::Underline,
            MarkupLanguage::ExtendedMarkdown,
            apply_extended,
        ),
    );
    registry.register(
        KindTag::Underline,
        MarkupLanguage::Html,
        ParseRule::new(HTML.clone(), extract_html),
        ApplyRule::new(KindTag::Underline, MarkupLanguage::Html, apply_html),
    );
}

fn extract_extended(markup: &str) -> Result<Extraction, BabelError> {
    let caps = EXTENDED
        .captures(markup)
        .ok_or_else(|| BabelError::language_mismatch(MarkupLanguage::ExtendedMarkdown, markup))?;
    Ok(Extraction::new(&caps[1], FormattingKind::Underline))
}

fn extract_html(markup: &str) -> Result<Extraction, BabelError> {
    let caps = HTML
        .captures(markup)
        .ok_or_else(|| BabelError::language_mismatch(MarkupLanguage::Html, markup))?;
    Ok(Extraction::new(&caps[1], FormattingKind::Underline))
}

fn apply_extended(text: &str, kind: &FormattingKind) -> Result<String, BabelError> {
    ensure_kind(KindTag::Underline, kind)?;
    Ok(format!("++{text}++"))
}

fn apply_html(text: &str, kind: &FormattingKind) -> Result<String, BabelError> {
    ensure_kind(KindTag::Underline, kind)?;
    Ok(format!("<u>{text}</u>"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_the_plus_pair() {
        let extraction = extract_extended("++kept++").unwrap();
        assert_eq!(extraction.text, "kept");
        assert_eq!(extraction.kind, FormattingKind::Underline);
    }

    #[test]
    fn strips_the_html_tag() {
        assert_eq!(extract_html("<u>kept</u>").unwrap().text, "kept");
    }

    #[test]
    fn applies_both_spellings() {
        assert_eq!(
            apply_extended("kept", &FormattingKind::Underline).unwrap(),
            "++kept++"
        );
        assert_eq!(apply_html("kept", &FormattingKind::Underline).unwrap(), "<u>kept</u>");
    }
}
