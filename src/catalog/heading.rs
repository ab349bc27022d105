//! Heading rules
//!
//! The level travels with the kind: Markdown encodes it as the run
//! length of `#`, HTML as the digit in the tag name. The HTML extractor
//! insists the closing tag's digit agrees with the opening one; a
//! `<h1>...</h2>` pair is a malformed payload, not a heading.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::ensure_kind;
use crate::error::BabelError;
use crate::formatting::{FormattingKind, KindTag};
use crate::language::MarkupLanguage;
use crate::registry::Registry;
use crate::rules::{ApplyRule, Extraction, ParseRule};

static MARKDOWN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(#{1,6})[ \t]+(.+?)[ \t]*$").unwrap());
static HTML: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<h([1-6])>(.*?)</h([1-6])>").unwrap());

pub(crate) fn register(registry: &Registry) {
    for language in [MarkupLanguage::Markdown, MarkupLanguage::ExtendedMarkdown] {
        registry.register(
            KindTag::Heading,
            language,
            ParseRule::new(MARKDOWN.clone(), extract_markdown),
            ApplyRule::new(KindTag::Heading, language, apply_markdown),
        );
    }
    registry.register(
        KindTag::Heading,
        MarkupLanguage::Html,
        ParseRule::new(HTML.clone(), extract_html),
        ApplyRule::new(KindTag::Heading, MarkupLanguage::Html, apply_html),
    );
}

fn extract_markdown(markup: &str) -> Result<Extraction, BabelError> {
    let caps = MARKDOWN
        .captures(markup)
        .ok_or_else(|| BabelError::language_mismatch(MarkupLanguage::Markdown, markup))?;
    let level = caps[1].len() as u8;
    Ok(Extraction::new(&caps[2], FormattingKind::heading(level)))
}

fn extract_html(markup: &str) -> Result<Extraction, BabelError> {
    let caps = HTML
        .captures(markup)
        .ok_or_else(|| BabelError::language_mismatch(MarkupLanguage::Html, markup))?;
    if caps[1] != caps[3] {
        return Err(BabelError::MalformedPayload(format!(
            "heading opened as <h{}> but closed as </h{}>",
            &caps[1], &caps[3]
        )));
    }
    let level: u8 = caps[1].parse().map_err(|_| {
        BabelError::MalformedPayload(format!("heading level '{}' is not a digit", &caps[1]))
    })?;
    Ok(Extraction::new(&caps[2], FormattingKind::heading(level)))
}

fn apply_markdown(text: &str, kind: &FormattingKind) -> Result<String, BabelError> {
    ensure_kind(KindTag::Heading, kind)?;
    let FormattingKind::Heading { level } = kind else {
        unreachable!("guarded by ensure_kind");
    };
    Ok(format!("{} {text}", "#".repeat(*level as usize)))
}

fn apply_html(text: &str, kind: &FormattingKind) -> Result<String, BabelError> {
    ensure_kind(KindTag::Heading, kind)?;
    let FormattingKind::Heading { level } = kind else {
        unreachable!("guarded by ensure_kind");
    };
    Ok(format!("<h{level}>{text}</h{level}>"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_length_is_the_level() {
        let extraction = extract_markdown("### Third level").unwrap();
        assert_eq!(extraction.text, "Third level");
        assert_eq!(extraction.kind, FormattingKind::heading(3));
    }

    #[test]
    fn trailing_whitespace_is_trimmed() {
        let extraction = extract_markdown("# Title   ").unwrap();
        assert_eq!(extraction.text, "Title");
    }

    #[test]
    fn html_digit_is_the_level() {
        let extraction = extract_html("<h5>Deep</h5>").unwrap();
        assert_eq!(extraction.kind, FormattingKind::heading(5));
    }

    #[test]
    fn mismatched_close_tag_is_malformed() {
        let err = extract_html("<h1>Title</h2>").unwrap_err();
        assert!(matches!(err, BabelError::MalformedPayload(_)));
    }

    #[test]
    fn applies_the_stored_level() {
        let md = apply_markdown("Title", &FormattingKind::heading(2)).unwrap();
        assert_eq!(md, "## Title");
        let html = apply_html("Title", &FormattingKind::heading(2)).unwrap();
        assert_eq!(html, "<h2>Title</h2>");
    }

    #[test]
    fn level_out_of_range_never_reaches_the_applier() {
        // Construction clamps, so the applier only ever sees 1..=6.
        let md = apply_markdown("Title", &FormattingKind::heading(40)).unwrap();
        assert_eq!(md, "###### Title");
    }
}
