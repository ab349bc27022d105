//! Italic rules
//!
//! Single-delimiter emphasis, `*soft*` or `_soft_`. Registered last:
//! by the time these patterns run, bold has already claimed every
//! doubled delimiter, so a single `*` here really is italic.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::ensure_kind;
use crate::error::BabelError;
use crate::formatting::{FormattingKind, KindTag};
use crate::language::MarkupLanguage;
use crate::registry::Registry;
use crate::rules::{ApplyRule, Extraction, ParseRule};

static MARKDOWN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*]+?)\*|_([^_]+?)_").unwrap());
static HTML: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<(?:i|em)>(.*?)</(?:i|em)>").unwrap());

pub(crate) fn register(registry: &Registry) {
    for language in [MarkupLanguage::Markdown, MarkupLanguage::ExtendedMarkdown] {
        registry.register(
            KindTag::Italic,
            language,
            ParseRule::new(MARKDOWN.clone(), extract_markdown),
            ApplyRule::new(KindTag::Italic, language, apply_markdown),
        );
    }
    registry.register(
        KindTag::Italic,
        MarkupLanguage::Html,
        ParseRule::new(HTML.clone(), extract_html),
        ApplyRule::new(KindTag::Italic, MarkupLanguage::Html, apply_html),
    );
}

fn extract_markdown(markup: &str) -> Result<Extraction, BabelError> {
    let caps = MARKDOWN
        .captures(markup)
        .ok_or_else(|| BabelError::language_mismatch(MarkupLanguage::Markdown, markup))?;
    let inner = caps
        .get(1)
        .or_else(|| caps.get(2))
        .ok_or_else(|| BabelError::MalformedPayload("italic marker without content".into()))?;
    Ok(Extraction::new(inner.as_str(), FormattingKind::Italic))
}

fn extract_html(markup: &str) -> Result<Extraction, BabelError> {
    let caps = HTML
        .captures(markup)
        .ok_or_else(|| BabelError::language_mismatch(MarkupLanguage::Html, markup))?;
    Ok(Extraction::new(&caps[1], FormattingKind::Italic))
}

fn apply_markdown(text: &str, kind: &FormattingKind) -> Result<String, BabelError> {
    ensure_kind(KindTag::Italic, kind)?;
    Ok(format!("*{text}*"))
}

fn apply_html(text: &str, kind: &FormattingKind) -> Result<String, BabelError> {
    ensure_kind(KindTag::Italic, kind)?;
    Ok(format!("<i>{text}</i>"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_both_markdown_spellings() {
        assert_eq!(extract_markdown("*soft*").unwrap().text, "soft");
        assert_eq!(extract_markdown("_soft_").unwrap().text, "soft");
    }

    #[test]
    fn strips_both_html_spellings() {
        assert_eq!(extract_html("<i>soft</i>").unwrap().text, "soft");
        assert_eq!(extract_html("<em>soft</em>").unwrap().text, "soft");
    }

    #[test]
    fn applies_the_canonical_spelling() {
        assert_eq!(apply_markdown("soft", &FormattingKind::Italic).unwrap(), "*soft*");
        assert_eq!(apply_html("soft", &FormattingKind::Italic).unwrap(), "<i>soft</i>");
    }
}
