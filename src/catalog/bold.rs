//! Bold rules
//!
//! Markdown spells bold with doubled delimiters, `**strong**` or
//! `__strong__`. The doubled form registers before italic so the
//! single-delimiter rule can never split a bold pair in two.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::ensure_kind;
use crate::error::BabelError;
use crate::formatting::{FormattingKind, KindTag};
use crate::language::MarkupLanguage;
use crate::registry::Registry;
use crate::rules::{ApplyRule, Extraction, ParseRule};

static MARKDOWN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^*]+?)\*\*|__([^_]+?)__").unwrap());
static HTML: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<(?:b|strong)>(.*?)</(?:b|strong)>").unwrap());

pub(crate) fn register(registry: &Registry) {
    for language in [MarkupLanguage::Markdown, MarkupLanguage::ExtendedMarkdown] {
        registry.register(
            KindTag::Bold,
            language,
            ParseRule::new(MARKDOWN.clone(), extract_markdown),
            ApplyRule::new(KindTag::Bold, language, apply_markdown),
        );
    }
    registry.register(
        KindTag::Bold,
        MarkupLanguage::Html,
        ParseRule::new(HTML.clone(), extract_html),
        ApplyRule::new(KindTag::Bold, MarkupLanguage::Html, apply_html),
    );
}

fn extract_markdown(markup: &str) -> Result<Extraction, BabelError> {
    let caps = MARKDOWN
        .captures(markup)
        .ok_or_else(|| BabelError::language_mismatch(MarkupLanguage::Markdown, markup))?;
    let inner = caps
        .get(1)
        .or_else(|| caps.get(2))
        .ok_or_else(|| BabelError::MalformedPayload("bold marker without content".into()))?;
    Ok(Extraction::new(inner.as_str(), FormattingKind::Bold))
}

fn extract_html(markup: &str) -> Result<Extraction, BabelError> {
    let caps = HTML
        .captures(markup)
        .ok_or_else(|| BabelError::language_mismatch(MarkupLanguage::Html, markup))?;
    Ok(Extraction::new(&caps[1], FormattingKind::Bold))
}

fn apply_markdown(text: &str, kind: &FormattingKind) -> Result<String, BabelError> {
    ensure_kind(KindTag::Bold, kind)?;
    Ok(format!("**{text}**"))
}

fn apply_html(text: &str, kind: &FormattingKind) -> Result<String, BabelError> {
    ensure_kind(KindTag::Bold, kind)?;
    Ok(format!("<b>{text}</b>"))
}
