//! Inline code rules

use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::ensure_kind;
use crate::error::BabelError;
use crate::formatting::{FormattingKind, KindTag};
use crate::language::MarkupLanguage;
use crate::registry::Registry;
use crate::rules::{ApplyRule, Extraction, ParseRule};

static MARKDOWN: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`\n]+?)`").unwrap());
static HTML: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<code>(.*?)</code>").unwrap());

pub(crate) fn register(registry: &Registry) {
    for language in [MarkupLanguage::Markdown, MarkupLanguage::ExtendedMarkdown] {
        registry.register(
            KindTag::InlineCode,
            language,
            ParseRule::new(MARKDOWN.clone(), extract_markdown),
            ApplyRule::new(KindTag::InlineCode, language, apply_markdown),
        );
    }
    registry.register(
        KindTag::InlineCode,
        MarkupLanguage::Html,
        ParseRule::new(HTML.clone(), extract_html),
        ApplyRule::new(KindTag::InlineCode, MarkupLanguage::Html, apply_html),
    );
}

fn extract_markdown(markup: &str) -> Result<Extraction, BabelError> {
    let caps = MARKDOWN
        .captures(markup)
        .ok_or_else(|| BabelError::language_mismatch(MarkupLanguage::Markdown, markup))?;
    Ok(Extraction::new(&caps[1], FormattingKind::InlineCode))
}

fn extract_html(markup: &str) -> Result<Extraction, BabelError> {
    let caps = HTML
        .captures(markup)
        .ok_or_else(|| BabelError::language_mismatch(MarkupLanguage::Html, markup))?;
    Ok(Extraction::new(&caps[1], FormattingKind::InlineCode))
}

fn apply_markdown(text: &str, kind: &FormattingKind) -> Result<String, BabelError> {
    ensure_kind(KindTag::InlineCode, kind)?;
    Ok(format!("`{text}`"))
}

fn apply_html(text: &str, kind: &FormattingKind) -> Result<String, BabelError> {
    ensure_kind(KindTag::InlineCode, kind)?;
    Ok(format!("<code>{text}</code>"))
}
