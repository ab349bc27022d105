//! Block quote rules
//!
//! Markdown quotes one line per `>` prefix, so a multi-line quote parses
//! into one instruction per line; the applier is the asymmetric half and
//! re-prefixes every line it is handed. HTML wraps the whole region in
//! `<blockquote>`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::ensure_kind;
use crate::error::BabelError;
use crate::formatting::{FormattingKind, KindTag};
use crate::language::MarkupLanguage;
use crate::registry::Registry;
use crate::rules::{ApplyRule, Extraction, ParseRule};

static MARKDOWN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^>[ \t]?(.+)$").unwrap());
static HTML: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<blockquote>(.*?)</blockquote>").unwrap());

pub(crate) fn register(registry: &Registry) {
    for language in [MarkupLanguage::Markdown, MarkupLanguage::ExtendedMarkdown] {
        registry.register(
            KindTag::BlockQuote,
            language,
            ParseRule::new(MARKDOWN.clone(), extract_markdown),
            ApplyRule::new(KindTag::BlockQuote, language, apply_markdown),
        );
    }
    registry.register(
        KindTag::BlockQuote,
        MarkupLanguage::Html,
        ParseRule::new(HTML.clone(), extract_html),
        ApplyRule::new(KindTag::BlockQuote, MarkupLanguage::Html, apply_html),
    );
}

fn extract_markdown(markup: &str) -> Result<Extraction, BabelError> {
    let caps = MARKDOWN
        .captures(markup)
        .ok_or_else(|| BabelError::language_mismatch(MarkupLanguage::Markdown, markup))?;
    Ok(Extraction::new(&caps[1], FormattingKind::BlockQuote))
}

fn extract_html(markup: &str) -> Result<Extraction, BabelError> {
    let caps = HTML
        .captures(markup)
        .ok_or_else(|| BabelError::language_mismatch(MarkupLanguage::Html, markup))?;
    Ok(Extraction::new(&caps[1], FormattingKind::BlockQuote))
}

fn apply_markdown(text: &str, kind: &FormattingKind) -> Result<String, BabelError> {
    ensure_kind(KindTag::BlockQuote, kind)?;
    let quoted: Vec<String> = text.lines().map(|line| format!("> {line}")).collect();
    Ok(quoted.join("\n"))
}

fn apply_html(text: &str, kind: &FormattingKind) -> Result<String, BabelError> {
    ensure_kind(KindTag::BlockQuote, kind)?;
    Ok(format!("<blockquote>{text}</blockquote>"))
}
