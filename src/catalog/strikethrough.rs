//! Strikethrough rules
//!
//! Not part of core Markdown; the tilde spelling lives in the extended
//! dialect only, so a strikethrough rendered toward plain Markdown goes
//! through the applier fallback.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::ensure_kind;
use crate::error::BabelError;
use crate::formatting::{FormattingKind, KindTag};
use crate::language::MarkupLanguage;
use crate::registry::Registry;
use crate::rules::{ApplyRule, Extraction, ParseRule};

static EXTENDED: Lazy<Regex> = Lazy::new(|| Regex::new(r"~~([^~]+?)~~").unwrap());
static HTML: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<(?:s|del|strike)>(.*?)</(?:s|del|strike)>").unwrap());

pub(crate) fn register(registry: &Registry) {
    registry.register(
        KindTag::Strikethrough,
        MarkupLanguage::ExtendedMarkdown,
        ParseRule::new(EXTENDED.clone(), extract_extended),
        ApplyRule::new(
            KindTag::Strikethrough,
            MarkupLanguage::ExtendedMarkdown,
            apply_extended,
        ),
    );
    registry.register(
        KindTag::Strikethrough,
        MarkupLanguage::Html,
        ParseRule::new(HTML.clone(), extract_html),
        ApplyRule::new(KindTag::Strikethrough, MarkupLanguage::Html, apply_html),
    );
}

fn extract_extended(markup: &str) -> Result<Extraction, BabelError> {
    let caps = EXTENDED
        .captures(markup)
        .ok_or_else(|| BabelError::language_mismatch(MarkupLanguage::ExtendedMarkdown, markup))?;
    Ok(Extraction::new(&caps[1], FormattingKind::Strikethrough))
}

fn extract_html(markup: &str) -> Result<Extraction, BabelError> {
    let caps = HTML
        .captures(markup)
        .ok_or_else(|| BabelError::language_mismatch(MarkupLanguage::Html, markup))?;
    Ok(Extraction::new(&caps[1], FormattingKind::Strikethrough))
}

fn apply_extended(text: &str, kind: &FormattingKind) -> Result<String, BabelError> {
    ensure_kind(KindTag::Strikethrough, kind)?;
    Ok(format!("~~{text}~~"))
}

fn apply_html(text: &str, kind: &FormattingKind) -> Result<String, BabelError> {
    ensure_kind(KindTag::Strikethrough, kind)?;
    Ok(format!("<s>{text}</s>"))
}
