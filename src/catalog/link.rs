//! Link rules
//!
//! Links are the payload-heavy kind: the URL and optional tooltip ride
//! on the `FormattingKind` itself, recovered from `[text](url "tip")` or
//! `<a href=... title=...>`. A matched link whose URL turns out empty is
//! a malformed payload and degrades to literal text at the parse layer.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::ensure_kind;
use crate::error::BabelError;
use crate::formatting::{FormattingKind, KindTag};
use crate::language::MarkupLanguage;
use crate::registry::Registry;
use crate::rules::{ApplyRule, Extraction, ParseRule};

static MARKDOWN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\[([^\]]*)\]\(([^()\s]*)(?:\s+"([^"]*)")?\)"#).unwrap());
static HTML: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<a\s+href="([^"]*)"(?:\s+title="([^"]*)")?\s*>(.*?)</a>"#).unwrap()
});

pub(crate) fn register(registry: &Registry) {
    for language in [MarkupLanguage::Markdown, MarkupLanguage::ExtendedMarkdown] {
        registry.register(
            KindTag::Link,
            language,
            ParseRule::new(MARKDOWN.clone(), extract_markdown),
            ApplyRule::new(KindTag::Link, language, apply_markdown),
        );
    }
    registry.register(
        KindTag::Link,
        MarkupLanguage::Html,
        ParseRule::new(HTML.clone(), extract_html),
        ApplyRule::new(KindTag::Link, MarkupLanguage::Html, apply_html),
    );
}

fn extract_markdown(markup: &str) -> Result<Extraction, BabelError> {
    let caps = MARKDOWN
        .captures(markup)
        .ok_or_else(|| BabelError::language_mismatch(MarkupLanguage::Markdown, markup))?;
    let url = &caps[2];
    if url.is_empty() {
        return Err(BabelError::MalformedPayload("link missing its URL".into()));
    }
    let tooltip = caps.get(3).map(|m| m.as_str().to_string());
    Ok(Extraction::new(
        &caps[1],
        FormattingKind::link(url, tooltip),
    ))
}

fn extract_html(markup: &str) -> Result<Extraction, BabelError> {
    let caps = HTML
        .captures(markup)
        .ok_or_else(|| BabelError::language_mismatch(MarkupLanguage::Html, markup))?;
    let url = &caps[1];
    if url.is_empty() {
        return Err(BabelError::MalformedPayload("link missing its URL".into()));
    }
    let tooltip = caps.get(2).map(|m| m.as_str().to_string());
    Ok(Extraction::new(
        &caps[3],
        FormattingKind::link(url, tooltip),
    ))
}

fn apply_markdown(text: &str, kind: &FormattingKind) -> Result<String, BabelError> {
    ensure_kind(KindTag::Link, kind)?;
    let FormattingKind::Link { url, tooltip } = kind else {
        unreachable!("guarded by ensure_kind");
    };
    Ok(match tooltip {
        Some(tip) => format!("[{text}]({url} \"{tip}\")"),
        None => format!("[{text}]({url})"),
    })
}

fn apply_html(text: &str, kind: &FormattingKind) -> Result<String, BabelError> {
    ensure_kind(KindTag::Link, kind)?;
    let FormattingKind::Link { url, tooltip } = kind else {
        unreachable!("guarded by ensure_kind");
    };
    Ok(match tooltip {
        Some(tip) => format!(r#"<a href="{url}" title="{tip}">{text}</a>"#),
        None => format!(r#"<a href="{url}">{text}</a>"#),
    })
}
