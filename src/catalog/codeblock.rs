//! Code block rules
//!
//! Markdown fences with triple backticks; an info string after the
//! opening fence is tolerated on parse and dropped, since the kind
//! carries no language payload. HTML uses `<pre>`, accepting an inner
//! `<code>` wrapper the way most generators emit it.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::ensure_kind;
use crate::error::BabelError;
use crate::formatting::{FormattingKind, KindTag};
use crate::language::MarkupLanguage;
use crate::registry::Registry;
use crate::rules::{ApplyRule, Extraction, ParseRule};

static MARKDOWN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```([A-Za-z0-9_+.#-]*)\n(.*?)\n?```").unwrap());
static HTML: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<pre>(?:<code>)?(.*?)(?:</code>)?</pre>").unwrap());

pub(crate) fn register(registry: &Registry) {
    for language in [MarkupLanguage::Markdown, MarkupLanguage::ExtendedMarkdown] {
        registry.register(
            KindTag::CodeBlock,
            language,
            ParseRule::new(MARKDOWN.clone(), extract_markdown),
            ApplyRule::new(KindTag::CodeBlock, language, apply_markdown),
        );
    }
    registry.register(
        KindTag::CodeBlock,
        MarkupLanguage::Html,
        ParseRule::new(HTML.clone(), extract_html),
        ApplyRule::new(KindTag::CodeBlock, MarkupLanguage::Html, apply_html),
    );
}

fn extract_markdown(markup: &str) -> Result<Extraction, BabelError> {
    let caps = MARKDOWN
        .captures(markup)
        .ok_or_else(|| BabelError::language_mismatch(MarkupLanguage::Markdown, markup))?;
    Ok(Extraction::new(&caps[2], FormattingKind::CodeBlock))
}

fn extract_html(markup: &str) -> Result<Extraction, BabelError> {
    let caps = HTML
        .captures(markup)
        .ok_or_else(|| BabelError::language_mismatch(MarkupLanguage::Html, markup))?;
    Ok(Extraction::new(&caps[1], FormattingKind::CodeBlock))
}

fn apply_markdown(text: &str, kind: &FormattingKind) -> Result<String, BabelError> {
    ensure_kind(KindTag::CodeBlock, kind)?;
    Ok(format!("```\n{text}\n```"))
}

fn apply_html(text: &str, kind: &FormattingKind) -> Result<String, BabelError> {
    ensure_kind(KindTag::CodeBlock, kind)?;
    Ok(format!("<pre>{text}</pre>"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_fences_and_drops_the_info_string() {
        let extraction = extract_markdown("```rust\nfn main() {}\n```").unwrap();
        assert_eq!(extraction.text, "fn main() {}");
        assert_eq!(extraction.kind, FormattingKind::CodeBlock);
    }

    #[test]
    fn keeps_interior_newlines() {
        let extraction = extract_markdown("```\nline one\nline two\n```").unwrap();
        assert_eq!(extraction.text, "line one\nline two");
    }

    #[test]
    fn html_accepts_an_inner_code_wrapper() {
        let plain = extract_html("<pre>let x = 1;</pre>").unwrap();
        assert_eq!(plain.text, "let x = 1;");
        let wrapped = extract_html("<pre><code>let x = 1;</code></pre>").unwrap();
        assert_eq!(wrapped.text, "let x = 1;");
    }

    #[test]
    fn applies_bare_fences() {
        let fenced = apply_markdown("fn main() {}", &FormattingKind::CodeBlock).unwrap();
        assert_eq!(fenced, "```\nfn main() {}\n```");
    }

    #[test]
    fn foreign_kind_is_a_mismatch() {
        let err = apply_html("x", &FormattingKind::Bold).unwrap_err();
        assert!(matches!(err, BabelError::KindMismatch { .. }));
    }
}
