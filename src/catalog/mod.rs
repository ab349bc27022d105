//! Formatting-kind catalog
//!
//! Each concrete kind owns one module here: the regex describing its
//! spelling per supported language, the extractor that strips the
//! delimiters and recovers any payload, and the applier that re-adds
//! them. A kind with no entry for some language simply has no catalog
//! row; the applier's fallback governs that gap, never a crash.
//!
//! Registration is one explicit pass, not a load-time side effect, so
//! rule precedence is auditable here and nowhere else. The bootstrap
//! order below is the parse order for every language:
//!
//! 1. code-block (fenced/pre content must go literal before anything
//!    inside it can mis-match - try first for disambiguation)
//! 2. block-quote (line-prefixed, would be eaten by inline rules)
//! 3. heading (line-prefixed, `#` run length carries the level)
//! 4. inline-code (literal spans, before the emphasis delimiters)
//! 5. link (bracket/paren pairs, before emphasis inside link text)
//! 6. bold (doubled delimiters, strictly before italic)
//! 7. strikethrough
//! 8. underline
//! 9. italic (single delimiters, last so they never split a pair)

use crate::error::BabelError;
use crate::formatting::{FormattingKind, KindTag};
use crate::registry::Registry;

mod blockquote;
mod bold;
mod code;
mod codeblock;
mod heading;
mod italic;
mod link;
mod strikethrough;
mod underline;

/// Register the full built-in catalog with `registry`
///
/// Invoked once per registry; registration is idempotent, so running it
/// again only re-installs identical pairs.
pub fn bootstrap(registry: &Registry) {
    codeblock::register(registry);
    blockquote::register(registry);
    heading::register(registry);
    code::register(registry);
    link::register(registry);
    bold::register(registry);
    strikethrough::register(registry);
    underline::register(registry);
    italic::register(registry);
}

/// Guard appliers against instructions of a foreign kind
pub(crate) fn ensure_kind(expected: KindTag, kind: &FormattingKind) -> Result<(), BabelError> {
    if kind.tag() == expected {
        Ok(())
    } else {
        Err(BabelError::kind_mismatch(expected, kind.tag()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::MarkupLanguage;

    #[test]
    fn bootstrap_registers_every_markdown_kind() {
        let registry = Registry::new();
        bootstrap(&registry);

        let kinds = registry.kinds_supported_by(MarkupLanguage::Markdown);
        for tag in [
            KindTag::CodeBlock,
            KindTag::BlockQuote,
            KindTag::Heading,
            KindTag::InlineCode,
            KindTag::Link,
            KindTag::Bold,
            KindTag::Italic,
        ] {
            assert!(kinds.contains(&tag), "markdown should support {tag}");
        }
        assert!(!kinds.contains(&KindTag::Underline));
        assert!(!kinds.contains(&KindTag::Strikethrough));
    }

    #[test]
    fn extended_markdown_covers_everything_markdown_does() {
        let registry = Registry::new();
        bootstrap(&registry);

        let markdown = registry.kinds_supported_by(MarkupLanguage::Markdown);
        let extended = registry.kinds_supported_by(MarkupLanguage::ExtendedMarkdown);
        for tag in &markdown {
            assert!(extended.contains(tag), "extended markdown should support {tag}");
        }
        assert!(extended.contains(&KindTag::Underline));
        assert!(extended.contains(&KindTag::Strikethrough));
    }

    #[test]
    fn ensure_kind_rejects_foreign_instructions() {
        assert!(ensure_kind(KindTag::Bold, &FormattingKind::Bold).is_ok());
        let err = ensure_kind(KindTag::Bold, &FormattingKind::Italic).unwrap_err();
        assert!(matches!(err, BabelError::KindMismatch { .. }));
    }
}
