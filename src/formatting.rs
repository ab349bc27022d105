//! Formatting kinds
//!
//! A [`FormattingKind`] is a language-agnostic formatting intent: what the
//! author meant (bold, a link, a level-2 heading), decoupled from how any
//! one markup language spells it. Markerless kinds are plain unit variants;
//! parameterized kinds carry their payload and are constructed fresh per
//! occurrence.
//!
//! [`KindTag`] is the data-free discriminant used as the registry key:
//! rules are registered per kind, not per payload, so two links with
//! different URLs share one rule pair.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Highest heading level the engine represents
pub const MAX_HEADING_LEVEL: u8 = 6;

/// A language-agnostic formatting intent attached to a span of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormattingKind {
    /// No formatting; the identity kind literal spans degrade to
    Default,
    Bold,
    Italic,
    Underline,
    Strikethrough,
    InlineCode,
    CodeBlock,
    BlockQuote,
    Heading {
        /// 1 through 6, clamped at construction
        level: u8,
    },
    Link {
        url: String,
        tooltip: Option<String>,
    },
}

impl FormattingKind {
    /// A heading with `level` clamped into `1..=6`
    pub fn heading(level: u8) -> Self {
        FormattingKind::Heading {
            level: level.clamp(1, MAX_HEADING_LEVEL),
        }
    }

    pub fn link(url: impl Into<String>, tooltip: Option<String>) -> Self {
        FormattingKind::Link {
            url: url.into(),
            tooltip,
        }
    }

    /// The data-free discriminant this kind registers under
    pub fn tag(&self) -> KindTag {
        match self {
            FormattingKind::Default => KindTag::Default,
            FormattingKind::Bold => KindTag::Bold,
            FormattingKind::Italic => KindTag::Italic,
            FormattingKind::Underline => KindTag::Underline,
            FormattingKind::Strikethrough => KindTag::Strikethrough,
            FormattingKind::InlineCode => KindTag::InlineCode,
            FormattingKind::CodeBlock => KindTag::CodeBlock,
            FormattingKind::BlockQuote => KindTag::BlockQuote,
            FormattingKind::Heading { .. } => KindTag::Heading,
            FormattingKind::Link { .. } => KindTag::Link,
        }
    }
}

/// Data-free discriminant of [`FormattingKind`], the registry key
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum KindTag {
    Default,
    Bold,
    Italic,
    Underline,
    Strikethrough,
    InlineCode,
    CodeBlock,
    BlockQuote,
    Heading,
    Link,
}

impl KindTag {
    pub fn name(self) -> &'static str {
        match self {
            KindTag::Default => "default",
            KindTag::Bold => "bold",
            KindTag::Italic => "italic",
            KindTag::Underline => "underline",
            KindTag::Strikethrough => "strikethrough",
            KindTag::InlineCode => "inline-code",
            KindTag::CodeBlock => "code-block",
            KindTag::BlockQuote => "block-quote",
            KindTag::Heading => "heading",
            KindTag::Link => "link",
        }
    }
}

impl fmt::Display for KindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_level_is_clamped() {
        assert_eq!(FormattingKind::heading(0), FormattingKind::Heading { level: 1 });
        assert_eq!(FormattingKind::heading(3), FormattingKind::Heading { level: 3 });
        assert_eq!(FormattingKind::heading(9), FormattingKind::Heading { level: 6 });
    }

    #[test]
    fn tag_discards_payload() {
        assert_eq!(FormattingKind::heading(2).tag(), KindTag::Heading);
        assert_eq!(
            FormattingKind::link("https://onefeed.dev", None).tag(),
            KindTag::Link
        );
        assert_eq!(FormattingKind::Bold.tag(), KindTag::Bold);
    }

    #[test]
    fn kinds_with_different_payloads_share_a_tag() {
        let a = FormattingKind::link("https://a.example", None);
        let b = FormattingKind::link("https://b.example", Some("tip".to_string()));
        assert_ne!(a, b);
        assert_eq!(a.tag(), b.tag());
    }
}
