//! Nested intermediate representation
//!
//! A [`Tree`] captures containment the flat [`Kit`](crate::kit::Kit)
//! cannot: italics nested inside a link become a child node of the link
//! node. Each node owns the stripped text of its own region; a child's
//! span is relative to its parent's text, so a subtree is
//! position-independent and can be rendered on its own.
//!
//! Trees are derived from kits (see [`crate::mappings`]) and convert back
//! without loss: nodes keep their parsing displacement, and flattening
//! re-bases child spans into root coordinates.

use serde::{Deserialize, Serialize};

use crate::formatting::FormattingKind;
use crate::kit::Kit;
use crate::mappings;
use crate::span::Span;

/// One node of the nested representation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    kind: FormattingKind,
    /// Stripped text of this node's region
    text: String,
    /// Position within the parent node's text; for the root, the whole text
    span: Span,
    parsing_displacement: isize,
    /// Child nodes, ascending by span start
    children: Vec<Tree>,
}

impl Tree {
    pub fn new(
        kind: FormattingKind,
        text: impl Into<String>,
        span: Span,
        parsing_displacement: isize,
        children: Vec<Tree>,
    ) -> Self {
        Tree {
            kind,
            text: text.into(),
            span,
            parsing_displacement,
            children,
        }
    }

    /// Root node over `text` carrying no formatting of its own
    pub fn root(text: impl Into<String>, children: Vec<Tree>) -> Self {
        let text = text.into();
        let span = Span::of(&text).unwrap_or(Span::new(0, 0));
        Tree {
            kind: FormattingKind::Default,
            text,
            span,
            parsing_displacement: 0,
            children,
        }
    }

    pub fn kind(&self) -> &FormattingKind {
        &self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Span within the parent's text
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn parsing_displacement(&self) -> isize {
        self.parsing_displacement
    }

    /// Read-only view of the children
    pub fn children(&self) -> &[Tree] {
        &self.children
    }

    /// Owned copy of the children, safe to mutate independently
    pub fn children_snapshot(&self) -> Vec<Tree> {
        self.children.clone()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Flatten back into the kit this tree was built from
    pub fn to_kit(&self) -> Kit {
        mappings::tree_to_kit(self)
    }
}
