//! Formatting instructions
//!
//! An [`Instruction`] binds a [`Span`] of stripped text to the
//! [`FormattingKind`] the markup there encoded, plus the parsing
//! displacement: how many bytes the markup form was longer than the
//! stripped form. The displacement is what the parse removed; summed over
//! a whole parse it equals the difference between the marked-up input and
//! the stripped output.

use serde::{Deserialize, Serialize};

use crate::formatting::FormattingKind;
use crate::span::Span;

/// One span of stripped text and the formatting it carries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    span: Span,
    kind: FormattingKind,
    /// `len(markup form) - len(stripped form)`, recorded at parse time
    parsing_displacement: isize,
}

impl Instruction {
    pub fn new(span: Span, kind: FormattingKind, parsing_displacement: isize) -> Self {
        Instruction {
            span,
            kind,
            parsing_displacement,
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn kind(&self) -> &FormattingKind {
        &self.kind
    }

    pub fn parsing_displacement(&self) -> isize {
        self.parsing_displacement
    }

    /// Move the whole span by `delta`; used when a splice before this
    /// instruction changed the text length
    pub fn shift_both(&mut self, delta: isize) {
        self.span.shift_both(delta);
    }

    /// Move only the span end by `delta`; used when a splice inside this
    /// instruction's span changed the text length
    pub fn shift_end(&mut self, delta: isize) {
        self.span.shift_end(delta);
    }
}
