//! Flat intermediate representation
//!
//! A [`Kit`] is stripped text plus its formatting instructions in read
//! order (ascending span start). It is the system of record between
//! parsing and rendering; the nested [`Tree`](crate::tree::Tree) view is
//! derived from it through [`crate::mappings`].
//!
//! The flat model assumes instruction spans are pairwise disjoint. Nested
//! markup (italics inside a link) parses into containing spans, which the
//! Tree view represents faithfully; a Kit holding such spans should be
//! rendered through the tree path.
//!
//! ## Access modes
//!
//! A kit handed to another caller is either an owned copy or a shared
//! view, never an accidental mutable alias: [`Kit::instructions`] returns
//! a read-only view, [`Kit::instructions_snapshot`] an owned copy that is
//! safe to mutate independently.

use serde::{Deserialize, Serialize};

use crate::instruction::Instruction;
use crate::mappings;
use crate::tree::Tree;

/// Stripped text plus read-ordered formatting instructions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kit {
    stripped: String,
    instructions: Vec<Instruction>,
}

impl Kit {
    /// Build a kit, normalizing the instructions into read order
    pub fn new(stripped: impl Into<String>, mut instructions: Vec<Instruction>) -> Self {
        instructions.sort_by_key(|instr| instr.span().start());
        Kit {
            stripped: stripped.into(),
            instructions,
        }
    }

    /// Text with all markup stripped
    pub fn stripped(&self) -> &str {
        &self.stripped
    }

    /// Read-only view of the instructions, in read order
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Owned copy of the instructions, safe to mutate independently
    pub fn instructions_snapshot(&self) -> Vec<Instruction> {
        self.instructions.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Sum of all parsing displacements: how many bytes of markup the
    /// parse stripped from the original text
    pub fn stripped_displacement(&self) -> isize {
        self.instructions
            .iter()
            .map(Instruction::parsing_displacement)
            .sum()
    }

    /// The nested view of this kit, built by containment
    pub fn to_tree(&self) -> Tree {
        mappings::kit_to_tree(self)
    }

    pub fn into_parts(self) -> (String, Vec<Instruction>) {
        (self.stripped, self.instructions)
    }
}
