//! Converts a nested tree back to the flat kit structure.
//!
//! The walk is pre-order: a node is emitted before its children, so two
//! instructions stripped down to the same region come out with the outer
//! one first, matching what the parser records. Child spans are relative
//! to their parent's text and get re-based into root coordinates on the
//! way down; nothing else changes, so `kit -> tree -> kit` reproduces the
//! original kit exactly.

use crate::instruction::Instruction;
use crate::kit::Kit;
use crate::span::Span;
use crate::tree::Tree;

/// Flatten `tree` back into a kit
pub fn tree_to_kit(tree: &Tree) -> Kit {
    let mut instructions = Vec::new();
    collect(tree, 0, &mut instructions);
    Kit::new(tree.text(), instructions)
}

fn collect(node: &Tree, node_start: usize, out: &mut Vec<Instruction>) {
    for child in node.children() {
        let absolute = Span::new(
            node_start + child.span().start(),
            node_start + child.span().end(),
        );
        out.push(Instruction::new(
            absolute,
            child.kind().clone(),
            child.parsing_displacement(),
        ));
        collect(child, absolute.start(), out);
    }
}
