//! Converts a flat kit into the nested tree structure.
//!
//! # The High-Level Concept
//!
//! The flat kit orders instructions by reading position; the tree orders
//! them by containment. A span that lies entirely inside another span is
//! formatting *within* formatting - italics inside a link - and becomes a
//! child of the enclosing instruction's node.
//!
//! # The Algorithm
//!
//! 1. Visit instructions in containment order: ascending span length, so
//!    every potential child is placed before its potential parents.
//! 2. For each instruction, its parent is the smallest other span that
//!    contains it; with no such span the instruction hangs off the root.
//!    Two equal spans are nested markup stripped down to the same region
//!    (`<b><i>x</i></b>`); the one the parser recorded first came from
//!    the outer markup, so it becomes the parent.
//! 3. Build nodes top-down. Each node owns the slice of stripped text its
//!    span covers, and child spans are re-based to be relative to the
//!    parent's text, so every subtree is position-independent.

use crate::instruction::Instruction;
use crate::kit::Kit;
use crate::span::Span;
use crate::tree::Tree;

/// Build the nested view of `kit` by span containment
pub fn kit_to_tree(kit: &Kit) -> Tree {
    let instructions = kit.instructions();
    if instructions.is_empty() {
        return Tree::root(kit.stripped(), vec![]);
    }

    let parents = assign_parents(instructions);

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); instructions.len()];
    let mut top_level: Vec<usize> = Vec::new();
    for (index, parent) in parents.iter().enumerate() {
        match parent {
            Some(parent) => children[*parent].push(index),
            None => top_level.push(index),
        }
    }

    let roots = top_level
        .iter()
        .map(|&index| build_node(index, instructions, &children, 0, kit.stripped()))
        .collect();
    Tree::root(kit.stripped(), roots)
}

/// For each instruction, the index of its innermost container, if any
fn assign_parents(instructions: &[Instruction]) -> Vec<Option<usize>> {
    let mut parents: Vec<Option<usize>> = vec![None; instructions.len()];

    for (index, instr) in instructions.iter().enumerate() {
        let span = instr.span();
        let mut best: Option<usize> = None;

        for (candidate, other) in instructions.iter().enumerate() {
            if candidate == index {
                continue;
            }
            let other_span = other.span();
            if !other_span.contains(&span) {
                continue;
            }
            // Equal spans: only the earlier-recorded one is outer.
            if other_span.len() == span.len() && candidate > index {
                continue;
            }
            let better = match best {
                None => true,
                Some(current) => {
                    let current_span = instructions[current].span();
                    other_span.len() < current_span.len()
                        || (other_span.len() == current_span.len() && candidate > current)
                }
            };
            if better {
                best = Some(candidate);
            }
        }

        parents[index] = best;
    }

    parents
}

fn build_node(
    index: usize,
    instructions: &[Instruction],
    children: &[Vec<usize>],
    base: usize,
    root_text: &str,
) -> Tree {
    let instr = &instructions[index];
    let span = instr.span();
    let text = &root_text[span.as_range()];
    let relative = Span::new(span.start() - base, span.end() - base);

    let child_nodes = children[index]
        .iter()
        .map(|&child| build_node(child, instructions, children, span.start(), root_text))
        .collect();

    Tree::new(
        instr.kind().clone(),
        text,
        relative,
        instr.parsing_displacement(),
        child_nodes,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::{FormattingKind, KindTag};

    fn bold(span: Span) -> Instruction {
        Instruction::new(span, FormattingKind::Bold, 4)
    }

    #[test]
    fn disjoint_spans_become_siblings() {
        let kit = Kit::new(
            "a and b",
            vec![bold(Span::new(0, 0)), bold(Span::new(6, 6))],
        );
        let tree = kit_to_tree(&kit);

        assert_eq!(tree.children().len(), 2);
        assert_eq!(tree.children()[0].text(), "a");
        assert_eq!(tree.children()[1].text(), "b");
        assert!(tree.children().iter().all(Tree::is_leaf));
    }

    #[test]
    fn contained_span_becomes_a_child() {
        let kit = Kit::new(
            "read the docs",
            vec![
                Instruction::new(
                    Span::new(5, 12),
                    FormattingKind::link("https://onefeed.dev/docs", None),
                    22,
                ),
                Instruction::new(Span::new(9, 12), FormattingKind::Italic, 2),
            ],
        );
        let tree = kit_to_tree(&kit);

        assert_eq!(tree.children().len(), 1);
        let link = &tree.children()[0];
        assert_eq!(link.kind().tag(), KindTag::Link);
        assert_eq!(link.text(), "the docs");

        assert_eq!(link.children().len(), 1);
        let italic = &link.children()[0];
        assert_eq!(italic.kind(), &FormattingKind::Italic);
        assert_eq!(italic.text(), "docs");
        // Re-based against the link's own text.
        assert_eq!(italic.span(), Span::new(4, 7));
    }

    #[test]
    fn equal_spans_nest_by_recording_order() {
        // <b><i>x</i></b> strips to one byte carrying two instructions.
        let kit = Kit::new(
            "x",
            vec![
                Instruction::new(Span::new(0, 0), FormattingKind::Bold, 6),
                Instruction::new(Span::new(0, 0), FormattingKind::Italic, 8),
            ],
        );
        let tree = kit_to_tree(&kit);

        assert_eq!(tree.children().len(), 1);
        let outer = &tree.children()[0];
        assert_eq!(outer.kind(), &FormattingKind::Bold);
        assert_eq!(outer.children().len(), 1);
        assert_eq!(outer.children()[0].kind(), &FormattingKind::Italic);
    }

    #[test]
    fn empty_kit_is_a_bare_root() {
        let kit = Kit::new("nothing", vec![]);
        let tree = kit_to_tree(&kit);
        assert!(tree.is_leaf());
        assert_eq!(tree.text(), "nothing");
    }

    #[test]
    fn parsed_nested_markup_builds_the_expected_tree() {
        let kit = crate::parser::parse(
            "read [the *docs*](https://onefeed.dev/docs)",
            crate::language::MarkupLanguage::Markdown,
        );
        let tree = kit_to_tree(&kit);

        assert_eq!(tree.text(), "read the docs");
        assert_eq!(tree.children().len(), 1);
        let link = &tree.children()[0];
        assert_eq!(link.kind().tag(), KindTag::Link);
        assert_eq!(link.children().len(), 1);
        assert_eq!(link.children()[0].kind(), &FormattingKind::Italic);
    }
}
