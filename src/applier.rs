//! Intermediate representation to markup text
//!
//! The applier walks a kit's instructions in read order, renders each
//! span through the target language's apply rule, and splices the result
//! over the stripped text. Every splice shifts the instructions still
//! waiting by the net length change, so positions stay valid against the
//! growing working text. Parse-time displacements already normalized the
//! spans against the stripped text, so only the splice deltas matter
//! here.
//!
//! # Fallback
//!
//! A kind with no apply rule in the target language passes its span
//! through unchanged and tags the output with `PlainText`. Content is
//! never dropped; a partial rendering is still legible.
//!
//! # Kind mismatches
//!
//! An apply rule refusing an instruction's kind means the parser produced
//! an instruction the registry never could have: corrupted internal
//! state. That is a programming error, not bad input, and it panics.
//!
//! # Nested formatting
//!
//! The flat walk assumes disjoint spans. Trees render depth-first,
//! children before parent, so nested formatting comes out inside-out:
//! italics inside a link render as the link markup wrapping the italic
//! markup.

use std::collections::BTreeSet;

use crate::formatting::KindTag;
use crate::instruction::Instruction;
use crate::kit::Kit;
use crate::language::MarkupLanguage;
use crate::registry::Registry;
use crate::rendered::RenderedText;
use crate::span::Span;
use crate::tree::Tree;
use crate::error::BabelError;

/// Render a kit into `target` using the shared registry
pub fn render(kit: &Kit, target: MarkupLanguage) -> RenderedText {
    render_with(Registry::shared(), kit, target)
}

/// Render a tree into `target` using the shared registry
pub fn render_tree(tree: &Tree, target: MarkupLanguage) -> RenderedText {
    render_tree_with(Registry::shared(), tree, target)
}

/// Render a kit against an explicit registry instance
pub fn render_with(registry: &Registry, kit: &Kit, target: MarkupLanguage) -> RenderedText {
    let mut working = kit.stripped().to_string();
    let mut remaining = kit.instructions_snapshot();
    let mut employed = BTreeSet::new();

    let mut index = 0;
    while index < remaining.len() {
        let instr = remaining[index].clone();
        let span = instr.span();
        let original = working[span.as_range()].to_string();

        let rendered = render_span(registry, &original, &instr, target, &mut employed);
        let net_displacement = rendered.len() as isize - original.len() as isize;
        working.replace_range(span.as_range(), &rendered);

        index += 1;
        if net_displacement != 0 {
            for later in remaining[index..].iter_mut() {
                if later.span().start() >= span.start() {
                    later.shift_both(net_displacement);
                }
            }
        }
    }

    if employed.is_empty() {
        employed.insert(MarkupLanguage::PlainText);
    }
    RenderedText::new(working, employed)
}

/// Render a tree against an explicit registry instance
pub fn render_tree_with(registry: &Registry, tree: &Tree, target: MarkupLanguage) -> RenderedText {
    let mut employed = BTreeSet::new();
    let text = render_node(registry, tree, target, &mut employed);
    if employed.is_empty() {
        employed.insert(MarkupLanguage::PlainText);
    }
    RenderedText::new(text, employed)
}

fn render_node(
    registry: &Registry,
    node: &Tree,
    target: MarkupLanguage,
    employed: &mut BTreeSet<MarkupLanguage>,
) -> String {
    let mut working = node.text().to_string();

    // Children first, left to right; each splice moves the ones after it.
    let mut delta: isize = 0;
    for child in node.children() {
        let rendered = render_node(registry, child, target, employed);
        let start = child.span().start().saturating_add_signed(delta);
        let end = child.span().end().saturating_add_signed(delta);
        working.replace_range(start..=end, &rendered);
        delta += rendered.len() as isize - child.span().len() as isize;
    }

    if node.kind().tag() == KindTag::Default {
        return working;
    }

    let instr = Instruction::new(
        Span::of(&working).unwrap_or(Span::new(0, 0)),
        node.kind().clone(),
        node.parsing_displacement(),
    );
    render_span(registry, &working, &instr, target, employed)
}

fn render_span(
    registry: &Registry,
    original: &str,
    instr: &Instruction,
    target: MarkupLanguage,
    employed: &mut BTreeSet<MarkupLanguage>,
) -> String {
    if instr.kind().tag() == KindTag::Default {
        employed.insert(MarkupLanguage::PlainText);
        return original.to_string();
    }

    match registry.lookup_apply(instr.kind().tag(), target) {
        Ok(pair) => match (pair.apply.apply)(original, instr.kind()) {
            Ok(rendered) => {
                employed.insert(pair.apply.language);
                rendered
            }
            Err(BabelError::KindMismatch { expected, found }) => {
                panic!(
                    "apply rule for {expected} received a {found} instruction: \
                     corrupted instruction state"
                );
            }
            Err(_) => {
                // Best-effort output: keep the span, drop the formatting.
                employed.insert(MarkupLanguage::PlainText);
                original.to_string()
            }
        },
        Err(_) => {
            employed.insert(MarkupLanguage::PlainText);
            original.to_string()
        }
    }
}
