//! Markup text to intermediate representation
//!
//! The parser consumes text known to be in one language plus that
//! language's rules in precedence order, and produces stripped text with
//! formatting instructions.
//!
//! # The Algorithm
//!
//! 1. Start with the input as the working text and no instructions.
//! 2. For each rule in precedence order, find its matches left to right
//!    against the current working text.
//! 3. Run the extractor on each match. On success, splice the stripped
//!    text over the matched markup, record an instruction over the
//!    stripped region, and re-shift every instruction recorded earlier so
//!    all positions stay valid against the new working text. On failure,
//!    record the matched region as a literal `Default` instruction and
//!    move on.
//! 4. The surviving working text plus the instructions, sorted into read
//!    order, form the [`Kit`].
//!
//! # Failure policy
//!
//! A single bad span never fails the whole parse. A mismatched language,
//! a malformed payload, a gap in the registry: each degrades that one
//! span to literal text and parsing continues. Captions scraped from
//! third-party platforms are routinely sloppy; legibility of the rest of
//! the text wins over strictness.
//!
//! # Position bookkeeping
//!
//! Every splice changes the working text's length by the displacement
//! `len(stripped) - len(matched)`. Instructions recorded earlier fall in
//! three groups relative to the match: entirely before it (untouched),
//! entirely at or after it (whole span shifts), or enclosing it (only the
//! end shifts, which is how nested markup keeps the enclosing span tight
//! around its shrunken contents).

use crate::instruction::Instruction;
use crate::kit::Kit;
use crate::language::MarkupLanguage;
use crate::registry::Registry;
use crate::span::Span;
use crate::tree::Tree;
use crate::formatting::FormattingKind;

/// Parse `text`, known to be written in `language`, into a flat kit
/// using the shared registry
pub fn parse(text: &str, language: MarkupLanguage) -> Kit {
    parse_with(Registry::shared(), text, language)
}

/// Parse `text` into the nested representation
pub fn parse_tree(text: &str, language: MarkupLanguage) -> Tree {
    parse(text, language).to_tree()
}

/// Parse against an explicit registry instance
pub fn parse_with(registry: &Registry, text: &str, language: MarkupLanguage) -> Kit {
    let rules = registry.parse_rules(language);
    let mut working = text.to_string();
    let mut pending: Vec<Instruction> = Vec::new();

    for pair in &rules {
        let mut from = 0;
        while from < working.len() {
            let Some((start, end, matched)) = next_match(&pair.parse.regex, &working, from) else {
                break;
            };
            if end == start {
                from = end + 1;
                continue;
            }

            match (pair.parse.extract)(&matched) {
                Ok(extraction) => {
                    let stripped = extraction.text;
                    let displacement = stripped.len() as isize - (end - start) as isize;
                    working.replace_range(start..end, &stripped);
                    shift_pending(&mut pending, start, end, displacement);
                    if !stripped.is_empty() {
                        pending.push(Instruction::new(
                            Span::new(start, start + stripped.len() - 1),
                            extraction.kind,
                            -displacement,
                        ));
                    }
                    from = start + stripped.len();
                }
                Err(_) => {
                    // Degrade locally: the matched region stays literal.
                    pending.push(Instruction::new(
                        Span::new(start, end - 1),
                        FormattingKind::Default,
                        0,
                    ));
                    from = end;
                }
            }
        }
    }

    Kit::new(working, pending)
}

fn next_match(regex: &regex::Regex, working: &str, from: usize) -> Option<(usize, usize, String)> {
    let found = regex.find_at(working, from)?;
    Some((found.start(), found.end(), found.as_str().to_string()))
}

/// Re-shift instructions recorded before a splice over `[match_start,
/// match_end)` that changed the text length by `displacement`
fn shift_pending(
    pending: &mut [Instruction],
    match_start: usize,
    match_end: usize,
    displacement: isize,
) {
    if displacement == 0 {
        return;
    }
    for instr in pending.iter_mut() {
        let span = instr.span();
        if span.start() <= match_start && span.end() + 1 >= match_end {
            instr.shift_end(displacement);
        } else if span.start() >= match_start {
            instr.shift_both(displacement);
        }
    }
}
