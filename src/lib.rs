//! Markup interoperability for OneFeed captions
//!
//!     OneFeed aggregates user content from platforms that each speak their
//!     own markup dialect. This crate converts formatted text between those
//!     dialects (HTML, Markdown, Extended Markdown, plain text) without
//!     losing what the formatting meant: parse once into a language-agnostic
//!     intermediate representation, render into whatever the deployment
//!     serves.
//!
//! Architecture
//!
//!     - Registry: catalog of rule pairs, one per (formatting kind, language)
//!     - Parser: markup text + a language's rules -> stripped text + instructions
//!     - Applier: instructions + a target language's rules -> re-rendered text
//!     - Catalog: the per-kind patterns, extractors and appliers themselves
//!
//!     This is a pure lib: it powers the onefeed-babel CLI but is shell
//!     agnostic; nothing here prints, reads env vars or touches the network.
//!
//!     The file structure:
//!     .
//!     ├── error.rs                # BabelError taxonomy
//!     ├── span.rs                 # index ranges with shift bookkeeping
//!     ├── formatting.rs           # FormattingKind / KindTag
//!     ├── language.rs             # MarkupLanguage + dialect lattice
//!     ├── rules.rs                # ParseRule / ApplyRule / RulePair
//!     ├── instruction.rs          # span + kind + parsing displacement
//!     ├── kit.rs                  # flat representation (system of record)
//!     ├── tree.rs                 # nested representation
//!     ├── rendered.rs             # output text + employed languages
//!     ├── registry.rs             # dual-index rule catalog
//!     ├── parser.rs               # splice-based markup stripping
//!     ├── applier.rs              # splice-based markup re-rendering
//!     ├── catalog                 # one module per formatting kind
//!     └── mappings                # kit <-> tree conversions
//!
//! Testing
//!
//!     Unit tests sit next to what they test; cross-language scenarios and
//!     the property suite live under tests/.
//!
//! Failure Philosophy
//!
//!     Captions arrive from third-party platforms and are routinely sloppy.
//!     Parsing therefore never hard-fails on bad markup: an unrecognizable
//!     or malformed span degrades to literal text and the rest of the text
//!     still parses. Rendering never drops content: a kind the target
//!     language cannot spell passes through as plain text, and the output
//!     reports which languages it actually employed so callers can tell a
//!     full rendering from a partial one.
//!
//! Extensibility
//!
//!     New dialects or kinds plug in by registering rule pairs; nothing in
//!     the parser or applier names a concrete kind or language. Rule
//!     precedence is the registration order, made auditable in one place by
//!     [`catalog::bootstrap`].

pub mod applier;
pub mod catalog;
pub mod error;
pub mod formatting;
pub mod instruction;
pub mod kit;
pub mod language;
pub mod mappings;
pub mod parser;
pub mod registry;
pub mod rendered;
pub mod rules;
pub mod span;
pub mod tree;

pub use applier::{render, render_tree, render_tree_with, render_with};
pub use error::BabelError;
pub use formatting::{FormattingKind, KindTag};
pub use instruction::Instruction;
pub use kit::Kit;
pub use language::MarkupLanguage;
pub use parser::{parse, parse_tree, parse_with};
pub use registry::Registry;
pub use rendered::RenderedText;
pub use rules::{ApplyFn, ApplyRule, ExtractFn, Extraction, ParseRule, RulePair};
pub use span::Span;
pub use tree::Tree;

/// Parse `text` from `from` and render it into `to` in one step.
///
/// This is the call shape the content-source adapters use: one parse,
/// one render, per caption field.
pub fn convert(text: &str, from: MarkupLanguage, to: MarkupLanguage) -> RenderedText {
    render(&parse(text, from), to)
}

/// Register a rule pair with the shared registry
pub fn register(
    kind: KindTag,
    language: MarkupLanguage,
    parse_rule: ParseRule,
    apply_rule: ApplyRule,
) {
    Registry::shared().register(kind, language, parse_rule, apply_rule);
}

/// Remove a kind from the shared registry, across all languages
pub fn remove(kind: KindTag) -> Result<(), BabelError> {
    Registry::shared().remove(kind)
}

/// Remove a language from the shared registry, across all kinds
pub fn forget(language: MarkupLanguage) -> Result<(), BabelError> {
    Registry::shared().forget(language)
}

/// The kinds the shared registry can parse from or render into `language`
pub fn kinds_supported_by(language: MarkupLanguage) -> Vec<KindTag> {
    Registry::shared().kinds_supported_by(language)
}

/// The languages the shared registry supports for `kind`
pub fn languages_supported_by(kind: KindTag) -> Vec<MarkupLanguage> {
    Registry::shared().languages_supported_by(kind)
}
