//! Rule registry for kind/language discovery and selection
//!
//! This module provides the centralized catalog mapping every supported
//! (kind, language) combination to its rule pair. The catalog is kept in
//! two lockstep indexes: by kind, for apply-side lookups and capability
//! introspection, and by language, where insertion order doubles as the
//! parser's rule precedence.
//!
//! The registry is populated once at process start by
//! [`crate::catalog::bootstrap`] and is read-heavy afterward. Both indexes
//! live behind one `RwLock`, so readers never observe a half-updated
//! registry and a runtime re-registration is a single write-guarded swap.
//! Lookups clone out `Arc`s; no caller holds the lock while parsing or
//! rendering.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

use crate::error::BabelError;
use crate::formatting::{FormattingKind, KindTag};
use crate::language::MarkupLanguage;
use crate::rules::{ApplyRule, ParseRule, RulePair};

#[derive(Default)]
struct Indexes {
    by_kind: HashMap<KindTag, HashMap<MarkupLanguage, Arc<RulePair>>>,
    /// Per language, in registration order; this order is the parser's
    /// rule precedence
    by_language: HashMap<MarkupLanguage, Vec<Arc<RulePair>>>,
}

/// Registry of parse/apply rule pairs
///
/// # Examples
///
/// ```ignore
/// let registry = Registry::with_defaults();
/// let pair = registry.lookup_apply(KindTag::Bold, MarkupLanguage::Html)?;
/// let html = (pair.apply.apply)("strong", &FormattingKind::Bold)?;
/// ```
pub struct Registry {
    indexes: RwLock<Indexes>,
}

impl Registry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Registry {
            indexes: RwLock::new(Indexes::default()),
        }
    }

    /// Create a registry with the full built-in catalog registered
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        crate::catalog::bootstrap(&registry);
        registry
    }

    /// The process-wide shared registry, bootstrapped on first touch
    pub fn shared() -> &'static Registry {
        static SHARED: Lazy<Registry> = Lazy::new(Registry::with_defaults);
        &SHARED
    }

    /// Register a rule pair for one (kind, language) combination
    ///
    /// Re-registering an existing combination replaces the prior pair in
    /// both indexes while keeping its precedence slot.
    pub fn register(
        &self,
        kind: KindTag,
        language: MarkupLanguage,
        parse: ParseRule,
        apply: ApplyRule,
    ) {
        let pair = Arc::new(RulePair::new(kind, language, parse, apply));
        let mut indexes = self.indexes.write().expect("registry lock poisoned");

        indexes
            .by_kind
            .entry(kind)
            .or_default()
            .insert(language, Arc::clone(&pair));

        let rules = indexes.by_language.entry(language).or_default();
        match rules.iter_mut().find(|existing| existing.kind == kind) {
            Some(slot) => *slot = pair,
            None => rules.push(pair),
        }
    }

    /// Look up the rule pair used to parse `kind` out of `language` text
    pub fn lookup_parse(
        &self,
        kind: KindTag,
        language: MarkupLanguage,
    ) -> Result<Arc<RulePair>, BabelError> {
        self.lookup(kind, language)
    }

    /// Look up the rule pair used to render `kind` into `language`
    pub fn lookup_apply(
        &self,
        kind: KindTag,
        language: MarkupLanguage,
    ) -> Result<Arc<RulePair>, BabelError> {
        self.lookup(kind, language)
    }

    fn lookup(
        &self,
        kind: KindTag,
        language: MarkupLanguage,
    ) -> Result<Arc<RulePair>, BabelError> {
        let indexes = self.indexes.read().expect("registry lock poisoned");
        indexes
            .by_kind
            .get(&kind)
            .and_then(|languages| languages.get(&language))
            .cloned()
            .ok_or_else(|| BabelError::unregistered(kind, language))
    }

    /// All parse rules for `language`, in precedence order
    ///
    /// Returns an owned snapshot so the parser never holds the registry
    /// lock. A language with no registered rules yields an empty list;
    /// that is how plain text parses to zero instructions.
    pub fn parse_rules(&self, language: MarkupLanguage) -> Vec<Arc<RulePair>> {
        let indexes = self.indexes.read().expect("registry lock poisoned");
        indexes
            .by_language
            .get(&language)
            .cloned()
            .unwrap_or_default()
    }

    /// Remove every entry for `kind` across all languages
    pub fn remove(&self, kind: KindTag) -> Result<(), BabelError> {
        let mut indexes = self.indexes.write().expect("registry lock poisoned");
        if indexes.by_kind.remove(&kind).is_none() {
            return Err(BabelError::unregistered_kind(kind));
        }
        for rules in indexes.by_language.values_mut() {
            rules.retain(|pair| pair.kind != kind);
        }
        indexes.by_language.retain(|_, rules| !rules.is_empty());
        Ok(())
    }

    /// Remove every entry for `language` across all kinds
    pub fn forget(&self, language: MarkupLanguage) -> Result<(), BabelError> {
        let mut indexes = self.indexes.write().expect("registry lock poisoned");
        if indexes.by_language.remove(&language).is_none() {
            return Err(BabelError::unregistered_language(language));
        }
        for languages in indexes.by_kind.values_mut() {
            languages.remove(&language);
        }
        indexes.by_kind.retain(|_, languages| !languages.is_empty());
        Ok(())
    }

    /// The kinds with a rule pair for `language`, in precedence order
    pub fn kinds_supported_by(&self, language: MarkupLanguage) -> Vec<KindTag> {
        let indexes = self.indexes.read().expect("registry lock poisoned");
        indexes
            .by_language
            .get(&language)
            .map(|rules| rules.iter().map(|pair| pair.kind).collect())
            .unwrap_or_default()
    }

    /// The languages with a rule pair for `kind`, sorted
    pub fn languages_supported_by(&self, kind: KindTag) -> Vec<MarkupLanguage> {
        let indexes = self.indexes.read().expect("registry lock poisoned");
        let mut languages: Vec<MarkupLanguage> = indexes
            .by_kind
            .get(&kind)
            .map(|languages| languages.keys().copied().collect())
            .unwrap_or_default();
        languages.sort();
        languages
    }

    /// Check every registered pair against the round-trip contract:
    /// applying a canonical probe and parsing the result back must
    /// reconstruct the probe exactly. Returns the pairs that are not
    /// mutual inverses; empty means the catalog is self-consistent.
    pub fn verify_registered_pairs(&self) -> Vec<(KindTag, MarkupLanguage)> {
        let pairs: Vec<Arc<RulePair>> = {
            let indexes = self.indexes.read().expect("registry lock poisoned");
            indexes
                .by_language
                .values()
                .flat_map(|rules| rules.iter().cloned())
                .collect()
        };

        let mut failures = Vec::new();
        for pair in pairs {
            let Some((text, kind)) = probe(pair.kind) else {
                continue;
            };
            if !round_trips(&pair, &text, &kind) {
                failures.push((pair.kind, pair.language));
            }
        }
        failures.sort();
        failures
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Canonical probe content per kind, used by the inverse self-check
fn probe(kind: KindTag) -> Option<(String, FormattingKind)> {
    let probe = match kind {
        KindTag::Default => return None,
        KindTag::Bold => ("a bold run".to_string(), FormattingKind::Bold),
        KindTag::Italic => ("an italic run".to_string(), FormattingKind::Italic),
        KindTag::Underline => ("an underlined run".to_string(), FormattingKind::Underline),
        KindTag::Strikethrough => ("a struck run".to_string(), FormattingKind::Strikethrough),
        KindTag::InlineCode => ("let x = 1".to_string(), FormattingKind::InlineCode),
        KindTag::CodeBlock => ("fn probe() {}".to_string(), FormattingKind::CodeBlock),
        KindTag::BlockQuote => ("a quoted line".to_string(), FormattingKind::BlockQuote),
        KindTag::Heading => ("Section Title".to_string(), FormattingKind::heading(2)),
        KindTag::Link => (
            "OneFeed".to_string(),
            FormattingKind::link("https://onefeed.dev", Some("home".to_string())),
        ),
    };
    Some(probe)
}

fn round_trips(pair: &RulePair, text: &str, kind: &FormattingKind) -> bool {
    let Ok(rendered) = (pair.apply.apply)(text, kind) else {
        return false;
    };
    let Some(matched) = pair.parse.regex.find(&rendered) else {
        return false;
    };
    if matched.start() != 0 || matched.end() != rendered.len() {
        return false;
    }
    match (pair.parse.extract)(matched.as_str()) {
        Ok(extraction) => extraction.text == text && &extraction.kind == kind,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use crate::rules::Extraction;

    fn extract_upper(markup: &str) -> Result<Extraction, BabelError> {
        Ok(Extraction::new(markup.to_lowercase(), FormattingKind::Bold))
    }

    fn apply_upper(text: &str, _kind: &FormattingKind) -> Result<String, BabelError> {
        Ok(text.to_uppercase())
    }

    fn apply_shout(text: &str, _kind: &FormattingKind) -> Result<String, BabelError> {
        Ok(format!("{}!!", text.to_uppercase()))
    }

    fn test_pair(apply: crate::rules::ApplyFn) -> (ParseRule, ApplyRule) {
        (
            ParseRule::new(Regex::new("[A-Z]+").unwrap(), extract_upper),
            ApplyRule::new(KindTag::Bold, MarkupLanguage::PlainText, apply),
        )
    }

    #[test]
    fn register_and_lookup() {
        let registry = Registry::new();
        let (parse, apply) = test_pair(apply_upper);
        registry.register(KindTag::Bold, MarkupLanguage::PlainText, parse, apply);

        assert!(registry
            .lookup_parse(KindTag::Bold, MarkupLanguage::PlainText)
            .is_ok());
        assert!(registry
            .lookup_apply(KindTag::Bold, MarkupLanguage::PlainText)
            .is_ok());
    }

    #[test]
    fn lookup_nonexistent_is_unregistered() {
        let registry = Registry::new();
        let result = registry.lookup_apply(KindTag::Bold, MarkupLanguage::Html);
        assert!(matches!(result, Err(BabelError::UnregisteredEntry(_))));
    }

    #[test]
    fn reregistering_replaces_the_pair() {
        let registry = Registry::new();
        let (parse, apply) = test_pair(apply_upper);
        registry.register(KindTag::Bold, MarkupLanguage::PlainText, parse, apply);
        let (parse, apply) = test_pair(apply_shout);
        registry.register(KindTag::Bold, MarkupLanguage::PlainText, parse, apply);

        let pair = registry
            .lookup_apply(KindTag::Bold, MarkupLanguage::PlainText)
            .unwrap();
        assert_eq!(
            (pair.apply.apply)("loud", &FormattingKind::Bold).unwrap(),
            "LOUD!!"
        );
        assert_eq!(registry.parse_rules(MarkupLanguage::PlainText).len(), 1);
    }

    #[test]
    fn remove_clears_both_indexes() {
        let registry = Registry::new();
        let (parse, apply) = test_pair(apply_upper);
        registry.register(KindTag::Bold, MarkupLanguage::PlainText, parse, apply);

        registry.remove(KindTag::Bold).unwrap();
        assert!(matches!(
            registry.lookup_apply(KindTag::Bold, MarkupLanguage::PlainText),
            Err(BabelError::UnregisteredEntry(_))
        ));
        assert!(registry.parse_rules(MarkupLanguage::PlainText).is_empty());
        assert!(registry.kinds_supported_by(MarkupLanguage::PlainText).is_empty());
    }

    #[test]
    fn remove_unknown_kind_fails() {
        let registry = Registry::new();
        assert!(matches!(
            registry.remove(KindTag::Heading),
            Err(BabelError::UnregisteredEntry(_))
        ));
    }

    #[test]
    fn forget_clears_both_indexes() {
        let registry = Registry::with_defaults();
        registry.forget(MarkupLanguage::Html).unwrap();

        assert!(registry.kinds_supported_by(MarkupLanguage::Html).is_empty());
        assert!(!registry
            .languages_supported_by(KindTag::Bold)
            .contains(&MarkupLanguage::Html));
        assert!(matches!(
            registry.forget(MarkupLanguage::Html),
            Err(BabelError::UnregisteredEntry(_))
        ));
    }

    #[test]
    fn parse_rules_keeps_registration_order() {
        let registry = Registry::with_defaults();
        let kinds = registry.kinds_supported_by(MarkupLanguage::Markdown);

        let code_block = kinds.iter().position(|k| *k == KindTag::CodeBlock).unwrap();
        let heading = kinds.iter().position(|k| *k == KindTag::Heading).unwrap();
        let bold = kinds.iter().position(|k| *k == KindTag::Bold).unwrap();
        let italic = kinds.iter().position(|k| *k == KindTag::Italic).unwrap();

        // Block-level constructs precede inline ones, bold precedes italic.
        assert!(code_block < bold);
        assert!(heading < bold);
        assert!(bold < italic);
    }

    #[test]
    fn capability_introspection() {
        let registry = Registry::with_defaults();

        let bold_languages = registry.languages_supported_by(KindTag::Bold);
        assert!(bold_languages.contains(&MarkupLanguage::Markdown));
        assert!(bold_languages.contains(&MarkupLanguage::Html));

        // Underline has no Markdown spelling, only extended and HTML.
        let underline_languages = registry.languages_supported_by(KindTag::Underline);
        assert!(!underline_languages.contains(&MarkupLanguage::Markdown));
        assert!(underline_languages.contains(&MarkupLanguage::ExtendedMarkdown));
        assert!(underline_languages.contains(&MarkupLanguage::Html));
    }

    #[test]
    fn default_catalog_is_self_inverse() {
        let registry = Registry::with_defaults();
        assert_eq!(registry.verify_registered_pairs(), Vec::new());
    }
}
