// Identifier corrector: scan mode and fix mode over a spelling engine

use identspell_core::case::{CasingStyle, recompose};
use tracing::{debug, trace};

use crate::speller::SpellingEngine;
use crate::tokenizer;

/// How fix mode treats words that are correct or have no usable suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FixPolicy {
    /// Every word is replaced by its first usable suggestion, even words
    /// that are already correct. Words without one are dropped.
    #[default]
    Faithful,
    /// Correct words pass through unchanged; misspelled words without a
    /// usable suggestion keep their original text.
    PassThrough,
}

/// Options controlling the corrector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrectorOptions {
    /// Identifiers with fewer characters are never reported.
    pub min_identifier_len: usize,
    pub fix_policy: FixPolicy,
}

impl Default for CorrectorOptions {
    fn default() -> Self {
        Self {
            min_identifier_len: 4,
            fix_policy: FixPolicy::Faithful,
        }
    }
}

/// Pick the first suggestion that can stand in for a single identifier
/// word: multi-word ("ice cream") and hyphenated candidates are skipped.
pub fn select_suggestion(suggestions: &[String]) -> Option<&str> {
    suggestions
        .iter()
        .map(String::as_str)
        .find(|s| !s.contains(' ') && !s.contains('-'))
}

/// Checks and corrects identifiers against a borrowed spelling engine.
///
/// Holds no mutable state; every method takes `&self` and may be called
/// from several threads when the engine allows it.
pub struct IdentifierCorrector<'a> {
    engine: &'a dyn SpellingEngine,
    options: CorrectorOptions,
}

impl<'a> IdentifierCorrector<'a> {
    pub fn new(engine: &'a dyn SpellingEngine) -> Self {
        Self::with_options(engine, CorrectorOptions::default())
    }

    pub fn with_options(engine: &'a dyn SpellingEngine, options: CorrectorOptions) -> Self {
        Self { engine, options }
    }

    pub fn options(&self) -> &CorrectorOptions {
        &self.options
    }

    /// Whether any word of the identifier is misspelled.
    ///
    /// Identifiers shorter than `min_identifier_len` characters are never
    /// reported and cause no engine queries. Stops at the first misspelled
    /// word.
    pub fn has_misspelling(&self, identifier: &str) -> bool {
        if identifier.is_empty() || identifier.chars().count() < self.options.min_identifier_len {
            return false;
        }
        let misspelled = tokenizer::split(identifier).iter().any(|word| {
            let correct = self.engine.is_correct(word.text);
            trace!(word = word.text, correct, "checked word");
            !correct
        });
        debug!(identifier, misspelled, "scanned identifier");
        misspelled
    }

    /// Compute the replacement identifier.
    ///
    /// Each word contributes the replacement chosen by the fix policy; the
    /// result is recomposed in the identifier's own casing style. An empty
    /// identifier is returned unchanged. The result may be empty or equal to
    /// the input, which means there is nothing to offer.
    pub fn replacement(&self, identifier: &str) -> String {
        if identifier.is_empty() {
            return identifier.to_string();
        }

        let mut parts: Vec<String> = Vec::new();
        for word in tokenizer::split(identifier) {
            let part = match self.options.fix_policy {
                FixPolicy::Faithful => self.best_suggestion(word.text),
                FixPolicy::PassThrough => {
                    if self.engine.is_correct(word.text) {
                        Some(word.text.to_string())
                    } else {
                        Some(
                            self.best_suggestion(word.text)
                                .unwrap_or_else(|| word.text.to_string()),
                        )
                    }
                }
            };
            trace!(word = word.text, replacement = ?part, "selected replacement");
            parts.extend(part);
        }

        let replacement = recompose(&parts, CasingStyle::detect(identifier));
        debug!(identifier, %replacement, "computed replacement");
        replacement
    }

    /// The rename to offer for an identifier, if any: the replacement when
    /// it is non-empty and differs from the identifier.
    pub fn rename_offer(&self, identifier: &str) -> Option<String> {
        let replacement = self.replacement(identifier);
        (!replacement.is_empty() && replacement != identifier).then_some(replacement)
    }

    fn best_suggestion(&self, word: &str) -> Option<String> {
        let suggestions = self.engine.suggest(word);
        select_suggestion(&suggestions).map(str::to_string)
    }
}
