// IdentSpellHandle: top-level integration point for identifier checking.
//
// Owns a shared spelling engine and the corrector options, and exposes
// tokenizing, scanning, fixing and symbol scanning through one API.
//
// Design notes:
// - The engine lives behind an `Arc` so the handle is cheap to clone and
//   can be handed to worker threads.
// - An `IdentifierCorrector` borrowing the engine is created on the fly in
//   each method call, which keeps the handle free of self-references.

use std::path::Path;
use std::sync::Arc;

use identspell_core::diagnostic::{Diagnostic, Symbol};
use identspell_core::token::Word;

use crate::corrector::{CorrectorOptions, FixPolicy, IdentifierCorrector};
use crate::diagnostics;
use crate::speller::SpellingEngine;
use crate::speller::wordlist::{DictionaryError, WordList, WordListEngine, WordListOptions};
use crate::tokenizer;

/// Top-level handle owning a spelling engine and corrector options.
#[derive(Clone)]
pub struct IdentSpellHandle {
    engine: Arc<dyn SpellingEngine + Send + Sync>,
    options: CorrectorOptions,
}

impl IdentSpellHandle {
    /// Create a handle around any spelling engine.
    pub fn new(engine: impl SpellingEngine + Send + Sync + 'static) -> Self {
        Self {
            engine: Arc::new(engine),
            options: CorrectorOptions::default(),
        }
    }

    /// Create a handle backed by an in-memory word list.
    pub fn from_word_list(words: WordList, options: WordListOptions) -> Self {
        Self::new(WordListEngine::with_options(words, options))
    }

    /// Load a word list file (one word per line) and create a handle.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let words = WordList::from_path(path)?;
        Ok(Self::from_word_list(words, WordListOptions::default()))
    }

    fn corrector(&self) -> IdentifierCorrector<'_> {
        IdentifierCorrector::with_options(&*self.engine, self.options)
    }

    // =========================================================================
    // Core methods
    // =========================================================================

    /// Split an identifier into its words.
    pub fn split<'a>(&self, identifier: &'a str) -> Vec<Word<'a>> {
        tokenizer::split(identifier)
    }

    /// Whether any word of the identifier is misspelled.
    pub fn has_misspelling(&self, identifier: &str) -> bool {
        self.corrector().has_misspelling(identifier)
    }

    /// Compute the replacement identifier under the current fix policy.
    pub fn replacement(&self, identifier: &str) -> String {
        self.corrector().replacement(identifier)
    }

    /// The rename to offer for an identifier, if any.
    pub fn rename_offer(&self, identifier: &str) -> Option<String> {
        self.corrector().rename_offer(identifier)
    }

    /// Report every misspelled symbol.
    pub fn scan_symbols(&self, symbols: &[Symbol]) -> Vec<Diagnostic> {
        diagnostics::scan_symbols(&self.corrector(), symbols)
    }

    /// The rename to offer for a reported diagnostic, if any.
    pub fn fix_for(&self, diagnostic: &Diagnostic) -> Option<String> {
        diagnostics::fix_for(&self.corrector(), diagnostic)
    }

    // =========================================================================
    // Options
    // =========================================================================

    pub fn options(&self) -> &CorrectorOptions {
        &self.options
    }

    pub fn engine(&self) -> &(dyn SpellingEngine + Send + Sync) {
        &*self.engine
    }

    /// Set the minimum identifier length (in characters) for scanning.
    pub fn set_min_identifier_len(&mut self, value: usize) {
        self.options.min_identifier_len = value;
    }

    /// Set how fix mode treats correct and unfixable words.
    pub fn set_fix_policy(&mut self, value: FixPolicy) {
        self.options.fix_policy = value;
    }
}
