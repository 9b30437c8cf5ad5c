// Word-list spelling engine: in-memory dictionary with edit-based suggestions

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use hashbrown::HashMap;
use identspell_core::case::{CaseType, detect_case, set_case};
use identspell_core::character::{is_letter, lower_word};
use identspell_core::enums::SpellResult;
use tracing::{info, trace};

use crate::speller::{Speller, SpellingEngine};
use crate::suggestion::status::{Budget, SuggestionStatus};
use crate::suggestion::strategy::{SuggestionStrategy, typing_strategy};

/// Error type for word list loading failures.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// The word list file could not be opened or read.
    #[error("failed to read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from a non-file source failed.
    #[error("failed to read word list: {0}")]
    Read(#[from] io::Error),

    /// The source contained no usable words.
    #[error("word list contains no words")]
    Empty,
}

// ---------------------------------------------------------------------------
// WordList
// ---------------------------------------------------------------------------

/// Dictionary key of a word: every character lowercased on its own, so the
/// key has as many characters as the word.
fn lookup_key(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    lower_word(&chars).into_iter().collect()
}

/// Set of dictionary words keyed by their lowercase form.
///
/// Each key maps to the word's canonical spelling ("type", "Paris",
/// "HTML"). When a word occurs with several capitalizations the lowercase
/// spelling wins.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    entries: HashMap<String, String>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a word list from words. Surrounding whitespace is trimmed;
    /// blank entries and `#` comments are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for word in words {
            list.insert(word.as_ref());
        }
        list
    }

    /// Read one word per line.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DictionaryError> {
        let mut list = Self::new();
        for line in reader.lines() {
            list.insert(&line?);
        }
        if list.is_empty() {
            return Err(DictionaryError::Empty);
        }
        Ok(list)
    }

    /// Read a word list file, one word per line.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let io_err = |source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(io_err)?;
        let mut list = Self::new();
        for line in BufReader::new(file).lines() {
            list.insert(&line.map_err(io_err)?);
        }
        if list.is_empty() {
            return Err(DictionaryError::Empty);
        }
        info!(path = %path.display(), words = list.len(), "loaded word list");
        Ok(list)
    }

    /// Add one word. Returns `false` if the entry was skipped.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() || word.starts_with('#') {
            return false;
        }
        let key = lookup_key(word);
        match self.entries.get_mut(&key) {
            Some(existing) => {
                if key == word {
                    *existing = key;
                }
            }
            None => {
                self.entries.insert(key, word.to_string());
            }
        }
        true
    }

    /// Canonical spelling for a lowercase key.
    pub fn canonical(&self, lower: &str) -> Option<&str> {
        self.entries.get(lower).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(&lookup_key(word))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Speller for WordList {
    fn spell(&self, word: &[char]) -> SpellResult {
        let key: String = word.iter().collect();
        let Some(canonical) = self.entries.get(&key) else {
            return SpellResult::Failed;
        };
        let canonical: Vec<char> = canonical.chars().collect();
        match detect_case(&canonical) {
            CaseType::AllLower | CaseType::NoLetters => SpellResult::Ok,
            CaseType::FirstUpper => SpellResult::CapitalizeFirst,
            CaseType::AllUpper | CaseType::Complex => SpellResult::CapitalizationError,
        }
    }
}

// ---------------------------------------------------------------------------
// WordListEngine
// ---------------------------------------------------------------------------

/// Options for [`WordListEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordListOptions {
    /// Accept words containing digits without checking ("Vec3", "utf8").
    pub ignore_numbers: bool,
    /// Accept "Type" when the dictionary has "type".
    pub accept_first_uppercase: bool,
    /// Accept "TYPE" when the dictionary has "type" or "Type".
    pub accept_all_uppercase: bool,
    /// Maximum number of suggestions returned.
    pub max_suggestions: usize,
    /// Lookup budget per suggestion run.
    pub max_cost: usize,
}

impl Default for WordListOptions {
    fn default() -> Self {
        Self {
            ignore_numbers: true,
            accept_first_uppercase: true,
            accept_all_uppercase: true,
            max_suggestions: 5,
            max_cost: 800,
        }
    }
}

/// Spelling engine backed by a [`WordList`].
///
/// Immutable after construction, so one instance can be shared between
/// threads behind an `Arc`.
pub struct WordListEngine {
    words: WordList,
    options: WordListOptions,
    strategy: SuggestionStrategy,
}

impl WordListEngine {
    pub fn new(words: WordList) -> Self {
        Self::with_options(words, WordListOptions::default())
    }

    pub fn with_options(words: WordList, options: WordListOptions) -> Self {
        Self {
            words,
            options,
            strategy: typing_strategy(),
        }
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    pub fn options(&self) -> &WordListOptions {
        &self.options
    }

    /// Words accepted without a dictionary lookup: no letters at all, or
    /// digits when `ignore_numbers` is on. Such a word is its own only
    /// suggestion.
    fn skips_lookup(&self, chars: &[char]) -> bool {
        !chars.iter().any(|&c| is_letter(c))
            || (self.options.ignore_numbers && chars.iter().any(|c| c.is_numeric()))
    }

    /// Give a suggestion the dictionary's spelling of each of its parts,
    /// then re-apply the checked word's case when all parts are lowercase.
    fn present(&self, candidate: &str, case: CaseType) -> String {
        let mut out = String::with_capacity(candidate.len());
        let mut rest = candidate;
        loop {
            let (piece, sep) = match rest.find([' ', '-']) {
                Some(i) => (&rest[..i], Some(&rest[i..=i])),
                None => (rest, None),
            };
            out.push_str(self.words.canonical(piece).unwrap_or(piece));
            match sep {
                Some(sep) => {
                    out.push_str(sep);
                    rest = &rest[piece.len() + 1..];
                }
                None => break,
            }
        }

        let mut chars: Vec<char> = out.chars().collect();
        match (detect_case(&chars), case) {
            (_, CaseType::AllUpper) | (CaseType::AllLower, CaseType::FirstUpper) => {
                set_case(&mut chars, case);
                chars.into_iter().collect()
            }
            _ => out,
        }
    }
}

impl SpellingEngine for WordListEngine {
    fn is_correct(&self, word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        if self.skips_lookup(&chars) {
            return true;
        }
        let Some(canonical) = self.words.canonical(&lookup_key(word)) else {
            trace!(word, "not in word list");
            return false;
        };
        if canonical == word {
            return true;
        }
        let canonical: Vec<char> = canonical.chars().collect();
        match detect_case(&chars) {
            CaseType::AllUpper => self.options.accept_all_uppercase,
            CaseType::FirstUpper => {
                self.options.accept_first_uppercase
                    && detect_case(&canonical) == CaseType::AllLower
            }
            _ => false,
        }
    }

    fn suggest(&self, word: &str) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();
        if chars.is_empty() {
            return Vec::new();
        }
        if self.skips_lookup(&chars) {
            return vec![word.to_string()];
        }
        let case = detect_case(&chars);
        let lowered = lower_word(&chars);

        // Collect 3x candidates, rank, then truncate.
        let mut status = SuggestionStatus::new(
            &lowered,
            self.options.max_suggestions * 3,
            Budget::new(self.options.max_cost),
        );
        self.strategy.generate(&self.words, &mut status);
        trace!(word, spent = status.spent(), found = status.found_count(), "suggestion run");

        let mut out: Vec<String> = Vec::with_capacity(self.options.max_suggestions);
        for suggestion in status.finish() {
            let presented = self.present(&suggestion.word, case);
            if !out.contains(&presented) {
                out.push(presented);
            }
            if out.len() == self.options.max_suggestions {
                break;
            }
        }
        out
    }
}
