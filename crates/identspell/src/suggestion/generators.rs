// Edit generators: each enumerates one class of single-edit candidates for
// the run's word and feeds them to the status for lookup.

use identspell_core::enums::SpellResult;

use super::status::{SuggestionStatus, base_priority};
use crate::speller::Speller;

/// One class of edit operation.
pub trait SuggestionGenerator {
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus<'_>);
}

/// Feed candidates to the status in order until the run is done.
fn try_all<I>(speller: &dyn Speller, status: &mut SuggestionStatus<'_>, candidates: I)
where
    I: IntoIterator<Item = Vec<char>>,
{
    for candidate in candidates {
        if status.is_done() {
            return;
        }
        status.accept(speller, &candidate);
    }
}

fn with_inserted(word: &[char], at: usize, c: char) -> Vec<char> {
    let mut out = Vec::with_capacity(word.len() + 1);
    out.extend_from_slice(&word[..at]);
    out.push(c);
    out.extend_from_slice(&word[at..]);
    out
}

// ---------------------------------------------------------------------------
// CaseChange
// ---------------------------------------------------------------------------

/// The word itself. The dictionary lookup is case-insensitive, so this
/// finds words that are only miscapitalized.
pub struct CaseChange;

impl SuggestionGenerator for CaseChange {
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus<'_>) {
        let word = status.word();
        status.accept(speller, word);
    }
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

/// Drop one character. Of a run of equal characters only the first is
/// dropped.
pub struct Deletion;

impl SuggestionGenerator for Deletion {
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus<'_>) {
        let word = status.word();
        if word.len() < 2 {
            return;
        }
        let candidates = (0..word.len())
            .filter(|&i| i == 0 || word[i] != word[i - 1])
            .map(|i| {
                let mut out = word.to_vec();
                out.remove(i);
                out
            });
        try_all(speller, status, candidates);
    }
}

// ---------------------------------------------------------------------------
// Swap
// ---------------------------------------------------------------------------

/// Exchange two distinct characters. Short words try every pair up to ten
/// apart; longer words narrow the window to `50 / len`.
pub struct Swap;

impl SuggestionGenerator for Swap {
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus<'_>) {
        let word = status.word();
        let len = word.len();
        let window = if len <= 8 { 10 } else { 50 / len };
        if len < 2 || window == 0 {
            return;
        }
        let candidates = (0..len)
            .flat_map(|i| (i + 1..len.min(i + window + 1)).map(move |j| (i, j)))
            .filter(|&(i, j)| word[i] != word[j])
            .map(|(i, j)| {
                let mut out = word.to_vec();
                out.swap(i, j);
                out
            });
        try_all(speller, status, candidates);
    }
}

// ---------------------------------------------------------------------------
// Replacement
// ---------------------------------------------------------------------------

/// Substitute characters from a table of flat `from, to` pairs. Each pair
/// is applied to every occurrence of `from`, one at a time.
pub struct Replacement {
    pub replacements: Vec<char>,
}

impl SuggestionGenerator for Replacement {
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus<'_>) {
        let word = status.word();
        let candidates = self
            .replacements
            .chunks_exact(2)
            .flat_map(|pair| {
                let (from, to) = (pair[0], pair[1]);
                (0..word.len())
                    .filter(move |&pos| word[pos] == from)
                    .map(move |pos| (pos, to))
            })
            .map(|(pos, to)| {
                let mut out = word.to_vec();
                out[pos] = to;
                out
            });
        try_all(speller, status, candidates);
    }
}

// ---------------------------------------------------------------------------
// Insertion
// ---------------------------------------------------------------------------

/// Insert each character of a set at every position, in set order.
///
/// A character is not inserted next to a copy of itself; doubling is
/// [`InsertSpecial`]'s job.
pub struct Insertion {
    pub characters: Vec<char>,
}

impl SuggestionGenerator for Insertion {
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus<'_>) {
        let word = status.word();
        if word.is_empty() {
            return;
        }
        let candidates = self
            .characters
            .iter()
            .flat_map(|&c| (0..=word.len()).map(move |at| (at, c)))
            .filter(|&(at, c)| word.get(at) != Some(&c) && (at == 0 || word[at - 1] != c))
            .map(|(at, c)| with_inserted(word, at, c));
        try_all(speller, status, candidates);
    }
}

// ---------------------------------------------------------------------------
// InsertSpecial
// ---------------------------------------------------------------------------

/// Insert an inner hyphen ("wellknown" -> "well-known"), then double a
/// single character ("adress" -> "address").
///
/// Hyphens keep at least two characters on each side and never touch an
/// existing hyphen. Characters already doubled, hyphens and apostrophes are
/// not doubled.
pub struct InsertSpecial;

impl InsertSpecial {
    fn hyphen_positions(word: &[char]) -> Vec<usize> {
        let len = word.len();
        (2..=len - 2)
            .filter(|&at| !word[at - 2..(at + 2).min(len)].contains(&'-'))
            .collect()
    }

    fn doubling_positions(word: &[char]) -> Vec<usize> {
        let mut positions = Vec::new();
        let mut i = 0;
        while i < word.len() {
            if word.get(i + 1) == Some(&word[i]) {
                i += 2;
                continue;
            }
            if !matches!(word[i], '-' | '\'') {
                positions.push(i);
            }
            i += 1;
        }
        positions
    }
}

impl SuggestionGenerator for InsertSpecial {
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus<'_>) {
        let word = status.word();
        if word.len() < 4 {
            return;
        }
        let hyphenated = Self::hyphen_positions(word)
            .into_iter()
            .map(|at| with_inserted(word, at, '-'));
        let doubled = Self::doubling_positions(word)
            .into_iter()
            .map(|at| with_inserted(word, at, word[at]));
        try_all(speller, status, hyphenated.chain(doubled));
    }
}

// ---------------------------------------------------------------------------
// SplitWord
// ---------------------------------------------------------------------------

/// Split the word into two known words, producing `"left right"`.
///
/// Split points run from right to left with at least two characters on
/// each side. Both halves must be plain or proper-noun entries; the
/// candidate's base rank is the sum of theirs.
pub struct SplitWord;

impl SplitWord {
    fn half_rank(status: &mut SuggestionStatus<'_>, speller: &dyn Speller, half: &[char]) -> Option<i32> {
        match status.lookup(speller, half) {
            result @ (SpellResult::Ok | SpellResult::CapitalizeFirst) => base_priority(result),
            _ => None,
        }
    }
}

impl SuggestionGenerator for SplitWord {
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus<'_>) {
        let word = status.word();
        if word.len() < 4 {
            return;
        }
        for at in (2..=word.len() - 2).rev() {
            if status.is_done() {
                return;
            }
            if word[at - 1] == '-' || word[at] == '-' {
                continue;
            }
            let (left, right) = word.split_at(at);
            let Some(left_rank) = Self::half_rank(status, speller, left) else {
                continue;
            };
            let Some(right_rank) = Self::half_rank(status, speller, right) else {
                continue;
            };
            let joined: String = left.iter().chain([' '].iter()).chain(right).collect();
            status.offer(joined, left_rank + right_rank);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestion::status::Budget;

    /// Dictionary of lowercase words with fixed verdicts.
    #[derive(Default)]
    struct MockSpeller {
        words: Vec<(&'static str, SpellResult)>,
    }

    impl MockSpeller {
        fn new(words: &[&'static str]) -> Self {
            Self::default().with_all(words, SpellResult::Ok)
        }

        fn with_all(mut self, words: &[&'static str], result: SpellResult) -> Self {
            self.words.extend(words.iter().map(|&w| (w, result)));
            self
        }

        fn with(self, word: &'static str, result: SpellResult) -> Self {
            self.with_all(&[word], result)
        }
    }

    impl Speller for MockSpeller {
        fn spell(&self, word: &[char]) -> SpellResult {
            let s: String = word.iter().collect();
            self.words
                .iter()
                .find(|(w, _)| *w == s)
                .map_or(SpellResult::Failed, |&(_, r)| r)
        }
    }

    fn run(generator: &dyn SuggestionGenerator, speller: &dyn Speller, word: &str) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();
        let mut status = SuggestionStatus::new(&chars, 10, Budget::new(1000));
        generator.generate(speller, &mut status);
        status.finish().into_iter().map(|s| s.word).collect()
    }

    #[test]
    fn case_change_accepts_known_word() {
        let speller = MockSpeller::new(&["type"]);
        assert_eq!(run(&CaseChange, &speller, "type"), ["type"]);
        assert!(run(&CaseChange, &speller, "typpe").is_empty());
    }

    #[test]
    fn deletion_removes_doubled_letter_once() {
        let speller = MockSpeller::new(&["type"]);
        assert_eq!(run(&Deletion, &speller, "typpe"), ["type"]);
    }

    #[test]
    fn deletion_skips_short_words() {
        let speller = MockSpeller::new(&[""]);
        assert!(run(&Deletion, &speller, "a").is_empty());
    }

    #[test]
    fn swap_fixes_distant_transposition() {
        let speller = MockSpeller::new(&["name", "parser"]);
        assert_eq!(run(&Swap, &speller, "nmae"), ["name"]);
        assert_eq!(run(&Swap, &speller, "rapser"), ["parser"]);
    }

    #[test]
    fn swap_window_narrows_for_long_words() {
        // 12 letters: window is 50 / 12 = 4, so the ends cannot be exchanged.
        let speller = MockSpeller::new(&["configurable"]);
        assert!(run(&Swap, &speller, "eonfigurablc").is_empty());
        assert_eq!(run(&Swap, &speller, "cinfogurable"), ["configurable"]);
    }

    #[test]
    fn replacement_uses_table_pairs() {
        let speller = MockSpeller::new(&["field"]);
        let generator = Replacement {
            replacements: vec!['o', 'i', 'u', 'i'],
        };
        assert_eq!(run(&generator, &speller, "fueld"), ["field"]);
    }

    #[test]
    fn insertion_adds_missing_letter() {
        let speller = MockSpeller::new(&["method"]);
        let generator = Insertion {
            characters: "aeiou".chars().collect(),
        };
        assert_eq!(run(&generator, &speller, "methd"), ["method"]);
    }

    #[test]
    fn insertion_leaves_doubling_alone() {
        let speller = MockSpeller::new(&["address"]);
        let generator = Insertion {
            characters: vec!['d'],
        };
        assert!(run(&generator, &speller, "adress").is_empty());
    }

    #[test]
    fn insert_special_doubles_and_hyphenates() {
        let speller = MockSpeller::new(&["address", "well-known"]);
        assert_eq!(run(&InsertSpecial, &speller, "adress"), ["address"]);
        assert_eq!(run(&InsertSpecial, &speller, "wellknown"), ["well-known"]);
    }

    #[test]
    fn insert_special_positions() {
        let word: Vec<char> = "ab-cdef".chars().collect();
        assert_eq!(InsertSpecial::hyphen_positions(&word), [5]);
        let word: Vec<char> = "allot".chars().collect();
        assert_eq!(InsertSpecial::doubling_positions(&word), [0, 3, 4]);
    }

    #[test]
    fn split_word_produces_spaced_candidate() {
        let speller = MockSpeller::new(&["ice", "cream"]);
        assert_eq!(run(&SplitWord, &speller, "icecream"), ["ice cream"]);
    }

    #[test]
    fn split_word_rejects_capitalization_errors() {
        let speller = MockSpeller::new(&["parser"]).with("html", SpellResult::CapitalizationError);
        assert!(run(&SplitWord, &speller, "htmlparser").is_empty());
    }

    #[test]
    fn proper_nouns_rank_after_plain_words() {
        let speller = MockSpeller::new(&["paris"]).with("parts", SpellResult::CapitalizeFirst);
        let generator = Replacement {
            replacements: vec!['j', 't', 'j', 'i'],
        };
        assert_eq!(run(&generator, &speller, "parjs"), ["paris", "parts"]);
    }
}
