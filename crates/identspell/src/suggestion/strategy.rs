// Suggestion strategy: primary and secondary edit generators in run order

use super::generators::*;
use super::status::SuggestionStatus;
use crate::speller::Speller;

// =========================================================================
// Replacement tables (English QWERTY keyboard)
// =========================================================================

/// Keyboard rows used to derive neighbouring-key replacements.
const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Vowel confusions, as flat `from, to` pairs.
const VOWEL_REPLACEMENTS: &[char] = &[
    'a', 'e', 'e', 'a', 'e', 'i', 'i', 'e', 'i', 'o', 'o', 'i',
    'o', 'u', 'u', 'o', 'a', 'o', 'o', 'a', 'i', 'y', 'y', 'i',
];

/// Insertion characters ordered by English letter frequency.
const INSERTION_CHARS_PRIMARY: &str = "etaoinsr";

/// Remaining letters.
const INSERTION_CHARS_SECONDARY: &str = "hldcumfpgwybvkxjqz";

/// Flat `from, to` pairs for every horizontally adjacent key.
fn keyboard_neighbours() -> Vec<char> {
    let mut pairs = Vec::new();
    for row in KEYBOARD_ROWS {
        let keys: Vec<char> = row.chars().collect();
        for (i, &key) in keys.iter().enumerate() {
            if i > 0 {
                pairs.extend([key, keys[i - 1]]);
            }
            if i + 1 < keys.len() {
                pairs.extend([key, keys[i + 1]]);
            }
        }
    }
    pairs
}

// =========================================================================
// SuggestionStrategy
// =========================================================================

/// Primary and secondary generator lists.
///
/// The lookup budget belongs to each run's [`SuggestionStatus`], so one
/// strategy serves engines with different budgets.
pub struct SuggestionStrategy {
    /// Run first; if any produce suggestions, secondaries are skipped.
    primary_generators: Vec<Box<dyn SuggestionGenerator + Send + Sync>>,
    /// Run only if primaries produced nothing.
    generators: Vec<Box<dyn SuggestionGenerator + Send + Sync>>,
}

impl SuggestionStrategy {
    pub fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus<'_>) {
        for generator in &self.primary_generators {
            if status.is_done() {
                return;
            }
            generator.generate(speller, status);
        }
        if status.found_count() > 0 {
            return;
        }
        for generator in &self.generators {
            if status.is_done() {
                return;
            }
            generator.generate(speller, status);
        }
    }
}

// =========================================================================
// Factory functions
// =========================================================================

/// Strategy for keyboard typing errors in English identifiers.
pub fn typing_strategy() -> SuggestionStrategy {
    let primary_generators: Vec<Box<dyn SuggestionGenerator + Send + Sync>> =
        vec![Box::new(CaseChange)];

    let generators: Vec<Box<dyn SuggestionGenerator + Send + Sync>> = vec![
        Box::new(Deletion),
        Box::new(Swap),
        Box::new(Replacement { replacements: VOWEL_REPLACEMENTS.to_vec() }),
        Box::new(InsertSpecial),
        Box::new(Insertion { characters: INSERTION_CHARS_PRIMARY.chars().collect() }),
        Box::new(Replacement { replacements: keyboard_neighbours() }),
        Box::new(SplitWord),
        Box::new(Insertion { characters: INSERTION_CHARS_SECONDARY.chars().collect() }),
    ];

    SuggestionStrategy {
        primary_generators,
        generators,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestion::status::Budget;
    use identspell_core::enums::SpellResult;

    struct MockSpeller {
        accepted: Vec<&'static str>,
    }

    impl Speller for MockSpeller {
        fn spell(&self, word: &[char]) -> SpellResult {
            let s: String = word.iter().collect();
            if self.accepted.iter().any(|w| *w == s) {
                SpellResult::Ok
            } else {
                SpellResult::Failed
            }
        }
    }

    fn suggest(strategy: &SuggestionStrategy, accepted: &[&'static str], word: &str) -> Vec<String> {
        let speller = MockSpeller {
            accepted: accepted.to_vec(),
        };
        let chars: Vec<char> = word.chars().collect();
        let mut status = SuggestionStatus::new(&chars, 15, Budget::new(800));
        strategy.generate(&speller, &mut status);
        status.finish().into_iter().map(|s| s.word).collect()
    }

    #[test]
    fn neighbour_pairs_are_symmetric() {
        let pairs = keyboard_neighbours();
        assert_eq!(pairs.len() % 2, 0);
        let as_pairs: Vec<(char, char)> = pairs.chunks_exact(2).map(|p| (p[0], p[1])).collect();
        assert!(as_pairs.contains(&('q', 'w')));
        assert!(as_pairs.contains(&('w', 'q')));
        assert!(as_pairs.contains(&('n', 'm')));
        assert!(!as_pairs.contains(&('p', 'a')));
    }

    #[test]
    fn correct_word_short_circuits_secondaries() {
        let strategy = typing_strategy();
        assert_eq!(suggest(&strategy, &["type", "types"], "type"), ["type"]);
    }

    #[test]
    fn deletions_rank_first() {
        let strategy = typing_strategy();
        assert_eq!(suggest(&strategy, &["type", "name"], "typpe"), ["type"]);
        assert_eq!(suggest(&strategy, &["type", "name"], "namme"), ["name"]);
    }

    #[test]
    fn keyboard_slip_is_found() {
        let strategy = typing_strategy();
        assert_eq!(suggest(&strategy, &["value"], "valye"), ["value"]);
    }

    #[test]
    fn nothing_found_for_gibberish() {
        let strategy = typing_strategy();
        assert!(suggest(&strategy, &["type"], "qqqqqqqq").is_empty());
    }

    #[test]
    fn budget_limits_work() {
        let strategy = typing_strategy();
        let speller = MockSpeller { accepted: vec![] };
        let chars: Vec<char> = "abcdefgh".chars().collect();
        let mut status = SuggestionStatus::new(&chars, 5, Budget::new(3));
        strategy.generate(&speller, &mut status);
        // Nothing found, so the doubled budget applies.
        assert_eq!(status.spent(), 6);
    }
}
