// Bookkeeping for one suggestion run: lookup budget and ranked candidates

use hashbrown::HashSet;
use identspell_core::enums::SpellResult;

use crate::speller::Speller;

/// A candidate word with its rank. Lower ranks sort first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub word: String,
    pub priority: i32,
}

/// Base rank of a dictionary verdict, or `None` when the word is unknown.
pub fn base_priority(result: SpellResult) -> Option<i32> {
    match result {
        SpellResult::Ok => Some(1),
        SpellResult::CapitalizeFirst => Some(2),
        SpellResult::CapitalizationError => Some(3),
        SpellResult::Failed => None,
    }
}

// ---------------------------------------------------------------------------
// Budget
// ---------------------------------------------------------------------------

/// Number of dictionary lookups one run may make.
///
/// A run that has found nothing yet may overdraw up to twice the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    limit: usize,
    spent: usize,
}

impl Budget {
    pub fn new(limit: usize) -> Self {
        Self { limit, spent: 0 }
    }

    pub fn spent(&self) -> usize {
        self.spent
    }

    fn spend(&mut self) {
        self.spent += 1;
    }

    fn exhausted(&self, found_any: bool) -> bool {
        let ceiling = if found_any { self.limit } else { self.limit * 2 };
        self.spent >= ceiling
    }
}

// ---------------------------------------------------------------------------
// SuggestionStatus
// ---------------------------------------------------------------------------

/// State of one suggestion run over a lowercased word.
///
/// Generators hand candidates to [`accept`](Self::accept), which looks them
/// up, charges the budget and ranks the ones the dictionary knows. The run
/// is done once `capacity` candidates are collected or the budget is gone.
pub struct SuggestionStatus<'a> {
    word: &'a [char],
    capacity: usize,
    budget: Budget,
    found: Vec<Suggestion>,
    seen: HashSet<String>,
}

impl<'a> SuggestionStatus<'a> {
    pub fn new(word: &'a [char], capacity: usize, budget: Budget) -> Self {
        Self {
            word,
            capacity,
            budget,
            found: Vec::with_capacity(capacity),
            seen: HashSet::new(),
        }
    }

    /// The word suggestions are generated for. Borrowed for the whole run,
    /// so generators can keep it while feeding candidates back.
    pub fn word(&self) -> &'a [char] {
        self.word
    }

    pub fn is_done(&self) -> bool {
        self.found.len() >= self.capacity || self.budget.exhausted(!self.found.is_empty())
    }

    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    pub fn spent(&self) -> usize {
        self.budget.spent()
    }

    /// Look a candidate up, charging one unit of budget.
    pub fn lookup(&mut self, speller: &dyn Speller, candidate: &[char]) -> SpellResult {
        self.budget.spend();
        speller.spell(candidate)
    }

    /// Look a candidate up and keep it if the dictionary knows it in any
    /// capitalization. Does nothing once the run is done.
    pub fn accept(&mut self, speller: &dyn Speller, candidate: &[char]) {
        if self.is_done() {
            return;
        }
        if let Some(base) = base_priority(self.lookup(speller, candidate)) {
            self.offer(candidate.iter().collect(), base);
        }
    }

    /// Keep a candidate with the given base rank.
    ///
    /// The stored rank is `base * (found + 5)`: among equal verdicts the
    /// earlier find wins. Repeats and candidates past capacity are dropped.
    pub fn offer(&mut self, word: String, base: i32) {
        if self.found.len() >= self.capacity || self.seen.contains(&word) {
            return;
        }
        let priority = base * (self.found.len() as i32 + 5);
        self.seen.insert(word.clone());
        self.found.push(Suggestion { word, priority });
    }

    /// End the run: candidates in rank order, ties kept in find order.
    pub fn finish(mut self) -> Vec<Suggestion> {
        self.found.sort_by_key(|s| s.priority);
        self.found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    struct Known(&'static [&'static str]);

    impl Speller for Known {
        fn spell(&self, word: &[char]) -> SpellResult {
            let s: String = word.iter().collect();
            if self.0.iter().any(|w| *w == s) {
                SpellResult::Ok
            } else {
                SpellResult::Failed
            }
        }
    }

    #[test]
    fn done_when_capacity_reached() {
        let word = chars("ab");
        let mut status = SuggestionStatus::new(&word, 2, Budget::new(1000));
        status.offer("a".to_string(), 1);
        assert!(!status.is_done());
        status.offer("b".to_string(), 1);
        assert!(status.is_done());
        status.offer("c".to_string(), 1);
        assert_eq!(status.found_count(), 2);
    }

    #[test]
    fn empty_run_may_overdraw_budget() {
        let word = chars("abc");
        let mut status = SuggestionStatus::new(&word, 5, Budget::new(10));
        for _ in 0..10 {
            status.accept(&Known(&[]), &word);
        }
        assert!(!status.is_done());
        for _ in 0..20 {
            status.accept(&Known(&[]), &word);
        }
        assert!(status.is_done());
        assert_eq!(status.spent(), 20);
    }

    #[test]
    fn budget_is_strict_once_something_was_found() {
        let word = chars("abc");
        let mut status = SuggestionStatus::new(&word, 5, Budget::new(10));
        status.accept(&Known(&["abc"]), &word);
        for _ in 0..9 {
            status.accept(&Known(&[]), &word);
        }
        assert!(status.is_done());
    }

    #[test]
    fn accept_ignores_unknown_words() {
        let word = chars("abc");
        let mut status = SuggestionStatus::new(&word, 5, Budget::new(10));
        status.accept(&Known(&["abd"]), &chars("abe"));
        status.accept(&Known(&["abd"]), &chars("abd"));
        let words: Vec<_> = status.finish().into_iter().map(|s| s.word).collect();
        assert_eq!(words, ["abd"]);
    }

    #[test]
    fn later_finds_rank_lower() {
        let word = chars("abc");
        let mut status = SuggestionStatus::new(&word, 5, Budget::new(10));
        status.offer("first".to_string(), 10);
        status.offer("second".to_string(), 10);
        status.offer("first".to_string(), 1);
        let ranks: Vec<_> = status.finish().into_iter().map(|s| (s.word, s.priority)).collect();
        assert_eq!(ranks, [("first".to_string(), 50), ("second".to_string(), 60)]);
    }

    #[test]
    fn finish_sorts_by_rank() {
        let word = chars("abc");
        let mut status = SuggestionStatus::new(&word, 5, Budget::new(10));
        status.offer("high".to_string(), 100);
        status.offer("low".to_string(), 1);
        status.offer("mid".to_string(), 10);
        let words: Vec<_> = status.finish().into_iter().map(|s| s.word).collect();
        assert_eq!(words, ["low", "mid", "high"]);
    }

    #[test]
    fn verdicts_map_to_ranks() {
        assert_eq!(base_priority(SpellResult::Ok), Some(1));
        assert_eq!(base_priority(SpellResult::CapitalizationError), Some(3));
        assert_eq!(base_priority(SpellResult::Failed), None);
    }
}
