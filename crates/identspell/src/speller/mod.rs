// Spell checking module: the engine seam consumed by the corrector

#[cfg(feature = "wordlist")]
pub mod wordlist;

use std::rc::Rc;
use std::sync::Arc;

use identspell_core::enums::SpellResult;

/// Word-level spelling capability the corrector delegates to.
///
/// Implementations are read-only from the caller's point of view: checking
/// or suggesting never changes what later calls return. The corrector holds
/// an engine by shared reference and never assumes exclusive ownership.
pub trait SpellingEngine {
    /// Whether `word` is acceptable as written.
    fn is_correct(&self, word: &str) -> bool;

    /// Ranked replacement candidates for `word`, best first. May be empty.
    fn suggest(&self, word: &str) -> Vec<String>;
}

impl<E: SpellingEngine + ?Sized> SpellingEngine for &E {
    fn is_correct(&self, word: &str) -> bool {
        (**self).is_correct(word)
    }

    fn suggest(&self, word: &str) -> Vec<String> {
        (**self).suggest(word)
    }
}

impl<E: SpellingEngine + ?Sized> SpellingEngine for Box<E> {
    fn is_correct(&self, word: &str) -> bool {
        (**self).is_correct(word)
    }

    fn suggest(&self, word: &str) -> Vec<String> {
        (**self).suggest(word)
    }
}

impl<E: SpellingEngine + ?Sized> SpellingEngine for Rc<E> {
    fn is_correct(&self, word: &str) -> bool {
        (**self).is_correct(word)
    }

    fn suggest(&self, word: &str) -> Vec<String> {
        (**self).suggest(word)
    }
}

impl<E: SpellingEngine + ?Sized> SpellingEngine for Arc<E> {
    fn is_correct(&self, word: &str) -> bool {
        (**self).is_correct(word)
    }

    fn suggest(&self, word: &str) -> Vec<String> {
        (**self).suggest(word)
    }
}

/// Dictionary lookup used while generating suggestions.
///
/// The word is a lowercased character slice so generators can edit it in
/// place. The result says how the dictionary spells the word: `Ok` for a
/// plain lowercase entry, `CapitalizeFirst` for a proper noun, and
/// `CapitalizationError` for entries with other capitals ("HTML").
pub trait Speller {
    fn spell(&self, word: &[char]) -> SpellResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl SpellingEngine for Fixed {
        fn is_correct(&self, word: &str) -> bool {
            word == "name"
        }

        fn suggest(&self, word: &str) -> Vec<String> {
            vec![format!("{word}!")]
        }
    }

    fn check(engine: &dyn SpellingEngine) -> (bool, Vec<String>) {
        (engine.is_correct("name"), engine.suggest("x"))
    }

    #[test]
    fn smart_pointers_forward_to_engine() {
        let expected = (true, vec!["x!".to_string()]);
        assert_eq!(check(&Fixed), expected);
        assert_eq!(check(&&Fixed), expected);
        assert_eq!(check(&Box::new(Fixed)), expected);
        assert_eq!(check(&Rc::new(Fixed)), expected);
        assert_eq!(check(&Arc::new(Fixed)), expected);
    }

    #[test]
    fn shared_trait_object_is_an_engine() {
        let shared: Arc<dyn SpellingEngine + Send + Sync> = Arc::new(Fixed);
        assert!(shared.is_correct("name"));
        assert!(!shared.is_correct("nmae"));
    }
}
