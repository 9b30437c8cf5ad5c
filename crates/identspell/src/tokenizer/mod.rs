// Identifier tokenizer: splits compound identifiers at casing boundaries

use identspell_core::character::{is_lower, is_upper};
use identspell_core::token::Word;

/// Whether a word boundary follows position `i` of `chars`.
///
/// A boundary sits between a lowercase and an uppercase letter ("get|ID"),
/// and between two uppercase letters when the second starts a capitalized
/// word ("HTML|Parser"). Digits and other non-letters never form one.
fn is_boundary(chars: &[char], i: usize) -> bool {
    let Some(&next) = chars.get(i + 1) else {
        return false;
    };
    let cur = chars[i];
    if is_lower(cur) && is_upper(next) {
        return true;
    }
    is_upper(cur) && is_upper(next) && chars.get(i + 2).is_some_and(|&c| is_lower(c))
}

/// Split an identifier into words.
///
/// Returns an empty vector for an empty identifier. Concatenating the
/// words' text reproduces the identifier exactly.
pub fn split(identifier: &str) -> Vec<Word<'_>> {
    let indexed: Vec<(usize, char)> = identifier.char_indices().collect();
    let chars: Vec<char> = indexed.iter().map(|&(_, c)| c).collect();

    let mut words = Vec::new();
    let mut start_byte = 0;
    let mut start_pos = 0;
    for i in 0..chars.len() {
        if is_boundary(&chars, i) {
            let end_byte = indexed[i + 1].0;
            words.push(Word::new(&identifier[start_byte..end_byte], start_pos));
            start_byte = end_byte;
            start_pos = i + 1;
        }
    }
    if start_byte < identifier.len() {
        words.push(Word::new(&identifier[start_byte..], start_pos));
    }
    words
}

/// Split an identifier and return only the words' text.
pub fn split_words(identifier: &str) -> Vec<&str> {
    split(identifier).into_iter().map(|w| w.text).collect()
}
