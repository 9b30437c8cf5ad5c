// Character classification and simple case conversion

// ---------------------------------------------------------------------------
// Simple case conversion
//
// The standard library's to_lowercase / to_uppercase produce iterators
// because some characters map to multiple characters. Identifier words are
// recased one character at a time, so only the first character of the
// mapping is taken.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
///
/// For characters with multi-character lowercase expansions, returns only
/// the first character.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Convert a character to its simple uppercase equivalent.
///
/// For characters with multi-character uppercase expansions, returns only
/// the first character (`ß` becomes `S`).
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    iter.next().unwrap_or(c)
}

/// Check whether a character is an uppercase letter.
///
/// Digits, underscores and other characters without a case mapping are
/// neither upper nor lower.
pub fn is_upper(c: char) -> bool {
    c != simple_lower(c)
}

/// Check whether a character is a lowercase letter.
pub fn is_lower(c: char) -> bool {
    c != simple_upper(c)
}

/// Check whether a character is a letter of any script.
pub fn is_letter(c: char) -> bool {
    c.is_alphabetic()
}

/// Lowercase every character of a word.
pub fn lower_word(word: &[char]) -> Vec<char> {
    word.iter().map(|&c| simple_lower(c)).collect()
}
