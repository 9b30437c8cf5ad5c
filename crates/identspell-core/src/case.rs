// Case type detection, casing styles and identifier recomposition

use crate::character::{is_lower, is_upper, simple_lower, simple_upper};

// ---------------------------------------------------------------------------
// Word case patterns
// ---------------------------------------------------------------------------

/// Classification of character casing within a single word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// No letters found in the word (only digits, punctuation, etc.).
    NoLetters,
    /// All letters are lowercase: "parser".
    AllLower,
    /// First letter is uppercase, rest are lowercase: "Parser".
    FirstUpper,
    /// Mixed case that does not fit other patterns: "iPhone".
    Complex,
    /// All letters are uppercase: "HTML".
    AllUpper,
}

/// Detect the case pattern of a character slice.
///
/// Non-letter characters (digits, underscores) are ignored when
/// determining the case pattern.
pub fn detect_case(word: &[char]) -> CaseType {
    if word.is_empty() {
        return CaseType::NoLetters;
    }

    let mut first_uc = false;
    let mut rest_lc = true;
    let mut all_uc = true;
    let mut no_letters = true;

    if is_upper(word[0]) {
        first_uc = true;
        no_letters = false;
    }
    if is_lower(word[0]) {
        all_uc = false;
        no_letters = false;
    }

    for &c in &word[1..] {
        if is_upper(c) {
            no_letters = false;
            rest_lc = false;
        }
        if is_lower(c) {
            all_uc = false;
            no_letters = false;
        }
    }

    if no_letters {
        return CaseType::NoLetters;
    }
    if all_uc {
        return CaseType::AllUpper;
    }
    if !rest_lc {
        return CaseType::Complex;
    }
    if first_uc {
        CaseType::FirstUpper
    } else {
        CaseType::AllLower
    }
}

/// Apply a case transformation to a mutable character slice.
///
/// `NoLetters` and `Complex` leave the word untouched.
pub fn set_case(word: &mut [char], case_type: CaseType) {
    if word.is_empty() {
        return;
    }
    match case_type {
        CaseType::NoLetters | CaseType::Complex => {}
        CaseType::AllLower => {
            for c in word.iter_mut() {
                *c = simple_lower(*c);
            }
        }
        CaseType::AllUpper => {
            for c in word.iter_mut() {
                *c = simple_upper(*c);
            }
        }
        CaseType::FirstUpper => {
            word[0] = simple_upper(word[0]);
            for c in word[1..].iter_mut() {
                *c = simple_lower(*c);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Identifier casing styles
// ---------------------------------------------------------------------------

/// Casing convention of a whole identifier, decided by its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CasingStyle {
    /// First character is an uppercase letter (PascalCase).
    UpperLeading,
    /// Anything else: lowercase letter, digit, underscore (camelCase).
    LowerLeading,
}

impl CasingStyle {
    /// Classify an identifier. The empty identifier is `LowerLeading`.
    pub fn detect(identifier: &str) -> Self {
        match identifier.chars().next() {
            Some(c) if is_upper(c) => CasingStyle::UpperLeading,
            _ => CasingStyle::LowerLeading,
        }
    }
}

/// Uppercase the first character of a word and keep the rest as written,
/// so acronyms inside a suggestion survive ("HTML" stays "HTML").
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.push(simple_upper(first));
            out.extend(chars);
            out
        }
        None => String::new(),
    }
}

/// Join identifier parts without separators in the given casing style.
///
/// `UpperLeading` title-cases every part. `LowerLeading` lowercases the whole
/// first part and title-cases the rest. Empty parts are skipped.
pub fn recompose<S: AsRef<str>>(parts: &[S], style: CasingStyle) -> String {
    let mut out = String::new();
    let mut first = true;
    for part in parts.iter().map(AsRef::<str>::as_ref).filter(|p| !p.is_empty()) {
        if first && style == CasingStyle::LowerLeading {
            out.extend(part.chars().map(simple_lower));
        } else {
            out.push_str(&title_case(part));
        }
        first = false;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn to_string(cs: &[char]) -> String {
        cs.iter().collect()
    }

    // -- detect_case tests --

    #[test]
    fn detect_empty() {
        assert_eq!(detect_case(&[]), CaseType::NoLetters);
    }

    #[test]
    fn detect_no_letters() {
        assert_eq!(detect_case(&chars("123")), CaseType::NoLetters);
        assert_eq!(detect_case(&chars("__")), CaseType::NoLetters);
    }

    #[test]
    fn detect_patterns() {
        assert_eq!(detect_case(&chars("parser")), CaseType::AllLower);
        assert_eq!(detect_case(&chars("Parser")), CaseType::FirstUpper);
        assert_eq!(detect_case(&chars("HTML")), CaseType::AllUpper);
        assert_eq!(detect_case(&chars("iPhone")), CaseType::Complex);
    }

    #[test]
    fn detect_with_digits() {
        assert_eq!(detect_case(&chars("item2")), CaseType::AllLower);
        assert_eq!(detect_case(&chars("UTF8")), CaseType::AllUpper);
        assert_eq!(detect_case(&chars("Vec3")), CaseType::FirstUpper);
    }

    // -- set_case tests --

    #[test]
    fn set_case_variants() {
        let mut w = chars("parser");
        set_case(&mut w, CaseType::AllUpper);
        assert_eq!(to_string(&w), "PARSER");
        set_case(&mut w, CaseType::FirstUpper);
        assert_eq!(to_string(&w), "Parser");
        set_case(&mut w, CaseType::AllLower);
        assert_eq!(to_string(&w), "parser");
    }

    #[test]
    fn set_case_complex_noop() {
        let mut w = chars("iPhone");
        set_case(&mut w, CaseType::Complex);
        assert_eq!(to_string(&w), "iPhone");
    }

    #[test]
    fn set_case_empty() {
        let mut w: Vec<char> = vec![];
        set_case(&mut w, CaseType::AllUpper);
        assert!(w.is_empty());
    }

    // -- casing style tests --

    #[test]
    fn style_from_first_character() {
        assert_eq!(CasingStyle::detect("TypeName"), CasingStyle::UpperLeading);
        assert_eq!(CasingStyle::detect("typeName"), CasingStyle::LowerLeading);
        assert_eq!(CasingStyle::detect("\u{00C4}iti"), CasingStyle::UpperLeading);
    }

    #[test]
    fn non_letter_first_character_is_lower_leading() {
        assert_eq!(CasingStyle::detect("_typeName"), CasingStyle::LowerLeading);
        assert_eq!(CasingStyle::detect("2D"), CasingStyle::LowerLeading);
        assert_eq!(CasingStyle::detect("$Ref"), CasingStyle::LowerLeading);
        assert_eq!(CasingStyle::detect(""), CasingStyle::LowerLeading);
    }

    // -- recomposition tests --

    #[test]
    fn title_case_keeps_tail() {
        assert_eq!(title_case("name"), "Name");
        assert_eq!(title_case("HTML"), "HTML");
        assert_eq!(title_case("iPhone"), "IPhone");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn recompose_upper_leading() {
        assert_eq!(recompose(&["type", "name"], CasingStyle::UpperLeading), "TypeName");
        assert_eq!(recompose(&["Type", "Name"], CasingStyle::UpperLeading), "TypeName");
    }

    #[test]
    fn recompose_lower_leading() {
        assert_eq!(recompose(&["Type", "Name"], CasingStyle::LowerLeading), "typeName");
        assert_eq!(recompose(&["HTML", "parser"], CasingStyle::LowerLeading), "htmlParser");
        assert_eq!(recompose(&["get", "ID"], CasingStyle::LowerLeading), "getID");
    }

    #[test]
    fn recompose_skips_empty_parts() {
        assert_eq!(recompose(&["", "Name"], CasingStyle::LowerLeading), "name");
        let none: [&str; 0] = [];
        assert_eq!(recompose(&none, CasingStyle::UpperLeading), "");
    }
}
