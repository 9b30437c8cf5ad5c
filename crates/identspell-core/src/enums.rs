// Shared enums: SpellResult, SymbolKind, Severity

/// Result of checking one word against a dictionary.
///
/// Ordered from best to worst so the least severe of several results can be
/// picked with `min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpellResult {
    /// Word is correctly spelled.
    Ok,
    /// Word is correct if the first letter is capitalized.
    CapitalizeFirst,
    /// Word exists but is written with the wrong capitalization.
    CapitalizationError,
    /// Word is misspelled.
    Failed,
}

/// Kind of program symbol whose name is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// Class, struct, interface, enum or delegate.
    NamedType,
    Method,
    Field,
    Property,
    /// Compiler-generated getter or setter of a property. Never checked:
    /// the property itself already carries the name.
    PropertyAccessor,
    Namespace,
}

impl SymbolKind {
    /// Whether names of this kind are spell checked.
    pub fn is_checked(self) -> bool {
        !matches!(self, SymbolKind::PropertyAccessor)
    }
}

/// Severity attached to a reported finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
}
