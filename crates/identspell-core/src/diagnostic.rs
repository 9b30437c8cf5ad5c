// Misspelling findings reported for program symbols

use std::fmt;

use crate::enums::{Severity, SymbolKind};

/// Identifier of the misspelling diagnostic.
pub const IDENTIFIER_MISSPELLING: &str = "identifier-misspelling";

/// Position of a symbol's declaration in source (1-based line and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A named program symbol as seen by the diagnostic scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    pub location: Location,
}

impl Symbol {
    pub fn new(name: impl Into<String>, kind: SymbolKind, location: Location) -> Self {
        Self {
            name: name.into(),
            kind,
            location,
        }
    }
}

/// A finding for one declaration site of a misspelled symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Always [`IDENTIFIER_MISSPELLING`] for findings from this crate.
    pub id: &'static str,

    pub severity: Severity,

    /// Human-readable message, e.g. `Identifier 'TyppeNamme' contains a misspelling`.
    pub message: String,

    /// Name of the symbol the finding refers to.
    pub symbol_name: String,

    pub location: Location,
}

impl Diagnostic {
    /// Create the misspelling finding for a symbol.
    pub fn misspelling(symbol: &Symbol) -> Self {
        Self {
            id: IDENTIFIER_MISSPELLING,
            severity: Severity::Warning,
            message: format!("Identifier '{}' contains a misspelling", symbol.name),
            symbol_name: symbol.name.clone(),
            location: symbol.location,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} [{}]", self.location, self.message, self.id)
    }
}
