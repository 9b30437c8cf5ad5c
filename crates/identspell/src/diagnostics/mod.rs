// Symbol scanning: turns misspelled declarations into diagnostics
//
// A host front end (compiler plugin, language server, source indexer)
// hands over the symbols it declares; each checked kind is scanned and a
// warning is produced per misspelled name. Property accessors are skipped
// since they repeat the property's own name.

use identspell_core::diagnostic::{Diagnostic, Symbol};
use tracing::debug;

use crate::corrector::IdentifierCorrector;

/// Scan symbols and report every misspelled one, in input order.
pub fn scan_symbols(corrector: &IdentifierCorrector<'_>, symbols: &[Symbol]) -> Vec<Diagnostic> {
    let diagnostics: Vec<Diagnostic> = symbols
        .iter()
        .filter(|symbol| symbol.kind.is_checked())
        .filter(|symbol| corrector.has_misspelling(&symbol.name))
        .map(Diagnostic::misspelling)
        .collect();
    debug!(
        symbols = symbols.len(),
        findings = diagnostics.len(),
        "scanned symbols"
    );
    diagnostics
}

/// The rename to offer for a diagnostic's symbol, if there is one.
pub fn fix_for(corrector: &IdentifierCorrector<'_>, diagnostic: &Diagnostic) -> Option<String> {
    corrector.rename_offer(&diagnostic.symbol_name)
}
