// identspell: spell checking and correction for compound program identifiers.
//
//   - `tokenizer`: splits identifiers at casing boundaries
//   - `speller`: the spelling engine seam and the word-list engine
//   - `suggestion`: edit-based candidate generation for the word-list engine
//   - `corrector`: scan mode and fix mode
//   - `diagnostics`: per-symbol findings and rename offers
//   - `handle`: owned, shareable entry point

pub mod corrector;
pub mod diagnostics;
pub mod speller;
pub mod tokenizer;

#[cfg(feature = "wordlist")]
pub mod suggestion;

#[cfg(feature = "handle")]
pub mod handle;

pub use corrector::{CorrectorOptions, FixPolicy, IdentifierCorrector, select_suggestion};
pub use speller::SpellingEngine;
