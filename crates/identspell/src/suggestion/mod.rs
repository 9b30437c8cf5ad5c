// Suggestion generation for the word-list engine.
//
// Produces spelling correction candidates by applying edit operations
// (deletion, insertion, replacement, swap, splitting) to a lowercased word
// and validating each candidate through a `Speller`.
//
//   - `generators`: individual edit-operation generators
//   - `status`: lookup budget, ranking, deduplication
//   - `strategy`: orders generators into the typing pipeline

pub mod generators;
pub mod status;
pub mod strategy;

pub use generators::SuggestionGenerator;
pub use status::{Budget, Suggestion, SuggestionStatus};
pub use strategy::{SuggestionStrategy, typing_strategy};
