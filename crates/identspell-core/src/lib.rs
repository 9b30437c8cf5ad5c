// identspell-core: shared types for identifier spell checking.

pub mod case;
pub mod character;
pub mod diagnostic;
pub mod enums;
pub mod token;
