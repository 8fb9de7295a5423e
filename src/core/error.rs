//! Errors raised while assembling a session from catalog names.
//!
//! The engine's commands never fail with an error; they report invalid
//! actions as `false`. Only the construction path, where a caller refers to
//! catalog entries by name, can go wrong in a way worth describing.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("unknown card: {0}")]
    UnknownCard(String),
    #[error("unknown p-item: {0}")]
    UnknownItem(String),
    #[error("unknown drink: {0}")]
    UnknownDrink(String),
    #[error("unknown character: {0}")]
    UnknownCharacter(String),
    #[error("unknown deck template: {0}")]
    UnknownDeck(String),
    #[error("too many drinks: {count} selected, at most {max} slots")]
    TooManyDrinks { count: usize, max: usize },
}
