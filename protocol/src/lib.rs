//! Tokenizer and message types for Pokemon Showdown battle logs.
//!
//! A battle log is a sequence of `|`-delimited lines. [`tokenize`] splits the
//! raw text into [`Line`]s and [`parse_battle_message`] turns each line into a
//! typed [`BattleMessage`]. No state is kept here; see `vgcscope-analysis` for
//! battle tracking.

use thiserror::Error;

pub mod message;
pub mod tokenizer;

pub use message::{
    parse_battle_message, parse_line, BattleMessage, HpStatus, Player, Pokemon, PokemonDetails,
};
pub use tokenizer::{tokenize, tokenize_line, Line, Lines};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid message format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Empty message")]
    EmptyMessage,
}
