//! Errors used throughout the FEN codec.
//!
//! `ChessErrors` is the single error type returned by the tokenizer, the
//! castling/en-passant resolver, the encoder, the decoder and the packed blob
//! reader. Every variant carries the offending text or colour so callers can
//! print precise diagnostics.
//!
//! All variants describe bad input. The input is deterministic, so none of
//! them are worth retrying: the same string fails the same way every time.

use thiserror::Error;

use crate::game_state::chess_types::Color;

/// Unified error type for parsing, encoding and decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// The FEN (or an encoded triple claiming to come from one) has the wrong
    /// shape: missing fields, stray characters, ranks that do not sum to eight
    /// files, or packed structures whose lengths disagree.
    ///
    /// Payload: a description including the offending token.
    #[error("malformed FEN: {0}")]
    MalformedFen(String),

    /// An algebraic square, or an en-passant index derived from one, lies
    /// outside the board.
    ///
    /// Payload: the square text or the derived index.
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    /// The halfmove clock or fullmove number is not a non-negative integer.
    ///
    /// Payload: the offending field.
    #[error("invalid move counter: {0}")]
    InvalidCounter(String),

    /// No king of the given colour was found while encoding.
    #[error("no {0:?} king on the board")]
    MissingKing(Color),
}
