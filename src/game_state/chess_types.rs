//! Shared primitive types for the codec.
//!
//! Squares are linear indices in FEN scan order: `0 == a8`, `7 == h8`,
//! `56 == a1`, `63 == h1`.

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    /// FEN active-colour token (`w` / `b`).
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            Color::Light => 'w',
            Color::Dark => 'b',
        }
    }

    /// Colour of a FEN piece letter; uppercase is light.
    #[inline]
    pub fn of_piece_char(ch: char) -> Option<Self> {
        if ch.is_ascii_uppercase() {
            Some(Color::Light)
        } else if ch.is_ascii_lowercase() {
            Some(Color::Dark)
        } else {
            None
        }
    }
}

/// Piece kind (colour is carried separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub fn from_fen_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// Wing a castling right refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    King,
    Queen,
}

/// Linear board index (`0..=63`).
pub type Square = u8;

pub const NUM_FILES: u8 = 8;
pub const NUM_RANKS: u8 = 8;
pub const NUM_SQUARES: u8 = 64;
