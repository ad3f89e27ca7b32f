//! Four-bit piece codes.
//!
//! Sixteen codes cover the twelve ordinary pieces plus four tagged variants
//! that fold auxiliary state into the piece itself: a pawn that can be taken
//! en passant and a rook that still carries a castling right. Tagged codes
//! share their board letter with the untagged piece.

use crate::game_state::chess_types::{Color, PieceKind};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceCode {
    LightKing = 0,
    LightQueen = 1,
    LightRook = 2,
    LightBishop = 3,
    LightKnight = 4,
    LightPawn = 5,
    DarkKing = 6,
    DarkQueen = 7,
    DarkRook = 8,
    DarkBishop = 9,
    DarkKnight = 10,
    DarkPawn = 11,
    LightPawnEnPassant = 12,
    DarkPawnEnPassant = 13,
    LightRookCastle = 14,
    DarkRookCastle = 15,
}

/// Codes indexed by their 4-bit value.
pub const PIECE_CODES: [PieceCode; 16] = [
    PieceCode::LightKing,
    PieceCode::LightQueen,
    PieceCode::LightRook,
    PieceCode::LightBishop,
    PieceCode::LightKnight,
    PieceCode::LightPawn,
    PieceCode::DarkKing,
    PieceCode::DarkQueen,
    PieceCode::DarkRook,
    PieceCode::DarkBishop,
    PieceCode::DarkKnight,
    PieceCode::DarkPawn,
    PieceCode::LightPawnEnPassant,
    PieceCode::DarkPawnEnPassant,
    PieceCode::LightRookCastle,
    PieceCode::DarkRookCastle,
];

/// String tokens indexed by 4-bit value. `~` marks en-passant eligibility,
/// `*` marks a rook with castling rights.
const PIECE_TOKENS: [&str; 16] = [
    "K", "Q", "R", "B", "N", "P", "k", "q", "r", "b", "n", "p", "P~", "p~", "R*", "r*",
];

const PIECE_LETTERS: [char; 16] = [
    'K', 'Q', 'R', 'B', 'N', 'P', 'k', 'q', 'r', 'b', 'n', 'p', 'P', 'p', 'R', 'r',
];

impl PieceCode {
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Code for a 4-bit value. Only the low nibble is read, so every input
    /// maps to a code.
    #[inline]
    pub const fn from_nibble(nibble: u8) -> Self {
        PIECE_CODES[(nibble & 0x0F) as usize]
    }

    /// Board letter; tagged codes share the letter of their plain piece.
    #[inline]
    pub const fn letter(self) -> char {
        PIECE_LETTERS[self as usize]
    }

    #[inline]
    pub const fn token(self) -> &'static str {
        PIECE_TOKENS[self as usize]
    }

    /// Untagged code for a FEN piece letter.
    #[inline]
    pub const fn from_letter(ch: char) -> Option<Self> {
        match ch {
            'K' => Some(PieceCode::LightKing),
            'Q' => Some(PieceCode::LightQueen),
            'R' => Some(PieceCode::LightRook),
            'B' => Some(PieceCode::LightBishop),
            'N' => Some(PieceCode::LightKnight),
            'P' => Some(PieceCode::LightPawn),
            'k' => Some(PieceCode::DarkKing),
            'q' => Some(PieceCode::DarkQueen),
            'r' => Some(PieceCode::DarkRook),
            'b' => Some(PieceCode::DarkBishop),
            'n' => Some(PieceCode::DarkKnight),
            'p' => Some(PieceCode::DarkPawn),
            _ => None,
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        PIECE_TOKENS
            .iter()
            .position(|candidate| *candidate == token)
            .map(|idx| PIECE_CODES[idx])
    }

    #[inline]
    pub const fn rook_with_castling(color: Color) -> Self {
        match color {
            Color::Light => PieceCode::LightRookCastle,
            Color::Dark => PieceCode::DarkRookCastle,
        }
    }

    #[inline]
    pub const fn pawn_en_passant(color: Color) -> Self {
        match color {
            Color::Light => PieceCode::LightPawnEnPassant,
            Color::Dark => PieceCode::DarkPawnEnPassant,
        }
    }

    #[inline]
    pub const fn color(self) -> Color {
        match self {
            PieceCode::LightKing
            | PieceCode::LightQueen
            | PieceCode::LightRook
            | PieceCode::LightBishop
            | PieceCode::LightKnight
            | PieceCode::LightPawn
            | PieceCode::LightPawnEnPassant
            | PieceCode::LightRookCastle => Color::Light,
            _ => Color::Dark,
        }
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self {
            PieceCode::LightKing | PieceCode::DarkKing => PieceKind::King,
            PieceCode::LightQueen | PieceCode::DarkQueen => PieceKind::Queen,
            PieceCode::LightRook
            | PieceCode::DarkRook
            | PieceCode::LightRookCastle
            | PieceCode::DarkRookCastle => PieceKind::Rook,
            PieceCode::LightBishop | PieceCode::DarkBishop => PieceKind::Bishop,
            PieceCode::LightKnight | PieceCode::DarkKnight => PieceKind::Knight,
            PieceCode::LightPawn
            | PieceCode::DarkPawn
            | PieceCode::LightPawnEnPassant
            | PieceCode::DarkPawnEnPassant => PieceKind::Pawn,
        }
    }

    #[inline]
    pub const fn is_rook_with_castling(self) -> bool {
        matches!(self, PieceCode::LightRookCastle | PieceCode::DarkRookCastle)
    }

    #[inline]
    pub const fn is_pawn_en_passant(self) -> bool {
        matches!(
            self,
            PieceCode::LightPawnEnPassant | PieceCode::DarkPawnEnPassant
        )
    }

    #[inline]
    pub const fn is_tagged(self) -> bool {
        self.is_rook_with_castling() || self.is_pawn_en_passant()
    }
}

impl TryFrom<u8> for PieceCode {
    type Error = &'static str;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        PIECE_CODES
            .get(value as usize)
            .copied()
            .ok_or("Piece code out of range (must be 0-15)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_indexed_by_code_value() {
        for (value, code) in PIECE_CODES.iter().enumerate() {
            assert_eq!(code.bits() as usize, value);
            assert_eq!(PieceCode::from_nibble(value as u8), *code);
            assert_eq!(PieceCode::try_from(value as u8), Ok(*code));
        }
        assert!(PieceCode::try_from(16).is_err());
    }

    #[test]
    fn tokens_are_distinct_and_map_back() {
        for code in PIECE_CODES {
            assert_eq!(PieceCode::from_token(code.token()), Some(code));
        }
        assert_eq!(PieceCode::from_token("X"), None);
    }

    #[test]
    fn tagged_codes_share_letters_with_plain_pieces() {
        assert_eq!(PieceCode::LightPawnEnPassant.letter(), 'P');
        assert_eq!(PieceCode::DarkPawnEnPassant.letter(), 'p');
        assert_eq!(PieceCode::LightRookCastle.letter(), 'R');
        assert_eq!(PieceCode::DarkRookCastle.letter(), 'r');

        for code in PIECE_CODES.iter().filter(|code| !code.is_tagged()) {
            assert_eq!(PieceCode::from_letter(code.letter()), Some(*code));
        }
    }

    #[test]
    fn colour_and_kind_follow_the_letter() {
        for code in PIECE_CODES {
            assert_eq!(Color::of_piece_char(code.letter()), Some(code.color()));
            assert_eq!(PieceKind::from_fen_char(code.letter()), Some(code.kind()));
        }
    }

    #[test]
    fn exactly_four_codes_are_tagged() {
        assert_eq!(PIECE_CODES.iter().filter(|code| code.is_tagged()).count(), 4);
        assert_eq!(
            PieceCode::rook_with_castling(Color::Dark),
            PieceCode::DarkRookCastle
        );
        assert_eq!(
            PieceCode::pawn_en_passant(Color::Light),
            PieceCode::LightPawnEnPassant
        );
    }
}
