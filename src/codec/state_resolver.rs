//! Castling-right flags and the en-passant victim square.
//!
//! FEN names the square a double-stepping pawn passed over. The codec tags
//! the pawn itself, one rank further from the side to move.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{CastleSide, Color, Square, NUM_FILES, NUM_SQUARES};
use crate::utils::algebraic::optional_algebraic_to_square;
use crate::utils::fen_parser::FenFields;

/// The four castling flags, read once from the FEN castling field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CastlingRights {
    pub light_kingside: bool,
    pub dark_kingside: bool,
    pub light_queenside: bool,
    pub dark_queenside: bool,
}

impl CastlingRights {
    /// Letter membership only; `-` and the empty string both mean none.
    pub fn from_fen_field(castling_part: &str) -> Self {
        Self {
            light_kingside: castling_part.contains('K'),
            dark_kingside: castling_part.contains('k'),
            light_queenside: castling_part.contains('Q'),
            dark_queenside: castling_part.contains('q'),
        }
    }

    #[inline]
    pub const fn allows(&self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::Light, CastleSide::King) => self.light_kingside,
            (Color::Light, CastleSide::Queen) => self.light_queenside,
            (Color::Dark, CastleSide::King) => self.dark_kingside,
            (Color::Dark, CastleSide::Queen) => self.dark_queenside,
        }
    }

    #[inline]
    pub fn grant(&mut self, color: Color, side: CastleSide) {
        match (color, side) {
            (Color::Light, CastleSide::King) => self.light_kingside = true,
            (Color::Light, CastleSide::Queen) => self.light_queenside = true,
            (Color::Dark, CastleSide::King) => self.dark_kingside = true,
            (Color::Dark, CastleSide::Queen) => self.dark_queenside = true,
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        !(self.light_kingside || self.dark_kingside || self.light_queenside || self.dark_queenside)
    }

    /// Canonical `KQkq` ordering, `-` when no right is held.
    pub fn to_fen_field(&self) -> String {
        let mut out = String::new();

        if self.light_kingside {
            out.push('K');
        }
        if self.light_queenside {
            out.push('Q');
        }
        if self.dark_kingside {
            out.push('k');
        }
        if self.dark_queenside {
            out.push('q');
        }

        if out.is_empty() {
            out.push('-');
        }

        out
    }
}

/// Index of the pawn that can be captured en passant, or `None` for `-`.
pub fn resolve_en_passant(
    en_passant_part: &str,
    side_to_move: Color,
) -> Result<Option<Square>, ChessErrors> {
    let Some(target) = optional_algebraic_to_square(en_passant_part)? else {
        return Ok(None);
    };

    // Light to move: the dark pawn stands one rank lower on the board, which
    // is one row further along the top-first index.
    let shifted = match side_to_move {
        Color::Light => i16::from(target) + i16::from(NUM_FILES),
        Color::Dark => i16::from(target) - i16::from(NUM_FILES),
    };

    if !(0..i16::from(NUM_SQUARES)).contains(&shifted) {
        return Err(ChessErrors::InvalidSquare(format!(
            "en-passant target {en_passant_part} resolves to off-board index {shifted}"
        )));
    }

    Ok(Some(shifted as Square))
}

/// Auxiliary state the encoder folds into piece codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedState {
    pub castling: CastlingRights,
    pub en_passant_victim: Option<Square>,
}

pub fn resolve_state(fields: &FenFields<'_>) -> Result<ResolvedState, ChessErrors> {
    Ok(ResolvedState {
        castling: CastlingRights::from_fen_field(fields.castling),
        en_passant_victim: resolve_en_passant(fields.en_passant, fields.side_to_move)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn castling_flags_are_letter_membership() {
        let rights = CastlingRights::from_fen_field("Kq");
        assert!(rights.light_kingside);
        assert!(!rights.light_queenside);
        assert!(!rights.dark_kingside);
        assert!(rights.dark_queenside);

        assert!(CastlingRights::from_fen_field("-").is_empty());
        assert!(CastlingRights::from_fen_field("").is_empty());
    }

    #[test]
    fn castling_field_renders_canonically() {
        assert_eq!(CastlingRights::from_fen_field("qkQK").to_fen_field(), "KQkq");
        assert_eq!(CastlingRights::from_fen_field("k").to_fen_field(), "k");
        assert_eq!(CastlingRights::default().to_fen_field(), "-");

        let mut rights = CastlingRights::default();
        rights.grant(Color::Dark, CastleSide::Queen);
        assert!(rights.allows(Color::Dark, CastleSide::Queen));
        assert_eq!(rights.to_fen_field(), "q");
    }

    #[test]
    fn en_passant_shifts_toward_the_side_not_to_move() {
        // Dark just played e7e5; the victim stands on e5.
        assert_eq!(
            resolve_en_passant("e6", Color::Light).expect("e6 should resolve"),
            Some(algebraic_to_square("e5").expect("e5 should parse"))
        );
        // Light just played c2c4; the victim stands on c4.
        assert_eq!(
            resolve_en_passant("c3", Color::Dark).expect("c3 should resolve"),
            Some(algebraic_to_square("c4").expect("c4 should parse"))
        );
    }

    #[test]
    fn dash_means_no_victim() {
        assert_eq!(resolve_en_passant("-", Color::Light).expect("dash is valid"), None);
        assert_eq!(resolve_en_passant("-", Color::Dark).expect("dash is valid"), None);
    }

    #[test]
    fn shift_off_the_board_is_an_invalid_square() {
        assert!(matches!(
            resolve_en_passant("a1", Color::Light),
            Err(ChessErrors::InvalidSquare(_))
        ));
        assert!(matches!(
            resolve_en_passant("h8", Color::Dark),
            Err(ChessErrors::InvalidSquare(_))
        ));
        assert!(matches!(
            resolve_en_passant("e", Color::Dark),
            Err(ChessErrors::InvalidSquare(_))
        ));
    }
}
