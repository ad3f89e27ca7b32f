//! FEN to packed-structure encoder.
//!
//! Produces three values from a FEN:
//! - `piece_types`: one [`PieceCode`] per non-king piece, in scan order,
//! - `occupancy`: bit `i` set when a non-king piece stands on index `i`,
//! - `kings`: the two king squares.
//!
//! Kings are not part of the occupancy bitmap. The i-th set bit of
//! `occupancy` (ascending) belongs to the i-th entry of `piece_types`.
//!
//! Castling rights become tagged rook codes on the four home corners and the
//! en-passant victim becomes a tagged pawn code. The corner test is purely
//! positional: a rook standing on a home corner with the matching right is
//! tagged whether or not it is the rook that right historically belonged to.

use crate::chess_errors::ChessErrors;
use crate::codec::piece_code::PieceCode;
use crate::codec::state_resolver::{resolve_state, ResolvedState};
use crate::game_state::chess_rules::{home_corner_right, MAX_PACKED_PIECES};
use crate::game_state::chess_types::{Color, PieceKind, Square, NUM_SQUARES};
use crate::utils::fen_parser::{for_each_placed_piece, tokenize_fen};

/// White and black king squares. Packs to 12 bits, white in the low six.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KingSquares {
    pub light: Square,
    pub dark: Square,
}

impl KingSquares {
    #[inline]
    pub const fn pack(self) -> u16 {
        (self.light as u16 & 0x3F) | ((self.dark as u16 & 0x3F) << 6)
    }

    /// Inverse of [`KingSquares::pack`]. Bits above the low twelve are ignored.
    #[inline]
    pub const fn unpack(packed: u16) -> Self {
        Self {
            light: (packed & 0x3F) as Square,
            dark: ((packed >> 6) & 0x3F) as Square,
        }
    }

    #[inline]
    pub const fn square_of(self, color: Color) -> Square {
        match color {
            Color::Light => self.light,
            Color::Dark => self.dark,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPosition {
    pub piece_types: Vec<PieceCode>,
    pub occupancy: u64,
    pub kings: KingSquares,
}

impl EncodedPosition {
    /// Squares of the non-king pieces, paired with their codes.
    pub fn placed_codes(&self) -> impl Iterator<Item = (Square, PieceCode)> + '_ {
        (0..NUM_SQUARES)
            .filter(move |square| self.occupancy & (1u64 << square) != 0)
            .zip(self.piece_types.iter().copied())
    }
}

pub fn encode_fen(fen: &str) -> Result<EncodedPosition, ChessErrors> {
    let fields = tokenize_fen(fen)?;
    let state = resolve_state(&fields)?;
    encode_placement(fields.placement, &state)
}

/// Encode a piece-placement field with already resolved castling and
/// en-passant state.
pub fn encode_placement(
    placement: &str,
    state: &ResolvedState,
) -> Result<EncodedPosition, ChessErrors> {
    let mut piece_types = Vec::with_capacity(MAX_PACKED_PIECES);
    let mut occupancy = 0u64;
    let mut light_king: Option<Square> = None;
    let mut dark_king: Option<Square> = None;

    for_each_placed_piece(placement, |square, ch| {
        let color = Color::of_piece_char(ch)
            .ok_or_else(|| ChessErrors::MalformedFen(format!("invalid piece character '{ch}'")))?;
        let kind = PieceKind::from_fen_char(ch)
            .ok_or_else(|| ChessErrors::MalformedFen(format!("invalid piece character '{ch}'")))?;

        if kind == PieceKind::King {
            let slot = match color {
                Color::Light => &mut light_king,
                Color::Dark => &mut dark_king,
            };
            if slot.replace(square).is_some() {
                return Err(ChessErrors::MalformedFen(format!(
                    "more than one {color:?} king in '{placement}'"
                )));
            }
            return Ok(());
        }

        if piece_types.len() == MAX_PACKED_PIECES {
            return Err(ChessErrors::MalformedFen(format!(
                "more than {MAX_PACKED_PIECES} non-king pieces in '{placement}'"
            )));
        }

        piece_types.push(piece_code_for(square, color, kind, ch, state)?);
        occupancy |= 1u64 << square;
        Ok(())
    })?;

    let light = light_king.ok_or(ChessErrors::MissingKing(Color::Light))?;
    let dark = dark_king.ok_or(ChessErrors::MissingKing(Color::Dark))?;

    Ok(EncodedPosition {
        piece_types,
        occupancy,
        kings: KingSquares { light, dark },
    })
}

fn piece_code_for(
    square: Square,
    color: Color,
    kind: PieceKind,
    ch: char,
    state: &ResolvedState,
) -> Result<PieceCode, ChessErrors> {
    if kind == PieceKind::Rook {
        if let Some((corner_color, side)) = home_corner_right(square) {
            if corner_color == color && state.castling.allows(color, side) {
                return Ok(PieceCode::rook_with_castling(color));
            }
        }
    }

    if kind == PieceKind::Pawn && state.en_passant_victim == Some(square) {
        return Ok(PieceCode::pawn_en_passant(color));
    }

    PieceCode::from_letter(ch)
        .ok_or_else(|| ChessErrors::MalformedFen(format!("invalid piece character '{ch}'")))
}
