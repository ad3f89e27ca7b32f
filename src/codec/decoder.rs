//! Packed-structure to FEN decoder.
//!
//! Rebuilds the piece-placement field and the castling field. Side to move,
//! the en-passant field and the move counters are not recoverable from the
//! packed form and must travel separately.

use crate::chess_errors::ChessErrors;
use crate::codec::encoder::EncodedPosition;
use crate::codec::piece_code::PieceCode;
use crate::codec::state_resolver::CastlingRights;
use crate::game_state::chess_rules::{home_corner_right, MAX_PACKED_PIECES};
use crate::game_state::chess_types::{PieceKind, Square, NUM_FILES, NUM_SQUARES};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPosition {
    pub placement: String,
    pub castling: String,
}

pub fn decode_position(encoded: &EncodedPosition) -> Result<DecodedPosition, ChessErrors> {
    validate(encoded)?;

    let mut placement = String::with_capacity(72);
    let mut castling = CastlingRights::default();
    let mut codes = encoded.piece_types.iter().copied();
    let mut empty_count = 0u8;

    for square in 0..NUM_SQUARES {
        if square > 0 && square % NUM_FILES == 0 {
            flush_gap(&mut placement, &mut empty_count);
            placement.push('/');
        }

        if square == encoded.kings.light {
            flush_gap(&mut placement, &mut empty_count);
            placement.push('K');
        } else if square == encoded.kings.dark {
            flush_gap(&mut placement, &mut empty_count);
            placement.push('k');
        } else if encoded.occupancy & (1u64 << square) != 0 {
            flush_gap(&mut placement, &mut empty_count);
            let code = codes.next().ok_or_else(|| {
                ChessErrors::MalformedFen("piece sequence shorter than occupancy".to_owned())
            })?;
            if code.is_rook_with_castling() {
                record_castling_right(square, code, &mut castling)?;
            }
            placement.push(code.letter());
        } else {
            empty_count += 1;
        }
    }
    flush_gap(&mut placement, &mut empty_count);

    Ok(DecodedPosition {
        placement,
        castling: castling.to_fen_field(),
    })
}

fn flush_gap(placement: &mut String, empty_count: &mut u8) {
    if *empty_count > 0 {
        placement.push(char::from(b'0' + *empty_count));
        *empty_count = 0;
    }
}

fn record_castling_right(
    square: Square,
    code: PieceCode,
    castling: &mut CastlingRights,
) -> Result<(), ChessErrors> {
    match home_corner_right(square) {
        Some((color, side)) if color == code.color() => {
            castling.grant(color, side);
            Ok(())
        }
        _ => Err(ChessErrors::MalformedFen(format!(
            "castling rook code {} on square {square}, which is not its home corner",
            code.token()
        ))),
    }
}

/// Reject triples the encoder could never have produced.
pub(crate) fn validate(encoded: &EncodedPosition) -> Result<(), ChessErrors> {
    let kings = encoded.kings;

    if kings.light >= NUM_SQUARES || kings.dark >= NUM_SQUARES {
        return Err(ChessErrors::MalformedFen(format!(
            "king square out of range: {kings:?}"
        )));
    }
    if kings.light == kings.dark {
        return Err(ChessErrors::MalformedFen(format!(
            "both kings on square {}",
            kings.light
        )));
    }

    let king_mask = (1u64 << kings.light) | (1u64 << kings.dark);
    if encoded.occupancy & king_mask != 0 {
        return Err(ChessErrors::MalformedFen(
            "king square is also flagged in occupancy".to_owned(),
        ));
    }

    let occupied = encoded.occupancy.count_ones() as usize;
    if occupied != encoded.piece_types.len() {
        return Err(ChessErrors::MalformedFen(format!(
            "occupancy has {occupied} squares but the piece sequence has {} codes",
            encoded.piece_types.len()
        )));
    }
    if occupied > MAX_PACKED_PIECES {
        return Err(ChessErrors::MalformedFen(format!(
            "{occupied} non-king pieces exceed the packed limit of {MAX_PACKED_PIECES}"
        )));
    }

    if let Some(king) = encoded
        .piece_types
        .iter()
        .find(|code| code.kind() == PieceKind::King)
    {
        return Err(ChessErrors::MalformedFen(format!(
            "king code {} inside the piece sequence",
            king.token()
        )));
    }

    Ok(())
}
