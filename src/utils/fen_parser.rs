//! FEN tokenizer and FEN-to-Board parser.
//!
//! `tokenize_fen` splits a FEN into its six fields and validates the active
//! colour and move counters. `for_each_placed_piece` walks the piece-placement
//! field in scan order and is shared by the board parser and the encoder.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::optional_algebraic_to_square;

/// The six whitespace-separated FEN fields, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenFields<'a> {
    pub placement: &'a str,
    pub side_to_move: Color,
    pub castling: &'a str,
    pub en_passant: &'a str,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

pub fn tokenize_fen(fen: &str) -> Result<FenFields<'_>, ChessErrors> {
    let parts: Vec<&str> = fen.split_whitespace().collect();

    if parts.len() < 6 {
        return Err(ChessErrors::MalformedFen(format!(
            "expected 6 fields, found {} in '{fen}'",
            parts.len()
        )));
    }
    if parts.len() > 6 {
        return Err(ChessErrors::MalformedFen(format!(
            "FEN has extra trailing fields: '{fen}'"
        )));
    }

    Ok(FenFields {
        placement: parts[0],
        side_to_move: parse_side_to_move(parts[1])?,
        castling: parts[2],
        en_passant: parts[3],
        halfmove_clock: parse_counter(parts[4])?,
        fullmove_number: parse_counter(parts[5])?,
    })
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessErrors> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessErrors::MalformedFen(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

fn parse_counter(counter_part: &str) -> Result<u32, ChessErrors> {
    // `u32::from_str` accepts a leading '+', FEN does not.
    if !counter_part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ChessErrors::InvalidCounter(counter_part.to_owned()));
    }

    counter_part
        .parse::<u32>()
        .map_err(|_| ChessErrors::InvalidCounter(counter_part.to_owned()))
}

/// Walk the piece-placement field top rank first, calling `visit` with the
/// linear index and letter of every piece (kings included).
///
/// `/` separates ranks and does not advance the index; a digit advances it by
/// its value. The layout must cover exactly eight ranks of eight files.
pub fn for_each_placed_piece<F>(placement: &str, mut visit: F) -> Result<(), ChessErrors>
where
    F: FnMut(Square, char) -> Result<(), ChessErrors>,
{
    let mut square: Square = 0;
    let mut rank: u8 = 1;
    let mut file: u8 = 0;

    for ch in placement.chars() {
        if ch == '/' {
            if file != NUM_FILES {
                return Err(ChessErrors::MalformedFen(format!(
                    "rank {rank} of '{placement}' does not cover 8 files"
                )));
            }
            if rank == NUM_RANKS {
                return Err(ChessErrors::MalformedFen(format!(
                    "'{placement}' has more than 8 ranks"
                )));
            }
            rank += 1;
            file = 0;
            continue;
        }

        if let Some(run) = ch.to_digit(10) {
            if !(1..=8).contains(&run) {
                return Err(ChessErrors::MalformedFen(format!(
                    "invalid empty-square count '{ch}' in '{placement}'"
                )));
            }
            file += run as u8;
            square += run as u8;
        } else {
            if PieceKind::from_fen_char(ch).is_none() {
                return Err(ChessErrors::MalformedFen(format!(
                    "invalid piece character '{ch}' in '{placement}'"
                )));
            }
            if file >= NUM_FILES {
                return Err(ChessErrors::MalformedFen(format!(
                    "rank {rank} of '{placement}' has too many files"
                )));
            }
            visit(square, ch)?;
            file += 1;
            square += 1;
        }

        if file > NUM_FILES {
            return Err(ChessErrors::MalformedFen(format!(
                "rank {rank} of '{placement}' has too many files"
            )));
        }
    }

    if rank != NUM_RANKS || file != NUM_FILES {
        return Err(ChessErrors::MalformedFen(format!(
            "'{placement}' does not cover 8 full ranks"
        )));
    }

    Ok(())
}

/// Parse every FEN field into a `Board`.
pub fn parse_board(fen: &str) -> Result<Board, ChessErrors> {
    let fields = tokenize_fen(fen)?;

    let mut squares = [[None; NUM_FILES as usize]; NUM_RANKS as usize];
    for_each_placed_piece(fields.placement, |square, ch| {
        squares[(square / NUM_FILES) as usize][(square % NUM_FILES) as usize] = Some(ch);
        Ok(())
    })?;

    Ok(Board {
        squares,
        side_to_move: fields.side_to_move,
        castling_rights: fields.castling.to_owned(),
        en_passant: optional_algebraic_to_square(fields.en_passant)?,
        halfmove_clock: fields.halfmove_clock,
        fullmove_number: fields.fullmove_number,
    })
}
