//! Square conversions for algebraic coordinates.
//!
//! Linear indices follow FEN scan order: rank 8 first, files `a..h` left to
//! right, so `a8 == 0` and `h1 == 63`.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Square, NUM_FILES, NUM_SQUARES};

/// Convert an algebraic square (for example: "e4") to a linear index.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidSquare(square.to_owned()));
    }

    let file_offset = file - b'a';
    let rank_number = rank - b'0';
    Ok((8 - rank_number) * NUM_FILES + file_offset)
}

/// Like [`algebraic_to_square`], but the FEN placeholder `-` means no square.
#[inline]
pub fn optional_algebraic_to_square(square: &str) -> Result<Option<Square>, ChessErrors> {
    if square == "-" {
        return Ok(None);
    }

    algebraic_to_square(square).map(Some)
}

/// Convert a linear index (`0..=63`) to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, ChessErrors> {
    if square >= NUM_SQUARES {
        return Err(ChessErrors::InvalidSquare(square.to_string()));
    }

    let file_char = char::from(b'a' + square % NUM_FILES);
    let rank_char = char::from(b'8' - square / NUM_FILES);

    Ok(format!("{file_char}{rank_char}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_squares_use_top_rank_first_indexing() {
        assert_eq!(algebraic_to_square("a8").expect("a8 should parse"), 0);
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), 7);
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), 56);
        assert_eq!(algebraic_to_square("h1").expect("h1 should parse"), 63);
        assert_eq!(algebraic_to_square("e3").expect("e3 should parse"), 44);
    }

    #[test]
    fn square_round_trip_covers_whole_board() {
        for square in 0..NUM_SQUARES {
            let name = square_to_algebraic(square).expect("on-board square should convert");
            assert_eq!(algebraic_to_square(&name).expect("name should parse"), square);
        }
        assert!(square_to_algebraic(64).is_err());
    }

    #[test]
    fn dash_means_no_square() {
        assert_eq!(optional_algebraic_to_square("-").expect("dash is valid"), None);
        assert_eq!(
            optional_algebraic_to_square("c6").expect("c6 should parse"),
            Some(18)
        );
    }

    #[test]
    fn rejects_off_board_and_malformed_squares() {
        for bad in ["", "e", "e9", "i4", "e0", "E4", "e44", "--"] {
            assert!(
                matches!(algebraic_to_square(bad), Err(ChessErrors::InvalidSquare(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
