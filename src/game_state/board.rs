//! Full six-field position as parsed from FEN.
//!
//! `Board` keeps every FEN field so it can be written back exactly. It is the
//! verification companion of the packed codec, which only carries piece
//! placement and castling rights.

use crate::chess_errors::ChessErrors;
use crate::codec::encoder::{encode_fen, EncodedPosition};
use crate::game_state::chess_types::{Color, Square, NUM_FILES, NUM_RANKS};
use crate::utils::fen_generator::{generate_fen, generate_placement_field};
use crate::utils::fen_parser::parse_board;

/// Parsed position. Row 0 of `squares` is rank 8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub squares: [[Option<char>; NUM_FILES as usize]; NUM_RANKS as usize],
    pub side_to_move: Color,
    pub castling_rights: String,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl Board {
    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_board(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> Result<String, ChessErrors> {
        generate_fen(self)
    }

    /// Piece-placement field only.
    #[inline]
    pub fn placement(&self) -> String {
        generate_placement_field(self)
    }

    /// Piece letter on a linear square, if any.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<char> {
        self.squares
            .get((square / NUM_FILES) as usize)
            .and_then(|rank| rank[(square % NUM_FILES) as usize])
    }

    pub fn encode(&self) -> Result<EncodedPosition, ChessErrors> {
        encode_fen(&self.get_fen()?)
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;

    #[test]
    fn piece_at_uses_scan_order_indices() {
        let board = Board::from_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(board.piece_at(0), Some('r'));
        assert_eq!(board.piece_at(4), Some('k'));
        assert_eq!(board.piece_at(60), Some('K'));
        assert_eq!(board.piece_at(63), Some('R'));
        assert_eq!(board.piece_at(32), None);
        assert_eq!(board.piece_at(64), None);
    }

    #[test]
    fn encode_matches_direct_fen_encoding() {
        let fen = "r3k2r/pppq1ppp/2n5/3pP3/8/8/PPP2PPP/R3K2R w Kq d6 0 12";
        let board = Board::from_fen(fen).expect("FEN should parse");

        let from_board = board.encode().expect("board should encode");
        let from_fen = crate::codec::encoder::encode_fen(fen).expect("FEN should encode");
        assert_eq!(from_board, from_fen);
    }

    #[test]
    fn encode_reports_off_board_en_passant_square() {
        let mut board = Board::from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 1").expect("FEN should parse");
        board.en_passant = Some(200);

        assert!(matches!(
            board.encode(),
            Err(crate::chess_errors::ChessErrors::InvalidSquare(_))
        ));
    }
}
