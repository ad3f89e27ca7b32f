use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(board: &Board) -> Result<String, ChessErrors> {
    let placement = generate_placement_field(board);
    let en_passant = generate_en_passant_field(board.en_passant)?;

    Ok(format!(
        "{} {} {} {} {} {}",
        placement,
        board.side_to_move.fen_char(),
        board.castling_rights,
        en_passant,
        board.halfmove_clock,
        board.fullmove_number
    ))
}

pub fn generate_placement_field(board: &Board) -> String {
    let mut out = String::new();

    for (rank_idx, rank) in board.squares.iter().enumerate() {
        let mut empty_count = 0u8;

        for square in rank {
            match square {
                Some(ch) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(*ch);
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank_idx + 1 < NUM_RANKS as usize {
            out.push('/');
        }
    }

    out
}

fn generate_en_passant_field(square: Option<Square>) -> Result<String, ChessErrors> {
    let Some(square) = square else {
        return Ok("-".to_owned());
    };

    square_to_algebraic(square)
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::Color;
    use crate::utils::fen_parser::parse_board;

    #[test]
    fn round_trip_starting_position_fen() {
        let parsed = parse_board(STARTING_POSITION_FEN).expect("starting FEN should parse");
        let generated = generate_fen(&parsed).expect("parsed board should generate");

        assert_eq!(generated, STARTING_POSITION_FEN);

        let reparsed = parse_board(&generated).expect("generated FEN should parse");
        assert_eq!(reparsed, parsed);
    }

    #[test]
    fn round_trip_custom_position_fen() {
        let fen = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 4 6";
        let parsed = parse_board(fen).expect("custom FEN should parse");
        let generated = generate_fen(&parsed).expect("parsed board should generate");

        assert_eq!(generated, fen);
        assert_eq!(parsed.side_to_move, Color::Dark);
        assert_eq!(parsed.castling_rights, "kq");
        assert_eq!(parsed.halfmove_clock, 4);
        assert_eq!(parsed.fullmove_number, 6);
    }

    #[test]
    fn round_trip_keeps_en_passant_target() {
        let fen = "rnbqkbnr/pppp1ppp/8/8/4pP2/8/PPPPP1PP/RNBQKBNR b KQkq f3 0 3";
        let parsed = parse_board(fen).expect("FEN should parse");

        assert_eq!(
            generate_fen(&parsed).expect("parsed board should generate"),
            fen
        );
    }

    #[test]
    fn off_board_en_passant_square_is_an_error() {
        let mut board = parse_board("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        board.en_passant = Some(64);

        assert!(matches!(
            generate_fen(&board),
            Err(ChessErrors::InvalidSquare(_))
        ));
    }
}
