//! Canonical chess-rule constants.
//!
//! Starting position plus the home corners used to fold castling rights into
//! rook codes.

use crate::game_state::chess_types::{CastleSide, Color, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Most non-king pieces a packed position can hold (120 bits / 4 bits per code).
pub const MAX_PACKED_PIECES: usize = 30;

/// Rook home corners and the castling right each one carries.
pub const ROOK_HOME_CORNERS: [(Square, Color, CastleSide); 4] = [
    (0, Color::Dark, CastleSide::Queen),
    (7, Color::Dark, CastleSide::King),
    (56, Color::Light, CastleSide::Queen),
    (63, Color::Light, CastleSide::King),
];

/// Colour and wing whose castling right is tied to the rook on `square`.
///
/// Purely positional: says nothing about whether that rook ever moved.
#[inline]
pub fn home_corner_right(square: Square) -> Option<(Color, CastleSide)> {
    ROOK_HOME_CORNERS
        .iter()
        .find(|(corner, _, _)| *corner == square)
        .map(|&(_, color, side)| (color, side))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_corners_map_to_expected_rights() {
        assert_eq!(home_corner_right(0), Some((Color::Dark, CastleSide::Queen)));
        assert_eq!(home_corner_right(7), Some((Color::Dark, CastleSide::King)));
        assert_eq!(home_corner_right(56), Some((Color::Light, CastleSide::Queen)));
        assert_eq!(home_corner_right(63), Some((Color::Light, CastleSide::King)));
        assert_eq!(home_corner_right(6), None);
        assert_eq!(home_corner_right(55), None);
    }
}
