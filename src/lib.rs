//! Crate root module declarations for the Plum FEN packer.
//!
//! Converts FEN positions into a fixed-width packed form (piece codes,
//! occupancy bitmap, king squares) with castling and en-passant state folded
//! into the piece codes, and decodes that form back into FEN fields.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
}

pub mod codec {
    pub mod decoder;
    pub mod encoder;
    pub mod packed_position;
    pub mod piece_code;
    pub mod state_resolver;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
}

pub use chess_errors::ChessErrors;
pub use codec::decoder::{decode_position, DecodedPosition};
pub use codec::encoder::{encode_fen, EncodedPosition, KingSquares};
pub use codec::packed_position::PackedPosition;
pub use codec::piece_code::PieceCode;
