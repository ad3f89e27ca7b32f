//! Fixed-width wire form of an [`EncodedPosition`].
//!
//! 196 significant bits in 25 little-endian bytes:
//!
//! | bytes    | content                                                  |
//! |----------|----------------------------------------------------------|
//! | `0..15`  | 120 bits of piece codes, code `n` at bits `4n..4n + 4`    |
//! | `15..23` | occupancy bitmap, bit `i` is square `i`                  |
//! | `23..25` | king pair, white in bits `0..6`, black in bits `6..12`   |
//!
//! Unused code nibbles and the top four bits of the king pair are zero.

use crate::chess_errors::ChessErrors;
use crate::codec::decoder::validate;
use crate::codec::encoder::{EncodedPosition, KingSquares};
use crate::codec::piece_code::PieceCode;
use crate::game_state::chess_rules::MAX_PACKED_PIECES;

pub const PACKED_POSITION_BYTES: usize = 25;

const PIECE_BYTES: usize = 15;
const OCCUPANCY_END: usize = PIECE_BYTES + 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackedPosition(pub [u8; PACKED_POSITION_BYTES]);

impl PackedPosition {
    /// Rejects any triple the decoder would reject, so a bad king square is
    /// never masked into an on-board one.
    pub fn pack(encoded: &EncodedPosition) -> Result<Self, ChessErrors> {
        validate(encoded)?;

        let pieces = encoded
            .piece_types
            .iter()
            .enumerate()
            .fold(0u128, |acc, (n, code)| {
                acc | (u128::from(code.bits()) << (4 * n))
            });

        let mut bytes = [0u8; PACKED_POSITION_BYTES];
        bytes[..PIECE_BYTES].copy_from_slice(&pieces.to_le_bytes()[..PIECE_BYTES]);
        bytes[PIECE_BYTES..OCCUPANCY_END].copy_from_slice(&encoded.occupancy.to_le_bytes());
        bytes[OCCUPANCY_END..].copy_from_slice(&encoded.kings.pack().to_le_bytes());

        Ok(Self(bytes))
    }

    pub fn unpack(&self) -> Result<EncodedPosition, ChessErrors> {
        let bytes = &self.0;

        let mut piece_bytes = [0u8; 16];
        piece_bytes[..PIECE_BYTES].copy_from_slice(&bytes[..PIECE_BYTES]);
        let pieces = u128::from_le_bytes(piece_bytes);

        let mut occupancy_bytes = [0u8; 8];
        occupancy_bytes.copy_from_slice(&bytes[PIECE_BYTES..OCCUPANCY_END]);
        let occupancy = u64::from_le_bytes(occupancy_bytes);

        let kings_packed = u16::from_le_bytes([bytes[OCCUPANCY_END], bytes[OCCUPANCY_END + 1]]);
        if kings_packed >> 12 != 0 {
            return Err(ChessErrors::MalformedFen(format!(
                "king pair {kings_packed:#06x} uses more than 12 bits"
            )));
        }

        let count = occupancy.count_ones() as usize;
        if count > MAX_PACKED_PIECES {
            return Err(ChessErrors::MalformedFen(format!(
                "occupancy marks {count} squares, more than {MAX_PACKED_PIECES}"
            )));
        }
        if pieces >> (4 * count) != 0 {
            return Err(ChessErrors::MalformedFen(
                "piece codes present beyond the occupied squares".to_owned(),
            ));
        }

        let piece_types = (0..count)
            .map(|n| PieceCode::from_nibble((pieces >> (4 * n)) as u8))
            .collect();

        Ok(EncodedPosition {
            piece_types,
            occupancy,
            kings: KingSquares::unpack(kings_packed),
        })
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Lowercase hex, two characters per byte.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|byte| format!("{byte:02x}")).collect()
    }

    pub fn from_hex(hex: &str) -> Result<Self, ChessErrors> {
        let hex = hex.trim();
        if hex.len() != PACKED_POSITION_BYTES * 2 || !hex.is_ascii() {
            return Err(ChessErrors::MalformedFen(format!(
                "packed position must be {} hex characters, got '{hex}'",
                PACKED_POSITION_BYTES * 2
            )));
        }

        let mut bytes = [0u8; PACKED_POSITION_BYTES];
        for (idx, byte) in bytes.iter_mut().enumerate() {
            let pair = &hex[idx * 2..idx * 2 + 2];
            *byte = u8::from_str_radix(pair, 16).map_err(|_| {
                ChessErrors::MalformedFen(format!("invalid hex byte '{pair}' in packed position"))
            })?;
        }

        Ok(Self(bytes))
    }
}

impl From<[u8; PACKED_POSITION_BYTES]> for PackedPosition {
    fn from(bytes: [u8; PACKED_POSITION_BYTES]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for PackedPosition {
    type Error = ChessErrors;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; PACKED_POSITION_BYTES] = bytes.try_into().map_err(|_| {
            ChessErrors::MalformedFen(format!(
                "packed position must be {PACKED_POSITION_BYTES} bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(Self(bytes))
    }
}
