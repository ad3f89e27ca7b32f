use anyhow::{bail, Context};
use structopt::StructOpt;

use plum_fen_pack::codec::state_resolver::resolve_state;
use plum_fen_pack::game_state::chess_types::Square;
use plum_fen_pack::utils::algebraic::square_to_algebraic;
use plum_fen_pack::utils::fen_parser::tokenize_fen;
use plum_fen_pack::{decode_position, encode_fen, EncodedPosition, PackedPosition};

#[derive(StructOpt)]
#[structopt(name = "plum_fen_pack", about = "Pack FEN positions into 196-bit blobs and back.")]
pub enum Options {
    /// Encode a FEN and print the packed structures.
    Encode(FenOptions),
    /// Decode a packed hex blob into placement and castling fields.
    Decode(DecodeOptions),
    /// Encode, pack, unpack and decode, then compare with the input.
    Roundtrip(FenOptions),
}

#[derive(StructOpt)]
pub struct FenOptions {
    /// FEN string; unquoted fields are joined with spaces.
    #[structopt(required = true)]
    fen: Vec<String>,
    /// Print the tokenized FEN fields to stderr.
    #[structopt(short, long)]
    verbose: bool,
}

#[derive(StructOpt)]
pub struct DecodeOptions {
    /// 50 hex characters as printed by `encode`.
    hex: String,
}

impl FenOptions {
    fn fen(&self) -> String {
        self.fen.join(" ")
    }

    fn encode(&self) -> anyhow::Result<(String, EncodedPosition, PackedPosition)> {
        let fen = self.fen();
        if self.verbose {
            print_fields(&fen)?;
        }

        let encoded = encode_fen(&fen).with_context(|| format!("Failed to encode '{fen}'."))?;
        let packed = PackedPosition::pack(&encoded).with_context(|| "Failed to pack position.")?;
        Ok((fen, encoded, packed))
    }

    fn run_encode(&self) -> anyhow::Result<()> {
        let (_, encoded, packed) = self.encode()?;

        let tokens: Vec<&str> = encoded.piece_types.iter().map(|code| code.token()).collect();
        println!("pieces     {}", tokens.join(" "));
        println!("occupancy  {:#018x}", encoded.occupancy);
        println!(
            "kings      K={} k={}",
            square_name(encoded.kings.light)?,
            square_name(encoded.kings.dark)?
        );
        println!("packed     {}", packed.to_hex());
        Ok(())
    }

    fn run_roundtrip(&self) -> anyhow::Result<()> {
        let (fen, _, packed) = self.encode()?;

        let unpacked = packed.unpack().with_context(|| "Failed to unpack position.")?;
        let decoded = decode_position(&unpacked).with_context(|| "Failed to decode position.")?;

        let placement = fen.split_whitespace().next().unwrap_or_default();
        println!("placement  {}", decoded.placement);
        println!("castling   {}", decoded.castling);

        if decoded.placement != placement {
            bail!("Placement mismatch: expected '{placement}', got '{}'.", decoded.placement);
        }
        println!("round trip ok");
        Ok(())
    }
}

impl DecodeOptions {
    fn run(&self) -> anyhow::Result<()> {
        let packed = PackedPosition::from_hex(&self.hex).with_context(|| "Provide a valid hex blob!")?;
        let encoded = packed.unpack().with_context(|| "Failed to unpack position.")?;
        let decoded = decode_position(&encoded).with_context(|| "Failed to decode position.")?;

        println!("placement  {}", decoded.placement);
        println!("castling   {}", decoded.castling);
        Ok(())
    }
}

fn print_fields(fen: &str) -> anyhow::Result<()> {
    let fields = tokenize_fen(fen).with_context(|| format!("Failed to tokenize '{fen}'."))?;
    let state = resolve_state(&fields).with_context(|| "Failed to resolve castling/en-passant.")?;

    eprintln!("Active Color: {}", fields.side_to_move.fen_char());
    eprintln!("Castling Rights: {}", state.castling.to_fen_field());
    match state.en_passant_victim {
        Some(square) => eprintln!("En Passant: {} (pawn on {})", fields.en_passant, square_name(square)?),
        None => eprintln!("En Passant: -"),
    }
    eprintln!("Halfmove Clock: {}", fields.halfmove_clock);
    eprintln!("Fullmove Number: {}", fields.fullmove_number);
    Ok(())
}

fn square_name(square: Square) -> anyhow::Result<String> {
    Ok(square_to_algebraic(square)?)
}

fn main() -> anyhow::Result<()> {
    match Options::from_args() {
        Options::Encode(options) => options.run_encode(),
        Options::Decode(options) => options.run(),
        Options::Roundtrip(options) => options.run_roundtrip(),
    }
}
