use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use plum_fen_pack::{decode_position, encode_fen, PackedPosition};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    },
    BenchCase {
        name: "kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    },
    BenchCase {
        name: "en_passant",
        fen: "rnbqkbnr/ppp1pppp/8/4P3/2Pp4/P7/1P3PPP/RNBQKBNR b KQkq c3 0 4",
    },
    BenchCase {
        name: "endgame",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    },
];

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("fen_codec");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));
    group.throughput(Throughput::Elements(1));

    for case in CASES {
        let encoded = encode_fen(case.fen).expect("benchmark FEN should encode");
        let packed = PackedPosition::pack(&encoded).expect("benchmark position should pack");

        // Correctness guard before benchmarking.
        let placement = case.fen.split_whitespace().next().expect("placement field");
        let decoded = decode_position(&encoded).expect("benchmark position should decode");
        assert_eq!(decoded.placement, placement, "round trip mismatch for {}", case.name);

        group.bench_with_input(BenchmarkId::new("encode", case.name), case.fen, |b, fen| {
            b.iter(|| encode_fen(black_box(fen)).expect("encode should succeed"));
        });

        group.bench_with_input(BenchmarkId::new("decode", case.name), &encoded, |b, encoded| {
            b.iter(|| decode_position(black_box(encoded)).expect("decode should succeed"));
        });

        group.bench_with_input(BenchmarkId::new("unpack", case.name), &packed, |b, packed| {
            b.iter(|| black_box(packed).unpack().expect("unpack should succeed"));
        });
    }

    group.finish();
}

criterion_group!(codec_benches, bench_codec);
criterion_main!(codec_benches);
