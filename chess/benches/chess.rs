use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridchess::{attack, movegen, Board, Color, Coord, Make};

use std::str::FromStr;

const BOARDS: [(&str, &str, Color); 9] = [
    (
        "initial",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        Color::White,
    ),
    (
        "sicilian",
        "r1b1k2r/2qnbppp/p2ppn2/1p4B1/3NPPP1/2N2Q2/PPP4P/2KR1B1R",
        Color::White,
    ),
    (
        "middle",
        "1rq1r1k1/1p3ppp/pB3n2/3ppP2/Pbb1P3/1PN2B2/2P2QPP/R1R4K",
        Color::White,
    ),
    (
        "kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
        Color::White,
    ),
    ("queen", "6K1/8/8/1k3q2/3Q4/8/8/8", Color::White),
    ("pawn_move", "4k3/pppppppp/8/8/8/8/PPPPPPPP/4K3", Color::White),
    ("pawn_attack", "4k3/8/8/pppppppp/PPPPPPPP/8/8/4K3", Color::White),
    ("pawn_promote", "8/PPPPPPPP/8/2k1K3/8/8/pppppppp/8", Color::White),
    (
        "cydonia",
        "5K2/1N1N1N2/8/1N1N1N2/1n1n1n2/8/1n1n1n2/5k2",
        Color::White,
    ),
];

fn boards() -> impl Iterator<Item = (&'static str, Board, Color)> {
    BOARDS
        .iter()
        .map(|&(name, diagram, side)| (name, Board::from_str(diagram).unwrap(), side))
}

fn bench_gen_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("gen_moves");
    for (name, board, side) in boards() {
        group.bench_function(name, |b| {
            b.iter(|| black_box(movegen::gen_all(&board, side).len()))
        });
    }
}

fn bench_make_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("make_move");
    for (name, mut board, side) in boards() {
        let moves = movegen::gen_all(&board, side);
        group.bench_function(name, |b| {
            b.iter(|| {
                for mv in &moves {
                    let u = board.apply(*mv);
                    board.unapply(*mv, u);
                }
            })
        });
    }
}

fn bench_make_move_checked(c: &mut Criterion) {
    let mut group = c.benchmark_group("make_move_checked");
    for (name, board, side) in boards() {
        let moves = movegen::gen_all(&board, side);
        group.bench_function(name, |b| {
            b.iter(|| {
                for mv in &moves {
                    black_box(mv.make(&board).is_ok());
                }
            })
        });
    }
}

fn bench_is_attacked(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_attacked");
    for (name, board, _) in boards() {
        group.bench_function(name, |b| {
            b.iter(|| {
                for color in [Color::White, Color::Black] {
                    for coord in Coord::iter() {
                        black_box(attack::is_cell_attacked(&board, coord, color));
                    }
                }
            })
        });
    }
}

fn bench_in_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("in_check");
    for (name, board, side) in boards() {
        group.bench_function(name, |b| b.iter(|| black_box(board.in_check(side))));
    }
}

fn bench_has_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("has_legal_moves");
    for (name, board, side) in boards() {
        group.bench_function(name, |b| {
            b.iter(|| black_box(board.has_valid_moves(side)))
        });
    }
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(10);
    let board = Board::initial();
    group.bench_function("initial_3", |b| {
        b.iter(|| black_box(movegen::perft(&board, Color::White, 3)))
    });
}

criterion_group!(
    chess,
    bench_gen_moves,
    bench_make_move,
    bench_make_move_checked,
    bench_is_attacked,
    bench_in_check,
    bench_has_legal_moves,
    bench_perft,
);

criterion_main!(chess);
