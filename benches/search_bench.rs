use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use reversi::eval::evaluate;
use reversi::rules::{apply_move, legal_moves};
use reversi::search::Searcher;
use reversi::{Board, Pos, Side};

/// A midgame position reached by a fixed opening line
fn midgame() -> Board {
    let line = [
        (2, 3, Side::Black),
        (2, 2, Side::White),
        (2, 1, Side::Black),
        (1, 1, Side::White),
        (4, 5, Side::Black),
        (5, 5, Side::White),
        (3, 2, Side::Black),
        (2, 4, Side::White),
    ];
    let mut board = Board::new();
    for (r, c, side) in line {
        apply_move(&mut board, Pos::new(r, c), side).expect("opening line is legal");
    }
    board
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");
    for (name, board) in [("initial", Board::new()), ("midgame", midgame())] {
        group.bench_with_input(BenchmarkId::new("black", name), &board, |b, board| {
            b.iter(|| black_box(legal_moves(black_box(board), Side::Black)))
        });
    }
    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let board = midgame();
    c.bench_function("evaluate_midgame", |b| {
        b.iter(|| black_box(evaluate(black_box(&board), Side::Black)))
    });
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");
    let board = midgame();
    for depth in [2u8, 4] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut searcher = Searcher::new(Side::Black);
                black_box(searcher.search(black_box(&board), depth))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_legal_moves, bench_evaluate, bench_search);
criterion_main!(benches);
