//! Performance measurement for complete solve workflows

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tetrotile::spatial::board::Board;
use tetrotile::spatial::pieces::PieceKind;
use tetrotile::spatial::puzzle::{PieceCounts, Puzzle};
use tetrotile::SequentialSolver;

/// Measures a full backtracking solve of a mixed 4x4 puzzle
fn bench_sequential_4x4_mixed(c: &mut Criterion) {
    c.bench_function("sequential_4x4_mixed", |b| {
        b.iter(|| {
            let counts = PieceCounts {
                i: 1,
                o: 1,
                j: 1,
                l: 1,
                ..PieceCounts::default()
            };
            let Ok(puzzle) = Puzzle::new(4, 4, counts) else {
                return;
            };
            let solver = SequentialSolver::new(puzzle);
            black_box(solver.solve());
            black_box(solver.iterations());
        });
    });
}

/// Measures the dead-region pruning check on a partially filled board
fn bench_dead_region_check(c: &mut Criterion) {
    let Some(square) = PieceKind::O.orientations().first() else {
        return;
    };
    let mut board = Board::new(8, 8);
    board.place(square, 0, 0, 1);
    board.place(square, 2, 4, 2);
    board.place(square, 6, 2, 3);

    c.bench_function("dead_region_check_8x8", |b| {
        b.iter(|| black_box(board.has_dead_region()));
    });
}

criterion_group!(benches, bench_sequential_4x4_mixed, bench_dead_region_check);
criterion_main!(benches);
