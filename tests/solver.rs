//! End-to-end solve scenarios for both engines
//!
//! Covers the area fast path, known solvable and unsolvable boards,
//! verdict agreement between the engines, tiling validity, idempotence,
//! and mid-flight cancellation.

use std::collections::HashMap;
use std::thread;
use std::time::Duration;
use tetrotile::algorithm::{ParallelSolver, SearchConfig, SequentialSolver, Solver};
use tetrotile::spatial::puzzle::{PieceCounts, Puzzle};

fn puzzle(height: usize, width: usize, counts: PieceCounts) -> Puzzle {
    let Ok(puzzle) = Puzzle::new(height, width, counts) else {
        unreachable!("test puzzle must validate")
    };
    puzzle
}

fn parallel(height: usize, width: usize, counts: PieceCounts, threads: usize) -> ParallelSolver {
    ParallelSolver::with_config(
        puzzle(height, width, counts),
        SearchConfig {
            threads: Some(threads),
            shuffle_seed: Some(20_240_817),
        },
    )
}

// Checks every invariant a finished tiling must satisfy: all cells
// covered by ids in range, four 4-connected cells per id, and each id's
// cells congruent to an orientation of its assigned kind.
fn assert_valid_tiling(solver: &dyn Solver) {
    let Some(board) = solver.board() else {
        unreachable!("a solvable search must retain its board")
    };
    let pieces = solver.pieces();
    let count = pieces.len() as i32;

    let mut cells_by_id: HashMap<i32, Vec<[usize; 2]>> = HashMap::new();
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            let Some(id) = board.get(row, col) else {
                unreachable!("in-bounds read")
            };
            assert!(
                id >= 1 && id <= count,
                "cell ({row}, {col}) holds {id}, outside 1..={count}"
            );
            cells_by_id.entry(id).or_default().push([row, col]);
        }
    }
    assert_eq!(cells_by_id.len(), pieces.len(), "missing piece ids");

    for (id, mut cells) in cells_by_id {
        assert_eq!(cells.len(), 4, "piece {id} does not cover 4 cells");
        cells.sort_unstable();

        let min_row = cells.iter().map(|c| c[0]).min().unwrap_or(0);
        let min_col = cells.iter().map(|c| c[1]).min().unwrap_or(0);
        let normalized: Vec<[usize; 2]> = cells
            .iter()
            .map(|c| [c[0] - min_row, c[1] - min_col])
            .collect();

        let Some(&kind) = pieces.get(id as usize - 1) else {
            unreachable!("id validated above")
        };
        let congruent = kind.orientations().iter().any(|orientation| {
            let mut offsets = orientation.cells.to_vec();
            offsets.sort_unstable();
            offsets == normalized
        });
        assert!(
            congruent,
            "piece {id} ({kind:?}) covers {normalized:?}, no such orientation"
        );
    }
}

#[test]
fn test_four_squares_tile_a_4x4_board() {
    let counts = PieceCounts {
        o: 4,
        ..PieceCounts::default()
    };
    let solver = SequentialSolver::new(puzzle(4, 4, counts));
    assert!(solver.solve());
    assert!(solver.iterations() > 0);
    assert_valid_tiling(&solver);
}

#[test]
fn test_area_mismatch_is_immediate() {
    let counts = PieceCounts {
        i: 1,
        ..PieceCounts::default()
    };
    let solver = SequentialSolver::new(puzzle(2, 3, counts));
    assert!(!solver.solve());
    assert_eq!(solver.iterations(), 0);
}

#[test]
fn test_odd_area_board_is_immediate_for_any_counts() {
    let counts = PieceCounts {
        t: 2,
        ..PieceCounts::default()
    };
    let solver = SequentialSolver::new(puzzle(3, 3, counts));
    assert!(!solver.solve());
    assert_eq!(solver.iterations(), 0);
}

#[test]
fn test_two_bars_tile_a_4x2_board() {
    let counts = PieceCounts {
        i: 2,
        ..PieceCounts::default()
    };
    let solver = SequentialSolver::new(puzzle(4, 2, counts));
    assert!(solver.solve());
    assert_valid_tiling(&solver);
}

#[test]
fn test_t_parity_board_exhausts_without_a_tiling() {
    // One T among S, Z, O covers an odd checkerboard imbalance: the area
    // matches but no tiling exists, so the verdict needs a real search
    let counts = PieceCounts {
        o: 1,
        t: 1,
        s: 1,
        z: 1,
        ..PieceCounts::default()
    };
    let solver = SequentialSolver::new(puzzle(4, 4, counts));
    assert!(!solver.solve());
    assert!(solver.iterations() > 0);
    assert!(solver.solved());
    assert!(!solver.is_canceled());
}

#[test]
fn test_parallel_solves_a_4x4_of_squares() {
    let counts = PieceCounts {
        o: 4,
        ..PieceCounts::default()
    };
    let solver = parallel(4, 4, counts, 4);
    assert!(solver.solve());
    assert!(solver.iterations() > 0);
    assert_valid_tiling(&solver);
}

#[test]
fn test_parallel_proves_exhaustion() {
    let counts = PieceCounts {
        o: 1,
        t: 1,
        s: 1,
        z: 1,
        ..PieceCounts::default()
    };
    let solver = parallel(4, 4, counts, 4);
    assert!(!solver.solve());
    assert!(solver.iterations() > 0);
    assert!(solver.solved());
    assert!(!solver.is_canceled());
}

#[test]
fn test_engines_agree_on_solvability() {
    let cases = [
        (
            4,
            4,
            PieceCounts {
                o: 4,
                ..PieceCounts::default()
            },
        ),
        (
            4,
            4,
            PieceCounts {
                o: 1,
                t: 1,
                s: 1,
                z: 1,
                ..PieceCounts::default()
            },
        ),
        (
            2,
            4,
            PieceCounts {
                o: 2,
                ..PieceCounts::default()
            },
        ),
        (
            2,
            4,
            PieceCounts {
                s: 1,
                z: 1,
                ..PieceCounts::default()
            },
        ),
        (
            4,
            4,
            PieceCounts {
                i: 2,
                o: 2,
                ..PieceCounts::default()
            },
        ),
    ];

    for (height, width, counts) in cases {
        let sequential = SequentialSolver::new(puzzle(height, width, counts));
        let concurrent = parallel(height, width, counts, 2);
        assert_eq!(
            sequential.solve(),
            concurrent.solve(),
            "engines disagree on {height}x{width} {counts:?}"
        );
        if concurrent.solvable() {
            assert_valid_tiling(&concurrent);
        }
    }
}

#[test]
fn test_parallel_solve_is_idempotent() {
    let counts = PieceCounts {
        o: 2,
        ..PieceCounts::default()
    };
    let solver = parallel(2, 4, counts, 2);
    let first = solver.solve();
    let spent = solver.iterations();
    assert_eq!(solver.solve(), first);
    assert_eq!(solver.iterations(), spent);
}

// 16x16 with 63 L pieces and one T: the area matches but the single T
// breaks checkerboard parity, so the search would run a very long time;
// plenty of window to abort mid-flight.
fn abort_case() -> PieceCounts {
    PieceCounts {
        l: 63,
        t: 1,
        ..PieceCounts::default()
    }
}

#[test]
fn test_abort_stops_a_sequential_solve() {
    let solver = SequentialSolver::new(puzzle(16, 16, abort_case()));
    let verdict = thread::scope(|scope| {
        let handle = scope.spawn(|| solver.solve());
        thread::sleep(Duration::from_millis(100));
        // Concurrent reads must stay safe while the search runs
        let _ = solver.board();
        assert!(solver.iterations() > 0);
        solver.abort();
        match handle.join() {
            Ok(verdict) => verdict,
            Err(payload) => std::panic::resume_unwind(payload),
        }
    });
    assert!(!verdict);
    assert!(solver.is_canceled());
    assert!(!solver.solvable());
    assert!(!solver.solved());
}

#[test]
fn test_abort_stops_a_parallel_solve() {
    let solver = parallel(16, 16, abort_case(), 2);
    let verdict = thread::scope(|scope| {
        let handle = scope.spawn(|| solver.solve());
        thread::sleep(Duration::from_millis(100));
        let _ = solver.board();
        assert!(solver.iterations() > 0);
        solver.abort();
        match handle.join() {
            Ok(verdict) => verdict,
            Err(payload) => std::panic::resume_unwind(payload),
        }
    });
    assert!(!verdict);
    assert!(solver.is_canceled());
    assert!(!solver.solvable());
    assert!(!solver.solved());
}
