//! Single-threaded backtracking solver
//!
//! Operates in place on one board: place a piece, run the dead-region
//! check, recurse, and undo the placement when the branch fails. The
//! enumeration order is fixed: orientations in catalog order, anchors in
//! row-major order, so a given puzzle always searches identically.

use crate::algorithm::{Solver, lock};
use crate::io::configuration::SNAPSHOT_INTERVAL;
use crate::spatial::board::Board;
use crate::spatial::pieces::PieceKind;
use crate::spatial::puzzle::Puzzle;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Depth-first backtracking solver for one puzzle
pub struct SequentialSolver {
    puzzle: Puzzle,
    sequence: Vec<PieceKind>,
    iterations: AtomicU64,
    stop: AtomicBool,
    aborted: AtomicBool,
    solved: AtomicBool,
    solvable: AtomicBool,
    snapshot: Mutex<Option<Board>>,
    solve_lock: Mutex<()>,
}

impl SequentialSolver {
    /// Create a solver for the given puzzle
    ///
    /// The piece sequence keeps the fixed construction order; sequential
    /// search is fully deterministic for a fixed input.
    pub fn new(puzzle: Puzzle) -> Self {
        let sequence = puzzle.piece_sequence();
        Self {
            puzzle,
            sequence,
            iterations: AtomicU64::new(0),
            stop: AtomicBool::new(false),
            aborted: AtomicBool::new(false),
            solved: AtomicBool::new(false),
            solvable: AtomicBool::new(false),
            snapshot: Mutex::new(None),
            solve_lock: Mutex::new(()),
        }
    }

    /// Run the search; see [`Solver::solve`]
    pub fn solve(&self) -> bool {
        let _guard = lock(&self.solve_lock);
        if self.aborted.load(Ordering::SeqCst) {
            return false;
        }
        if self.solved.load(Ordering::SeqCst) {
            return self.solvable.load(Ordering::SeqCst);
        }
        if !self.puzzle.area_matches() {
            self.solved.store(true, Ordering::SeqCst);
            return false;
        }

        let mut board = Board::new(self.puzzle.height(), self.puzzle.width());
        let found = self.place_next(&mut board, 1);

        if self.aborted.load(Ordering::SeqCst) {
            // An aborted search carries no verdict
            return false;
        }
        *lock(&self.snapshot) = Some(board);
        self.solvable.store(found, Ordering::SeqCst);
        self.solved.store(true, Ordering::SeqCst);
        found
    }

    /// Request cancellation; see [`Solver::abort`]
    pub fn abort(&self) {
        self.aborted.store(true, Ordering::SeqCst);
        self.stop.store(true, Ordering::SeqCst);
    }

    /// Best-effort board snapshot; see [`Solver::board`]
    pub fn board(&self) -> Option<Board> {
        lock(&self.snapshot).clone()
    }

    /// Search steps taken so far
    pub fn iterations(&self) -> u64 {
        self.iterations.load(Ordering::Relaxed)
    }

    /// Whether the search terminated with a verdict
    pub fn solved(&self) -> bool {
        self.solved.load(Ordering::SeqCst)
    }

    /// Whether a tiling was found
    pub fn solvable(&self) -> bool {
        self.solvable.load(Ordering::SeqCst)
    }

    /// Whether the search was externally aborted
    pub fn is_canceled(&self) -> bool {
        self.aborted.load(Ordering::SeqCst)
    }

    /// The placement order of this solver
    pub fn pieces(&self) -> &[PieceKind] {
        &self.sequence
    }

    /// The puzzle definition
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    // Core recursion: try every placement of piece `piece` (1-based) and
    // recurse on success. A successful branch returns without undoing its
    // placements, leaving the finished tiling on the board.
    fn place_next(&self, board: &mut Board, piece: usize) -> bool {
        let iteration = self.iterations.fetch_add(1, Ordering::Relaxed) + 1;
        if self.stop.load(Ordering::Relaxed) {
            return false;
        }
        let Some(&kind) = self.sequence.get(piece - 1) else {
            // Cursor past the end: every piece is on the board
            return true;
        };
        if iteration % SNAPSHOT_INTERVAL == 0 {
            *lock(&self.snapshot) = Some(board.clone());
        }

        for orientation in kind.orientations() {
            for row in board.anchor_rows(orientation) {
                for col in board.anchor_cols(orientation) {
                    if board.fits(orientation, row, col) {
                        board.place(orientation, row, col, piece as i32);
                        if !board.has_dead_region() && self.place_next(board, piece + 1) {
                            return true;
                        }
                        board.clear_piece(orientation, row, col);
                    }
                }
            }
        }
        false
    }
}

impl Solver for SequentialSolver {
    fn solve(&self) -> bool {
        Self::solve(self)
    }

    fn abort(&self) {
        Self::abort(self);
    }

    fn board(&self) -> Option<Board> {
        Self::board(self)
    }

    fn iterations(&self) -> u64 {
        Self::iterations(self)
    }

    fn solved(&self) -> bool {
        Self::solved(self)
    }

    fn solvable(&self) -> bool {
        Self::solvable(self)
    }

    fn is_canceled(&self) -> bool {
        Self::is_canceled(self)
    }

    fn pieces(&self) -> &[PieceKind] {
        Self::pieces(self)
    }

    fn puzzle(&self) -> &Puzzle {
        Self::puzzle(self)
    }
}
