//! Parallel frontier-expansion solver
//!
//! Shallow branches near the root are cheap to materialize and fully
//! independent, so worker threads race over a shared pool of partial
//! boards instead of sharing one search stack. A solve ends when a worker
//! completes a tiling, when the pool drains with every worker idle
//! (proving unsolvability), or when the caller aborts.

use crate::algorithm::frontier::{Frontier, SearchNode};
use crate::algorithm::worker::Worker;
use crate::algorithm::{Solver, lock};
use crate::spatial::board::Board;
use crate::spatial::pieces::PieceKind;
use crate::spatial::puzzle::Puzzle;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{SeedableRng, rng};
use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread;

/// Tuning knobs for a parallel solve
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchConfig {
    /// Worker thread count; defaults to the available hardware parallelism
    pub threads: Option<usize>,
    /// Seed for the one-time sequence shuffle; defaults to a random shuffle
    pub shuffle_seed: Option<u64>,
}

// Everything the worker threads share. The frontier is the only shared
// collection; boards cross thread boundaries exclusively as deep copies.
pub(crate) struct SharedSearch {
    pub(crate) sequence: Vec<PieceKind>,
    pub(crate) frontier: Frontier,
    pub(crate) iterations: AtomicU64,
    pub(crate) stop: AtomicBool,
    pub(crate) solution: Mutex<Option<Board>>,
    pub(crate) worker_boards: Vec<Mutex<Option<Board>>>,
}

/// Multi-threaded solver racing workers over a shared frontier
pub struct ParallelSolver {
    puzzle: Puzzle,
    threads: usize,
    shared: SharedSearch,
    aborted: AtomicBool,
    solved: AtomicBool,
    solvable: AtomicBool,
    solve_lock: Mutex<()>,
}

impl ParallelSolver {
    /// Create a solver with default configuration
    pub fn new(puzzle: Puzzle) -> Self {
        Self::with_config(puzzle, SearchConfig::default())
    }

    /// Create a solver with explicit thread count or shuffle seed
    ///
    /// The piece sequence is shuffled exactly once, here, to decorrelate
    /// the branch order across workers; it stays fixed for the lifetime of
    /// the solve. Thread counts are clamped to at least one.
    pub fn with_config(puzzle: Puzzle, config: SearchConfig) -> Self {
        let threads = config
            .threads
            .unwrap_or_else(|| thread::available_parallelism().map_or(1, NonZeroUsize::get))
            .max(1);

        let mut sequence = puzzle.piece_sequence();
        match config.shuffle_seed {
            Some(seed) => sequence.shuffle(&mut StdRng::seed_from_u64(seed)),
            None => sequence.shuffle(&mut rng()),
        }

        let worker_boards = (0..threads).map(|_| Mutex::new(None)).collect();
        Self {
            puzzle,
            threads,
            shared: SharedSearch {
                sequence,
                frontier: Frontier::new(threads),
                iterations: AtomicU64::new(0),
                stop: AtomicBool::new(false),
                solution: Mutex::new(None),
                worker_boards,
            },
            aborted: AtomicBool::new(false),
            solved: AtomicBool::new(false),
            solvable: AtomicBool::new(false),
            solve_lock: Mutex::new(()),
        }
    }

    /// Run the search; see [`Solver::solve`]
    ///
    /// Blocks the caller until a worker wins, the frontier is proved
    /// exhausted, or [`Self::abort`] fires. A panicking worker closes the
    /// frontier on its way down and the panic resurfaces here.
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

        self.shared
            .frontier
            .push(SearchNode::root(self.puzzle.height(), self.puzzle.width()));

        thread::scope(|scope| {
            for slot in 0..self.threads {
                let shared = &self.shared;
                scope.spawn(move || Worker::new(shared, slot).run());
            }
        });

        if self.aborted.load(Ordering::SeqCst) {
            // An aborted search carries no verdict
            return false;
        }
        let found = lock(&self.shared.solution).is_some();
        self.solvable.store(found, Ordering::SeqCst);
        self.solved.store(true, Ordering::SeqCst);
        found
    }

    /// Request cancellation; see [`Solver::abort`]
    ///
    /// Sets the same stop signal workers observe on exhaustion and closes
    /// the frontier so blocked workers wake immediately.
    pub fn abort(&self) {
        self.aborted.store(true, Ordering::SeqCst);
        self.shared.stop.store(true, Ordering::SeqCst);
        self.shared.frontier.close();
    }

    /// Best-effort board snapshot; see [`Solver::board`]
    ///
    /// Prefers the winning tiling once one exists; otherwise reports
    /// whichever worker's in-progress board is currently published. Never
    /// consulted by the search itself.
    pub fn board(&self) -> Option<Board> {
        if let Some(solution) = lock(&self.shared.solution).as_ref() {
            return Some(solution.clone());
        }
        self.shared
            .worker_boards
            .iter()
            .find_map(|slot| lock(slot).clone())
    }

    /// Nodes expanded so far across all workers
    pub fn iterations(&self) -> u64 {
        self.shared.iterations.load(Ordering::Relaxed)
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

    /// The shuffled placement order of this solver
    pub fn pieces(&self) -> &[PieceKind] {
        &self.shared.sequence
    }

    /// The puzzle definition
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Number of worker threads this solver will run
    pub const fn threads(&self) -> usize {
        self.threads
    }
}

impl Solver for ParallelSolver {
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
