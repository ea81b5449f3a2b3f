//! Sequential and parallel search engines with a common solver interface

/// Search nodes and the blocking LIFO frontier shared between workers
pub mod frontier;
/// Parallel frontier-expansion solver
pub mod parallel;
/// Single-threaded backtracking solver
pub mod sequential;
/// Per-thread expansion loop of the parallel solver
mod worker;

pub use parallel::{ParallelSolver, SearchConfig};
pub use sequential::SequentialSolver;

use crate::spatial::board::Board;
use crate::spatial::pieces::PieceKind;
use crate::spatial::puzzle::Puzzle;
use std::sync::{Mutex, MutexGuard, PoisonError};

// A poisoned lock still carries the guard; the protected values remain
// plain data, so recover it instead of propagating the panic.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Common interface over both solver engines
///
/// A solver is constructed for one puzzle, runs at most one search, and
/// retains its outcome afterwards. All methods are safe to call from any
/// thread while a solve is in flight on another.
pub trait Solver: Send + Sync {
    /// Run the search to completion or cancellation
    ///
    /// Returns whether the puzzle is solvable. Idempotent: a second call
    /// returns the cached verdict without searching again. Concurrent
    /// external callers are serialized internally.
    fn solve(&self) -> bool;

    /// Request cooperative cancellation
    ///
    /// Safe to call from any thread at any time; calling after the search
    /// finished is a no-op.
    fn abort(&self);

    /// Best-effort board snapshot
    ///
    /// While a solve is running this is whichever in-progress board is
    /// currently published, purely for display; after a successful solve it
    /// is the terminal tiling. `None` when nothing has been published yet.
    fn board(&self) -> Option<Board>;

    /// Monotonically non-decreasing search-step counter
    fn iterations(&self) -> u64;

    /// Whether the search terminated with a verdict
    fn solved(&self) -> bool;

    /// Whether a tiling was found
    fn solvable(&self) -> bool;

    /// Whether the search was externally aborted
    ///
    /// Distinct from natural exhaustion: an exhausted search reports
    /// `solved` with `solvable == false`, an aborted one reports neither.
    fn is_canceled(&self) -> bool;

    /// The piece sequence this solver places, in placement order
    fn pieces(&self) -> &[PieceKind];

    /// The puzzle definition this solver was built for
    fn puzzle(&self) -> &Puzzle;
}
