//! Exact tetromino tiling solver for rectangular boards
//!
//! The crate answers whether an H×W grid can be exactly covered by a given
//! multiset of tetromino pieces (rotations allowed, reflections not), and
//! produces one such tiling when it exists. Two engines are provided: a
//! single-threaded depth-first backtracking solver and a parallel solver
//! that races worker threads over a shared pool of partial boards.

#![forbid(unsafe_code)]

/// Sequential and parallel search engines with a common solver interface
pub mod algorithm;
/// Input/output operations, CLI orchestration, and error handling
pub mod io;
/// Color mathematics for solution rendering
pub mod math;
/// Board state, piece shapes, and puzzle definitions
pub mod spatial;

pub use algorithm::{ParallelSolver, SequentialSolver, Solver};
pub use io::error::{Result, SolverError};
pub use spatial::board::Board;
pub use spatial::pieces::PieceKind;
pub use spatial::puzzle::{PieceCounts, Puzzle};
