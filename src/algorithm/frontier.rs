//! Search nodes and the blocking LIFO frontier shared between workers
//!
//! The frontier is the only mutably shared collection of the parallel
//! search. LIFO order keeps the pool biased toward deep nodes, so memory
//! stays bounded and branches are exhausted depth-first. Termination is
//! detected cooperatively: the last worker to go idle against an empty
//! pool proves the search space is exhausted.

use crate::spatial::board::Board;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

/// One unit of parallel search work: a board plus the next piece to place
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Owned board snapshot; never aliased between threads
    pub board: Board,
    /// 1-based index into the piece sequence of the next piece to place
    pub next: usize,
}

impl SearchNode {
    /// The empty root position
    pub fn root(rows: usize, cols: usize) -> Self {
        Self {
            board: Board::new(rows, cols),
            next: 1,
        }
    }

    /// Deep-copy this position and advance to the following piece
    ///
    /// Called after a placement has been applied to the parent board, so
    /// the child owns the position with that placement included. Sibling
    /// branches must never observe each other's placements, hence the
    /// full copy.
    pub fn child(&self) -> Self {
        Self {
            board: self.board.clone(),
            next: self.next + 1,
        }
    }
}

/// Outcome of a blocking pop against the frontier
#[derive(Debug)]
pub enum Pop {
    /// A node was obtained; the caller is now responsible for it
    Node(SearchNode),
    /// This worker proved exhaustion: every worker idle, pool empty
    Exhausted,
    /// The frontier was closed by cancellation or another worker's proof
    Closed,
}

struct FrontierState {
    nodes: Vec<SearchNode>,
    idle: usize,
    closed: bool,
}

/// Blocking LIFO pool of search nodes with exhaustion detection
pub struct Frontier {
    state: Mutex<FrontierState>,
    available: Condvar,
    workers: usize,
}

impl Frontier {
    /// Create a frontier serving a fixed number of workers
    pub fn new(workers: usize) -> Self {
        Self {
            state: Mutex::new(FrontierState {
                nodes: Vec::new(),
                idle: 0,
                closed: false,
            }),
            available: Condvar::new(),
            workers,
        }
    }

    /// Push a node, waking one waiting worker
    ///
    /// Nodes pushed after the frontier closed are silently dropped; the
    /// search they belong to is already over.
    pub fn push(&self, node: SearchNode) {
        let mut state = self.lock_state();
        if state.closed {
            return;
        }
        state.nodes.push(node);
        self.available.notify_one();
    }

    /// Pop a node, blocking while the pool is empty
    ///
    /// A worker that finds the pool empty counts itself idle and waits.
    /// When the last worker goes idle against an empty pool no producer is
    /// left, so the search space is proved exhausted: the pool closes and
    /// exactly one caller observes [`Pop::Exhausted`]. A woken worker that
    /// finds the pool still empty simply resumes waiting.
    pub fn pop(&self) -> Pop {
        let mut state = self.lock_state();
        loop {
            if state.closed {
                return Pop::Closed;
            }
            if let Some(node) = state.nodes.pop() {
                return Pop::Node(node);
            }
            state.idle += 1;
            if state.idle == self.workers {
                state.closed = true;
                self.available.notify_all();
                return Pop::Exhausted;
            }
            state = self
                .available
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
            state.idle -= 1;
        }
    }

    /// Close the pool and wake every waiting worker
    pub fn close(&self) {
        let mut state = self.lock_state();
        state.closed = true;
        self.available.notify_all();
    }

    /// Whether the pool has been closed
    pub fn is_closed(&self) -> bool {
        self.lock_state().closed
    }

    /// Number of nodes currently queued
    pub fn queued(&self) -> usize {
        self.lock_state().nodes.len()
    }

    fn lock_state(&self) -> MutexGuard<'_, FrontierState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
