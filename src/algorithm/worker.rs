//! Per-thread expansion loop of the parallel solver
//!
//! Each worker repeatedly pops one node, expands it by exactly one piece
//! over every orientation and anchor, and either delivers a finished
//! tiling, pushes deep-copied successors, or discards dead branches. An
//! expanded node is never re-pushed; it represents a position whose
//! successors are already accounted for.

use crate::algorithm::frontier::{Pop, SearchNode};
use crate::algorithm::lock;
use crate::algorithm::parallel::SharedSearch;
use crate::spatial::board::Board;
use std::sync::atomic::Ordering;

pub(super) struct Worker<'a> {
    shared: &'a SharedSearch,
    slot: usize,
}

impl<'a> Worker<'a> {
    pub(super) const fn new(shared: &'a SharedSearch, slot: usize) -> Self {
        Self { shared, slot }
    }

    pub(super) fn run(&self) {
        // If this worker unwinds mid-expansion the guard still stops the
        // search, so the remaining workers cannot wait forever on a pool
        // that has lost a producer.
        let _shutdown = ShutdownGuard {
            shared: self.shared,
        };
        loop {
            if self.shared.stop.load(Ordering::SeqCst) {
                return;
            }
            match self.shared.frontier.pop() {
                Pop::Closed => return,
                Pop::Exhausted => {
                    // Every worker idle over an empty pool: no solution
                    self.shared.stop.store(true, Ordering::SeqCst);
                    return;
                }
                Pop::Node(node) => {
                    self.shared.iterations.fetch_add(1, Ordering::Relaxed);
                    self.publish(&node);
                    self.expand(node);
                }
            }
        }
    }

    // Expand one node by one piece. Placement enumeration matches the
    // sequential solver exactly: orientations in catalog order, anchors in
    // row-major order.
    fn expand(&self, mut node: SearchNode) {
        let piece = node.next;
        let Some(&kind) = self.shared.sequence.get(piece - 1) else {
            return;
        };
        let total = self.shared.sequence.len();

        for orientation in kind.orientations() {
            for row in node.board.anchor_rows(orientation) {
                if self.shared.stop.load(Ordering::Relaxed) {
                    return;
                }
                for col in node.board.anchor_cols(orientation) {
                    if node.board.fits(orientation, row, col) {
                        node.board.place(orientation, row, col, piece as i32);
                        if piece == total {
                            // A complete legal tiling; first writer wins
                            self.deliver(node.board);
                            return;
                        }
                        if !node.board.has_dead_region() {
                            self.shared.frontier.push(node.child());
                        }
                        node.board.clear_piece(orientation, row, col);
                    }
                }
            }
        }
    }

    fn deliver(&self, board: Board) {
        {
            let mut slot = lock(&self.shared.solution);
            if slot.is_none() {
                *slot = Some(board);
            }
        }
        self.shared.stop.store(true, Ordering::SeqCst);
        self.shared.frontier.close();
    }

    // Advisory progress view for Solver::board; never read by the search
    fn publish(&self, node: &SearchNode) {
        if let Some(slot) = self.shared.worker_boards.get(self.slot) {
            *lock(slot) = Some(node.board.clone());
        }
    }
}

struct ShutdownGuard<'a> {
    shared: &'a SharedSearch,
}

impl Drop for ShutdownGuard<'_> {
    fn drop(&mut self) {
        self.shared.stop.store(true, Ordering::SeqCst);
        self.shared.frontier.close();
    }
}
