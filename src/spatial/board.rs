//! Board grid with placement operations and connectivity pruning
//!
//! Cells hold the 1-based id of the piece occupying them, zero when empty.
//! During the dead-region check cells are temporarily marked with a scratch
//! value that is always cleared again before the check returns, so the
//! occupancy invariant holds at every call boundary.

use crate::spatial::pieces::Orientation;
use ndarray::Array2;
use std::ops::Range;

/// Cell value for an unoccupied position
pub const EMPTY: i32 = 0;

/// Scratch marker used only inside [`Board::has_dead_region`]
pub const SCRATCH: i32 = -1;

/// Rectangular grid of piece ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Array2<i32>,
}

impl Board {
    /// Create an empty board with the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: Array2::zeros((rows, cols)),
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Cell value at (row, col), or `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        self.cells.get([row, col]).copied()
    }

    /// Read-only view of the underlying grid
    pub const fn grid(&self) -> &Array2<i32> {
        &self.cells
    }

    /// Anchor rows at which the orientation stays fully in-grid
    pub fn anchor_rows(&self, orientation: &Orientation) -> Range<usize> {
        0..self.rows().saturating_sub(orientation.rows - 1)
    }

    /// Anchor columns at which the orientation stays fully in-grid
    pub fn anchor_cols(&self, orientation: &Orientation) -> Range<usize> {
        0..self.cols().saturating_sub(orientation.cols - 1)
    }

    /// Whether all four cells of the orientation are empty at this anchor
    pub fn fits(&self, orientation: &Orientation, row: usize, col: usize) -> bool {
        orientation
            .cells
            .iter()
            .all(|cell| self.cells.get([row + cell[0], col + cell[1]]) == Some(&EMPTY))
    }

    /// Write the piece id into the four cells of the orientation
    pub fn place(&mut self, orientation: &Orientation, row: usize, col: usize, id: i32) {
        for cell in &orientation.cells {
            if let Some(value) = self.cells.get_mut([row + cell[0], col + cell[1]]) {
                *value = id;
            }
        }
    }

    /// Clear the four cells of the orientation back to empty
    pub fn clear_piece(&mut self, orientation: &Orientation, row: usize, col: usize) {
        for cell in &orientation.cells {
            if let Some(value) = self.cells.get_mut([row + cell[0], col + cell[1]]) {
                *value = EMPTY;
            }
        }
    }

    /// Whether some empty region can no longer be filled by 4-cell pieces
    ///
    /// Flood-fills every maximal 4-connected empty region and checks its
    /// size against the only necessary condition available: a region not
    /// divisible by four can never be completed. Scratch marks are cleared
    /// on every exit path, so the board is unchanged at return.
    pub fn has_dead_region(&mut self) -> bool {
        let mut dead = false;
        'scan: for row in 0..self.rows() {
            for col in 0..self.cols() {
                if self.cells.get([row, col]) == Some(&EMPTY)
                    && self.flood_fill_count(row, col) % 4 != 0
                {
                    dead = true;
                    break 'scan;
                }
            }
        }
        self.clear_scratch();
        dead
    }

    // Marks the empty region containing (row, col) with the scratch value
    // and returns its size. Marking happens on push so no cell enters the
    // stack twice.
    fn flood_fill_count(&mut self, row: usize, col: usize) -> usize {
        let mut count = 0;
        let mut stack = vec![[row, col]];
        if let Some(value) = self.cells.get_mut([row, col]) {
            *value = SCRATCH;
        }
        while let Some([r, c]) = stack.pop() {
            count += 1;
            let neighbors = [
                [r.wrapping_sub(1), c],
                [r + 1, c],
                [r, c.wrapping_sub(1)],
                [r, c + 1],
            ];
            for [nr, nc] in neighbors {
                if let Some(value) = self.cells.get_mut([nr, nc]) {
                    if *value == EMPTY {
                        *value = SCRATCH;
                        stack.push([nr, nc]);
                    }
                }
            }
        }
        count
    }

    fn clear_scratch(&mut self) {
        self.cells.mapv_inplace(|value| {
            if value == SCRATCH { EMPTY } else { value }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::pieces::PieceKind;

    fn first_orientation(kind: PieceKind) -> &'static Orientation {
        let Some(orientation) = kind.orientations().first() else {
            unreachable!("every kind has at least one orientation")
        };
        orientation
    }

    #[test]
    fn test_place_and_clear_roundtrip() {
        let mut board = Board::new(4, 4);
        let square = first_orientation(PieceKind::O);

        assert!(board.fits(square, 1, 2));
        board.place(square, 1, 2, 7);
        assert_eq!(board.get(1, 2), Some(7));
        assert_eq!(board.get(2, 3), Some(7));
        assert!(!board.fits(square, 1, 2));
        assert!(!board.fits(square, 0, 1));

        board.clear_piece(square, 1, 2);
        assert_eq!(board, Board::new(4, 4));
    }

    #[test]
    fn test_fits_rejects_out_of_bounds_anchor() {
        let board = Board::new(4, 4);
        let square = first_orientation(PieceKind::O);
        assert!(!board.fits(square, 3, 3));
        assert!(!board.fits(square, 0, 3));
    }

    #[test]
    fn test_anchor_ranges_respect_extent() {
        let board = Board::new(4, 6);
        let bar = first_orientation(PieceKind::I);
        assert_eq!(board.anchor_rows(bar), 0..1);
        assert_eq!(board.anchor_cols(bar), 0..6);

        let tall = Board::new(2, 2);
        assert!(tall.anchor_rows(bar).is_empty());
    }

    #[test]
    fn test_dead_region_detected_for_odd_sized_pocket() {
        // Wall off a 2-cell pocket in the top-left corner
        let mut board = Board::new(4, 4);
        for (row, col) in [(0, 2), (1, 0), (1, 1), (1, 2)] {
            if let Some(value) = board.cells.get_mut([row, col]) {
                *value = 9;
            }
        }
        assert!(board.has_dead_region());
    }

    #[test]
    fn test_multiple_of_four_regions_are_not_dead() {
        let mut board = Board::new(4, 4);
        assert!(!board.has_dead_region());

        // Split the board into two 8-cell regions
        for col in 0..4 {
            if let Some(value) = board.cells.get_mut([1, col]) {
                *value = 1;
            }
            if let Some(value) = board.cells.get_mut([2, col]) {
                *value = 2;
            }
        }
        assert!(!board.has_dead_region());
    }

    #[test]
    fn test_dead_region_check_restores_the_board() {
        // 9 connected empty cells: dead, and fully restored after the check
        let mut board = Board::new(3, 3);
        let before = board.clone();
        assert!(board.has_dead_region());
        assert_eq!(board, before);

        // Ring of 12 empty cells around an occupied center: alive, restored
        let mut ring = Board::new(4, 4);
        ring.place(first_orientation(PieceKind::O), 1, 1, 3);
        let before_ring = ring.clone();
        assert!(!ring.has_dead_region());
        assert_eq!(ring, before_ring);
    }

    #[test]
    fn test_fully_occupied_board_is_not_dead() {
        let mut board = Board::new(2, 2);
        board.place(first_orientation(PieceKind::O), 0, 0, 1);
        assert!(!board.has_dead_region());
    }
}
