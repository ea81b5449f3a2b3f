//! Validated puzzle definitions and piece-sequence construction
//!
//! A puzzle is a board size plus a count per piece kind. Construction
//! validates the inputs; whether the counts can actually tile the board is
//! the solvers' question, not a validation failure.

use crate::io::configuration::MAX_BOARD_DIMENSION;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::pieces::PieceKind;

/// Number of requested pieces per kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PieceCounts {
    /// Straight bars
    pub i: usize,
    /// Squares
    pub o: usize,
    /// T pieces
    pub t: usize,
    /// J pieces
    pub j: usize,
    /// L pieces
    pub l: usize,
    /// S pieces
    pub s: usize,
    /// Z pieces
    pub z: usize,
}

impl PieceCounts {
    /// Count for one kind
    pub const fn of(&self, kind: PieceKind) -> usize {
        match kind {
            PieceKind::I => self.i,
            PieceKind::O => self.o,
            PieceKind::T => self.t,
            PieceKind::J => self.j,
            PieceKind::L => self.l,
            PieceKind::S => self.s,
            PieceKind::Z => self.z,
        }
    }

    /// Total number of pieces across all kinds
    pub const fn total(&self) -> usize {
        self.i + self.o + self.t + self.j + self.l + self.s + self.z
    }
}

/// A validated board size and piece multiset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    height: usize,
    width: usize,
    counts: PieceCounts,
}

impl Puzzle {
    /// Create a puzzle definition
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds
    /// [`MAX_BOARD_DIMENSION`], or if the cell count overflows.
    pub fn new(height: usize, width: usize, counts: PieceCounts) -> Result<Self> {
        if height == 0 {
            return Err(invalid_parameter("height", &height, &"must be at least 1"));
        }
        if width == 0 {
            return Err(invalid_parameter("width", &width, &"must be at least 1"));
        }
        if height > MAX_BOARD_DIMENSION {
            return Err(invalid_parameter(
                "height",
                &height,
                &format!("must be at most {MAX_BOARD_DIMENSION}"),
            ));
        }
        if width > MAX_BOARD_DIMENSION {
            return Err(invalid_parameter(
                "width",
                &width,
                &format!("must be at most {MAX_BOARD_DIMENSION}"),
            ));
        }
        if height.checked_mul(width).is_none() {
            return Err(invalid_parameter(
                "width",
                &width,
                &"cell count overflows usize",
            ));
        }
        Ok(Self {
            height,
            width,
            counts,
        })
    }

    /// Board height in rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Board width in columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Requested piece counts
    pub const fn counts(&self) -> PieceCounts {
        self.counts
    }

    /// Total number of pieces to place
    pub const fn piece_count(&self) -> usize {
        self.counts.total()
    }

    /// Total number of board cells
    pub const fn cell_count(&self) -> usize {
        self.height * self.width
    }

    /// Necessary global condition: pieces cover exactly the board area
    ///
    /// Zero pieces on a non-empty board fail this immediately, so the
    /// degenerate empty-sequence case never reaches a search.
    pub fn area_matches(&self) -> bool {
        self.piece_count()
            .checked_mul(4)
            .is_some_and(|covered| covered == self.cell_count())
    }

    /// The ordered piece sequence, one entry per piece to place
    ///
    /// Kinds are concatenated in the fixed order I, O, T, J, L, S, Z. The
    /// parallel solver shuffles its own copy once before searching.
    pub fn piece_sequence(&self) -> Vec<PieceKind> {
        let mut sequence = Vec::with_capacity(self.piece_count());
        for kind in PieceKind::ALL {
            sequence.extend(std::iter::repeat_n(kind, self.counts.of(kind)));
        }
        sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimensions_are_rejected() {
        let counts = PieceCounts::default();
        assert!(Puzzle::new(0, 4, counts).is_err());
        assert!(Puzzle::new(4, 0, counts).is_err());
        assert!(Puzzle::new(4, 4, counts).is_ok());
    }

    #[test]
    fn test_oversized_dimensions_are_rejected() {
        let counts = PieceCounts::default();
        assert!(Puzzle::new(MAX_BOARD_DIMENSION + 1, 4, counts).is_err());
        assert!(Puzzle::new(4, MAX_BOARD_DIMENSION + 1, counts).is_err());
    }

    #[test]
    fn test_area_precondition() {
        let fits = PieceCounts {
            o: 4,
            ..PieceCounts::default()
        };
        let Ok(puzzle) = Puzzle::new(4, 4, fits) else {
            unreachable!()
        };
        assert!(puzzle.area_matches());

        let short = PieceCounts {
            i: 1,
            ..PieceCounts::default()
        };
        let Ok(mismatch) = Puzzle::new(2, 3, short) else {
            unreachable!()
        };
        assert!(!mismatch.area_matches());

        let Ok(none) = Puzzle::new(4, 4, PieceCounts::default()) else {
            unreachable!()
        };
        assert!(!none.area_matches());
    }

    #[test]
    fn test_sequence_order_and_length() {
        let counts = PieceCounts {
            i: 2,
            o: 1,
            z: 1,
            ..PieceCounts::default()
        };
        let Ok(puzzle) = Puzzle::new(4, 4, counts) else {
            unreachable!()
        };
        assert_eq!(
            puzzle.piece_sequence(),
            vec![PieceKind::I, PieceKind::I, PieceKind::O, PieceKind::Z]
        );
        assert_eq!(puzzle.piece_count(), 4);
    }
}
