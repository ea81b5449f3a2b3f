//! Piece kinds and their rotation-only orientation tables
//!
//! Each of the seven tetromino kinds carries a hard-coded list of rotation
//! variants. A variant is four (row, col) offsets from a top-left anchor
//! plus the bounding extent used to limit anchor enumeration. Reflections
//! are deliberately absent, so S and Z stay distinct kinds.

/// One rotation variant of a piece kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orientation {
    /// Relative (row, col) offsets of the four covered cells from the anchor
    pub cells: [[usize; 2]; 4],
    /// Row extent of the bounding box
    pub rows: usize,
    /// Column extent of the bounding box
    pub cols: usize,
}

// Vertical bar, then horizontal bar
const I_ORIENTATIONS: &[Orientation] = &[
    Orientation {
        cells: [[0, 0], [1, 0], [2, 0], [3, 0]],
        rows: 4,
        cols: 1,
    },
    Orientation {
        cells: [[0, 0], [0, 1], [0, 2], [0, 3]],
        rows: 1,
        cols: 4,
    },
];

const O_ORIENTATIONS: &[Orientation] = &[Orientation {
    cells: [[0, 0], [1, 0], [0, 1], [1, 1]],
    rows: 2,
    cols: 2,
}];

// Stem below, stem right, stem left, stem above
const T_ORIENTATIONS: &[Orientation] = &[
    Orientation {
        cells: [[0, 0], [0, 1], [1, 1], [0, 2]],
        rows: 2,
        cols: 3,
    },
    Orientation {
        cells: [[0, 0], [1, 0], [1, 1], [2, 0]],
        rows: 3,
        cols: 2,
    },
    Orientation {
        cells: [[0, 1], [1, 0], [1, 1], [2, 1]],
        rows: 3,
        cols: 2,
    },
    Orientation {
        cells: [[1, 0], [0, 1], [1, 1], [1, 2]],
        rows: 2,
        cols: 3,
    },
];

const J_ORIENTATIONS: &[Orientation] = &[
    Orientation {
        cells: [[0, 0], [0, 1], [1, 2], [0, 2]],
        rows: 2,
        cols: 3,
    },
    Orientation {
        cells: [[1, 0], [0, 0], [1, 1], [1, 2]],
        rows: 2,
        cols: 3,
    },
    Orientation {
        cells: [[0, 0], [1, 0], [0, 1], [2, 0]],
        rows: 3,
        cols: 2,
    },
    Orientation {
        cells: [[0, 1], [2, 0], [1, 1], [2, 1]],
        rows: 3,
        cols: 2,
    },
];

const L_ORIENTATIONS: &[Orientation] = &[
    Orientation {
        cells: [[0, 0], [0, 1], [1, 0], [0, 2]],
        rows: 2,
        cols: 3,
    },
    Orientation {
        cells: [[0, 0], [1, 0], [2, 1], [2, 0]],
        rows: 3,
        cols: 2,
    },
    Orientation {
        cells: [[0, 1], [0, 0], [1, 1], [2, 1]],
        rows: 3,
        cols: 2,
    },
    Orientation {
        cells: [[1, 0], [0, 2], [1, 1], [1, 2]],
        rows: 2,
        cols: 3,
    },
];

const S_ORIENTATIONS: &[Orientation] = &[
    Orientation {
        cells: [[0, 0], [1, 0], [1, 1], [2, 1]],
        rows: 3,
        cols: 2,
    },
    Orientation {
        cells: [[0, 1], [0, 2], [1, 0], [1, 1]],
        rows: 2,
        cols: 3,
    },
];

const Z_ORIENTATIONS: &[Orientation] = &[
    Orientation {
        cells: [[0, 0], [0, 1], [1, 1], [1, 2]],
        rows: 2,
        cols: 3,
    },
    Orientation {
        cells: [[0, 1], [1, 0], [1, 1], [2, 0]],
        rows: 3,
        cols: 2,
    },
];

/// The seven tetromino kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    /// Straight bar
    I,
    /// Square
    O,
    /// Three in a row with a center stem
    T,
    /// Bent bar, short arm on the anchor side
    J,
    /// Bent bar, mirror image of J
    L,
    /// Step piece
    S,
    /// Step piece, mirror image of S
    Z,
}

impl PieceKind {
    /// All kinds in the fixed sequence-construction order
    pub const ALL: [Self; 7] = [
        Self::I,
        Self::O,
        Self::T,
        Self::J,
        Self::L,
        Self::S,
        Self::Z,
    ];

    /// Every distinct rotation variant of this kind
    pub const fn orientations(self) -> &'static [Orientation] {
        match self {
            Self::I => I_ORIENTATIONS,
            Self::O => O_ORIENTATIONS,
            Self::T => T_ORIENTATIONS,
            Self::J => J_ORIENTATIONS,
            Self::L => L_ORIENTATIONS,
            Self::S => S_ORIENTATIONS,
            Self::Z => Z_ORIENTATIONS,
        }
    }

    /// Single-letter name used for text rendering
    pub const fn letter(self) -> char {
        match self {
            Self::I => 'I',
            Self::O => 'O',
            Self::T => 'T',
            Self::J => 'J',
            Self::L => 'L',
            Self::S => 'S',
            Self::Z => 'Z',
        }
    }
}
