//! Text rendering of boards
//!
//! Each occupied cell shows the letter of the kind assigned to its piece
//! id in the placement sequence; empty cells show a dot.

use crate::spatial::board::Board;
use crate::spatial::pieces::PieceKind;

/// Render a board as one line of kind letters per row
pub fn render_board(board: &Board, pieces: &[PieceKind]) -> String {
    let mut out = String::with_capacity(board.rows() * (board.cols() + 1));
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            let glyph = board
                .get(row, col)
                .and_then(|id| usize::try_from(id).ok())
                .filter(|&id| id >= 1)
                .and_then(|id| pieces.get(id - 1))
                .map_or('.', |kind| kind.letter());
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}
