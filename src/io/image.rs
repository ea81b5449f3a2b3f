//! PNG export of solved boards
//!
//! Each board cell becomes a square of [`CELL_PIXELS`] pixels filled with
//! the color of its piece id; empty cells stay black, matching the
//! on-screen rendering of the palette.

use crate::io::configuration::CELL_PIXELS;
use crate::io::error::{Result, SolverError};
use crate::math::color::piece_palette;
use crate::spatial::board::Board;
use image::{ImageBuffer, Rgb};
use std::path::Path;

/// Export a board as a PNG image
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the
/// image cannot be saved to the given path.
pub fn export_board_as_png(board: &Board, piece_count: usize, output_path: &Path) -> Result<()> {
    let palette = piece_palette(piece_count);
    let width = board.cols() as u32 * CELL_PIXELS;
    let height = board.rows() as u32 * CELL_PIXELS;

    let mut img = ImageBuffer::from_pixel(width, height, Rgb([0u8, 0, 0]));
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let row = (y / CELL_PIXELS) as usize;
        let col = (x / CELL_PIXELS) as usize;
        let id = board.get(row, col).unwrap_or(0);
        if id >= 1 {
            if let Some(rgb) = palette.get(id as usize - 1) {
                *pixel = Rgb(*rgb);
            }
        }
    }

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| SolverError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(output_path).map_err(|e| SolverError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::pieces::PieceKind;

    #[test]
    fn test_export_writes_a_decodable_image() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("tempdir creation failed")
        };
        let path = dir.path().join("solution.png");

        let mut board = Board::new(2, 2);
        let Some(square) = PieceKind::O.orientations().first() else {
            unreachable!()
        };
        board.place(square, 0, 0, 1);

        assert!(export_board_as_png(&board, 1, &path).is_ok());

        let Ok(written) = image::open(&path) else {
            unreachable!("exported file did not decode")
        };
        assert_eq!(written.width(), 2 * CELL_PIXELS);
        assert_eq!(written.height(), 2 * CELL_PIXELS);
    }
}
