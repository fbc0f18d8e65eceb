//! Position classification for room cells.

use crate::types::CellKind;

pub fn is_corner(rows: usize, cols: usize, row: usize, col: usize) -> bool {
    (row == 0 || row == rows - 1) && (col == 0 || col == cols - 1)
}

pub fn is_border(rows: usize, cols: usize, row: usize, col: usize) -> bool {
    row == 0 || row == rows - 1 || col == 0 || col == cols - 1
}

/// Corners win over borders; everything else is interior.
pub fn classify(rows: usize, cols: usize, row: usize, col: usize) -> CellKind {
    if is_corner(rows, cols, row, col) {
        CellKind::Corner
    } else if is_border(rows, cols, row, col) {
        CellKind::Border
    } else {
        CellKind::Interior
    }
}

pub(super) fn cell_index(cols: usize, row: usize, col: usize) -> usize {
    row * cols + col
}
