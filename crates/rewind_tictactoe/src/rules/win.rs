//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three cell indices forming a line on the board.
pub type Line = [usize; 3];

/// The eight winning lines, in scan order.
pub const LINES: [Line; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Win {
    /// The mark filling the line.
    pub mark: Mark,
    /// Indices of the three cells.
    pub line: Line,
}

/// Checks if there is a winner on the board.
///
/// Lines are scanned in [`LINES`] order and the first complete one is
/// returned, so the order doubles as the tie-break when a hand-built board
/// holds more than one.
#[instrument]
pub fn detect_win(board: &Board) -> Option<Win> {
    let cells = board.cells();
    LINES.iter().find_map(|&[a, b, c]| match cells[a] {
        Cell::Marked(mark) if cells[b] == cells[a] && cells[c] == cells[a] => {
            Some(Win::new(mark, [a, b, c]))
        }
        _ => None,
    })
}
