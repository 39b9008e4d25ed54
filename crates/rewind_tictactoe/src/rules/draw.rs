//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Cell};
use super::win::Win;
use tracing::instrument;

/// Snapshot count that must be exceeded before a game counts as drawn.
pub const DRAW_THRESHOLD: usize = 9;

/// Checks whether a game with `recorded_snapshots` snapshots is drawn.
///
/// The rule counts recorded snapshots, not filled cells: the game is a draw
/// only once more than nine snapshots exist and nobody has won.
#[instrument]
pub fn is_draw(winner: Option<&Win>, recorded_snapshots: usize) -> bool {
    winner.is_none() && recorded_snapshots > DRAW_THRESHOLD
}

/// Checks if the board is full (all cells occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}
